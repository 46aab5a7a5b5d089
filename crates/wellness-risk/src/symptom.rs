//! Symptom catalog file parser.
//!
//! Parses `symptoms.tsv` catalog files.

use csv::StringRecord;
use wellness_types::CatalogSymptom;

use crate::parser::{parse, CatalogRecord};
use crate::types::RiskResult;

/// Expected columns in a symptom catalog file.
const SYMPTOM_COLUMNS: &[&str] = &["name", "category"];

impl CatalogRecord for CatalogSymptom {
    const EXPECTED_COLUMNS: &'static [&'static str] = SYMPTOM_COLUMNS;

    fn from_record(record: &StringRecord) -> RiskResult<Self> {
        Ok(CatalogSymptom {
            name: parse::required(record.get(0), SYMPTOM_COLUMNS[0])?.to_string(),
            category: parse::required(record.get(1), SYMPTOM_COLUMNS[1])?.to_string(),
        })
    }
}
