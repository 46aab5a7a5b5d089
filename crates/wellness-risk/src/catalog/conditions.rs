//! Immutable condition catalog.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use wellness_types::ConditionRecord;

use crate::catalog::builtin;
use crate::parser::CatalogParser;
use crate::types::{CatalogConfig, RiskError, RiskResult};

/// The fixed set of candidate conditions scored for every request.
///
/// Records keep their insertion order and are never mutated after
/// construction; scoring hands out copies.
///
/// # Example
///
/// ```
/// use wellness_risk::ConditionCatalog;
///
/// let catalog = ConditionCatalog::builtin();
/// let cold = catalog.get("Common Cold").unwrap();
/// assert_eq!(cold.base_probability, 0.8);
/// assert!(catalog.get("Dragon Pox").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConditionCatalog {
    records: Vec<ConditionRecord>,
    by_name: HashMap<String, usize>,
}

impl ConditionCatalog {
    /// Builds a catalog, rejecting duplicate names and probabilities
    /// outside [0, 1].
    pub fn new(records: Vec<ConditionRecord>) -> RiskResult<Self> {
        Self::with_config(records, &CatalogConfig::default())
    }

    /// Builds a catalog under the given config.
    ///
    /// With `skip_duplicates` set, the first record of a repeated name is
    /// kept and later ones are dropped.
    pub fn with_config(records: Vec<ConditionRecord>, config: &CatalogConfig) -> RiskResult<Self> {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for record in records {
            if !record.has_valid_probability() {
                return Err(RiskError::InvalidProbability {
                    condition: record.condition.clone(),
                    value: record.base_probability.to_string(),
                });
            }
            if by_name.contains_key(&record.condition) {
                if config.skip_duplicates {
                    continue;
                }
                return Err(RiskError::DuplicateCondition {
                    name: record.condition,
                });
            }
            by_name.insert(record.condition.clone(), kept.len());
            kept.push(record);
        }

        Ok(Self {
            records: kept,
            by_name,
        })
    }

    /// Returns the reference catalog shipped with the engine.
    pub fn builtin() -> Self {
        let records = builtin::conditions();
        let by_name = records
            .iter()
            .enumerate()
            .map(|(index, record)| (record.condition.clone(), index))
            .collect();
        Self { records, by_name }
    }

    /// Loads a catalog from a `conditions.tsv` file.
    pub fn load<P: AsRef<Path>>(path: P, config: CatalogConfig) -> RiskResult<Self> {
        let parser = CatalogParser::<_, ConditionRecord>::from_path(path)?;
        Self::with_config(parser.parse_all()?, &config)
    }

    /// Loads a catalog from any reader producing `conditions.tsv` content.
    pub fn from_reader<R: Read>(reader: R, config: CatalogConfig) -> RiskResult<Self> {
        let parser = CatalogParser::<_, ConditionRecord>::from_reader(reader)?;
        Self::with_config(parser.parse_all()?, &config)
    }

    /// Looks up a condition by exact name.
    pub fn get(&self, name: &str) -> Option<&ConditionRecord> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    /// Returns all records in catalog order.
    pub fn records(&self) -> &[ConditionRecord] {
        &self.records
    }

    /// Iterates over records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConditionRecord> {
        self.records.iter()
    }

    /// Returns the condition names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.condition.as_str()).collect()
    }

    /// Returns the number of conditions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog has no conditions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConditionCatalog {
    type Item = &'a ConditionRecord;
    type IntoIter = std::slice::Iter<'a, ConditionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
