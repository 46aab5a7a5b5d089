//! Condition catalog file parser.
//!
//! Parses `conditions.tsv` catalog files.

use csv::StringRecord;
use wellness_types::{ConditionRecord, RiskTier};

use crate::parser::{parse, CatalogRecord};
use crate::types::RiskResult;

/// Expected columns in a condition catalog file.
const CONDITION_COLUMNS: &[&str] = &[
    "condition",
    "baseProbability",
    "riskTier",
    "riskFactors",
    "recommendedTests",
    "preventiveMeasures",
    "dietaryRecommendations",
    "lifestyleChanges",
    "urgencyLevel",
    "timeToSeekCare",
];

impl CatalogRecord for ConditionRecord {
    const EXPECTED_COLUMNS: &'static [&'static str] = CONDITION_COLUMNS;

    fn from_record(record: &StringRecord) -> RiskResult<Self> {
        let condition = parse::required(record.get(0), CONDITION_COLUMNS[0])?;
        let probability = parse::required(record.get(1), CONDITION_COLUMNS[1])?;
        let tier = parse::required(record.get(2), CONDITION_COLUMNS[2])?;

        Ok(ConditionRecord {
            condition: condition.to_string(),
            base_probability: parse::probability(probability, condition)?,
            risk_tier: tier.parse::<RiskTier>()?,
            risk_factors: parse::list(record.get(3).unwrap_or("")),
            recommended_tests: parse::list(record.get(4).unwrap_or("")),
            preventive_measures: parse::list(record.get(5).unwrap_or("")),
            dietary_recommendations: parse::list(record.get(6).unwrap_or("")),
            lifestyle_changes: parse::list(record.get(7).unwrap_or("")),
            urgency_level: record.get(8).unwrap_or("").to_string(),
            time_to_seek_care: record.get(9).unwrap_or("").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskError;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_condition_record() {
        let record = make_record(&[
            "Common Cold",
            "0.8",
            "low",
            "Seasonal changes|Weakened immune system",
            "Temperature monitoring|Throat examination",
            "Rest|Hydration|Vitamin C intake",
            "Chicken soup|Citrus fruits",
            "Get adequate sleep|Stay warm",
            "Low",
            "Within 3-5 days if symptoms persist",
        ]);

        let condition = ConditionRecord::from_record(&record).unwrap();
        assert_eq!(condition.condition, "Common Cold");
        assert_eq!(condition.base_probability, 0.8);
        assert_eq!(condition.risk_tier, RiskTier::Low);
        assert_eq!(
            condition.risk_factors,
            vec!["Seasonal changes", "Weakened immune system"]
        );
        assert_eq!(condition.preventive_measures.len(), 3);
        assert_eq!(condition.urgency_level, "Low");
        assert_eq!(
            condition.time_to_seek_care,
            "Within 3-5 days if symptoms persist"
        );
    }

    #[test]
    fn test_reject_out_of_range_probability() {
        let record = make_record(&["Flu", "1.2", "high", "", "", "", "", "", "", ""]);
        let err = ConditionRecord::from_record(&record).unwrap_err();
        assert!(matches!(err, RiskError::InvalidProbability { .. }));
    }

    #[test]
    fn test_reject_unknown_tier() {
        let record = make_record(&["Flu", "0.4", "severe", "", "", "", "", "", "", ""]);
        let err = ConditionRecord::from_record(&record).unwrap_err();
        assert!(matches!(err, RiskError::InvalidRiskTier(_)));
    }

    #[test]
    fn test_reject_missing_name() {
        let record = make_record(&["", "0.4", "high", "", "", "", "", "", "", ""]);
        let err = ConditionRecord::from_record(&record).unwrap_err();
        assert!(matches!(err, RiskError::MissingField { .. }));
    }
}
