//! Condition catalog record.
//!
//! This module provides the `ConditionRecord` struct representing one
//! candidate condition of the condition catalog.

use crate::RiskTier;

/// A candidate condition from the condition catalog.
///
/// Only `base_probability` feeds the risk scorer; every other field is
/// advisory text carried through to predictions unchanged.
///
/// # Examples
///
/// ```
/// use wellness_types::{ConditionRecord, RiskTier};
///
/// let record = ConditionRecord::new("Common Cold", 0.8, RiskTier::Low);
/// assert_eq!(record.condition, "Common Cold");
/// assert!(record.has_valid_probability());
/// assert!(record.risk_factors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ConditionRecord {
    /// Condition name, unique within the catalog.
    pub condition: String,
    /// Prior likelihood in [0, 1], independent of the current input.
    pub base_probability: f64,
    /// Static qualitative tier.
    pub risk_tier: RiskTier,
    /// Known risk factors.
    pub risk_factors: Vec<String>,
    /// Tests a clinician may order.
    pub recommended_tests: Vec<String>,
    /// Preventive measures.
    pub preventive_measures: Vec<String>,
    /// Dietary recommendations.
    pub dietary_recommendations: Vec<String>,
    /// Lifestyle changes.
    pub lifestyle_changes: Vec<String>,
    /// Priority descriptor, e.g. "Low".
    pub urgency_level: String,
    /// Care-seeking guidance, e.g. "Within 3-5 days if symptoms persist".
    pub time_to_seek_care: String,
}

impl ConditionRecord {
    /// Creates a record with empty advisory text.
    pub fn new(condition: impl Into<String>, base_probability: f64, risk_tier: RiskTier) -> Self {
        Self {
            condition: condition.into(),
            base_probability,
            risk_tier,
            risk_factors: Vec::new(),
            recommended_tests: Vec::new(),
            preventive_measures: Vec::new(),
            dietary_recommendations: Vec::new(),
            lifestyle_changes: Vec::new(),
            urgency_level: String::new(),
            time_to_seek_care: String::new(),
        }
    }

    /// Returns true if the base probability is a finite value in [0, 1].
    pub fn has_valid_probability(&self) -> bool {
        self.base_probability.is_finite() && (0.0..=1.0).contains(&self.base_probability)
    }

    /// Returns the base probability as a whole percentage.
    pub fn probability_percent(&self) -> u8 {
        (self.base_probability.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}
