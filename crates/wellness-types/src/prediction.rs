//! Scored prediction type.

use crate::{ConditionRecord, RiskBand};

/// A condition record augmented with a computed risk score.
///
/// Each prediction owns its own copy of the condition record, so changes
/// to one prediction never reach another or the catalog entry.
///
/// # Examples
///
/// ```
/// use wellness_types::{ConditionRecord, Prediction, RiskBand, RiskTier};
///
/// let prediction = Prediction {
///     condition: ConditionRecord::new("Common Cold", 0.8, RiskTier::Low),
///     risk_score: 84,
/// };
/// assert_eq!(prediction.band(), RiskBand::High);
/// assert_eq!(prediction.name(), "Common Cold");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Prediction {
    /// The scored condition.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub condition: ConditionRecord,
    /// Risk score in [0, 100].
    pub risk_score: u8,
}

impl Prediction {
    /// Returns the condition name.
    pub fn name(&self) -> &str {
        &self.condition.condition
    }

    /// Returns the display band for the risk score.
    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}
