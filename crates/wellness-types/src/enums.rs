//! Risk classification enums.
//!
//! [`RiskTier`] is the static qualitative label attached to a condition in
//! the catalog. [`RiskBand`] is derived from a computed risk score and is
//! what presentation layers colour-code.

use std::str::FromStr;

use crate::thresholds;

/// Error returned when a risk tier label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRiskTierError(pub String);

impl std::fmt::Display for ParseRiskTierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid risk tier: '{}' (expected low, moderate, high or critical)",
            self.0
        )
    }
}

impl std::error::Error for ParseRiskTierError {}

/// Qualitative risk tier of a catalog condition.
///
/// The tier is fixed per condition and is never derived from a computed
/// risk score.
///
/// # Examples
///
/// ```
/// use wellness_types::RiskTier;
///
/// let tier: RiskTier = "Moderate".parse().unwrap();
/// assert_eq!(tier, RiskTier::Moderate);
/// assert_eq!(tier.as_str(), "moderate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskTier {
    /// Self-limiting, rarely needs professional care.
    Low,
    /// May need care if symptoms persist.
    Moderate,
    /// Should be seen by a professional.
    High,
    /// Needs immediate attention.
    Critical,
}

impl RiskTier {
    /// All tiers from lowest to highest.
    pub const ALL: [RiskTier; 4] = [Self::Low, Self::Moderate, Self::High, Self::Critical];

    /// Returns the lowercase label for this tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = ParseRiskTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| ParseRiskTierError(s.to_string()))
    }
}

/// Display band of a computed risk score.
///
/// Bands are a presentation contract: `<30` low, `30-59` moderate,
/// `60-79` elevated, `>=80` high.
///
/// # Examples
///
/// ```
/// use wellness_types::RiskBand;
///
/// assert_eq!(RiskBand::from_score(29), RiskBand::Low);
/// assert_eq!(RiskBand::from_score(30), RiskBand::Moderate);
/// assert_eq!(RiskBand::from_score(79), RiskBand::Elevated);
/// assert_eq!(RiskBand::from_score(80), RiskBand::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RiskBand {
    /// Score below 30.
    Low,
    /// Score from 30 to 59.
    Moderate,
    /// Score from 60 to 79.
    Elevated,
    /// Score of 80 or above.
    High,
}

impl RiskBand {
    /// Classifies a risk score into its display band.
    pub fn from_score(score: u8) -> Self {
        if score < thresholds::BAND_MODERATE_FROM {
            Self::Low
        } else if score < thresholds::BAND_ELEVATED_FROM {
            Self::Moderate
        } else if score < thresholds::BAND_HIGH_FROM {
            Self::Elevated
        } else {
            Self::High
        }
    }

    /// Returns the lowercase label for this band.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }

    /// Returns the lowest score that falls in this band.
    pub fn lower_bound(self) -> u8 {
        match self {
            Self::Low => thresholds::SCORE_MIN,
            Self::Moderate => thresholds::BAND_MODERATE_FROM,
            Self::Elevated => thresholds::BAND_ELEVATED_FROM,
            Self::High => thresholds::BAND_HIGH_FROM,
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tier_parse() {
        assert_eq!("low".parse::<RiskTier>(), Ok(RiskTier::Low));
        assert_eq!("CRITICAL".parse::<RiskTier>(), Ok(RiskTier::Critical));
        assert_eq!(" high ".parse::<RiskTier>(), Ok(RiskTier::High));
        assert_eq!(
            "severe".parse::<RiskTier>(),
            Err(ParseRiskTierError("severe".to_string()))
        );
    }

    #[test]
    fn test_risk_tier_display() {
        for tier in RiskTier::ALL {
            assert_eq!(tier.to_string().parse::<RiskTier>(), Ok(tier));
        }
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(RiskBand::from_score(0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(59), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(60), RiskBand::Elevated);
        assert_eq!(RiskBand::from_score(100), RiskBand::High);
    }

    #[test]
    fn test_band_lower_bound_is_in_band() {
        for band in [
            RiskBand::Low,
            RiskBand::Moderate,
            RiskBand::Elevated,
            RiskBand::High,
        ] {
            assert_eq!(RiskBand::from_score(band.lower_bound()), band);
        }
    }

    #[test]
    fn test_band_ordering() {
        assert!(RiskBand::Low < RiskBand::Moderate);
        assert!(RiskBand::Elevated < RiskBand::High);
    }
}
