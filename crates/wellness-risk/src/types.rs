//! Engine-wide error, result and configuration types.

use std::path::PathBuf;

use thiserror::Error;
use wellness_types::{thresholds, ParseRiskTierError, RiskBand};

/// Errors raised by validation, scoring and catalog loading.
#[derive(Error, Debug)]
pub enum RiskError {
    /// No symptoms were supplied; the average severity is undefined.
    #[error("Please select at least one symptom for analysis")]
    EmptySymptoms,

    /// Severity outside the 1..=5 scale.
    #[error("Invalid severity {value} for symptom '{name}' (expected 1 to 5)")]
    InvalidSeverity {
        /// The symptom carrying the bad severity.
        name: String,
        /// The value that was supplied.
        value: i64,
    },

    /// Symptom name is empty or whitespace.
    #[error("Symptom name must not be blank")]
    EmptySymptomName,

    /// I/O error reading a catalog file.
    #[error("IO error reading catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required catalog file missing from a catalog directory.
    #[error("Required catalog file not found: {file_type} in {directory}")]
    RequiredFileMissing {
        /// The kind of catalog file that was missing.
        file_type: String,
        /// The directory that was searched.
        directory: String,
    },

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A required field is empty.
    #[error("Missing value for column: {column}")]
    MissingField {
        /// The column with no value.
        column: String,
    },

    /// Base probability is not a number in [0, 1].
    #[error("Invalid base probability '{value}' for condition '{condition}' (expected 0.0 to 1.0)")]
    InvalidProbability {
        /// The condition carrying the bad probability.
        condition: String,
        /// The value that was supplied.
        value: String,
    },

    /// Unknown risk tier label.
    #[error(transparent)]
    InvalidRiskTier(#[from] ParseRiskTierError),

    /// Two conditions share a name.
    #[error("Duplicate condition in catalog: {name}")]
    DuplicateCondition {
        /// The repeated name.
        name: String,
    },

    /// Two catalog symptoms share a name.
    #[error("Duplicate symptom in catalog: {name}")]
    DuplicateSymptom {
        /// The repeated name.
        name: String,
    },
}

impl RiskError {
    /// Returns true if the error is a caller contract violation rather
    /// than a catalog or I/O failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptySymptoms | Self::InvalidSeverity { .. } | Self::EmptySymptomName
        )
    }
}

/// Result type for risk engine operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Weights and thresholds used by the risk scorer.
///
/// The default reproduces the reference heuristic:
/// `avg_severity * 20 + max(0, t - 38) * 10 + max(0, 95 - spo2) * 5 + p * 30`,
/// rounded and clamped to `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Points per unit of average severity.
    pub severity_weight: f64,
    /// Temperature above which fever points accrue, in degrees Celsius.
    pub fever_threshold: f64,
    /// Points per degree above the fever threshold.
    pub fever_weight: f64,
    /// Saturation below which hypoxia points accrue, in percent.
    pub hypoxia_threshold: f64,
    /// Points per percentage point below the hypoxia threshold.
    pub hypoxia_weight: f64,
    /// Points per unit of base probability.
    pub probability_weight: f64,
    /// Upper clamp of the final score.
    pub max_score: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            severity_weight: 20.0,
            fever_threshold: thresholds::FEVER_CELSIUS,
            fever_weight: 10.0,
            hypoxia_threshold: thresholds::HYPOXIA_PERCENT,
            hypoxia_weight: 5.0,
            probability_weight: 30.0,
            max_score: thresholds::SCORE_MAX,
        }
    }
}

/// Presentation ordering and filtering of predictions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingOptions {
    /// Drop predictions scoring below this value.
    pub min_score: Option<u8>,
    /// Drop predictions below this band.
    pub min_band: Option<RiskBand>,
    /// Keep at most this many predictions.
    pub limit: Option<usize>,
}

impl RankingOptions {
    /// Keeps only the `n` highest-scoring predictions.
    pub fn top(n: usize) -> Self {
        Self {
            limit: Some(n),
            ..Default::default()
        }
    }

    /// Keeps only predictions in the given band or above.
    pub fn at_least(band: RiskBand) -> Self {
        Self {
            min_band: Some(band),
            ..Default::default()
        }
    }
}

/// Configuration for catalog construction.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// Keep the first entry of a repeated name instead of failing with
    /// `DuplicateCondition` / `DuplicateSymptom`.
    pub skip_duplicates: bool,
}

/// Catalog files discovered in a catalog directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFiles {
    /// Path to the condition catalog file.
    pub conditions_file: PathBuf,
    /// Path to the symptom catalog file.
    pub symptoms_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_config_default() {
        let config = ScoringConfig::default();
        assert_eq!(config.severity_weight, 20.0);
        assert_eq!(config.fever_threshold, 38.0);
        assert_eq!(config.fever_weight, 10.0);
        assert_eq!(config.hypoxia_threshold, 95.0);
        assert_eq!(config.hypoxia_weight, 5.0);
        assert_eq!(config.probability_weight, 30.0);
        assert_eq!(config.max_score, 100);
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(RiskError::EmptySymptoms.is_invalid_input());
        assert!(RiskError::EmptySymptomName.is_invalid_input());
        assert!(RiskError::InvalidSeverity {
            name: "Fever".to_string(),
            value: 7
        }
        .is_invalid_input());
        assert!(!RiskError::DuplicateCondition {
            name: "Flu".to_string()
        }
        .is_invalid_input());
    }

    #[test]
    fn test_error_messages() {
        let err = RiskError::InvalidSeverity {
            name: "Cough".to_string(),
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid severity 0 for symptom 'Cough' (expected 1 to 5)"
        );
        let err: RiskError = ParseRiskTierError("dire".to_string()).into();
        assert!(err.to_string().contains("dire"));
    }

    #[test]
    fn test_ranking_presets() {
        assert_eq!(RankingOptions::top(3).limit, Some(3));
        assert_eq!(
            RankingOptions::at_least(RiskBand::Elevated).min_band,
            Some(RiskBand::Elevated)
        );
    }
}
