//! Well-known clinical thresholds and score bands.
//!
//! These constants are shared by the scorer, the validation layer and any
//! presentation code that colour-codes risk scores.
//!
//! # Examples
//!
//! ```
//! use wellness_types::thresholds;
//!
//! assert_eq!(thresholds::SEVERITY_MIN, 1);
//! assert_eq!(thresholds::SEVERITY_MAX, 5);
//! assert!(thresholds::FEVER_CELSIUS < 39.0);
//! ```

// =============================================================================
// Symptom Severity
// =============================================================================

/// Lowest severity a user may report (very mild).
pub const SEVERITY_MIN: u8 = 1;

/// Highest severity a user may report (very severe).
pub const SEVERITY_MAX: u8 = 5;

/// Severity pre-selected when a symptom is first added to a report.
pub const SEVERITY_DEFAULT: u8 = 3;

// =============================================================================
// Vital Signs
// =============================================================================

/// Body temperature above which a reading counts as fever, in degrees Celsius.
pub const FEVER_CELSIUS: f64 = 38.0;

/// Oxygen saturation below which a reading counts as hypoxic, in percent.
pub const HYPOXIA_PERCENT: f64 = 95.0;

// =============================================================================
// Risk Score
// =============================================================================

/// Lowest possible risk score.
pub const SCORE_MIN: u8 = 0;

/// Highest possible risk score.
pub const SCORE_MAX: u8 = 100;

/// Scores at or above this value fall in the moderate band.
pub const BAND_MODERATE_FROM: u8 = 30;

/// Scores at or above this value fall in the elevated band.
pub const BAND_ELEVATED_FROM: u8 = 60;

/// Scores at or above this value fall in the high band.
pub const BAND_HIGH_FROM: u8 = 80;
