//! # wellness-types
//!
//! Type definitions for symptom risk assessment.
//!
//! This crate provides plain data types shared by the risk engine and the
//! service layer: symptom reports, vital signs, condition catalog records
//! and scored predictions.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Field names serialize in camelCase.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use wellness_types::{ConditionRecord, Prediction, RiskBand, RiskTier};
//! use wellness_types::{SymptomReport, VitalSigns};
//! use wellness_types::thresholds;
//!
//! let symptoms = vec![SymptomReport::new("Fever", 4), SymptomReport::new("Cough", 2)];
//! let vitals = VitalSigns {
//!     temperature: Some(39.0),
//!     ..Default::default()
//! };
//!
//! assert!(symptoms.iter().all(SymptomReport::has_valid_severity));
//! assert!(vitals.temperature.unwrap() > thresholds::FEVER_CELSIUS);
//!
//! let prediction = Prediction {
//!     condition: ConditionRecord::new("Common Cold", 0.8, RiskTier::Low),
//!     risk_score: 45,
//! };
//! assert_eq!(prediction.band(), RiskBand::Moderate);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! wellness-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod condition;
mod enums;
mod prediction;
mod symptom;
pub mod thresholds;
mod vitals;

// Re-export all public types at crate root
pub use condition::ConditionRecord;
pub use enums::{ParseRiskTierError, RiskBand, RiskTier};
pub use prediction::Prediction;
pub use symptom::{CatalogSymptom, SymptomReport};
pub use vitals::VitalSigns;
