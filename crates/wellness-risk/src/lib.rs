//! # wellness-risk
//!
//! Symptom risk assessment engine.
//!
//! Takes user-reported symptoms with severities, optional vital signs and a
//! catalog of candidate conditions, and produces condition predictions
//! annotated with a bounded 0-100 risk score.
//!
//! The score is a deterministic, explainable heuristic. It is not a
//! diagnostic model.
//!
//! ## Usage
//!
//! ```rust
//! use wellness_risk::{AssessmentRequest, RawSymptom, RiskAssessor};
//! use wellness_types::{RiskBand, VitalSigns};
//!
//! let assessor = RiskAssessor::builtin();
//! let request = AssessmentRequest {
//!     symptoms: vec![RawSymptom::new("Fever", 4), RawSymptom::new("Cough", 2)],
//!     vitals: VitalSigns {
//!         temperature: Some(39.0),
//!         oxygen_saturation: Some(93.0),
//!         ..Default::default()
//!     },
//! };
//!
//! let assessment = assessor.assess(&request)?;
//! assert_eq!(assessment.highest_band(), Some(RiskBand::High));
//! # Ok::<(), wellness_risk::RiskError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): batch scoring runs on the rayon thread pool.

#![warn(missing_docs)]

mod assessor;
pub mod catalog;
mod condition;
pub mod loader;
pub mod parser;
mod ranking;
mod scorer;
mod symptom;
mod types;
mod validate;

pub use assessor::{Assessment, RiskAssessor};
pub use catalog::{Catalogs, ConditionCatalog, SymptomCatalog};
pub use loader::discover_catalog_files;
pub use parser::{CatalogParser, CatalogRecord};
pub use ranking::{band_counts, highest_band, rank};
pub use scorer::{average_severity, RiskScorer, ScoringInput};
pub use types::{
    CatalogConfig, CatalogFiles, RankingOptions, RiskError, RiskResult, ScoringConfig,
};
pub use validate::{
    normalize_vitals, validate_request, validate_symptoms, AssessmentRequest, RawSymptom,
};

// Re-export wellness-types for convenience
pub use wellness_types;
