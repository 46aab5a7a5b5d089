//! # wellness-service
//!
//! gRPC service for symptom risk assessment.
//!
//! This crate exposes the catalogs and the risk assessor of the
//! wellness-risk crate over the `wellness.RiskService` gRPC service:
//!
//! - `AssessRisk` / `AssessRiskBatch` - validate, score and rank
//! - `ListSymptoms` - symptom catalog grouped by category
//! - `ListConditions` / `GetCondition` - condition catalog
//!
//! Authentication is expected to be handled in front of this service.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod proto;

pub mod config;
mod server;

pub use config::ServiceConfig;
pub use server::{WellnessServer, MAX_BATCH_SIZE};
