//! Request boundary validation.
//!
//! Turns raw, untrusted input into the typed reports the scorer accepts.
//! Severities arrive as wide integers so that out-of-range values can be
//! reported instead of silently truncated.

use wellness_types::{thresholds, SymptomReport, VitalSigns};

use crate::scorer::ScoringInput;
use crate::types::{RiskError, RiskResult};

/// A symptom as received from a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSymptom {
    /// Symptom label, possibly padded or blank.
    pub name: String,
    /// Severity, not yet range-checked.
    pub severity: i64,
}

impl RawSymptom {
    /// Creates a raw symptom.
    pub fn new(name: impl Into<String>, severity: i64) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }
}

/// An unvalidated assessment request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentRequest {
    /// Reported symptoms.
    pub symptoms: Vec<RawSymptom>,
    /// Optional vital sign readings.
    pub vitals: VitalSigns,
}

/// Validates a symptom list.
///
/// Names are trimmed. A repeated name keeps its first occurrence.
///
/// # Errors
///
/// - [`RiskError::EmptySymptoms`] if the list is empty
/// - [`RiskError::EmptySymptomName`] if a name is blank
/// - [`RiskError::InvalidSeverity`] if a severity is outside 1..=5
pub fn validate_symptoms(raw: &[RawSymptom]) -> RiskResult<Vec<SymptomReport>> {
    if raw.is_empty() {
        return Err(RiskError::EmptySymptoms);
    }

    let mut reports: Vec<SymptomReport> = Vec::with_capacity(raw.len());

    for symptom in raw {
        let name = symptom.name.trim();
        if name.is_empty() {
            return Err(RiskError::EmptySymptomName);
        }

        let severity = u8::try_from(symptom.severity)
            .ok()
            .filter(|s| (thresholds::SEVERITY_MIN..=thresholds::SEVERITY_MAX).contains(s))
            .ok_or_else(|| RiskError::InvalidSeverity {
                name: name.to_string(),
                value: symptom.severity,
            })?;

        if reports.iter().any(|r| r.name == name) {
            continue;
        }
        reports.push(SymptomReport::new(name, severity));
    }

    Ok(reports)
}

/// Drops vital sign readings that cannot be real measurements.
///
/// Non-finite numbers, saturations outside 0-100 % and blank blood
/// pressure strings become absent. Zero readings are kept.
pub fn normalize_vitals(vitals: &VitalSigns) -> VitalSigns {
    VitalSigns {
        temperature: vitals.temperature.filter(|t| t.is_finite()),
        heart_rate: vitals.heart_rate,
        blood_pressure: vitals
            .blood_pressure
            .as_deref()
            .map(str::trim)
            .filter(|bp| !bp.is_empty())
            .map(str::to_string),
        oxygen_saturation: vitals
            .oxygen_saturation
            .filter(|o| o.is_finite() && (0.0..=100.0).contains(o)),
    }
}

/// Validates a full request into scorer input.
pub fn validate_request(request: &AssessmentRequest) -> RiskResult<ScoringInput> {
    Ok(ScoringInput {
        symptoms: validate_symptoms(&request.symptoms)?,
        vitals: normalize_vitals(&request.vitals),
    })
}
