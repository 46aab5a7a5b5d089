//! Symptom types.
//!
//! [`SymptomReport`] is a user-supplied symptom with a severity, transient
//! per request. [`CatalogSymptom`] is an entry of the static symptom catalog.

use crate::thresholds;

/// A symptom reported by a user together with its severity.
///
/// The name is either a catalog symptom or free text. Severity is on a
/// 1 (very mild) to 5 (very severe) scale and must be validated at the
/// request boundary.
///
/// # Examples
///
/// ```
/// use wellness_types::SymptomReport;
///
/// let report = SymptomReport::new("Fever", 4);
/// assert!(report.has_valid_severity());
///
/// let bogus = SymptomReport::new("Fever", 9);
/// assert!(!bogus.has_valid_severity());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymptomReport {
    /// Symptom label.
    pub name: String,
    /// Severity from 1 to 5.
    pub severity: u8,
}

impl SymptomReport {
    /// Creates a new symptom report.
    pub fn new(name: impl Into<String>, severity: u8) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }

    /// Returns true if the severity lies in the accepted 1..=5 range.
    pub fn has_valid_severity(&self) -> bool {
        (thresholds::SEVERITY_MIN..=thresholds::SEVERITY_MAX).contains(&self.severity)
    }
}

/// An entry of the symptom catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSymptom {
    /// Symptom name, unique within the catalog.
    pub name: String,
    /// Body-system category, e.g. "Respiratory".
    pub category: String,
}

impl CatalogSymptom {
    /// Creates a new catalog symptom.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Creates a report for this symptom at the default severity.
    pub fn report(&self) -> SymptomReport {
        SymptomReport::new(self.name.clone(), thresholds::SEVERITY_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bounds() {
        assert!(!SymptomReport::new("Cough", 0).has_valid_severity());
        assert!(SymptomReport::new("Cough", 1).has_valid_severity());
        assert!(SymptomReport::new("Cough", 5).has_valid_severity());
        assert!(!SymptomReport::new("Cough", 6).has_valid_severity());
    }

    #[test]
    fn test_catalog_symptom_report() {
        let symptom = CatalogSymptom::new("Headache", "Neurological");
        let report = symptom.report();
        assert_eq!(report.name, "Headache");
        assert_eq!(report.severity, thresholds::SEVERITY_DEFAULT);
    }
}
