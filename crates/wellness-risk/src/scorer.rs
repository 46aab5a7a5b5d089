//! Condition risk scorer.
//!
//! For every condition the score is
//!
//! ```text
//! avg_severity * severity_weight
//!   + (temperature - fever_threshold) * fever_weight        if temperature > threshold
//!   + (hypoxia_threshold - saturation) * hypoxia_weight     if saturation < threshold
//!   + base_probability * probability_weight
//! ```
//!
//! rounded to the nearest integer and clamped to `[0, max_score]`.
//! Heart rate and blood pressure are carried but contribute nothing.
//!
//! Only the aggregate severity and vitals feed the score; the identity of
//! reported symptoms is not matched against conditions.

use wellness_types::{ConditionRecord, Prediction, SymptomReport, VitalSigns};

use crate::types::{RiskError, RiskResult, ScoringConfig};

/// Validated scorer input for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringInput {
    /// Reported symptoms; must be non-empty.
    pub symptoms: Vec<SymptomReport>,
    /// Vital sign readings.
    pub vitals: VitalSigns,
}

/// Stateless risk scorer.
///
/// # Example
///
/// ```
/// use wellness_risk::{ConditionCatalog, RiskScorer};
/// use wellness_types::{SymptomReport, VitalSigns};
///
/// let scorer = RiskScorer::default();
/// let catalog = ConditionCatalog::builtin();
/// let symptoms = [SymptomReport::new("Fever", 4), SymptomReport::new("Cough", 2)];
/// let vitals = VitalSigns {
///     temperature: Some(39.0),
///     oxygen_saturation: Some(93.0),
///     ..Default::default()
/// };
///
/// let predictions = scorer.score(&symptoms, &vitals, catalog.records()).unwrap();
/// assert_eq!(predictions[0].risk_score, 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    /// Creates a scorer with the given weights.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Returns the scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores every condition against the reported symptoms and vitals.
    ///
    /// Predictions come back in the order of `conditions`, each holding its
    /// own copy of the record.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::EmptySymptoms`] if `symptoms` is empty.
    pub fn score(
        &self,
        symptoms: &[SymptomReport],
        vitals: &VitalSigns,
        conditions: &[ConditionRecord],
    ) -> RiskResult<Vec<Prediction>> {
        let average = average_severity(symptoms)?;
        let input_points = average * self.config.severity_weight + self.vital_adjustment(vitals);

        Ok(conditions
            .iter()
            .map(|condition| Prediction {
                condition: condition.clone(),
                risk_score: self.finish(input_points + self.probability_points(condition)),
            })
            .collect())
    }

    /// Scores a single condition.
    pub fn score_condition(
        &self,
        symptoms: &[SymptomReport],
        vitals: &VitalSigns,
        condition: &ConditionRecord,
    ) -> RiskResult<u8> {
        let average = average_severity(symptoms)?;
        Ok(self.finish(
            average * self.config.severity_weight
                + self.vital_adjustment(vitals)
                + self.probability_points(condition),
        ))
    }

    /// Returns the points contributed by vital signs.
    ///
    /// Absent and non-finite readings contribute nothing.
    pub fn vital_adjustment(&self, vitals: &VitalSigns) -> f64 {
        let mut points = 0.0;

        if let Some(temperature) = vitals.temperature.filter(|t| t.is_finite()) {
            if temperature > self.config.fever_threshold {
                points += (temperature - self.config.fever_threshold) * self.config.fever_weight;
            }
        }

        if let Some(saturation) = vitals.oxygen_saturation.filter(|o| o.is_finite()) {
            if saturation < self.config.hypoxia_threshold {
                points +=
                    (self.config.hypoxia_threshold - saturation) * self.config.hypoxia_weight;
            }
        }

        points
    }

    fn probability_points(&self, condition: &ConditionRecord) -> f64 {
        condition.base_probability * self.config.probability_weight
    }

    /// Rounds and clamps raw points to `[0, max_score]`.
    fn finish(&self, points: f64) -> u8 {
        // NaN saturates to 0 in the cast.
        points.round().clamp(0.0, f64::from(self.config.max_score)) as u8
    }
}

/// Returns the mean severity of the reported symptoms.
///
/// # Errors
///
/// Returns [`RiskError::EmptySymptoms`] if `symptoms` is empty.
pub fn average_severity(symptoms: &[SymptomReport]) -> RiskResult<f64> {
    if symptoms.is_empty() {
        return Err(RiskError::EmptySymptoms);
    }
    let total: u32 = symptoms.iter().map(|s| u32::from(s.severity)).sum();
    Ok(f64::from(total) / symptoms.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_types::RiskTier;

    fn condition(probability: f64) -> ConditionRecord {
        ConditionRecord::new("Test Condition", probability, RiskTier::Moderate)
    }

    fn uniform(severity: u8, count: usize) -> Vec<SymptomReport> {
        (0..count)
            .map(|i| SymptomReport::new(format!("Symptom {i}"), severity))
            .collect()
    }

    fn score_one(symptoms: &[SymptomReport], vitals: &VitalSigns, probability: f64) -> u8 {
        RiskScorer::default()
            .score_condition(symptoms, vitals, &condition(probability))
            .unwrap()
    }

    #[test]
    fn test_empty_symptoms_rejected() {
        let scorer = RiskScorer::default();
        let result = scorer.score(&[], &VitalSigns::default(), &[condition(0.5)]);
        assert!(matches!(result, Err(RiskError::EmptySymptoms)));
        assert!(average_severity(&[]).is_err());
    }

    #[test]
    fn test_maximum_input_hits_ceiling() {
        for count in 1..5 {
            assert_eq!(score_one(&uniform(5, count), &VitalSigns::default(), 1.0), 100);
        }
    }

    #[test]
    fn test_minimum_input_scores_twenty() {
        for count in 1..5 {
            assert_eq!(score_one(&uniform(1, count), &VitalSigns::default(), 0.0), 20);
        }
    }

    #[test]
    fn test_reference_scenario_clamps() {
        let symptoms = [SymptomReport::new("Fever", 4), SymptomReport::new("Cough", 2)];
        let vitals = VitalSigns {
            temperature: Some(39.0),
            oxygen_saturation: Some(93.0),
            ..Default::default()
        };
        // 60 + 10 + 10 + 24 = 104
        assert_eq!(score_one(&symptoms, &vitals, 0.8), 100);
    }

    #[test]
    fn test_unclamped_arithmetic() {
        let symptoms = [SymptomReport::new("Headache", 2), SymptomReport::new("Nausea", 1)];
        // 1.5 * 20 + 0.6 * 30 = 48
        assert_eq!(score_one(&symptoms, &VitalSigns::default(), 0.6), 48);

        let vitals = VitalSigns {
            temperature: Some(38.5),
            ..Default::default()
        };
        // 30 + 5 + 18 = 53
        assert_eq!(score_one(&symptoms, &vitals, 0.6), 53);
    }

    #[test]
    fn test_rounding_half_up() {
        let symptoms = [SymptomReport::new("Cough", 1)];
        // 20 + 0.05 * 30 = 21.5
        assert_eq!(score_one(&symptoms, &VitalSigns::default(), 0.05), 22);
    }

    #[test]
    fn test_fever_is_monotonic() {
        let symptoms = uniform(2, 2);
        let without = score_one(&symptoms, &VitalSigns::default(), 0.3);
        let with = score_one(
            &symptoms,
            &VitalSigns {
                temperature: Some(38.6),
                ..Default::default()
            },
            0.3,
        );
        assert!(with > without);
    }

    #[test]
    fn test_hypoxia_is_monotonic() {
        let symptoms = uniform(2, 2);
        let without = score_one(&symptoms, &VitalSigns::default(), 0.3);
        let with = score_one(
            &symptoms,
            &VitalSigns {
                oxygen_saturation: Some(92.0),
                ..Default::default()
            },
            0.3,
        );
        assert!(with > without);
    }

    #[test]
    fn test_normal_vitals_add_nothing() {
        let scorer = RiskScorer::default();
        let vitals = VitalSigns {
            temperature: Some(38.0),
            heart_rate: Some(180),
            blood_pressure: Some("190/120".to_string()),
            oxygen_saturation: Some(95.0),
        };
        assert_eq!(scorer.vital_adjustment(&vitals), 0.0);
    }

    #[test]
    fn test_zero_readings_are_present() {
        let scorer = RiskScorer::default();
        // A present 0 % saturation is a reading, not an absence.
        let vitals = VitalSigns {
            oxygen_saturation: Some(0.0),
            ..Default::default()
        };
        assert_eq!(scorer.vital_adjustment(&vitals), 475.0);
        assert_eq!(scorer.vital_adjustment(&VitalSigns::default()), 0.0);
    }

    #[test]
    fn test_non_finite_vitals_ignored() {
        let scorer = RiskScorer::default();
        let vitals = VitalSigns {
            temperature: Some(f64::INFINITY),
            oxygen_saturation: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(scorer.vital_adjustment(&vitals), 0.0);
    }

    #[test]
    fn test_order_independent() {
        let scorer = RiskScorer::default();
        let conditions = [condition(0.35)];
        let forward = [
            SymptomReport::new("A", 1),
            SymptomReport::new("B", 4),
            SymptomReport::new("C", 5),
        ];
        let reversed = [forward[2].clone(), forward[1].clone(), forward[0].clone()];

        assert_eq!(
            scorer.score(&forward, &VitalSigns::default(), &conditions).unwrap(),
            scorer.score(&reversed, &VitalSigns::default(), &conditions).unwrap()
        );
    }

    #[test]
    fn test_deterministic() {
        let scorer = RiskScorer::default();
        let symptoms = uniform(3, 3);
        let vitals = VitalSigns {
            temperature: Some(38.7),
            ..Default::default()
        };
        let conditions = [condition(0.1), condition(0.9)];
        assert_eq!(
            scorer.score(&symptoms, &vitals, &conditions).unwrap(),
            scorer.score(&symptoms, &vitals, &conditions).unwrap()
        );
    }

    #[test]
    fn test_lower_clamp() {
        let scorer = RiskScorer::new(ScoringConfig {
            severity_weight: -50.0,
            ..Default::default()
        });
        let score = scorer
            .score_condition(&uniform(5, 1), &VitalSigns::default(), &condition(0.0))
            .unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn test_scores_always_in_range() {
        let scorer = RiskScorer::default();
        let conditions = [condition(0.0), condition(0.5), condition(1.0)];
        for severity in 1..=5 {
            for temperature in [None, Some(35.0), Some(38.0), Some(41.5)] {
                for saturation in [None, Some(70.0), Some(94.9), Some(99.0)] {
                    let vitals = VitalSigns {
                        temperature,
                        oxygen_saturation: saturation,
                        ..Default::default()
                    };
                    let predictions = scorer
                        .score(&uniform(severity, 2), &vitals, &conditions)
                        .unwrap();
                    assert!(predictions.iter().all(|p| p.risk_score <= 100));
                }
            }
        }
    }

    #[test]
    fn test_catalog_order_and_copies() {
        let scorer = RiskScorer::default();
        let conditions = vec![
            ConditionRecord::new("Low Prior", 0.1, RiskTier::Low),
            ConditionRecord::new("High Prior", 0.9, RiskTier::High),
        ];
        let mut predictions = scorer
            .score(&uniform(2, 1), &VitalSigns::default(), &conditions)
            .unwrap();

        assert_eq!(predictions[0].name(), "Low Prior");
        assert_eq!(predictions[0].risk_score, 43);
        assert_eq!(predictions[1].risk_score, 67);

        predictions[0].condition.risk_factors.push("Edited".to_string());
        assert!(conditions[0].risk_factors.is_empty());
        assert!(predictions[1].condition.risk_factors.is_empty());
    }
}
