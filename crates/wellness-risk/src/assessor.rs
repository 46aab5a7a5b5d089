//! End-to-end risk assessment: validate, score, rank.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use wellness_types::{Prediction, RiskBand, SymptomReport, VitalSigns};

use crate::catalog::ConditionCatalog;
use crate::ranking::{highest_band, rank};
use crate::scorer::{average_severity, RiskScorer};
use crate::types::{RankingOptions, RiskResult, ScoringConfig};
use crate::validate::{validate_request, AssessmentRequest};

/// Outcome of one assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Ranked predictions.
    pub predictions: Vec<Prediction>,
    /// The validated symptoms that were scored.
    pub symptoms: Vec<SymptomReport>,
    /// The normalized vitals that were scored.
    pub vitals: VitalSigns,
    /// Mean severity of `symptoms`.
    pub average_severity: f64,
}

impl Assessment {
    /// Returns the highest band among the predictions.
    pub fn highest_band(&self) -> Option<RiskBand> {
        highest_band(&self.predictions)
    }

    /// Returns the top prediction, if any.
    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }
}

/// Bundles a condition catalog with a scorer and default ranking.
///
/// # Example
///
/// ```
/// use wellness_risk::{AssessmentRequest, RawSymptom, RiskAssessor};
///
/// let assessor = RiskAssessor::builtin();
/// let request = AssessmentRequest {
///     symptoms: vec![RawSymptom::new("Sore throat", 2), RawSymptom::new("Runny nose", 2)],
///     ..Default::default()
/// };
///
/// let assessment = assessor.assess(&request).unwrap();
/// assert_eq!(assessment.predictions[0].name(), "Common Cold");
/// assert_eq!(assessment.predictions[0].risk_score, 64);
/// ```
#[derive(Debug, Clone)]
pub struct RiskAssessor {
    conditions: ConditionCatalog,
    scorer: RiskScorer,
    ranking: RankingOptions,
}

impl RiskAssessor {
    /// Creates an assessor over the given catalog.
    pub fn new(conditions: ConditionCatalog, scoring: ScoringConfig, ranking: RankingOptions) -> Self {
        Self {
            conditions,
            scorer: RiskScorer::new(scoring),
            ranking,
        }
    }

    /// Creates an assessor over the builtin catalog with default weights.
    pub fn builtin() -> Self {
        Self::new(
            ConditionCatalog::builtin(),
            ScoringConfig::default(),
            RankingOptions::default(),
        )
    }

    /// Returns the condition catalog.
    pub fn conditions(&self) -> &ConditionCatalog {
        &self.conditions
    }

    /// Returns the scorer.
    pub fn scorer(&self) -> &RiskScorer {
        &self.scorer
    }

    /// Validates, scores and ranks a request with the default ranking.
    pub fn assess(&self, request: &AssessmentRequest) -> RiskResult<Assessment> {
        self.assess_with(request, &self.ranking)
    }

    /// Validates, scores and ranks a request with explicit ranking options.
    pub fn assess_with(
        &self,
        request: &AssessmentRequest,
        ranking: &RankingOptions,
    ) -> RiskResult<Assessment> {
        let input = validate_request(request)?;
        let predictions =
            self.scorer
                .score(&input.symptoms, &input.vitals, self.conditions.records())?;

        Ok(Assessment {
            predictions: rank(predictions, ranking),
            average_severity: average_severity(&input.symptoms)?,
            symptoms: input.symptoms,
            vitals: input.vitals,
        })
    }

    /// Assesses many requests independently with the default ranking.
    ///
    /// A failing request does not affect the others. Runs in parallel with
    /// the `parallel` feature.
    pub fn assess_batch(&self, requests: &[AssessmentRequest]) -> Vec<RiskResult<Assessment>> {
        #[cfg(feature = "parallel")]
        let iter = requests.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = requests.iter();

        iter.map(|request| self.assess(request)).collect()
    }

    /// Assesses many requests, each ranked with its own options.
    ///
    /// Results line up with `requests`.
    pub fn assess_batch_with(
        &self,
        requests: &[(AssessmentRequest, RankingOptions)],
    ) -> Vec<RiskResult<Assessment>> {
        #[cfg(feature = "parallel")]
        let iter = requests.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = requests.iter();

        iter.map(|(request, ranking)| self.assess_with(request, ranking))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RiskError;
    use crate::validate::RawSymptom;
    use wellness_types::{ConditionRecord, RiskTier};

    fn request(symptoms: &[(&str, i64)], vitals: VitalSigns) -> AssessmentRequest {
        AssessmentRequest {
            symptoms: symptoms
                .iter()
                .map(|(name, severity)| RawSymptom::new(*name, *severity))
                .collect(),
            vitals,
        }
    }

    #[test]
    fn test_builtin_scenario() {
        let assessor = RiskAssessor::builtin();
        let assessment = assessor
            .assess(&request(
                &[("Fever", 4), ("Cough", 2)],
                VitalSigns {
                    temperature: Some(39.0),
                    oxygen_saturation: Some(93.0),
                    ..Default::default()
                },
            ))
            .unwrap();

        assert_eq!(assessment.average_severity, 3.0);
        assert_eq!(assessment.predictions.len(), 2);
        // 60 + 10 + 10 + 24 -> 100; 60 + 10 + 10 + 18 -> 98
        assert_eq!(assessment.predictions[0].name(), "Common Cold");
        assert_eq!(assessment.predictions[0].risk_score, 100);
        assert_eq!(assessment.predictions[1].name(), "Seasonal Allergies");
        assert_eq!(assessment.predictions[1].risk_score, 98);
        assert_eq!(assessment.highest_band(), Some(RiskBand::High));
    }

    #[test]
    fn test_empty_request_rejected() {
        let assessor = RiskAssessor::builtin();
        let err = assessor
            .assess(&request(&[], VitalSigns::default()))
            .unwrap_err();
        assert!(matches!(err, RiskError::EmptySymptoms));
    }

    #[test]
    fn test_ranking_uses_scores_not_catalog_order() {
        let catalog = ConditionCatalog::new(vec![
            ConditionRecord::new("Unlikely", 0.1, RiskTier::Critical),
            ConditionRecord::new("Likely", 0.9, RiskTier::Low),
        ])
        .unwrap();
        let assessor = RiskAssessor::new(catalog, ScoringConfig::default(), RankingOptions::default());

        let assessment = assessor
            .assess(&request(&[("Fatigue", 1)], VitalSigns::default()))
            .unwrap();
        assert_eq!(assessment.top().unwrap().name(), "Likely");
    }

    #[test]
    fn test_assess_with_filter() {
        let assessor = RiskAssessor::builtin();
        // 20 + 24 = 44 and 20 + 18 = 38
        let assessment = assessor
            .assess_with(
                &request(&[("Chills", 1)], VitalSigns::default()),
                &RankingOptions {
                    min_score: Some(40),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(assessment.predictions.len(), 1);
        assert_eq!(assessment.predictions[0].risk_score, 44);
    }

    #[test]
    fn test_assessment_keeps_validated_input() {
        let assessor = RiskAssessor::builtin();
        let assessment = assessor
            .assess(&request(
                &[(" Headache ", 3), ("Headache", 5)],
                VitalSigns {
                    blood_pressure: Some(String::new()),
                    ..Default::default()
                },
            ))
            .unwrap();
        assert_eq!(assessment.symptoms, vec![SymptomReport::new("Headache", 3)]);
        assert!(assessment.vitals.is_empty());
    }

    #[test]
    fn test_assess_batch_isolates_failures() {
        let assessor = RiskAssessor::builtin();
        let results = assessor.assess_batch(&[
            request(&[("Fever", 5)], VitalSigns::default()),
            request(&[("Fever", 9)], VitalSigns::default()),
            request(&[], VitalSigns::default()),
        ]);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().predictions[0].risk_score, 100);
        assert!(matches!(results[1], Err(RiskError::InvalidSeverity { .. })));
        assert!(matches!(results[2], Err(RiskError::EmptySymptoms)));
    }

    #[test]
    fn test_assess_batch_with_per_request_ranking() {
        let assessor = RiskAssessor::new(
            ConditionCatalog::new(vec![
                ConditionRecord::new("Unlikely", 0.1, RiskTier::Critical),
                ConditionRecord::new("Likely", 0.9, RiskTier::Low),
            ])
            .unwrap(),
            ScoringConfig::default(),
            RankingOptions::top(1),
        );

        let results = assessor.assess_batch_with(&[
            (
                request(&[("Fever", 1)], VitalSigns::default()),
                RankingOptions::default(),
            ),
            (
                request(&[("Fever", 1)], VitalSigns::default()),
                RankingOptions::at_least(RiskBand::Moderate),
            ),
            (request(&[], VitalSigns::default()), RankingOptions::default()),
        ]);

        assert_eq!(results.len(), 3);
        // 20 + 27 = 47 and 20 + 3 = 23; the assessor default of top(1) is not applied.
        let all: Vec<u8> = results[0]
            .as_ref()
            .unwrap()
            .predictions
            .iter()
            .map(|p| p.risk_score)
            .collect();
        assert_eq!(all, vec![47, 23]);

        let moderate = &results[1].as_ref().unwrap().predictions;
        assert_eq!(moderate.len(), 1);
        assert_eq!(moderate[0].name(), "Likely");

        assert!(matches!(results[2], Err(RiskError::EmptySymptoms)));
    }

    #[test]
    fn test_catalog_unchanged_after_assessment() {
        let assessor = RiskAssessor::builtin();
        let before = assessor.conditions().records().to_vec();
        let mut assessment = assessor
            .assess(&request(&[("Fever", 2)], VitalSigns::default()))
            .unwrap();
        assessment.predictions[0].condition.urgency_level = "Changed".to_string();
        assert_eq!(assessor.conditions().records(), before.as_slice());
    }
}
