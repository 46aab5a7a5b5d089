//! gRPC server implementation.

use std::sync::Arc;
use std::time::Instant;

use tonic::{Request, Response, Status};
use wellness_risk::{
    highest_band, Assessment, AssessmentRequest, Catalogs, RankingOptions, RawSymptom, RiskAssessor,
    RiskError, ScoringConfig, SymptomCatalog,
};
use wellness_types::{ConditionRecord, Prediction, RiskBand, RiskTier};

use crate::proto::{
    self, risk_service_server::RiskService, AssessRiskBatchRequest, AssessRiskBatchResponse,
    AssessRiskRequest, AssessRiskResponse, AssessRiskResult, Condition, GetConditionRequest,
    GetConditionResponse, ListConditionsRequest, ListConditionsResponse, ListSymptomsRequest,
    ListSymptomsResponse, SymptomCategory,
};

/// Largest number of requests accepted in one batch call.
pub const MAX_BATCH_SIZE: usize = 1_000;

/// Symptom risk gRPC server.
#[derive(Clone)]
pub struct WellnessServer {
    assessor: Arc<RiskAssessor>,
    symptoms: Arc<SymptomCatalog>,
}

impl WellnessServer {
    /// Creates a new server over the given catalogs.
    pub fn new(catalogs: Catalogs, scoring: ScoringConfig) -> Self {
        Self {
            assessor: Arc::new(RiskAssessor::new(
                catalogs.conditions,
                scoring,
                RankingOptions::default(),
            )),
            symptoms: Arc::new(catalogs.symptoms),
        }
    }

    /// Creates a server over the builtin catalogs with default weights.
    pub fn builtin() -> Self {
        Self::new(Catalogs::builtin(), ScoringConfig::default())
    }

    /// Returns the assessor.
    pub fn assessor(&self) -> &RiskAssessor {
        &self.assessor
    }

    /// Converts a wire request into an engine request and ranking options.
    fn from_proto_request(req: AssessRiskRequest) -> (AssessmentRequest, RankingOptions) {
        let ranking = RankingOptions {
            min_score: req.min_score.map(|s| u8::try_from(s).unwrap_or(u8::MAX)),
            min_band: from_proto_band(req.min_band()),
            limit: (req.limit > 0).then_some(req.limit as usize),
        };

        let vitals = req
            .vitals
            .map(|v| wellness_types::VitalSigns {
                temperature: v.temperature,
                heart_rate: v.heart_rate,
                blood_pressure: v.blood_pressure,
                oxygen_saturation: v.oxygen_saturation,
            })
            .unwrap_or_default();

        let symptoms = req
            .symptoms
            .into_iter()
            .map(|s| RawSymptom::new(s.name, i64::from(s.severity)))
            .collect();

        (AssessmentRequest { symptoms, vitals }, ranking)
    }

    /// Convert internal condition to proto Condition
    fn to_proto_condition(record: &ConditionRecord) -> Condition {
        Condition {
            condition: record.condition.clone(),
            base_probability: record.base_probability,
            risk_tier: to_proto_tier(record.risk_tier) as i32,
            risk_factors: record.risk_factors.clone(),
            recommended_tests: record.recommended_tests.clone(),
            preventive_measures: record.preventive_measures.clone(),
            dietary_recommendations: record.dietary_recommendations.clone(),
            lifestyle_changes: record.lifestyle_changes.clone(),
            urgency_level: record.urgency_level.clone(),
            time_to_seek_care: record.time_to_seek_care.clone(),
        }
    }

    /// Convert internal prediction to proto Prediction
    fn to_proto_prediction(prediction: &Prediction) -> proto::Prediction {
        proto::Prediction {
            condition: Some(Self::to_proto_condition(&prediction.condition)),
            risk_score: u32::from(prediction.risk_score),
            band: to_proto_band(Some(prediction.band())) as i32,
        }
    }

    fn to_proto_response(assessment: &Assessment) -> AssessRiskResponse {
        AssessRiskResponse {
            predictions: assessment
                .predictions
                .iter()
                .map(Self::to_proto_prediction)
                .collect(),
            average_severity: assessment.average_severity,
            highest_band: to_proto_band(highest_band(&assessment.predictions)) as i32,
        }
    }
}

fn to_proto_tier(tier: RiskTier) -> proto::RiskTier {
    match tier {
        RiskTier::Low => proto::RiskTier::Low,
        RiskTier::Moderate => proto::RiskTier::Moderate,
        RiskTier::High => proto::RiskTier::High,
        RiskTier::Critical => proto::RiskTier::Critical,
    }
}

fn to_proto_band(band: Option<RiskBand>) -> proto::RiskBand {
    match band {
        None => proto::RiskBand::Unspecified,
        Some(RiskBand::Low) => proto::RiskBand::Low,
        Some(RiskBand::Moderate) => proto::RiskBand::Moderate,
        Some(RiskBand::Elevated) => proto::RiskBand::Elevated,
        Some(RiskBand::High) => proto::RiskBand::High,
    }
}

fn from_proto_band(band: proto::RiskBand) -> Option<RiskBand> {
    match band {
        proto::RiskBand::Unspecified => None,
        proto::RiskBand::Low => Some(RiskBand::Low),
        proto::RiskBand::Moderate => Some(RiskBand::Moderate),
        proto::RiskBand::Elevated => Some(RiskBand::Elevated),
        proto::RiskBand::High => Some(RiskBand::High),
    }
}

/// Maps engine errors onto gRPC status codes.
fn to_status(err: RiskError) -> Status {
    if err.is_invalid_input() {
        Status::invalid_argument(err.to_string())
    } else {
        Status::internal(err.to_string())
    }
}

#[tonic::async_trait]
impl RiskService for WellnessServer {
    async fn assess_risk(
        &self,
        request: Request<AssessRiskRequest>,
    ) -> Result<Response<AssessRiskResponse>, Status> {
        let (req, ranking) = Self::from_proto_request(request.into_inner());
        let start = Instant::now();

        let assessment = self.assessor.assess_with(&req, &ranking).map_err(|e| {
            tracing::debug!("Rejected assessment: {}", e);
            to_status(e)
        })?;

        tracing::debug!(
            symptoms = assessment.symptoms.len(),
            vitals = assessment.vitals.reading_count(),
            predictions = assessment.predictions.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Assessment complete"
        );

        Ok(Response::new(Self::to_proto_response(&assessment)))
    }

    async fn assess_risk_batch(
        &self,
        request: Request<AssessRiskBatchRequest>,
    ) -> Result<Response<AssessRiskBatchResponse>, Status> {
        let requests = request.into_inner().requests;

        if requests.len() > MAX_BATCH_SIZE {
            return Err(Status::invalid_argument(format!(
                "Batch of {} requests exceeds the limit of {}",
                requests.len(),
                MAX_BATCH_SIZE
            )));
        }

        let requests: Vec<_> = requests
            .into_iter()
            .map(Self::from_proto_request)
            .collect();
        let start = Instant::now();

        let results: Vec<AssessRiskResult> = self
            .assessor
            .assess_batch_with(&requests)
            .into_iter()
            .map(|result| match result {
                Ok(assessment) => AssessRiskResult {
                    response: Some(Self::to_proto_response(&assessment)),
                    error: String::new(),
                },
                Err(e) => AssessRiskResult {
                    response: None,
                    error: e.to_string(),
                },
            })
            .collect();

        tracing::debug!(
            requests = results.len(),
            failed = results.iter().filter(|r| r.response.is_none()).count(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Batch assessment complete"
        );

        Ok(Response::new(AssessRiskBatchResponse { results }))
    }

    async fn list_symptoms(
        &self,
        _request: Request<ListSymptomsRequest>,
    ) -> Result<Response<ListSymptomsResponse>, Status> {
        let categories = self
            .symptoms
            .grouped()
            .into_iter()
            .map(|(name, entries)| SymptomCategory {
                name: name.to_string(),
                symptoms: entries.into_iter().map(|e| e.name.clone()).collect(),
            })
            .collect();

        Ok(Response::new(ListSymptomsResponse { categories }))
    }

    async fn list_conditions(
        &self,
        _request: Request<ListConditionsRequest>,
    ) -> Result<Response<ListConditionsResponse>, Status> {
        let conditions = self
            .assessor
            .conditions()
            .iter()
            .map(Self::to_proto_condition)
            .collect();

        Ok(Response::new(ListConditionsResponse { conditions }))
    }

    async fn get_condition(
        &self,
        request: Request<GetConditionRequest>,
    ) -> Result<Response<GetConditionResponse>, Status> {
        let name = request.into_inner().name;

        let record = self
            .assessor
            .conditions()
            .get(&name)
            .ok_or_else(|| Status::not_found(format!("Condition not found: {}", name)))?;

        Ok(Response::new(GetConditionResponse {
            condition: Some(Self::to_proto_condition(record)),
        }))
    }
}
