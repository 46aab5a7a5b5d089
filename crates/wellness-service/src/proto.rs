//! Wire messages for the `wellness.RiskService` gRPC service.
//!
//! The client and server stubs are generated by `build.rs`.

/// A reported symptom.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Symptom {
    /// Catalog symptom name or free text.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Severity from 1 to 5.
    #[prost(int32, tag = "2")]
    pub severity: i32,
}

/// Optional vital sign readings.
#[derive(Clone, PartialEq, prost::Message)]
pub struct VitalSigns {
    /// Body temperature in degrees Celsius.
    #[prost(double, optional, tag = "1")]
    pub temperature: Option<f64>,
    /// Heart rate in beats per minute.
    #[prost(uint32, optional, tag = "2")]
    pub heart_rate: Option<u32>,
    /// Blood pressure as entered, e.g. "120/80".
    #[prost(string, optional, tag = "3")]
    pub blood_pressure: Option<String>,
    /// Oxygen saturation in percent.
    #[prost(double, optional, tag = "4")]
    pub oxygen_saturation: Option<f64>,
}

/// Static risk tier of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum RiskTier {
    /// Not set.
    Unspecified = 0,
    /// Low tier.
    Low = 1,
    /// Moderate tier.
    Moderate = 2,
    /// High tier.
    High = 3,
    /// Critical tier.
    Critical = 4,
}

/// Display band of a risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum RiskBand {
    /// Not set.
    Unspecified = 0,
    /// Score below 30.
    Low = 1,
    /// Score from 30 to 59.
    Moderate = 2,
    /// Score from 60 to 79.
    Elevated = 3,
    /// Score of 80 or above.
    High = 4,
}

/// A catalog condition.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Condition {
    /// Condition name.
    #[prost(string, tag = "1")]
    pub condition: String,
    /// Prior likelihood in [0, 1].
    #[prost(double, tag = "2")]
    pub base_probability: f64,
    /// Static risk tier.
    #[prost(enumeration = "RiskTier", tag = "3")]
    pub risk_tier: i32,
    /// Known risk factors.
    #[prost(string, repeated, tag = "4")]
    pub risk_factors: Vec<String>,
    /// Tests a clinician may order.
    #[prost(string, repeated, tag = "5")]
    pub recommended_tests: Vec<String>,
    /// Preventive measures.
    #[prost(string, repeated, tag = "6")]
    pub preventive_measures: Vec<String>,
    /// Dietary recommendations.
    #[prost(string, repeated, tag = "7")]
    pub dietary_recommendations: Vec<String>,
    /// Lifestyle changes.
    #[prost(string, repeated, tag = "8")]
    pub lifestyle_changes: Vec<String>,
    /// Priority descriptor.
    #[prost(string, tag = "9")]
    pub urgency_level: String,
    /// Care-seeking guidance.
    #[prost(string, tag = "10")]
    pub time_to_seek_care: String,
}

/// A condition with its computed risk score.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Prediction {
    /// The scored condition.
    #[prost(message, optional, tag = "1")]
    pub condition: Option<Condition>,
    /// Risk score in [0, 100].
    #[prost(uint32, tag = "2")]
    pub risk_score: u32,
    /// Display band of `risk_score`.
    #[prost(enumeration = "RiskBand", tag = "3")]
    pub band: i32,
}

/// Request for a single risk assessment.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AssessRiskRequest {
    /// Reported symptoms; must be non-empty.
    #[prost(message, repeated, tag = "1")]
    pub symptoms: Vec<Symptom>,
    /// Optional vital signs.
    #[prost(message, optional, tag = "2")]
    pub vitals: Option<VitalSigns>,
    /// Drop predictions scoring below this value.
    #[prost(uint32, optional, tag = "3")]
    pub min_score: Option<u32>,
    /// Drop predictions below this band.
    #[prost(enumeration = "RiskBand", tag = "4")]
    pub min_band: i32,
    /// Maximum number of predictions (0 = all).
    #[prost(uint32, tag = "5")]
    pub limit: u32,
}

/// Ranked predictions for one request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AssessRiskResponse {
    /// Predictions, highest score first.
    #[prost(message, repeated, tag = "1")]
    pub predictions: Vec<Prediction>,
    /// Mean severity of the accepted symptoms.
    #[prost(double, tag = "2")]
    pub average_severity: f64,
    /// Highest band among the predictions.
    #[prost(enumeration = "RiskBand", tag = "3")]
    pub highest_band: i32,
}

/// Request for many independent assessments.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AssessRiskBatchRequest {
    /// Individual requests.
    #[prost(message, repeated, tag = "1")]
    pub requests: Vec<AssessRiskRequest>,
}

/// Outcome of one request in a batch.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AssessRiskResult {
    /// Present when the request succeeded.
    #[prost(message, optional, tag = "1")]
    pub response: Option<AssessRiskResponse>,
    /// User-visible message when the request was rejected.
    #[prost(string, tag = "2")]
    pub error: String,
}

/// Results of a batch, aligned with the request order.
#[derive(Clone, PartialEq, prost::Message)]
pub struct AssessRiskBatchResponse {
    /// One result per request.
    #[prost(message, repeated, tag = "1")]
    pub results: Vec<AssessRiskResult>,
}

/// Request for the symptom catalog.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct ListSymptomsRequest {}

/// Symptoms of one category.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SymptomCategory {
    /// Category name.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Symptom names in catalog order.
    #[prost(string, repeated, tag = "2")]
    pub symptoms: Vec<String>,
}

/// The symptom catalog grouped by category.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ListSymptomsResponse {
    /// Categories in name order.
    #[prost(message, repeated, tag = "1")]
    pub categories: Vec<SymptomCategory>,
}

/// Request for the condition catalog.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct ListConditionsRequest {}

/// The condition catalog.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ListConditionsResponse {
    /// Conditions in catalog order.
    #[prost(message, repeated, tag = "1")]
    pub conditions: Vec<Condition>,
}

/// Request for one condition by name.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetConditionRequest {
    /// Exact condition name.
    #[prost(string, tag = "1")]
    pub name: String,
}

/// A single condition.
#[derive(Clone, PartialEq, prost::Message)]
pub struct GetConditionResponse {
    /// The condition.
    #[prost(message, optional, tag = "1")]
    pub condition: Option<Condition>,
}

include!(concat!(env!("OUT_DIR"), "/wellness.RiskService.rs"));
