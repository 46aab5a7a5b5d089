//! Generates the `RiskService` client and server stubs.
//!
//! Messages are hand-written prost types in `src/proto.rs`, so the service
//! is described with the manual builder and no protoc is needed.

use tonic_build::manual::{Builder, Method, Service};

const CODEC: &str = "tonic::codec::ProstCodec";

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{input}"))
        .output_type(format!("crate::proto::{output}"))
        .codec_path(CODEC)
        .build()
}

fn main() {
    let service = Service::builder()
        .name("RiskService")
        .package("wellness")
        .method(unary("assess_risk", "AssessRisk", "AssessRiskRequest", "AssessRiskResponse"))
        .method(unary(
            "assess_risk_batch",
            "AssessRiskBatch",
            "AssessRiskBatchRequest",
            "AssessRiskBatchResponse",
        ))
        .method(unary("list_symptoms", "ListSymptoms", "ListSymptomsRequest", "ListSymptomsResponse"))
        .method(unary(
            "list_conditions",
            "ListConditions",
            "ListConditionsRequest",
            "ListConditionsResponse",
        ))
        .method(unary("get_condition", "GetCondition", "GetConditionRequest", "GetConditionResponse"))
        .build();

    Builder::new().compile(&[service]);
}
