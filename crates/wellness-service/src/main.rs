//! Symptom risk gRPC server binary.

use std::net::SocketAddr;

use tonic::transport::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellness_risk::{CatalogConfig, Catalogs, ScoringConfig};
use wellness_service::proto::risk_service_server::RiskServiceServer;
use wellness_service::{ServiceConfig, WellnessServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();

    let catalogs = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading catalogs from: {}", path.display());
            Catalogs::load(path, CatalogConfig::default())?
        }
        None => {
            tracing::info!("Using builtin catalogs");
            Catalogs::builtin()
        }
    };

    tracing::info!(
        "Loaded {} conditions and {} symptoms",
        catalogs.conditions.len(),
        catalogs.symptoms.len()
    );

    if catalogs.conditions.is_empty() {
        tracing::warn!("Condition catalog is empty; assessments will return no predictions");
    }

    let server = WellnessServer::new(catalogs, ScoringConfig::default());

    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Starting wellness gRPC server on {}", addr);

    Server::builder()
        .add_service(RiskServiceServer::new(server))
        .serve(addr)
        .await?;

    Ok(())
}
