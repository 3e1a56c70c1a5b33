//! scan-service - SMS spam scanning endpoint

use scan_service::{api, classifier, ScanConfig, ScanError, ScanService};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scan_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting scan-service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SCAN_CONFIG").ok());

    let mut config = if let Some(config_path) = config_path {
        info!("Loading configuration from {}", config_path);
        ScanConfig::from_file(Path::new(&config_path))?
    } else {
        info!("No config file specified, using defaults");
        ScanConfig::default()
    };
    config.apply_env()?;
    config.validate()?;

    // Classifier is built once and shared by every request
    let classifier = classifier::from_config(&config.classifier)?;
    info!("Classifier initialized: {}", classifier.model_name());

    if config.classifier.warm_up {
        match classifier.warm_up().await {
            Ok(()) => info!("Classifier warm-up succeeded"),
            Err(e) => warn!("Classifier warm-up failed: {}", e),
        }
    }

    let app = api::router(ScanService::new(classifier));

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .map_err(ScanError::Io)?;
    info!("Server listening on http://{}", config.server.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
