//! HTTP API
//!
//! - `POST /scan/sms` classifies a text and returns the spam verdict
//! - `GET /health` reports service and model

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::scan::{ScanRequest, ScanResult, ScanService};

/// Application state
pub struct AppState {
    pub scan: ScanService,
}

/// Build the router with all routes
pub fn router(scan: ScanService) -> Router {
    let state = Arc::new(AppState { scan });

    // Open policy for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/scan/sms", post(scan_sms))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.scan.model_name(),
    }))
}

/// SMS scan endpoint
async fn scan_sms(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ScanRequest>, JsonRejection>,
) -> Result<Json<ScanResult>> {
    let Json(request) = payload?;
    let result = state.scan.scan(request.text).await?;
    Ok(Json(result))
}
