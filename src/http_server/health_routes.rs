//! Health HTTP Routes
//!
//! Liveness endpoints served at `/`, `/health` and `/api/v1`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Name reported by the health endpoints
pub const SERVICE_NAME: &str = "Bookstore API";

/// Static data echoed by every health response
pub struct HealthState {
    pub service: String,
    pub api_url: String,
}

impl HealthState {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            api_url: api_url.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    #[serde(rename = "apiURL")]
    pub api_url: String,
}

/// Create health routes
pub fn health_routes(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/health", get(health_handler))
        .route("/api/v1", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: state.service.clone(),
        api_url: state.api_url.clone(),
    };

    (StatusCode::OK, Json(response))
}
