use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub backend: String,
}

/// Health check endpoint - public
///
/// An unreachable backend only degrades the service: public pages still render
/// from fallbacks, so the status code stays 200.
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let backend = state.backend.health_check().await;

    if let Err(e) = &backend {
        tracing::warn!(error = %e, "Backend health check failed");
    }

    let (status, backend_status) = match backend {
        Ok(()) => ("healthy", "ok"),
        Err(_) => ("degraded", "error"),
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceHealth {
                backend: backend_status.to_string(),
            },
        }),
    )
}
