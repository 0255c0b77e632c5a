use axum::{extract::State, Json};
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
    pub smtp: String,
}

/// Health check endpoint - public
///
/// Static pages do not depend on the mail relay, so a failed probe reports
/// `degraded` rather than an error status.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let smtp_ok = state.mailer.health_check().await;

    let smtp_status = if smtp_ok { "ok" } else { "error" };
    let status = if smtp_ok { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            smtp: smtp_status.to_string(),
        },
    })
}
