use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

use crate::AppState;

/// Liveness check.
///
/// GET /health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "advice-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness check: the AI backend must be reachable with our credentials.
///
/// GET /ready
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.advice_client.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}
