//! Storage health check.
//!
//! `/health` reports `Healthy` only when the advert table describes itself as
//! active. Any failure to reach the table counts as unhealthy.

use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// GET /health - Advert table health check.
///
/// Returns 200 `Healthy` or 503 `Unhealthy`.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Advert table is active", body = String),
        (status = 503, description = "Advert table is unavailable", body = String),
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match state.storage.check_health().await {
        Ok(true) => (StatusCode::OK, "Healthy"),
        Ok(false) => {
            tracing::warn!("Advert table is not active");
            (StatusCode::SERVICE_UNAVAILABLE, "Unhealthy")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Advert table health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "Unhealthy")
        }
    }
}
