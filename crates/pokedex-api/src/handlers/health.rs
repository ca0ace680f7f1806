//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /health
///
/// 200 when the record store answers a ping, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, health, store) = match state.pokemon_service.store().ping().await {
        Ok(()) => (StatusCode::OK, "ok", "connected"),
        Err(e) => {
            warn!(error = %e, "Record store ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: health.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
        }),
    )
}
