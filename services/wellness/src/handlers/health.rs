use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// Handler for `GET /readyz` — the service is ready once its database
/// connection answers a ping. Liveness stays with the shared `healthz`.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed: database unreachable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
