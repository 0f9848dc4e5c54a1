use axum::http::StatusCode;

/// Handler for `GET /healthz` — process liveness only.
///
/// Readiness is service-specific (it has to probe the backing connections),
/// so each service mounts its own `/readyz` handler.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
