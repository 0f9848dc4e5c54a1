use axum::{
    Router,
    routing::{get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use vitala_core::health::healthz;
use vitala_core::middleware::request_id_layer;

use crate::handlers::{
    analytics::get_analytics,
    assessment::{get_my_assessment, list_assessments, submit_assessment, update_my_assessment},
    consent::create_consent,
    health::readyz,
    progress::{create_progress_entry, get_progress_entries},
    session::{list_sessions, start_session, update_session},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Discovery assessments
        .route("/discovery", post(submit_assessment))
        .route("/discovery/@me", get(get_my_assessment))
        .route("/discovery/@me", patch(update_my_assessment))
        .route("/discovery/list", get(list_assessments))
        .route("/discovery/analytics", get(get_analytics))
        // Discovery sessions
        .route("/discovery/sessions", get(list_sessions))
        .route("/discovery/sessions/start", post(start_session))
        .route("/discovery/sessions/{uuid}", put(update_session))
        // Progress check-ins
        .route("/progress", get(get_progress_entries))
        .route("/progress", post(create_progress_entry))
        // Consent
        .route("/consent", post(create_consent))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
