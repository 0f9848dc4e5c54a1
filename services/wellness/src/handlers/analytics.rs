use axum::{Json, extract::State};

use vitala_auth_types::identity::IdentityHeaders;

use crate::error::WellnessServiceError;
use crate::state::AppState;
use crate::usecase::analytics::{AnalyticsReport, GetAnalyticsUseCase};

// ── GET /discovery/analytics ─────────────────────────────────────────────────

pub async fn get_analytics(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsReport>, WellnessServiceError> {
    let uc = GetAnalyticsUseCase {
        assessments: state.assessment_repo(),
        sessions: state.session_repo(),
    };
    let report = uc.execute(identity.is_staff()).await?;
    Ok(Json(report))
}
