use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use vitala_auth_types::identity::IdentityHeaders;

use crate::error::WellnessServiceError;
use crate::state::AppState;
use crate::usecase::consent::RecordConsentUseCase;

#[derive(Deserialize)]
pub struct CreateConsentRequest {
    pub accepted: bool,
}

// ── POST /consent ────────────────────────────────────────────────────────────

pub async fn create_consent(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateConsentRequest>,
) -> Result<StatusCode, WellnessServiceError> {
    let uc = RecordConsentUseCase {
        consents: state.consent_repo(),
    };
    uc.execute(identity.user_id, body.accepted).await?;
    Ok(StatusCode::CREATED)
}
