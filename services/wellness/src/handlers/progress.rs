use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Serialize;

use vitala_auth_types::identity::IdentityHeaders;
use vitala_domain::pagination::PageRequest;

use crate::domain::types::{ProgressEntry, WellnessScores};
use crate::error::WellnessServiceError;
use crate::state::AppState;
use crate::usecase::progress::{ListProgressUseCase, RecordProgressUseCase};

#[derive(Serialize)]
pub struct ProgressEntryResponse {
    pub id: i32,
    #[serde(flatten)]
    pub scores: WellnessScores,
    #[serde(serialize_with = "vitala_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ProgressEntry> for ProgressEntryResponse {
    fn from(e: ProgressEntry) -> Self {
        ProgressEntryResponse {
            id: e.id,
            scores: e.scores,
            created_at: e.created_at,
        }
    }
}

// ── POST /progress ───────────────────────────────────────────────────────────

pub async fn create_progress_entry(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(scores): Json<WellnessScores>,
) -> Result<(StatusCode, Json<ProgressEntryResponse>), WellnessServiceError> {
    let uc = RecordProgressUseCase {
        progress: state.progress_repo(),
    };
    let entry = uc.execute(identity.user_id, scores).await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

// ── GET /progress ────────────────────────────────────────────────────────────

pub async fn get_progress_entries(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ProgressEntryResponse>>, WellnessServiceError> {
    let uc = ListProgressUseCase {
        progress: state.progress_repo(),
    };
    let entries = uc.execute(identity.user_id, page).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
