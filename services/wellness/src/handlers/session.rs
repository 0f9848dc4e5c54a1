use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vitala_auth_types::identity::IdentityHeaders;

use crate::domain::repository::SessionProgress;
use crate::domain::types::Session;
use crate::error::WellnessServiceError;
use crate::state::AppState;
use crate::usecase::session::{
    ListSessionsUseCase, StartSessionInput, StartSessionOutcome, StartSessionUseCase,
    UpdateSessionProgressUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SessionResponse {
    pub uuid: Uuid,
    #[serde(serialize_with = "vitala_core::serde::to_rfc3339_ms")]
    pub session_start: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitala_core::serde::to_rfc3339_ms_opt")]
    pub session_end: Option<chrono::DateTime<chrono::Utc>>,
    pub last_active_section: i16,
    pub is_completed: bool,
    pub section_1_time: Option<i32>,
    pub section_2_time: Option<i32>,
    pub section_3_time: Option<i32>,
    pub total_duration_minutes: Option<f64>,
}

impl From<Session> for SessionResponse {
    fn from(s: Session) -> Self {
        SessionResponse {
            uuid: s.uuid,
            session_start: s.session_start,
            session_end: s.session_end,
            last_active_section: s.last_active_section,
            is_completed: s.is_completed,
            section_1_time: s.section_1_time,
            section_2_time: s.section_2_time,
            section_3_time: s.section_3_time,
            total_duration_minutes: s.total_duration_minutes(),
        }
    }
}

// ── POST /discovery/sessions/start ───────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct StartSessionRequest {
    pub screen_resolution: Option<String>,
}

pub async fn start_session(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<StartSessionRequest>>,
) -> Result<(StatusCode, Json<SessionResponse>), WellnessServiceError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let uc = StartSessionUseCase {
        sessions: state.session_repo(),
    };
    let input = StartSessionInput {
        user_agent: header_string(&headers, header::USER_AGENT.as_str()),
        ip_address: client_ip(&headers),
        screen_resolution: body.screen_resolution,
    };
    let outcome = uc.execute(identity.user_id, input).await?;
    let (status, session) = match outcome {
        StartSessionOutcome::Existing(s) => (StatusCode::OK, s),
        StartSessionOutcome::Created(s) => (StatusCode::CREATED, s),
    };
    Ok((status, Json(session.into())))
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// First entry of `x-forwarded-for`, as populated by the edge proxy.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_string(headers, "x-forwarded-for")
        .and_then(|v| v.split(',').next().map(|ip| ip.trim().to_owned()))
}

// ── PUT /discovery/sessions/{uuid} ───────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateSessionRequest {
    pub last_active_section: Option<i16>,
    pub section_1_time: Option<i32>,
    pub section_2_time: Option<i32>,
    pub section_3_time: Option<i32>,
}

pub async fn update_session(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Json(body): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, WellnessServiceError> {
    let uc = UpdateSessionProgressUseCase {
        sessions: state.session_repo(),
    };
    let progress = SessionProgress {
        last_active_section: body.last_active_section,
        section_1_time: body.section_1_time,
        section_2_time: body.section_2_time,
        section_3_time: body.section_3_time,
    };
    let session = uc.execute(uuid, identity.user_id, progress).await?;
    Ok(Json(session.into()))
}

// ── GET /discovery/sessions ──────────────────────────────────────────────────

pub async fn list_sessions(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionResponse>>, WellnessServiceError> {
    let uc = ListSessionsUseCase {
        sessions: state.session_repo(),
    };
    let sessions = uc.execute(identity.user_id).await?;
    Ok(Json(sessions.into_iter().map(Into::into).collect()))
}
