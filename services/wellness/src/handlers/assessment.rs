use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vitala_auth_types::identity::IdentityHeaders;

use crate::domain::metrics::{self, WellnessSummary};
use crate::domain::types::{Assessment, Gender, MaritalStatus, WellnessScores, WellnessScoresPatch};
use crate::error::WellnessServiceError;
use crate::state::AppState;
use crate::usecase::assessment::{
    CompletionMetricsInput, GetAssessmentUseCase, ListAssessmentsUseCase, SubmitAssessmentInput,
    SubmitAssessmentUseCase, UpdateAssessmentInput, UpdateAssessmentUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AssessmentResponse {
    pub uuid: uuid::Uuid,
    pub preferred_name: String,
    pub age: i16,
    pub gender: Gender,
    pub height_feet: i16,
    pub height_inches: i16,
    pub height_total_inches: i32,
    pub height_cm: f64,
    pub weight: i32,
    pub weight_kg: f64,
    pub bmi: f64,
    pub bmi_category: &'static str,
    pub location: String,
    pub marital_status: Option<MaritalStatus>,
    pub goals: Vec<String>,
    pub baseline: WellnessScores,
    pub wellness_summary: WellnessSummary,
    pub avg_wellness_score: Option<i16>,
    pub completion_quality_score: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub sections_completed: i16,
    pub goals_selected: i16,
    #[serde(serialize_with = "vitala_core::serde::to_rfc3339_ms")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitala_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Assessment> for AssessmentResponse {
    fn from(a: Assessment) -> Self {
        let bmi = metrics::bmi(a.height_feet, a.height_inches, a.weight);
        AssessmentResponse {
            uuid: a.uuid,
            preferred_name: a.preferred_name,
            age: a.age,
            gender: a.gender,
            height_feet: a.height_feet,
            height_inches: a.height_inches,
            height_total_inches: metrics::height_total_inches(a.height_feet, a.height_inches),
            height_cm: metrics::height_cm(a.height_feet, a.height_inches),
            weight: a.weight,
            weight_kg: metrics::weight_kg(a.weight),
            bmi,
            bmi_category: metrics::bmi_category(bmi),
            location: a.location,
            marital_status: a.marital_status,
            goals: [Some(a.goal_1), a.goal_2, a.goal_3]
                .into_iter()
                .flatten()
                .collect(),
            wellness_summary: metrics::wellness_summary(&a.baseline),
            baseline: a.baseline,
            avg_wellness_score: a.avg_wellness_score,
            completion_quality_score: a.completion_quality_score,
            duration_minutes: a.telemetry.duration_minutes,
            sections_completed: a.telemetry.sections_completed,
            goals_selected: a.telemetry.goals_selected,
            submitted_at: a.submitted_at,
            updated_at: a.updated_at,
        }
    }
}

// ── POST /discovery ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SubmitAssessmentRequest {
    pub preferred_name: String,
    pub age: i16,
    pub gender: Gender,
    pub height_feet: i16,
    pub height_inches: i16,
    pub weight: i32,
    pub location: String,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    pub goal_1: String,
    #[serde(default)]
    pub goal_2: Option<String>,
    #[serde(default)]
    pub goal_3: Option<String>,
    #[serde(default)]
    pub baseline: WellnessScores,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default = "default_sections_completed")]
    pub sections_completed: i16,
    #[serde(default)]
    pub form_interactions: i32,
    #[serde(default)]
    pub page_revisits: i32,
    #[serde(default)]
    pub saved_progress: bool,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
}

// A submission without telemetry is assumed to have walked all sections.
fn default_sections_completed() -> i16 {
    3
}

pub async fn submit_assessment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<SubmitAssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentResponse>), WellnessServiceError> {
    let uc = SubmitAssessmentUseCase {
        assessments: state.assessment_repo(),
        sessions: state.session_repo(),
    };
    let input = SubmitAssessmentInput {
        preferred_name: body.preferred_name,
        age: body.age,
        gender: body.gender,
        height_feet: body.height_feet,
        height_inches: body.height_inches,
        weight: body.weight,
        location: body.location,
        marital_status: body.marital_status,
        goal_1: body.goal_1,
        goal_2: body.goal_2,
        goal_3: body.goal_3,
        baseline: body.baseline,
        metrics: CompletionMetricsInput {
            duration_minutes: body.duration_minutes,
            sections_completed: body.sections_completed,
            form_interactions: body.form_interactions,
            page_revisits: body.page_revisits,
            saved_progress: body.saved_progress,
            device_type: body.device_type,
            browser: body.browser,
        },
    };
    let assessment = uc.execute(identity.user_id, input).await?;
    Ok((StatusCode::CREATED, Json(assessment.into())))
}

// ── GET /discovery/@me ───────────────────────────────────────────────────────

pub async fn get_my_assessment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<AssessmentResponse>, WellnessServiceError> {
    let uc = GetAssessmentUseCase {
        assessments: state.assessment_repo(),
    };
    let assessment = uc.execute(identity.user_id).await?;
    Ok(Json(assessment.into()))
}

// ── PATCH /discovery/@me ─────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct UpdateAssessmentRequest {
    pub preferred_name: Option<String>,
    pub age: Option<i16>,
    pub gender: Option<Gender>,
    pub height_feet: Option<i16>,
    pub height_inches: Option<i16>,
    pub weight: Option<i32>,
    pub location: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub goal_1: Option<String>,
    pub goal_2: Option<String>,
    pub goal_3: Option<String>,
    #[serde(default)]
    pub baseline: WellnessScoresPatch,
    pub duration_minutes: Option<i32>,
    pub sections_completed: Option<i16>,
    pub form_interactions: Option<i32>,
    pub page_revisits: Option<i32>,
    pub saved_progress: Option<bool>,
}

pub async fn update_my_assessment(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<UpdateAssessmentRequest>,
) -> Result<Json<AssessmentResponse>, WellnessServiceError> {
    let uc = UpdateAssessmentUseCase {
        assessments: state.assessment_repo(),
    };
    let input = UpdateAssessmentInput {
        preferred_name: body.preferred_name,
        age: body.age,
        gender: body.gender,
        height_feet: body.height_feet,
        height_inches: body.height_inches,
        weight: body.weight,
        location: body.location,
        marital_status: body.marital_status,
        goal_1: body.goal_1,
        goal_2: body.goal_2,
        goal_3: body.goal_3,
        baseline: body.baseline,
        duration_minutes: body.duration_minutes,
        sections_completed: body.sections_completed,
        form_interactions: body.form_interactions,
        page_revisits: body.page_revisits,
        saved_progress: body.saved_progress,
    };
    let assessment = uc.execute(identity.user_id, input).await?;
    Ok(Json(assessment.into()))
}

// ── GET /discovery/list ──────────────────────────────────────────────────────

/// Lightweight projection for listings; the full record stays behind
/// `GET /discovery/@me`.
#[derive(Serialize)]
pub struct AssessmentSummaryResponse {
    pub uuid: uuid::Uuid,
    pub preferred_name: String,
    pub age: i16,
    pub gender: Gender,
    pub goals: Vec<String>,
    pub wellness_summary: WellnessSummary,
    pub completion_quality_score: Option<f64>,
    #[serde(serialize_with = "vitala_core::serde::to_rfc3339_ms")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

impl From<Assessment> for AssessmentSummaryResponse {
    fn from(a: Assessment) -> Self {
        AssessmentSummaryResponse {
            uuid: a.uuid,
            preferred_name: a.preferred_name,
            age: a.age,
            gender: a.gender,
            goals: [Some(a.goal_1), a.goal_2, a.goal_3]
                .into_iter()
                .flatten()
                .collect(),
            wellness_summary: metrics::wellness_summary(&a.baseline),
            completion_quality_score: a.completion_quality_score,
            submitted_at: a.submitted_at,
        }
    }
}

pub async fn list_assessments(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentSummaryResponse>>, WellnessServiceError> {
    let uc = ListAssessmentsUseCase {
        assessments: state.assessment_repo(),
    };
    let assessments = uc.execute(identity.user_id, identity.is_staff()).await?;
    Ok(Json(assessments.into_iter().map(Into::into).collect()))
}
