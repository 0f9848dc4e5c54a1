use anyhow::{Context as _, anyhow};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
};
use uuid::Uuid;

use vitala_domain::pagination::PageRequest;
use vitala_wellness_schema::{assessments, consents, progress_entries, sessions};

use crate::domain::repository::{
    AssessmentRepository, ConsentRepository, ProgressRepository, SessionProgress,
    SessionRepository,
};
use crate::domain::types::{
    Assessment, CompletionTelemetry, Consent, Gender, MaritalStatus, ProgressEntry, Session,
    WellnessScores,
};
use crate::error::WellnessServiceError;

// ── Assessment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAssessmentRepository {
    pub db: DatabaseConnection,
}

impl AssessmentRepository for DbAssessmentRepository {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Assessment>, WellnessServiceError> {
        let model = assessments::Entity::find()
            .filter(assessments::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find assessment by user")?;
        model.map(assessment_from_model).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Assessment>, WellnessServiceError> {
        let models = assessments::Entity::find()
            .order_by_desc(assessments::Column::SubmittedAt)
            .all(&self.db)
            .await
            .context("list assessments")?;
        models.into_iter().map(assessment_from_model).collect()
    }

    async fn create(&self, assessment: &Assessment) -> Result<Assessment, WellnessServiceError> {
        let b = &assessment.baseline;
        let t = &assessment.telemetry;
        let model = assessments::ActiveModel {
            uuid: Set(assessment.uuid),
            user_id: Set(assessment.user_id),
            preferred_name: Set(assessment.preferred_name.clone()),
            age: Set(assessment.age),
            gender: Set(assessment.gender.as_str().to_owned()),
            height_feet: Set(assessment.height_feet),
            height_inches: Set(assessment.height_inches),
            weight: Set(assessment.weight),
            location: Set(assessment.location.clone()),
            marital_status: Set(assessment.marital_status.map(|m| m.as_str().to_owned())),
            goal_1: Set(assessment.goal_1.clone()),
            goal_2: Set(assessment.goal_2.clone()),
            goal_3: Set(assessment.goal_3.clone()),
            baseline_fulfillment: Set(b.fulfillment),
            baseline_happiness: Set(b.happiness),
            baseline_energy: Set(b.energy),
            baseline_stress: Set(b.stress),
            baseline_sleep: Set(b.sleep),
            baseline_activity: Set(b.activity),
            baseline_nutrition: Set(b.nutrition),
            baseline_purpose: Set(b.purpose),
            baseline_motivation: Set(b.motivation),
            baseline_confidence: Set(b.confidence),
            duration_minutes: Set(t.duration_minutes),
            sections_completed: Set(t.sections_completed),
            goals_selected: Set(t.goals_selected),
            form_interactions: Set(t.form_interactions),
            page_revisits: Set(t.page_revisits),
            saved_progress: Set(t.saved_progress),
            completion_device_type: Set(t.device_type.clone()),
            completion_browser: Set(t.browser.clone()),
            avg_wellness_score: Set(assessment.avg_wellness_score),
            completion_quality_score: Set(assessment.completion_quality_score),
            submitted_at: Set(assessment.submitted_at),
            updated_at: Set(assessment.updated_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // Unique index on user_id: a concurrent submit lost the race.
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                WellnessServiceError::AssessmentAlreadyExists
            }
            _ => anyhow::Error::from(e).context("create assessment").into(),
        })?;
        assessment_from_model(model)
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), WellnessServiceError> {
        let b = &assessment.baseline;
        let t = &assessment.telemetry;
        assessments::ActiveModel {
            id: Set(assessment.id),
            preferred_name: Set(assessment.preferred_name.clone()),
            age: Set(assessment.age),
            gender: Set(assessment.gender.as_str().to_owned()),
            height_feet: Set(assessment.height_feet),
            height_inches: Set(assessment.height_inches),
            weight: Set(assessment.weight),
            location: Set(assessment.location.clone()),
            marital_status: Set(assessment.marital_status.map(|m| m.as_str().to_owned())),
            goal_1: Set(assessment.goal_1.clone()),
            goal_2: Set(assessment.goal_2.clone()),
            goal_3: Set(assessment.goal_3.clone()),
            baseline_fulfillment: Set(b.fulfillment),
            baseline_happiness: Set(b.happiness),
            baseline_energy: Set(b.energy),
            baseline_stress: Set(b.stress),
            baseline_sleep: Set(b.sleep),
            baseline_activity: Set(b.activity),
            baseline_nutrition: Set(b.nutrition),
            baseline_purpose: Set(b.purpose),
            baseline_motivation: Set(b.motivation),
            baseline_confidence: Set(b.confidence),
            duration_minutes: Set(t.duration_minutes),
            sections_completed: Set(t.sections_completed),
            goals_selected: Set(t.goals_selected),
            form_interactions: Set(t.form_interactions),
            page_revisits: Set(t.page_revisits),
            saved_progress: Set(t.saved_progress),
            completion_quality_score: Set(assessment.completion_quality_score),
            updated_at: Set(assessment.updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update assessment")?;
        Ok(())
    }
}

fn assessment_from_model(model: assessments::Model) -> Result<Assessment, WellnessServiceError> {
    let gender = Gender::from_str(&model.gender)
        .ok_or_else(|| anyhow!("unknown gender value: {}", model.gender))?;
    let marital_status = model
        .marital_status
        .as_deref()
        .map(|s| MaritalStatus::from_str(s).ok_or_else(|| anyhow!("unknown marital status: {s}")))
        .transpose()?;

    Ok(Assessment {
        id: model.id,
        uuid: model.uuid,
        user_id: model.user_id,
        preferred_name: model.preferred_name,
        age: model.age,
        gender,
        height_feet: model.height_feet,
        height_inches: model.height_inches,
        weight: model.weight,
        location: model.location,
        marital_status,
        goal_1: model.goal_1,
        goal_2: model.goal_2,
        goal_3: model.goal_3,
        baseline: WellnessScores {
            fulfillment: model.baseline_fulfillment,
            happiness: model.baseline_happiness,
            energy: model.baseline_energy,
            stress: model.baseline_stress,
            sleep: model.baseline_sleep,
            activity: model.baseline_activity,
            nutrition: model.baseline_nutrition,
            purpose: model.baseline_purpose,
            motivation: model.baseline_motivation,
            confidence: model.baseline_confidence,
        },
        telemetry: CompletionTelemetry {
            duration_minutes: model.duration_minutes,
            sections_completed: model.sections_completed,
            goals_selected: model.goals_selected,
            form_interactions: model.form_interactions,
            page_revisits: model.page_revisits,
            saved_progress: model.saved_progress,
            device_type: model.completion_device_type,
            browser: model.completion_browser,
        },
        avg_wellness_score: model.avg_wellness_score,
        completion_quality_score: model.completion_quality_score,
        submitted_at: model.submitted_at,
        updated_at: model.updated_at,
    })
}

// ── Session repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSessionRepository {
    pub db: DatabaseConnection,
}

impl SessionRepository for DbSessionRepository {
    async fn find_active_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Session>, WellnessServiceError> {
        let model = sessions::Entity::find()
            .filter(sessions::Column::UserId.eq(user_id))
            .filter(sessions::Column::IsCompleted.eq(false))
            .order_by_desc(sessions::Column::SessionStart)
            .one(&self.db)
            .await
            .context("find active session")?;
        Ok(model.map(session_from_model))
    }

    async fn find_open(
        &self,
        uuid: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Session>, WellnessServiceError> {
        let model = sessions::Entity::find()
            .filter(sessions::Column::Uuid.eq(uuid))
            .filter(sessions::Column::UserId.eq(user_id))
            .filter(sessions::Column::IsCompleted.eq(false))
            .one(&self.db)
            .await
            .context("find open session")?;
        Ok(model.map(session_from_model))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Session>, WellnessServiceError> {
        let models = sessions::Entity::find()
            .filter(sessions::Column::UserId.eq(user_id))
            .order_by_desc(sessions::Column::SessionStart)
            .all(&self.db)
            .await
            .context("list sessions by user")?;
        Ok(models.into_iter().map(session_from_model).collect())
    }

    async fn create(&self, session: &Session) -> Result<Session, WellnessServiceError> {
        let model = sessions::ActiveModel {
            uuid: Set(session.uuid),
            user_id: Set(session.user_id),
            assessment_id: Set(session.assessment_id),
            session_start: Set(session.session_start),
            session_end: Set(session.session_end),
            last_active_section: Set(session.last_active_section),
            is_completed: Set(session.is_completed),
            section_1_time: Set(session.section_1_time),
            section_2_time: Set(session.section_2_time),
            section_3_time: Set(session.section_3_time),
            user_agent: Set(session.user_agent.clone()),
            ip_address: Set(session.ip_address.clone()),
            screen_resolution: Set(session.screen_resolution.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create session")?;
        Ok(session_from_model(model))
    }

    async fn save_progress(
        &self,
        id: i32,
        progress: &SessionProgress,
    ) -> Result<(), WellnessServiceError> {
        let mut am = sessions::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(section) = progress.last_active_section {
            am.last_active_section = Set(section);
        }
        if let Some(t) = progress.section_1_time {
            am.section_1_time = Set(Some(t));
        }
        if let Some(t) = progress.section_2_time {
            am.section_2_time = Set(Some(t));
        }
        if let Some(t) = progress.section_3_time {
            am.section_3_time = Set(Some(t));
        }
        am.update(&self.db).await.context("save session progress")?;
        Ok(())
    }

    async fn complete(
        &self,
        id: i32,
        assessment_id: i32,
        ended_at: DateTime<Utc>,
    ) -> Result<(), WellnessServiceError> {
        sessions::ActiveModel {
            id: Set(id),
            assessment_id: Set(Some(assessment_id)),
            session_end: Set(Some(ended_at)),
            is_completed: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("complete session")?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, WellnessServiceError> {
        let n = sessions::Entity::find()
            .count(&self.db)
            .await
            .context("count sessions")?;
        Ok(n)
    }

    async fn count_completed(&self) -> Result<u64, WellnessServiceError> {
        let n = sessions::Entity::find()
            .filter(sessions::Column::IsCompleted.eq(true))
            .count(&self.db)
            .await
            .context("count completed sessions")?;
        Ok(n)
    }
}

fn session_from_model(model: sessions::Model) -> Session {
    Session {
        id: model.id,
        uuid: model.uuid,
        user_id: model.user_id,
        assessment_id: model.assessment_id,
        session_start: model.session_start,
        session_end: model.session_end,
        last_active_section: model.last_active_section,
        is_completed: model.is_completed,
        section_1_time: model.section_1_time,
        section_2_time: model.section_2_time,
        section_3_time: model.section_3_time,
        user_agent: model.user_agent,
        ip_address: model.ip_address,
        screen_resolution: model.screen_resolution,
    }
}

// ── Progress repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProgressRepository {
    pub db: DatabaseConnection,
}

impl ProgressRepository for DbProgressRepository {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<ProgressEntry>, WellnessServiceError> {
        let models = progress_entries::Entity::find()
            .filter(progress_entries::Column::UserId.eq(user_id))
            .order_by_desc(progress_entries::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list progress entries")?;
        Ok(models.into_iter().map(progress_from_model).collect())
    }

    async fn create(&self, entry: &ProgressEntry) -> Result<ProgressEntry, WellnessServiceError> {
        let s = &entry.scores;
        let model = progress_entries::ActiveModel {
            user_id: Set(entry.user_id),
            fulfillment: Set(s.fulfillment),
            happiness: Set(s.happiness),
            energy: Set(s.energy),
            stress: Set(s.stress),
            sleep: Set(s.sleep),
            activity: Set(s.activity),
            nutrition: Set(s.nutrition),
            purpose: Set(s.purpose),
            motivation: Set(s.motivation),
            confidence: Set(s.confidence),
            created_at: Set(entry.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create progress entry")?;
        Ok(progress_from_model(model))
    }
}

fn progress_from_model(model: progress_entries::Model) -> ProgressEntry {
    ProgressEntry {
        id: model.id,
        user_id: model.user_id,
        scores: WellnessScores {
            fulfillment: model.fulfillment,
            happiness: model.happiness,
            energy: model.energy,
            stress: model.stress,
            sleep: model.sleep,
            activity: model.activity,
            nutrition: model.nutrition,
            purpose: model.purpose,
            motivation: model.motivation,
            confidence: model.confidence,
        },
        created_at: model.created_at,
    }
}

// ── Consent repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbConsentRepository {
    pub db: DatabaseConnection,
}

impl ConsentRepository for DbConsentRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Consent>, WellnessServiceError> {
        let model = consents::Entity::find()
            .filter(consents::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find consent by user")?;
        Ok(model.map(|m| Consent {
            id: m.id,
            user_id: m.user_id,
            accepted: m.accepted,
            created_at: m.created_at,
        }))
    }

    async fn create(&self, consent: &Consent) -> Result<(), WellnessServiceError> {
        consents::ActiveModel {
            user_id: Set(consent.user_id),
            accepted: Set(consent.accepted),
            created_at: Set(consent.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                WellnessServiceError::ConsentAlreadyExists
            }
            _ => anyhow::Error::from(e).context("create consent").into(),
        })?;
        Ok(())
    }
}
