use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{SessionProgress, SessionRepository};
use crate::domain::types::{Session, valid_section};
use crate::error::WellnessServiceError;

// ── StartSession ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct StartSessionInput {
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub screen_resolution: Option<String>,
}

/// Starting a session is idempotent: an open session is resumed rather
/// than replaced, so browser refreshes do not fork tracking state.
pub enum StartSessionOutcome {
    Existing(Session),
    Created(Session),
}

impl StartSessionOutcome {
    pub fn session(&self) -> &Session {
        match self {
            Self::Existing(s) | Self::Created(s) => s,
        }
    }
}

pub struct StartSessionUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> StartSessionUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: StartSessionInput,
    ) -> Result<StartSessionOutcome, WellnessServiceError> {
        if let Some(open) = self.sessions.find_active_by_user(user_id).await? {
            return Ok(StartSessionOutcome::Existing(open));
        }

        let session = Session {
            id: 0,
            uuid: Uuid::new_v4(),
            user_id,
            assessment_id: None,
            session_start: Utc::now(),
            session_end: None,
            last_active_section: 1,
            is_completed: false,
            section_1_time: None,
            section_2_time: None,
            section_3_time: None,
            user_agent: input.user_agent,
            ip_address: input.ip_address,
            screen_resolution: input.screen_resolution,
        };
        let stored = self.sessions.create(&session).await?;
        tracing::info!(session = %stored.uuid, "discovery session started");
        Ok(StartSessionOutcome::Created(stored))
    }
}

// ── UpdateSessionProgress ────────────────────────────────────────────────────

pub struct UpdateSessionProgressUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> UpdateSessionProgressUseCase<S> {
    pub async fn execute(
        &self,
        uuid: Uuid,
        user_id: Uuid,
        progress: SessionProgress,
    ) -> Result<Session, WellnessServiceError> {
        if progress.last_active_section.is_none()
            && progress.section_1_time.is_none()
            && progress.section_2_time.is_none()
            && progress.section_3_time.is_none()
        {
            return Err(WellnessServiceError::MissingData);
        }
        if progress
            .last_active_section
            .is_some_and(|s| !valid_section(s))
        {
            return Err(WellnessServiceError::Validation("last_active_section"));
        }
        if progress.section_1_time.is_some_and(|t| t < 0) {
            return Err(WellnessServiceError::Validation("section_1_time"));
        }
        if progress.section_2_time.is_some_and(|t| t < 0) {
            return Err(WellnessServiceError::Validation("section_2_time"));
        }
        if progress.section_3_time.is_some_and(|t| t < 0) {
            return Err(WellnessServiceError::Validation("section_3_time"));
        }

        // Completed sessions are frozen; only an open session owned by the
        // caller is updatable.
        let mut session = self
            .sessions
            .find_open(uuid, user_id)
            .await?
            .ok_or(WellnessServiceError::SessionNotFound)?;

        self.sessions.save_progress(session.id, &progress).await?;

        if let Some(section) = progress.last_active_section {
            session.last_active_section = section;
        }
        if let Some(t) = progress.section_1_time {
            session.section_1_time = Some(t);
        }
        if let Some(t) = progress.section_2_time {
            session.section_2_time = Some(t);
        }
        if let Some(t) = progress.section_3_time {
            session.section_3_time = Some(t);
        }
        Ok(session)
    }
}

// ── ListSessions ─────────────────────────────────────────────────────────────

pub struct ListSessionsUseCase<S: SessionRepository> {
    pub sessions: S,
}

impl<S: SessionRepository> ListSessionsUseCase<S> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Session>, WellnessServiceError> {
        self.sessions.list_by_user(user_id).await
    }
}
