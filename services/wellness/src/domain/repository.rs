#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use vitala_domain::pagination::PageRequest;

use crate::domain::types::{Assessment, Consent, ProgressEntry, Session};
use crate::error::WellnessServiceError;

/// Repository for discovery assessments. The store enforces the
/// one-assessment-per-user invariant via a unique index on `user_id`.
pub trait AssessmentRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Assessment>, WellnessServiceError>;

    /// Full collection, newest first. Used by analytics and staff listings.
    async fn list_all(&self) -> Result<Vec<Assessment>, WellnessServiceError>;

    /// Insert and return the stored row (`id` is store-assigned).
    /// A unique violation on `user_id` maps to `AssessmentAlreadyExists`.
    async fn create(&self, assessment: &Assessment) -> Result<Assessment, WellnessServiceError>;

    async fn update(&self, assessment: &Assessment) -> Result<(), WellnessServiceError>;
}

/// Fields a progress update may merge into an open session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionProgress {
    pub last_active_section: Option<i16>,
    pub section_1_time: Option<i32>,
    pub section_2_time: Option<i32>,
    pub section_3_time: Option<i32>,
}

/// Repository for discovery sessions.
pub trait SessionRepository: Send + Sync {
    /// The user's open (incomplete) session, if any.
    async fn find_active_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Session>, WellnessServiceError>;

    /// An open session matching identifier and owner.
    async fn find_open(
        &self,
        uuid: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Session>, WellnessServiceError>;

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Session>, WellnessServiceError>;

    /// Insert and return the stored row (`id` is store-assigned).
    async fn create(&self, session: &Session) -> Result<Session, WellnessServiceError>;

    /// Merge only the supplied progress fields.
    async fn save_progress(
        &self,
        id: i32,
        progress: &SessionProgress,
    ) -> Result<(), WellnessServiceError>;

    /// Link the resulting assessment and stamp `session_end`.
    async fn complete(
        &self,
        id: i32,
        assessment_id: i32,
        ended_at: DateTime<Utc>,
    ) -> Result<(), WellnessServiceError>;

    async fn count(&self) -> Result<u64, WellnessServiceError>;

    async fn count_completed(&self) -> Result<u64, WellnessServiceError>;
}

/// Repository for wellness check-in snapshots. Append-only.
pub trait ProgressRepository: Send + Sync {
    /// Entries newest first.
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<ProgressEntry>, WellnessServiceError>;

    async fn create(&self, entry: &ProgressEntry) -> Result<ProgressEntry, WellnessServiceError>;
}

/// Repository for consent records.
pub trait ConsentRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Consent>, WellnessServiceError>;

    /// A unique violation on `user_id` maps to `ConsentAlreadyExists`.
    async fn create(&self, consent: &Consent) -> Result<(), WellnessServiceError>;
}
