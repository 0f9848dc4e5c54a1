use chrono::Utc;
use uuid::Uuid;

use vitala_domain::pagination::PageRequest;

use crate::domain::repository::ProgressRepository;
use crate::domain::types::{ProgressEntry, WellnessScores, valid_score};
use crate::error::WellnessServiceError;

// ── RecordProgress ───────────────────────────────────────────────────────────

pub struct RecordProgressUseCase<P: ProgressRepository> {
    pub progress: P,
}

impl<P: ProgressRepository> RecordProgressUseCase<P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        scores: WellnessScores,
    ) -> Result<ProgressEntry, WellnessServiceError> {
        for (field, value) in scores.fields() {
            if !valid_score(value) {
                return Err(WellnessServiceError::Validation(field));
            }
        }

        let entry = ProgressEntry {
            id: 0,
            user_id,
            scores,
            created_at: Utc::now(),
        };
        self.progress.create(&entry).await
    }
}

// ── ListProgress ─────────────────────────────────────────────────────────────

pub struct ListProgressUseCase<P: ProgressRepository> {
    pub progress: P,
}

impl<P: ProgressRepository> ListProgressUseCase<P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<ProgressEntry>, WellnessServiceError> {
        self.progress.list_by_user(user_id, page.clamped()).await
    }
}
