use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAssessmentRepository, DbConsentRepository, DbProgressRepository, DbSessionRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn assessment_repo(&self) -> DbAssessmentRepository {
        DbAssessmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn session_repo(&self) -> DbSessionRepository {
        DbSessionRepository {
            db: self.db.clone(),
        }
    }

    pub fn progress_repo(&self) -> DbProgressRepository {
        DbProgressRepository {
            db: self.db.clone(),
        }
    }

    pub fn consent_repo(&self) -> DbConsentRepository {
        DbConsentRepository {
            db: self.db.clone(),
        }
    }
}
