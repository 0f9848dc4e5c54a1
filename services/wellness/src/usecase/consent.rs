use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ConsentRepository;
use crate::domain::types::Consent;
use crate::error::WellnessServiceError;

/// Records the user's data-processing consent. One record per user,
/// immutable once written.
pub struct RecordConsentUseCase<C: ConsentRepository> {
    pub consents: C,
}

impl<C: ConsentRepository> RecordConsentUseCase<C> {
    pub async fn execute(&self, user_id: Uuid, accepted: bool) -> Result<(), WellnessServiceError> {
        if self.consents.find_by_user(user_id).await?.is_some() {
            return Err(WellnessServiceError::ConsentAlreadyExists);
        }

        let consent = Consent {
            id: 0,
            user_id,
            accepted,
            created_at: Utc::now(),
        };
        self.consents.create(&consent).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MockConsentRepo {
        stored: Mutex<Option<Consent>>,
    }

    impl MockConsentRepo {
        fn new() -> Self {
            Self {
                stored: Mutex::new(None),
            }
        }
    }

    impl ConsentRepository for &MockConsentRepo {
        async fn find_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Consent>, WellnessServiceError> {
            Ok(self.stored.lock().unwrap().clone())
        }
        async fn create(&self, consent: &Consent) -> Result<(), WellnessServiceError> {
            let mut guard = self.stored.lock().unwrap();
            if guard.is_some() {
                return Err(WellnessServiceError::ConsentAlreadyExists);
            }
            *guard = Some(consent.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_record_consent_once() {
        let repo = MockConsentRepo::new();
        let usecase = RecordConsentUseCase { consents: &repo };
        let user_id = Uuid::new_v4();

        usecase.execute(user_id, true).await.unwrap();
        let stored = repo.stored.lock().unwrap().clone().unwrap();
        assert!(stored.accepted);
        assert_eq!(stored.user_id, user_id);
    }

    #[tokio::test]
    async fn should_record_declined_consent() {
        let repo = MockConsentRepo::new();
        let usecase = RecordConsentUseCase { consents: &repo };

        usecase.execute(Uuid::new_v4(), false).await.unwrap();
        assert!(!repo.stored.lock().unwrap().clone().unwrap().accepted);
    }

    #[tokio::test]
    async fn should_reject_second_consent() {
        let repo = MockConsentRepo::new();
        let usecase = RecordConsentUseCase { consents: &repo };
        let user_id = Uuid::new_v4();

        usecase.execute(user_id, true).await.unwrap();
        assert!(matches!(
            usecase.execute(user_id, false).await,
            Err(WellnessServiceError::ConsentAlreadyExists)
        ));
        // The original decision is untouched.
        assert!(repo.stored.lock().unwrap().clone().unwrap().accepted);
    }
}
