use chrono::Utc;
use uuid::Uuid;

use crate::domain::metrics::{avg_wellness_score, completion_quality_score};
use crate::domain::repository::{AssessmentRepository, SessionRepository};
use crate::domain::types::{
    Assessment, CompletionTelemetry, Gender, MaritalStatus, WellnessScores, WellnessScoresPatch,
    valid_age, valid_goal, valid_height_feet, valid_height_inches, valid_preferred_name,
    valid_score, valid_weight,
};
use crate::error::WellnessServiceError;

// ── SubmitAssessment ─────────────────────────────────────────────────────────

pub struct SubmitAssessmentInput {
    pub preferred_name: String,
    pub age: i16,
    pub gender: Gender,
    pub height_feet: i16,
    pub height_inches: i16,
    pub weight: i32,
    pub location: String,
    pub marital_status: Option<MaritalStatus>,
    pub goal_1: String,
    pub goal_2: Option<String>,
    pub goal_3: Option<String>,
    pub baseline: WellnessScores,
    pub metrics: CompletionMetricsInput,
}

/// Client-reported completion telemetry. Everything optional except
/// `sections_completed`, which the HTTP layer defaults.
#[derive(Debug, Clone, Default)]
pub struct CompletionMetricsInput {
    pub duration_minutes: Option<i32>,
    pub sections_completed: i16,
    pub form_interactions: i32,
    pub page_revisits: i32,
    pub saved_progress: bool,
    pub device_type: Option<String>,
    pub browser: Option<String>,
}

pub struct SubmitAssessmentUseCase<A: AssessmentRepository, S: SessionRepository> {
    pub assessments: A,
    pub sessions: S,
}

impl<A: AssessmentRepository, S: SessionRepository> SubmitAssessmentUseCase<A, S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: SubmitAssessmentInput,
    ) -> Result<Assessment, WellnessServiceError> {
        validate_submit(&input)?;

        // Resubmission is rejected, not merged; callers must PATCH instead.
        if self.assessments.find_by_user(user_id).await?.is_some() {
            return Err(WellnessServiceError::AssessmentAlreadyExists);
        }

        let goal_1 = input.goal_1.trim().to_owned();
        let goal_2 = normalize_optional_goal(input.goal_2.as_deref());
        let goal_3 = normalize_optional_goal(input.goal_3.as_deref());
        let goals_selected =
            1 + i16::from(goal_2.is_some()) + i16::from(goal_3.is_some());

        let telemetry = CompletionTelemetry {
            duration_minutes: input.metrics.duration_minutes,
            sections_completed: input.metrics.sections_completed,
            goals_selected,
            form_interactions: input.metrics.form_interactions,
            page_revisits: input.metrics.page_revisits,
            saved_progress: input.metrics.saved_progress,
            device_type: input.metrics.device_type,
            browser: input.metrics.browser,
        };

        let now = Utc::now();
        let assessment = Assessment {
            // id is store-assigned on insert.
            id: 0,
            uuid: Uuid::new_v4(),
            user_id,
            preferred_name: input.preferred_name.trim().to_owned(),
            age: input.age,
            gender: input.gender,
            height_feet: input.height_feet,
            height_inches: input.height_inches,
            weight: input.weight,
            location: input.location.trim().to_owned(),
            marital_status: input.marital_status,
            goal_1,
            goal_2,
            goal_3,
            avg_wellness_score: Some(avg_wellness_score(&input.baseline)),
            completion_quality_score: Some(completion_quality_score(&input.baseline, &telemetry)),
            baseline: input.baseline,
            telemetry,
            submitted_at: now,
            updated_at: now,
        };

        let stored = self.assessments.create(&assessment).await?;

        // Close the in-flight discovery session, if the user has one.
        if let Some(session) = self.sessions.find_active_by_user(user_id).await? {
            self.sessions.complete(session.id, stored.id, now).await?;
            tracing::info!(session = %session.uuid, "discovery session completed");
        }

        Ok(stored)
    }
}

fn normalize_optional_goal(goal: Option<&str>) -> Option<String> {
    goal.map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_owned)
}

fn validate_submit(input: &SubmitAssessmentInput) -> Result<(), WellnessServiceError> {
    if !valid_preferred_name(&input.preferred_name) {
        return Err(WellnessServiceError::Validation("preferred_name"));
    }
    if !valid_age(input.age) {
        return Err(WellnessServiceError::Validation("age"));
    }
    if !valid_height_feet(input.height_feet) {
        return Err(WellnessServiceError::Validation("height_feet"));
    }
    if !valid_height_inches(input.height_inches) {
        return Err(WellnessServiceError::Validation("height_inches"));
    }
    if !valid_weight(input.weight) {
        return Err(WellnessServiceError::Validation("weight"));
    }
    if input.location.trim().is_empty() {
        return Err(WellnessServiceError::Validation("location"));
    }
    if !valid_goal(&input.goal_1) {
        return Err(WellnessServiceError::Validation("goal_1"));
    }
    if input.goal_2.as_deref().is_some_and(|g| g.trim().chars().count() > 200) {
        return Err(WellnessServiceError::Validation("goal_2"));
    }
    if input.goal_3.as_deref().is_some_and(|g| g.trim().chars().count() > 200) {
        return Err(WellnessServiceError::Validation("goal_3"));
    }
    validate_baseline(&input.baseline)?;
    validate_metrics(&input.metrics)
}

fn validate_baseline(baseline: &WellnessScores) -> Result<(), WellnessServiceError> {
    for (field, value) in baseline.fields() {
        if !valid_score(value) {
            return Err(WellnessServiceError::Validation(field));
        }
    }
    Ok(())
}

fn validate_metrics(metrics: &CompletionMetricsInput) -> Result<(), WellnessServiceError> {
    if metrics.duration_minutes.is_some_and(|d| d < 0) {
        return Err(WellnessServiceError::Validation("duration_minutes"));
    }
    if !(0..=3).contains(&metrics.sections_completed) {
        return Err(WellnessServiceError::Validation("sections_completed"));
    }
    if metrics.form_interactions < 0 {
        return Err(WellnessServiceError::Validation("form_interactions"));
    }
    if metrics.page_revisits < 0 {
        return Err(WellnessServiceError::Validation("page_revisits"));
    }
    Ok(())
}

// ── GetAssessment ────────────────────────────────────────────────────────────

pub struct GetAssessmentUseCase<A: AssessmentRepository> {
    pub assessments: A,
}

impl<A: AssessmentRepository> GetAssessmentUseCase<A> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Assessment, WellnessServiceError> {
        self.assessments
            .find_by_user(user_id)
            .await?
            .ok_or(WellnessServiceError::AssessmentNotFound)
    }
}

// ── ListAssessments ──────────────────────────────────────────────────────────

pub struct ListAssessmentsUseCase<A: AssessmentRepository> {
    pub assessments: A,
}

impl<A: AssessmentRepository> ListAssessmentsUseCase<A> {
    /// Staff see the full collection (newest first); everyone else sees
    /// at most their own assessment.
    pub async fn execute(
        &self,
        user_id: Uuid,
        is_staff: bool,
    ) -> Result<Vec<Assessment>, WellnessServiceError> {
        if is_staff {
            self.assessments.list_all().await
        } else {
            Ok(self
                .assessments
                .find_by_user(user_id)
                .await?
                .into_iter()
                .collect())
        }
    }
}

// ── UpdateAssessment ─────────────────────────────────────────────────────────

/// Partial update. Absent fields are left untouched; `goal_2`/`goal_3`
/// clear when supplied as empty strings.
#[derive(Debug, Clone, Default)]
pub struct UpdateAssessmentInput {
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
    pub baseline: WellnessScoresPatch,
    pub duration_minutes: Option<i32>,
    pub sections_completed: Option<i16>,
    pub form_interactions: Option<i32>,
    pub page_revisits: Option<i32>,
    pub saved_progress: Option<bool>,
}

pub struct UpdateAssessmentUseCase<A: AssessmentRepository> {
    pub assessments: A,
}

impl<A: AssessmentRepository> UpdateAssessmentUseCase<A> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpdateAssessmentInput,
    ) -> Result<Assessment, WellnessServiceError> {
        validate_update(&input)?;

        let mut assessment = self
            .assessments
            .find_by_user(user_id)
            .await?
            .ok_or(WellnessServiceError::AssessmentNotFound)?;

        if let Some(name) = input.preferred_name {
            assessment.preferred_name = name.trim().to_owned();
        }
        if let Some(age) = input.age {
            assessment.age = age;
        }
        if let Some(gender) = input.gender {
            assessment.gender = gender;
        }
        if let Some(feet) = input.height_feet {
            assessment.height_feet = feet;
        }
        if let Some(inches) = input.height_inches {
            assessment.height_inches = inches;
        }
        if let Some(weight) = input.weight {
            assessment.weight = weight;
        }
        if let Some(location) = input.location {
            assessment.location = location.trim().to_owned();
        }
        if let Some(status) = input.marital_status {
            assessment.marital_status = Some(status);
        }
        if let Some(goal) = input.goal_1 {
            assessment.goal_1 = goal.trim().to_owned();
        }
        if let Some(goal) = input.goal_2 {
            assessment.goal_2 = normalize_optional_goal(Some(&goal));
        }
        if let Some(goal) = input.goal_3 {
            assessment.goal_3 = normalize_optional_goal(Some(&goal));
        }
        input.baseline.apply(&mut assessment.baseline);
        if let Some(duration) = input.duration_minutes {
            assessment.telemetry.duration_minutes = Some(duration);
        }
        if let Some(sections) = input.sections_completed {
            assessment.telemetry.sections_completed = sections;
        }
        if let Some(interactions) = input.form_interactions {
            assessment.telemetry.form_interactions = interactions;
        }
        if let Some(revisits) = input.page_revisits {
            assessment.telemetry.page_revisits = revisits;
        }
        if let Some(saved) = input.saved_progress {
            assessment.telemetry.saved_progress = saved;
        }

        assessment.telemetry.goals_selected = 1
            + i16::from(assessment.goal_2.is_some())
            + i16::from(assessment.goal_3.is_some());

        // Quality is always recomputed on update — inputs may have changed.
        // avg_wellness_score stays as stored at first save.
        assessment.completion_quality_score = Some(completion_quality_score(
            &assessment.baseline,
            &assessment.telemetry,
        ));
        assessment.updated_at = Utc::now();

        self.assessments.update(&assessment).await?;
        Ok(assessment)
    }
}

fn validate_update(input: &UpdateAssessmentInput) -> Result<(), WellnessServiceError> {
    if input
        .preferred_name
        .as_deref()
        .is_some_and(|n| !valid_preferred_name(n))
    {
        return Err(WellnessServiceError::Validation("preferred_name"));
    }
    if input.age.is_some_and(|a| !valid_age(a)) {
        return Err(WellnessServiceError::Validation("age"));
    }
    if input.height_feet.is_some_and(|f| !valid_height_feet(f)) {
        return Err(WellnessServiceError::Validation("height_feet"));
    }
    if input
        .height_inches
        .is_some_and(|i| !valid_height_inches(i))
    {
        return Err(WellnessServiceError::Validation("height_inches"));
    }
    if input.weight.is_some_and(|w| !valid_weight(w)) {
        return Err(WellnessServiceError::Validation("weight"));
    }
    if input
        .location
        .as_deref()
        .is_some_and(|l| l.trim().is_empty())
    {
        return Err(WellnessServiceError::Validation("location"));
    }
    if input.goal_1.as_deref().is_some_and(|g| !valid_goal(g)) {
        return Err(WellnessServiceError::Validation("goal_1"));
    }
    if input
        .goal_2
        .as_deref()
        .is_some_and(|g| g.trim().chars().count() > 200)
    {
        return Err(WellnessServiceError::Validation("goal_2"));
    }
    if input
        .goal_3
        .as_deref()
        .is_some_and(|g| g.trim().chars().count() > 200)
    {
        return Err(WellnessServiceError::Validation("goal_3"));
    }
    for (value, field) in input.baseline.values().iter().zip([
        "fulfillment",
        "happiness",
        "energy",
        "stress",
        "sleep",
        "activity",
        "nutrition",
        "purpose",
        "motivation",
        "confidence",
    ]) {
        if value.is_some_and(|v| !valid_score(v)) {
            return Err(WellnessServiceError::Validation(field));
        }
    }
    if input.duration_minutes.is_some_and(|d| d < 0) {
        return Err(WellnessServiceError::Validation("duration_minutes"));
    }
    if input
        .sections_completed
        .is_some_and(|s| !(0..=3).contains(&s))
    {
        return Err(WellnessServiceError::Validation("sections_completed"));
    }
    if input.form_interactions.is_some_and(|v| v < 0) {
        return Err(WellnessServiceError::Validation("form_interactions"));
    }
    if input.page_revisits.is_some_and(|v| v < 0) {
        return Err(WellnessServiceError::Validation("page_revisits"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    use crate::domain::repository::SessionProgress;
    use crate::domain::types::Session;

    struct MockAssessmentRepo {
        stored: Mutex<Option<Assessment>>,
    }

    impl MockAssessmentRepo {
        fn empty() -> Self {
            Self {
                stored: Mutex::new(None),
            }
        }

        fn with(assessment: Assessment) -> Self {
            Self {
                stored: Mutex::new(Some(assessment)),
            }
        }
    }

    impl AssessmentRepository for &MockAssessmentRepo {
        async fn find_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Assessment>, WellnessServiceError> {
            Ok(self.stored.lock().unwrap().clone())
        }
        async fn list_all(&self) -> Result<Vec<Assessment>, WellnessServiceError> {
            Ok(self.stored.lock().unwrap().clone().into_iter().collect())
        }
        async fn create(
            &self,
            assessment: &Assessment,
        ) -> Result<Assessment, WellnessServiceError> {
            let mut guard = self.stored.lock().unwrap();
            if guard.is_some() {
                return Err(WellnessServiceError::AssessmentAlreadyExists);
            }
            let mut stored = assessment.clone();
            stored.id = 1;
            *guard = Some(stored.clone());
            Ok(stored)
        }
        async fn update(&self, assessment: &Assessment) -> Result<(), WellnessServiceError> {
            *self.stored.lock().unwrap() = Some(assessment.clone());
            Ok(())
        }
    }

    struct MockSessionRepo {
        active: Mutex<Option<Session>>,
        completed: Mutex<Vec<(i32, i32)>>,
    }

    impl MockSessionRepo {
        fn empty() -> Self {
            Self {
                active: Mutex::new(None),
                completed: Mutex::new(vec![]),
            }
        }

        fn with_active(session: Session) -> Self {
            Self {
                active: Mutex::new(Some(session)),
                completed: Mutex::new(vec![]),
            }
        }
    }

    impl SessionRepository for &MockSessionRepo {
        async fn find_active_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Session>, WellnessServiceError> {
            Ok(self.active.lock().unwrap().clone())
        }
        async fn find_open(
            &self,
            _uuid: Uuid,
            _user_id: Uuid,
        ) -> Result<Option<Session>, WellnessServiceError> {
            Ok(None)
        }
        async fn list_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<Session>, WellnessServiceError> {
            Ok(vec![])
        }
        async fn create(&self, session: &Session) -> Result<Session, WellnessServiceError> {
            Ok(session.clone())
        }
        async fn save_progress(
            &self,
            _id: i32,
            _progress: &SessionProgress,
        ) -> Result<(), WellnessServiceError> {
            Ok(())
        }
        async fn complete(
            &self,
            id: i32,
            assessment_id: i32,
            _ended_at: DateTime<Utc>,
        ) -> Result<(), WellnessServiceError> {
            self.active.lock().unwrap().take();
            self.completed.lock().unwrap().push((id, assessment_id));
            Ok(())
        }
        async fn count(&self) -> Result<u64, WellnessServiceError> {
            Ok(0)
        }
        async fn count_completed(&self) -> Result<u64, WellnessServiceError> {
            Ok(0)
        }
    }

    fn valid_input() -> SubmitAssessmentInput {
        SubmitAssessmentInput {
            preferred_name: "  Jordan  ".into(),
            age: 34,
            gender: Gender::NonBinary,
            height_feet: 5,
            height_inches: 9,
            weight: 160,
            location: "Portland".into(),
            marital_status: Some(MaritalStatus::Single),
            goal_1: "sleep better".into(),
            goal_2: Some("reduce stress".into()),
            goal_3: Some("  ".into()),
            baseline: WellnessScores::default(),
            metrics: CompletionMetricsInput {
                duration_minutes: Some(15),
                sections_completed: 3,
                ..Default::default()
            },
        }
    }

    fn open_session(user_id: Uuid) -> Session {
        Session {
            id: 7,
            uuid: Uuid::new_v4(),
            user_id,
            assessment_id: None,
            session_start: Utc::now(),
            session_end: None,
            last_active_section: 2,
            is_completed: false,
            section_1_time: Some(120),
            section_2_time: None,
            section_3_time: None,
            user_agent: None,
            ip_address: None,
            screen_resolution: None,
        }
    }

    #[tokio::test]
    async fn should_submit_and_compute_derived_fields() {
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let usecase = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };

        let stored = usecase.execute(Uuid::new_v4(), valid_input()).await.unwrap();
        assert_eq!(stored.preferred_name, "Jordan");
        assert_eq!(stored.goal_2.as_deref(), Some("reduce stress"));
        assert_eq!(stored.goal_3, None); // whitespace-only goal dropped
        assert_eq!(stored.telemetry.goals_selected, 2);
        assert_eq!(stored.avg_wellness_score, Some(50));
        // time 1.0, completeness 1.0, variance 0.2 (flat), goals 2/3
        let expected = (1.0 + 1.0 + 0.2 + 2.0 / 3.0) / 4.0;
        assert!((stored.completion_quality_score.unwrap() - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_reject_second_submission_with_conflict() {
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let user_id = Uuid::new_v4();

        let usecase = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };
        usecase.execute(user_id, valid_input()).await.unwrap();
        let second = usecase.execute(user_id, valid_input()).await;
        assert!(matches!(
            second,
            Err(WellnessServiceError::AssessmentAlreadyExists)
        ));
        // Exactly one assessment remains stored.
        assert!(assessments.stored.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn should_complete_active_session_on_submit() {
        let user_id = Uuid::new_v4();
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::with_active(open_session(user_id));

        let usecase = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };
        let stored = usecase.execute(user_id, valid_input()).await.unwrap();
        assert_eq!(*sessions.completed.lock().unwrap(), vec![(7, stored.id)]);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_fields() {
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let usecase = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };

        let mut input = valid_input();
        input.age = 17;
        assert!(matches!(
            usecase.execute(Uuid::new_v4(), input).await,
            Err(WellnessServiceError::Validation("age"))
        ));

        let mut input = valid_input();
        input.weight = 501;
        assert!(matches!(
            usecase.execute(Uuid::new_v4(), input).await,
            Err(WellnessServiceError::Validation("weight"))
        ));

        let mut input = valid_input();
        input.goal_1 = "   ".into();
        assert!(matches!(
            usecase.execute(Uuid::new_v4(), input).await,
            Err(WellnessServiceError::Validation("goal_1"))
        ));

        let mut input = valid_input();
        input.baseline.energy = 101;
        assert!(matches!(
            usecase.execute(Uuid::new_v4(), input).await,
            Err(WellnessServiceError::Validation("energy"))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_assessment() {
        let assessments = MockAssessmentRepo::empty();
        let usecase = GetAssessmentUseCase {
            assessments: &assessments,
        };
        assert!(matches!(
            usecase.execute(Uuid::new_v4()).await,
            Err(WellnessServiceError::AssessmentNotFound)
        ));
    }

    #[tokio::test]
    async fn update_should_always_recompute_quality() {
        let user_id = Uuid::new_v4();
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let submit = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };
        let stored = submit.execute(user_id, valid_input()).await.unwrap();
        let original_quality = stored.completion_quality_score.unwrap();

        let update = UpdateAssessmentUseCase {
            assessments: &assessments,
        };
        // No quality-relevant change: recomputation is idempotent.
        let unchanged = update
            .execute(user_id, UpdateAssessmentInput::default())
            .await
            .unwrap();
        assert!(
            (unchanged.completion_quality_score.unwrap() - original_quality).abs() < 1e-9
        );

        // Adding a third goal shifts the goal factor from 2/3 to 1.
        let updated = update
            .execute(
                user_id,
                UpdateAssessmentInput {
                    goal_3: Some("eat more vegetables".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.telemetry.goals_selected, 3);
        let expected = (1.0 + 1.0 + 0.2 + 1.0) / 4.0;
        assert!((updated.completion_quality_score.unwrap() - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn update_should_not_touch_avg_wellness_score() {
        let user_id = Uuid::new_v4();
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let submit = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };
        submit.execute(user_id, valid_input()).await.unwrap();

        let update = UpdateAssessmentUseCase {
            assessments: &assessments,
        };
        let updated = update
            .execute(
                user_id,
                UpdateAssessmentInput {
                    baseline: WellnessScoresPatch {
                        energy: Some(90),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        // Baseline changed but the stored average is write-once.
        assert_eq!(updated.baseline.energy, 90);
        assert_eq!(updated.avg_wellness_score, Some(50));
    }

    #[tokio::test]
    async fn update_should_clear_optional_goal_on_empty_string() {
        let user_id = Uuid::new_v4();
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let submit = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };
        submit.execute(user_id, valid_input()).await.unwrap();

        let update = UpdateAssessmentUseCase {
            assessments: &assessments,
        };
        let updated = update
            .execute(
                user_id,
                UpdateAssessmentInput {
                    goal_2: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.goal_2, None);
        assert_eq!(updated.telemetry.goals_selected, 1);
    }

    #[tokio::test]
    async fn update_on_missing_assessment_returns_not_found() {
        let assessments = MockAssessmentRepo::empty();
        let update = UpdateAssessmentUseCase {
            assessments: &assessments,
        };
        assert!(matches!(
            update
                .execute(Uuid::new_v4(), UpdateAssessmentInput::default())
                .await,
            Err(WellnessServiceError::AssessmentNotFound)
        ));
    }

    #[tokio::test]
    async fn list_should_respect_staff_visibility() {
        let user_id = Uuid::new_v4();
        let assessments = MockAssessmentRepo::empty();
        let sessions = MockSessionRepo::empty();
        let submit = SubmitAssessmentUseCase {
            assessments: &assessments,
            sessions: &sessions,
        };
        submit.execute(user_id, valid_input()).await.unwrap();

        let list = ListAssessmentsUseCase {
            assessments: &assessments,
        };
        // Staff see everything; a stranger sees nothing of someone else's.
        assert_eq!(list.execute(Uuid::new_v4(), true).await.unwrap().len(), 1);

        let own = MockAssessmentRepo::empty();
        let list_empty = ListAssessmentsUseCase { assessments: &own };
        assert!(list_empty.execute(user_id, false).await.unwrap().is_empty());
    }
}
