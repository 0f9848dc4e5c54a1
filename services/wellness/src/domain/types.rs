use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::metrics::round1;

/// Self-reported gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

impl Gender {
    /// Every variant, in reporting order.
    pub const ALL: [Gender; 4] = [
        Self::Male,
        Self::Female,
        Self::NonBinary,
        Self::PreferNotToSay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::NonBinary => "non-binary",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "non-binary" => Some(Self::NonBinary),
            "prefer-not-to-say" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }
}

/// Self-reported marital status (optional field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Separated,
    InRelationship,
    PreferNotToSay,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::Divorced => "divorced",
            Self::Widowed => "widowed",
            Self::Separated => "separated",
            Self::InRelationship => "in-relationship",
            Self::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married" => Some(Self::Married),
            "divorced" => Some(Self::Divorced),
            "widowed" => Some(Self::Widowed),
            "separated" => Some(Self::Separated),
            "in-relationship" => Some(Self::InRelationship),
            "prefer-not-to-say" => Some(Self::PreferNotToSay),
            _ => None,
        }
    }
}

/// The ten 0-100 wellness indicators, captured at onboarding (baseline)
/// and again on every progress check-in. Unsupplied fields default to 50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessScores {
    #[serde(default = "default_score")]
    pub fulfillment: i16,
    #[serde(default = "default_score")]
    pub happiness: i16,
    #[serde(default = "default_score")]
    pub energy: i16,
    #[serde(default = "default_score")]
    pub stress: i16,
    #[serde(default = "default_score")]
    pub sleep: i16,
    #[serde(default = "default_score")]
    pub activity: i16,
    #[serde(default = "default_score")]
    pub nutrition: i16,
    #[serde(default = "default_score")]
    pub purpose: i16,
    #[serde(default = "default_score")]
    pub motivation: i16,
    #[serde(default = "default_score")]
    pub confidence: i16,
}

fn default_score() -> i16 {
    50
}

impl Default for WellnessScores {
    fn default() -> Self {
        Self {
            fulfillment: 50,
            happiness: 50,
            energy: 50,
            stress: 50,
            sleep: 50,
            activity: 50,
            nutrition: 50,
            purpose: 50,
            motivation: 50,
            confidence: 50,
        }
    }
}

impl WellnessScores {
    pub fn values(&self) -> [i16; 10] {
        [
            self.fulfillment,
            self.happiness,
            self.energy,
            self.stress,
            self.sleep,
            self.activity,
            self.nutrition,
            self.purpose,
            self.motivation,
            self.confidence,
        ]
    }

    /// The indicators paired with their field names, in canonical order.
    /// Validation iterates this table instead of repeating per-field code.
    pub fn fields(&self) -> [(&'static str, i16); 10] {
        [
            ("fulfillment", self.fulfillment),
            ("happiness", self.happiness),
            ("energy", self.energy),
            ("stress", self.stress),
            ("sleep", self.sleep),
            ("activity", self.activity),
            ("nutrition", self.nutrition),
            ("purpose", self.purpose),
            ("motivation", self.motivation),
            ("confidence", self.confidence),
        ]
    }

    /// The indicators paired with their display labels, in canonical order.
    /// Analytics iterates this table instead of repeating per-field code.
    pub fn labeled(&self) -> [(&'static str, i16); 10] {
        [
            ("Life Fulfillment", self.fulfillment),
            ("Happiness", self.happiness),
            ("Energy", self.energy),
            ("Stress Management", self.stress),
            ("Sleep Quality", self.sleep),
            ("Physical Activity", self.activity),
            ("Nutrition", self.nutrition),
            ("Life Purpose", self.purpose),
            ("Motivation", self.motivation),
            ("Confidence", self.confidence),
        ]
    }
}

/// Partial indicator update: only supplied fields change.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WellnessScoresPatch {
    pub fulfillment: Option<i16>,
    pub happiness: Option<i16>,
    pub energy: Option<i16>,
    pub stress: Option<i16>,
    pub sleep: Option<i16>,
    pub activity: Option<i16>,
    pub nutrition: Option<i16>,
    pub purpose: Option<i16>,
    pub motivation: Option<i16>,
    pub confidence: Option<i16>,
}

impl WellnessScoresPatch {
    pub fn apply(&self, scores: &mut WellnessScores) {
        macro_rules! merge {
            ($($field:ident),*) => {
                $(if let Some(v) = self.$field { scores.$field = v; })*
            };
        }
        merge!(
            fulfillment,
            happiness,
            energy,
            stress,
            sleep,
            activity,
            nutrition,
            purpose,
            motivation,
            confidence
        );
    }

    pub fn values(&self) -> [Option<i16>; 10] {
        [
            self.fulfillment,
            self.happiness,
            self.energy,
            self.stress,
            self.sleep,
            self.activity,
            self.nutrition,
            self.purpose,
            self.motivation,
            self.confidence,
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.values().iter().all(Option::is_none)
    }
}

/// Completion telemetry attached to an assessment submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionTelemetry {
    pub duration_minutes: Option<i32>,
    pub sections_completed: i16,
    pub goals_selected: i16,
    pub form_interactions: i32,
    pub page_revisits: i32,
    pub saved_progress: bool,
    pub device_type: Option<String>,
    pub browser: Option<String>,
}

/// A user's onboarding survey response. At most one per user.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub id: i32,
    pub uuid: Uuid,
    pub user_id: Uuid,
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
    pub telemetry: CompletionTelemetry,
    pub avg_wellness_score: Option<i16>,
    pub completion_quality_score: Option<f64>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assessment {
    /// Non-empty goals in priority order.
    pub fn goals(&self) -> Vec<&str> {
        let mut goals = vec![self.goal_1.as_str()];
        goals.extend(self.goal_2.as_deref());
        goals.extend(self.goal_3.as_deref());
        goals
    }
}

/// One tracked attempt at completing the discovery flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: i32,
    pub uuid: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Option<i32>,
    pub session_start: DateTime<Utc>,
    pub session_end: Option<DateTime<Utc>>,
    pub last_active_section: i16,
    pub is_completed: bool,
    pub section_1_time: Option<i32>,
    pub section_2_time: Option<i32>,
    pub section_3_time: Option<i32>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub screen_resolution: Option<String>,
}

impl Session {
    /// Minutes from start to end, one decimal. `None` while the session is open.
    pub fn total_duration_minutes(&self) -> Option<f64> {
        self.session_end
            .map(|end| round1((end - self.session_start).num_seconds() as f64 / 60.0))
    }
}

/// A timestamped wellness check-in snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressEntry {
    pub id: i32,
    pub user_id: Uuid,
    pub scores: WellnessScores,
    pub created_at: DateTime<Utc>,
}

/// Consent record, one per user, immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consent {
    pub id: i32,
    pub user_id: Uuid,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}

// ── Field validators ─────────────────────────────────────────────────────────

pub fn valid_age(age: i16) -> bool {
    (18..=100).contains(&age)
}

pub fn valid_weight(weight: i32) -> bool {
    (70..=500).contains(&weight)
}

/// Trimmed length 2-100.
pub fn valid_preferred_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    (2..=100).contains(&len)
}

pub fn valid_height_feet(feet: i16) -> bool {
    (3..=8).contains(&feet)
}

pub fn valid_height_inches(inches: i16) -> bool {
    (0..=11).contains(&inches)
}

pub fn valid_goal(goal: &str) -> bool {
    let trimmed = goal.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= 200
}

pub fn valid_score(value: i16) -> bool {
    (0..=100).contains(&value)
}

pub fn valid_section(section: i16) -> bool {
    (1..=3).contains(&section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn should_validate_age_bounds() {
        assert!(!valid_age(17));
        assert!(valid_age(18));
        assert!(valid_age(100));
        assert!(!valid_age(101));
    }

    #[test]
    fn should_validate_weight_bounds() {
        assert!(!valid_weight(69));
        assert!(valid_weight(70));
        assert!(valid_weight(500));
        assert!(!valid_weight(501));
    }

    #[test]
    fn should_validate_preferred_name_trimmed() {
        assert!(!valid_preferred_name(" a "));
        assert!(valid_preferred_name("Jo"));
        assert!(valid_preferred_name(&"x".repeat(100)));
        assert!(!valid_preferred_name(&"x".repeat(101)));
    }

    #[test]
    fn should_validate_height_bounds() {
        assert!(!valid_height_feet(2));
        assert!(valid_height_feet(3));
        assert!(valid_height_feet(8));
        assert!(!valid_height_feet(9));
        assert!(valid_height_inches(0));
        assert!(valid_height_inches(11));
        assert!(!valid_height_inches(12));
    }

    #[test]
    fn should_validate_goal_nonempty_trimmed() {
        assert!(!valid_goal("   "));
        assert!(valid_goal("sleep better"));
        assert!(!valid_goal(&"g".repeat(201)));
    }

    #[test]
    fn should_parse_gender_round_trip() {
        for gender in Gender::ALL {
            assert_eq!(Gender::from_str(gender.as_str()), Some(gender));
        }
        assert_eq!(Gender::from_str("other"), None);
    }

    #[test]
    fn should_deserialize_gender_kebab_case() {
        let g: Gender = serde_json::from_str("\"prefer-not-to-say\"").unwrap();
        assert_eq!(g, Gender::PreferNotToSay);
    }

    #[test]
    fn should_parse_marital_status_round_trip() {
        for status in [
            MaritalStatus::Single,
            MaritalStatus::Married,
            MaritalStatus::Divorced,
            MaritalStatus::Widowed,
            MaritalStatus::Separated,
            MaritalStatus::InRelationship,
            MaritalStatus::PreferNotToSay,
        ] {
            assert_eq!(MaritalStatus::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn should_default_wellness_scores_to_50() {
        let scores: WellnessScores = serde_json::from_str("{}").unwrap();
        assert!(scores.values().iter().all(|&v| v == 50));
    }

    #[test]
    fn should_apply_patch_only_to_supplied_fields() {
        let mut scores = WellnessScores::default();
        let patch = WellnessScoresPatch {
            energy: Some(80),
            stress: Some(20),
            ..Default::default()
        };
        patch.apply(&mut scores);
        assert_eq!(scores.energy, 80);
        assert_eq!(scores.stress, 20);
        assert_eq!(scores.sleep, 50);
    }

    #[test]
    fn should_compute_session_duration_when_completed() {
        let start = Utc::now();
        let session = Session {
            id: 1,
            uuid: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            assessment_id: None,
            session_start: start,
            session_end: Some(start + Duration::seconds(150)),
            last_active_section: 3,
            is_completed: true,
            section_1_time: None,
            section_2_time: None,
            section_3_time: None,
            user_agent: None,
            ip_address: None,
            screen_resolution: None,
        };
        assert_eq!(session.total_duration_minutes(), Some(2.5));
    }

    #[test]
    fn should_list_only_selected_goals() {
        let assessment = Assessment {
            id: 1,
            uuid: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            preferred_name: "Jo".into(),
            age: 30,
            gender: Gender::Female,
            height_feet: 5,
            height_inches: 6,
            weight: 150,
            location: "Austin".into(),
            marital_status: None,
            goal_1: "sleep better".into(),
            goal_2: None,
            goal_3: Some("move more".into()),
            baseline: WellnessScores::default(),
            telemetry: CompletionTelemetry::default(),
            avg_wellness_score: None,
            completion_quality_score: None,
            submitted_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(assessment.goals(), vec!["sleep better", "move more"]);
    }
}
