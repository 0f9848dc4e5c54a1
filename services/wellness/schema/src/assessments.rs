use sea_orm::entity::prelude::*;

/// Discovery assessment — one per user, enforced by the unique index on `user_id`.
///
/// `avg_wellness_score` and `completion_quality_score` are stored at save time
/// rather than derived on read; see the metrics module in the service crate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,

    // Demographics
    pub preferred_name: String,
    pub age: i16,
    pub gender: String,
    pub height_feet: i16,
    pub height_inches: i16,
    pub weight: i32,
    pub location: String,
    pub marital_status: Option<String>,

    // Goals, in priority order
    pub goal_1: String,
    pub goal_2: Option<String>,
    pub goal_3: Option<String>,

    // Baseline wellness indicators (0-100)
    pub baseline_fulfillment: i16,
    pub baseline_happiness: i16,
    pub baseline_energy: i16,
    pub baseline_stress: i16,
    pub baseline_sleep: i16,
    pub baseline_activity: i16,
    pub baseline_nutrition: i16,
    pub baseline_purpose: i16,
    pub baseline_motivation: i16,
    pub baseline_confidence: i16,

    // Completion telemetry
    pub duration_minutes: Option<i32>,
    pub sections_completed: i16,
    pub goals_selected: i16,
    pub form_interactions: i32,
    pub page_revisits: i32,
    pub saved_progress: bool,
    pub completion_device_type: Option<String>,
    pub completion_browser: Option<String>,

    // Stored-at-save derived fields
    pub avg_wellness_score: Option<i16>,
    pub completion_quality_score: Option<f64>,

    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::sessions::Entity")]
    Sessions,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
