use sea_orm::entity::prelude::*;

/// One tracked attempt at completing the discovery flow.
///
/// `assessment_id` is set only when the attempt ends in a stored assessment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub uuid: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Option<i32>,

    pub session_start: chrono::DateTime<chrono::Utc>,
    pub session_end: Option<chrono::DateTime<chrono::Utc>>,
    pub last_active_section: i16,
    pub is_completed: bool,

    // Per-section elapsed seconds
    pub section_1_time: Option<i32>,
    pub section_2_time: Option<i32>,
    pub section_3_time: Option<i32>,

    // Technical context captured at start
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub screen_resolution: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assessments::Entity",
        from = "Column::AssessmentId",
        to = "super::assessments::Column::Id"
    )]
    Assessment,
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
