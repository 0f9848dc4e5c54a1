use sea_orm::entity::prelude::*;

/// Periodic wellness check-in snapshot. Append-only: never updated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "progress_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Uuid,

    pub fulfillment: i16,
    pub happiness: i16,
    pub energy: i16,
    pub stress: i16,
    pub sleep: i16,
    pub activity: i16,
    pub nutrition: i16,
    pub purpose: i16,
    pub motivation: i16,
    pub confidence: i16,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
