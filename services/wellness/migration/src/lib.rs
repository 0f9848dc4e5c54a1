use sea_orm_migration::prelude::*;

mod m20260801_000001_create_assessments;
mod m20260801_000002_create_sessions;
mod m20260801_000003_create_progress_entries;
mod m20260801_000004_create_consents;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_assessments::Migration),
            Box::new(m20260801_000002_create_sessions::Migration),
            Box::new(m20260801_000003_create_progress_entries::Migration),
            Box::new(m20260801_000004_create_consents::Migration),
        ]
    }
}
