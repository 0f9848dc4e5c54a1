use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressEntries::UserId).uuid().not_null())
                    .col(indicator_col(ProgressEntries::Fulfillment))
                    .col(indicator_col(ProgressEntries::Happiness))
                    .col(indicator_col(ProgressEntries::Energy))
                    .col(indicator_col(ProgressEntries::Stress))
                    .col(indicator_col(ProgressEntries::Sleep))
                    .col(indicator_col(ProgressEntries::Activity))
                    .col(indicator_col(ProgressEntries::Nutrition))
                    .col(indicator_col(ProgressEntries::Purpose))
                    .col(indicator_col(ProgressEntries::Motivation))
                    .col(indicator_col(ProgressEntries::Confidence))
                    .col(
                        ColumnDef::new(ProgressEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_progress_entries_user_created")
                    .table(ProgressEntries::Table)
                    .col(ProgressEntries::UserId)
                    .col(ProgressEntries::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressEntries::Table).to_owned())
            .await
    }
}

fn indicator_col(name: ProgressEntries) -> ColumnDef {
    ColumnDef::new(name)
        .small_integer()
        .not_null()
        .default(50)
        .to_owned()
}

#[derive(Iden)]
enum ProgressEntries {
    Table,
    Id,
    UserId,
    Fulfillment,
    Happiness,
    Energy,
    Stress,
    Sleep,
    Activity,
    Nutrition,
    Purpose,
    Motivation,
    Confidence,
    CreatedAt,
}
