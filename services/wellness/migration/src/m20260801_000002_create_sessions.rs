use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Sessions::Uuid)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Sessions::UserId).uuid().not_null())
                    .col(ColumnDef::new(Sessions::AssessmentId).integer())
                    .col(
                        ColumnDef::new(Sessions::SessionStart)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Sessions::SessionEnd).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Sessions::LastActiveSection)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Sessions::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Sessions::Section1Time).integer())
                    .col(ColumnDef::new(Sessions::Section2Time).integer())
                    .col(ColumnDef::new(Sessions::Section3Time).integer())
                    .col(ColumnDef::new(Sessions::UserAgent).text())
                    .col(ColumnDef::new(Sessions::IpAddress).string_len(45))
                    .col(ColumnDef::new(Sessions::ScreenResolution).string_len(20))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Sessions::Table, Sessions::AssessmentId)
                            .to(Assessments::Table, Assessments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_user_id")
                    .table(Sessions::Table)
                    .col(Sessions::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sessions {
    Table,
    Id,
    Uuid,
    UserId,
    AssessmentId,
    SessionStart,
    SessionEnd,
    LastActiveSection,
    IsCompleted,
    #[iden = "section_1_time"]
    Section1Time,
    #[iden = "section_2_time"]
    Section2Time,
    #[iden = "section_3_time"]
    Section3Time,
    UserAgent,
    IpAddress,
    ScreenResolution,
}

#[derive(Iden)]
enum Assessments {
    Table,
    Id,
}
