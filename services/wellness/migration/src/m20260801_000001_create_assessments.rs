use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::Uuid)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::PreferredName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Age).small_integer().not_null())
                    .col(
                        ColumnDef::new(Assessments::Gender)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::HeightFeet)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::HeightInches)
                            .small_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Weight).integer().not_null())
                    .col(
                        ColumnDef::new(Assessments::Location)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::MaritalStatus).string_len(20))
                    .col(
                        ColumnDef::new(Assessments::Goal1)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Goal2).string_len(200))
                    .col(ColumnDef::new(Assessments::Goal3).string_len(200))
                    .col(baseline_col(Assessments::BaselineFulfillment))
                    .col(baseline_col(Assessments::BaselineHappiness))
                    .col(baseline_col(Assessments::BaselineEnergy))
                    .col(baseline_col(Assessments::BaselineStress))
                    .col(baseline_col(Assessments::BaselineSleep))
                    .col(baseline_col(Assessments::BaselineActivity))
                    .col(baseline_col(Assessments::BaselineNutrition))
                    .col(baseline_col(Assessments::BaselinePurpose))
                    .col(baseline_col(Assessments::BaselineMotivation))
                    .col(baseline_col(Assessments::BaselineConfidence))
                    .col(ColumnDef::new(Assessments::DurationMinutes).integer())
                    .col(
                        ColumnDef::new(Assessments::SectionsCompleted)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assessments::GoalsSelected)
                            .small_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assessments::FormInteractions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assessments::PageRevisits)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Assessments::SavedProgress)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assessments::CompletionDeviceType).string_len(50))
                    .col(ColumnDef::new(Assessments::CompletionBrowser).string_len(100))
                    .col(ColumnDef::new(Assessments::AvgWellnessScore).small_integer())
                    .col(ColumnDef::new(Assessments::CompletionQualityScore).double())
                    .col(
                        ColumnDef::new(Assessments::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Assessments::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await
    }
}

fn baseline_col(name: Assessments) -> ColumnDef {
    ColumnDef::new(name)
        .small_integer()
        .not_null()
        .default(50)
        .to_owned()
}

#[derive(Iden)]
enum Assessments {
    Table,
    Id,
    Uuid,
    UserId,
    PreferredName,
    Age,
    Gender,
    HeightFeet,
    HeightInches,
    Weight,
    Location,
    MaritalStatus,
    #[iden = "goal_1"]
    Goal1,
    #[iden = "goal_2"]
    Goal2,
    #[iden = "goal_3"]
    Goal3,
    BaselineFulfillment,
    BaselineHappiness,
    BaselineEnergy,
    BaselineStress,
    BaselineSleep,
    BaselineActivity,
    BaselineNutrition,
    BaselinePurpose,
    BaselineMotivation,
    BaselineConfidence,
    DurationMinutes,
    SectionsCompleted,
    GoalsSelected,
    FormInteractions,
    PageRevisits,
    SavedProgress,
    CompletionDeviceType,
    CompletionBrowser,
    AvgWellnessScore,
    CompletionQualityScore,
    SubmittedAt,
    UpdatedAt,
}
