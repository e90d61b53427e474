use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create schedules table
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schedules::Target).string_len(10).not_null())
                    .col(ColumnDef::new(Schedules::Cron).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Schedules::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Schedules::LastRun).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Schedules::Comment)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        // Create schedule_logs table; rows outlive the schedule they describe
        manager
            .create_table(
                Table::create()
                    .table(ScheduleLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScheduleLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScheduleLogs::ScheduleId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScheduleLogs::Action).string_len(10).not_null())
                    .col(ColumnDef::new(ScheduleLogs::Snapshot).json().not_null())
                    .col(
                        ColumnDef::new(ScheduleLogs::LoggedAt)
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
                    .name("idx_schedule_logs_schedule")
                    .table(ScheduleLogs::Table)
                    .col(ScheduleLogs::ScheduleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScheduleLogs::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Schedules {
    Table,
    Id,
    Target,
    Cron,
    IsActive,
    LastRun,
    Comment,
}

#[derive(DeriveIden)]
enum ScheduleLogs {
    Table,
    Id,
    ScheduleId,
    Action,
    Snapshot,
    LoggedAt,
}
