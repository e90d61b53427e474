use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create crawls table
        manager
            .create_table(
                Table::create()
                    .table(Crawls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Crawls::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Crawls::Target).string_len(10).not_null())
                    // NULL marks an orphan crawl whose trigger is unknown
                    .col(ColumnDef::new(Crawls::Manual).boolean())
                    .col(ColumnDef::new(Crawls::Status).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Crawls::Started)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Crawls::Ended).timestamp_with_time_zone())
                    .col(ColumnDef::new(Crawls::Count).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Crawls::Host)
                            .string_len(64)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Crawls::Pid).integer().not_null().default(0))
                    .to_owned(),
            )
            .await?;

        // Create indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_crawls_target_status")
                    .table(Crawls::Table)
                    .col(Crawls::Target)
                    .col(Crawls::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Crawls::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Crawls {
    Table,
    Id,
    Target,
    Manual,
    Status,
    Started,
    Ended,
    Count,
    Host,
    Pid,
}
