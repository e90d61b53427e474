use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create news table; ids are assigned by the source site
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(News::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(News::Url).string_len(200).not_null())
                    .col(ColumnDef::new(News::Title).string_len(150).not_null())
                    .col(ColumnDef::new(News::ShortTitle).string_len(80).not_null())
                    .col(ColumnDef::new(News::Section).string_len(20).not_null())
                    .col(ColumnDef::new(News::Subsection).string_len(80).not_null())
                    .col(
                        ColumnDef::new(News::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(News::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(News::Crawled)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(News::Archived).string_len(9).not_null())
                    .col(ColumnDef::new(News::Preamble).string_len(500))
                    .col(ColumnDef::new(News::Content).text().not_null())
                    .col(ColumnDef::new(News::Subtable).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_news_published_archived")
                    .table(News::Table)
                    .col(News::Published)
                    .col(News::Archived)
                    .to_owned(),
            )
            .await?;

        // Create tips table
        manager
            .create_table(
                Table::create()
                    .table(Tips::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tips::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Tips::Url).string_len(200).not_null())
                    .col(ColumnDef::new(Tips::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Tips::Tipster).string_len(80).not_null())
                    .col(ColumnDef::new(Tips::Section).string_len(20).not_null())
                    .col(ColumnDef::new(Tips::Subsection).string_len(80).not_null())
                    .col(
                        ColumnDef::new(Tips::Published)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tips::Updated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Tips::Crawled)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tips::Archived).string_len(9).not_null())
                    .col(ColumnDef::new(Tips::Preamble).string_len(500))
                    .col(ColumnDef::new(Tips::Content).text().not_null())
                    .col(ColumnDef::new(Tips::Result).string_len(40))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tips_published_archived")
                    .table(Tips::Table)
                    .col(Tips::Published)
                    .col(Tips::Archived)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tips::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(News::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Url,
    Title,
    ShortTitle,
    Section,
    Subsection,
    Published,
    Updated,
    Crawled,
    Archived,
    Preamble,
    Content,
    Subtable,
}

#[derive(DeriveIden)]
enum Tips {
    Table,
    Id,
    Url,
    Title,
    Tipster,
    Section,
    Subsection,
    Published,
    Updated,
    Crawled,
    Archived,
    Preamble,
    Content,
    Result,
}
