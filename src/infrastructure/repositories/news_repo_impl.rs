// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query_helpers::apply_list_query;
use crate::domain::models::news::{News, NewsSummary};
use crate::domain::repositories::common::{ListQuery, Page, RepositoryError};
use crate::domain::repositories::news_repository::NewsRepository;
use crate::infrastructure::database::entities::news as news_entity;
use crate::infrastructure::database::entities::sea_orm_active_enums::SeaArchived;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;

/// 不含大字段的新闻行
#[derive(Debug, FromQueryResult)]
struct NewsSummaryRow {
    id: i32,
    url: String,
    title: String,
    short_title: String,
    section: String,
    subsection: String,
    published: DateTime<Utc>,
    updated: DateTime<Utc>,
    crawled: DateTime<Utc>,
    archived: SeaArchived,
    preamble: Option<String>,
}

impl From<NewsSummaryRow> for NewsSummary {
    fn from(row: NewsSummaryRow) -> Self {
        NewsSummary {
            id: row.id,
            url: row.url,
            title: row.title,
            short_title: row.short_title,
            section: row.section,
            subsection: row.subsection,
            published: row.published,
            updated: row.updated,
            crawled: row.crawled,
            archived: row.archived.into(),
            preamble: row.preamble,
        }
    }
}

impl From<news_entity::Model> for News {
    fn from(m: news_entity::Model) -> Self {
        News {
            id: m.id,
            url: m.url,
            title: m.title,
            short_title: m.short_title,
            section: m.section,
            subsection: m.subsection,
            published: m.published,
            updated: m.updated,
            crawled: m.crawled,
            archived: m.archived.into(),
            preamble: m.preamble,
            content: m.content,
            subtable: m.subtable,
        }
    }
}

/// 新闻仓库实现
pub struct NewsRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl NewsRepositoryImpl {
    /// 创建新的新闻仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn default_order() -> (news_entity::Column, Order) {
        (news_entity::Column::Published, Order::Desc)
    }
}

#[async_trait]
impl NewsRepository for NewsRepositoryImpl {
    async fn create(&self, news: &News) -> Result<News, RepositoryError> {
        let model = news_entity::ActiveModel {
            id: Set(news.id),
            url: Set(news.url.clone()),
            title: Set(news.title.clone()),
            short_title: Set(news.short_title.clone()),
            section: Set(news.section.clone()),
            subsection: Set(news.subsection.clone()),
            published: Set(news.published),
            updated: Set(news.updated),
            crawled: Set(news.crawled),
            archived: Set(news.archived.into()),
            preamble: Set(news.preamble.clone()),
            content: Set(news.content.clone()),
            subtable: Set(news.subtable.clone()),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<News>, RepositoryError> {
        let model = news_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<NewsSummary>, RepositoryError> {
        let total = news_entity::Entity::find().count(self.db.as_ref()).await?;

        // content and subtable are deferred
        let rows = apply_list_query(
            news_entity::Entity::find(),
            query,
            Self::default_order(),
            news_entity::Column::Id,
        )
        .select_only()
        .columns([
            news_entity::Column::Id,
            news_entity::Column::Url,
            news_entity::Column::Title,
            news_entity::Column::ShortTitle,
            news_entity::Column::Section,
            news_entity::Column::Subsection,
            news_entity::Column::Published,
            news_entity::Column::Updated,
            news_entity::Column::Crawled,
            news_entity::Column::Archived,
            news_entity::Column::Preamble,
        ])
        .into_model::<NewsSummaryRow>()
        .all(self.db.as_ref())
        .await?;

        Ok(Page {
            items: rows.into_iter().map(Into::into).collect(),
            total,
            page: query.page,
            per_page: query.per_page,
        })
    }

    async fn list_full(&self, query: &ListQuery) -> Result<Page<News>, RepositoryError> {
        let total = news_entity::Entity::find().count(self.db.as_ref()).await?;
        let models = apply_list_query(
            news_entity::Entity::find(),
            query,
            Self::default_order(),
            news_entity::Column::Id,
        )
        .all(self.db.as_ref())
        .await?;

        Ok(Page {
            items: models.into_iter().map(Into::into).collect(),
            total,
            page: query.page,
            per_page: query.per_page,
        })
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(news_entity::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        let result = news_entity::Entity::delete_many()
            .filter(news_entity::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
