// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query_helpers::apply_list_query;
use crate::domain::models::tip::{Tip, TipSummary};
use crate::domain::repositories::common::{ListQuery, Page, RepositoryError};
use crate::domain::repositories::tip_repository::TipRepository;
use crate::infrastructure::database::entities::sea_orm_active_enums::SeaArchived;
use crate::infrastructure::database::entities::tip as tip_entity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;

#[derive(Debug, FromQueryResult)]
struct TipSummaryRow {
    id: i32,
    url: String,
    title: String,
    tipster: String,
    section: String,
    subsection: String,
    published: DateTime<Utc>,
    updated: DateTime<Utc>,
    crawled: DateTime<Utc>,
    archived: SeaArchived,
    preamble: Option<String>,
    result: Option<String>,
}

impl From<TipSummaryRow> for TipSummary {
    fn from(row: TipSummaryRow) -> Self {
        TipSummary {
            id: row.id,
            url: row.url,
            title: row.title,
            tipster: row.tipster,
            section: row.section,
            subsection: row.subsection,
            published: row.published,
            updated: row.updated,
            crawled: row.crawled,
            archived: row.archived.into(),
            preamble: row.preamble,
            result: row.result,
        }
    }
}

impl From<tip_entity::Model> for Tip {
    fn from(m: tip_entity::Model) -> Self {
        Tip {
            id: m.id,
            url: m.url,
            title: m.title,
            tipster: m.tipster,
            section: m.section,
            subsection: m.subsection,
            published: m.published,
            updated: m.updated,
            crawled: m.crawled,
            archived: m.archived.into(),
            preamble: m.preamble,
            content: m.content,
            result: m.result,
        }
    }
}

/// 投注建议仓库实现
pub struct TipRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TipRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TipRepository for TipRepositoryImpl {
    async fn create(&self, tip: &Tip) -> Result<Tip, RepositoryError> {
        let model = tip_entity::ActiveModel {
            id: Set(tip.id),
            url: Set(tip.url.clone()),
            title: Set(tip.title.clone()),
            tipster: Set(tip.tipster.clone()),
            section: Set(tip.section.clone()),
            subsection: Set(tip.subsection.clone()),
            published: Set(tip.published),
            updated: Set(tip.updated),
            crawled: Set(tip.crawled),
            archived: Set(tip.archived.into()),
            preamble: Set(tip.preamble.clone()),
            content: Set(tip.content.clone()),
            result: Set(tip.result.clone()),
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tip>, RepositoryError> {
        let model = tip_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<TipSummary>, RepositoryError> {
        let total = tip_entity::Entity::find().count(self.db.as_ref()).await?;

        let rows = apply_list_query(
            tip_entity::Entity::find(),
            query,
            (tip_entity::Column::Published, Order::Desc),
            tip_entity::Column::Id,
        )
        .select_only()
        .columns([
            tip_entity::Column::Id,
            tip_entity::Column::Url,
            tip_entity::Column::Title,
            tip_entity::Column::Tipster,
            tip_entity::Column::Section,
            tip_entity::Column::Subsection,
            tip_entity::Column::Published,
            tip_entity::Column::Updated,
            tip_entity::Column::Crawled,
            tip_entity::Column::Archived,
            tip_entity::Column::Preamble,
            tip_entity::Column::Result,
        ])
        .into_model::<TipSummaryRow>()
        .all(self.db.as_ref())
        .await?;

        Ok(Page {
            items: rows.into_iter().map(Into::into).collect(),
            total,
            page: query.page,
            per_page: query.per_page,
        })
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(tip_entity::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        let result = tip_entity::Entity::delete_many()
            .filter(tip_entity::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
