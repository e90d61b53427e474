// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::query_helpers::apply_list_query;
use crate::domain::models::crawl::{Crawl, NewCrawl};
use crate::domain::repositories::common::{ListQuery, Page, RepositoryError};
use crate::domain::repositories::crawl_repository::{CrawlFilter, CrawlRepository};
use crate::infrastructure::database::entities::crawl as crawl_entity;
use crate::infrastructure::database::entities::sea_orm_active_enums::{
    SeaCrawlStatus, SeaCrawlTarget,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::sync::Arc;

impl From<crawl_entity::Model> for Crawl {
    fn from(m: crawl_entity::Model) -> Self {
        Crawl {
            id: m.id,
            target: m.target.into(),
            manual: m.manual,
            status: m.status.into(),
            started: m.started,
            ended: m.ended,
            count: m.count,
            host: m.host,
            pid: m.pid,
        }
    }
}

/// 爬取仓库实现
pub struct CrawlRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CrawlRepositoryImpl {
    /// 创建新的爬取仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的爬取仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(filter: &CrawlFilter) -> Result<Select<crawl_entity::Entity>, RepositoryError> {
        let mut select = crawl_entity::Entity::find();

        if let Some(manual) = filter.manual {
            select = select.filter(crawl_entity::Column::Manual.eq(manual));
        }
        if let Some(target) = filter.target {
            select = select.filter(crawl_entity::Column::Target.eq(SeaCrawlTarget::from(target)));
        }
        if let Some(status) = filter.status {
            select = select.filter(crawl_entity::Column::Status.eq(SeaCrawlStatus::from(status)));
        }
        if let Some(year) = filter.year {
            let (start, end) = year_bounds(year)?;
            select = select
                .filter(crawl_entity::Column::Started.gte(start))
                .filter(crawl_entity::Column::Started.lt(end));
        }

        Ok(select)
    }
}

/// 某一年的起止时间 `[start, end)`
fn year_bounds(year: i32) -> Result<(DateTime<Utc>, DateTime<Utc>), RepositoryError> {
    let start_of = |year: i32| Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single();
    year.checked_add(1)
        .and_then(|next| Some((start_of(year)?, start_of(next)?)))
        .ok_or_else(|| RepositoryError::InvalidData(format!("year {} out of range", year)))
}

/// 取开始时间年份的SQL表达式
///
/// SQLite 中时间以 ISO 8601 文本保存，年份是前四个字符。
fn started_year_sql(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::Postgres => "CAST(EXTRACT(YEAR FROM started AT TIME ZONE 'UTC') AS INTEGER)",
        _ => "CAST(substr(started, 1, 4) AS INTEGER)",
    }
}

#[async_trait]
impl CrawlRepository for CrawlRepositoryImpl {
    async fn create(&self, crawl: &NewCrawl) -> Result<Crawl, RepositoryError> {
        let model = crawl_entity::ActiveModel {
            target: Set(crawl.target.into()),
            manual: Set(crawl.manual),
            status: Set(crawl.status.into()),
            started: Set(crawl.started),
            ended: Set(None),
            count: Set(0),
            host: Set(crawl.host.clone()),
            pid: Set(crawl.pid),
            ..Default::default()
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Crawl>, RepositoryError> {
        let model = crawl_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list(
        &self,
        filter: &CrawlFilter,
        query: &ListQuery,
    ) -> Result<Page<Crawl>, RepositoryError> {
        let total = Self::filtered(filter)?.count(self.db.as_ref()).await?;
        let models = apply_list_query(
            Self::filtered(filter)?,
            query,
            (crawl_entity::Column::Id, Order::Desc),
            crawl_entity::Column::Id,
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

    async fn years(&self) -> Result<Vec<i32>, RepositoryError> {
        let year = started_year_sql(self.db.get_database_backend());
        let mut years: Vec<i32> = crawl_entity::Entity::find()
            .select_only()
            .column_as(Expr::cust(year), "year")
            .distinct()
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        years.sort_unstable_by(|a, b| b.cmp(a));
        Ok(years)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(crawl_entity::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        let result = crawl_entity::Entity::delete_many()
            .filter(crawl_entity::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected)
    }
}
