// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query_helpers::apply_list_query;
use crate::domain::models::schedule::{NewSchedule, Schedule, ScheduleLog, ScheduleLogAction};
use crate::domain::repositories::common::{ListQuery, Page, RepositoryError};
use crate::domain::repositories::schedule_repository::{LoggingSuspension, ScheduleRepository};
use crate::infrastructure::database::entities::schedule as schedule_entity;
use crate::infrastructure::database::entities::schedule_log as schedule_log_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::Expr, *};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

impl From<schedule_entity::Model> for Schedule {
    fn from(m: schedule_entity::Model) -> Self {
        Schedule {
            id: m.id,
            target: m.target.into(),
            cron: m.cron,
            is_active: m.is_active,
            last_run: m.last_run,
            comment: m.comment,
        }
    }
}

impl From<schedule_log_entity::Model> for ScheduleLog {
    fn from(m: schedule_log_entity::Model) -> Self {
        ScheduleLog {
            id: m.id,
            schedule_id: m.schedule_id,
            action: m.action,
            snapshot: m.snapshot,
            logged_at: m.logged_at,
        }
    }
}

/// 计划仓库实现
///
/// 应用共享同一个仓库实例，因此日志暂停计数在进程内全局生效。
pub struct ScheduleRepositoryImpl {
    db: Arc<DatabaseConnection>,
    suspended: Arc<AtomicUsize>,
}

impl ScheduleRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            suspended: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn logging_enabled(&self) -> bool {
        self.suspended.load(Ordering::SeqCst) == 0
    }

    async fn write_log(
        &self,
        schedule: &Schedule,
        action: ScheduleLogAction,
    ) -> Result<(), RepositoryError> {
        if !self.logging_enabled() {
            debug!(
                "Schedule logging suspended, skipping {} for schedule {}",
                action, schedule.id
            );
            return Ok(());
        }

        let snapshot = serde_json::to_value(schedule)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;
        let log = schedule_log_entity::ActiveModel {
            schedule_id: Set(schedule.id),
            action: Set(action.to_string()),
            snapshot: Set(snapshot),
            logged_at: Set(Utc::now()),
            ..Default::default()
        };
        log.insert(self.db.as_ref()).await?;
        Ok(())
    }

    async fn find_many(&self, ids: &[i32]) -> Result<Vec<Schedule>, RepositoryError> {
        let models = schedule_entity::Entity::find()
            .filter(schedule_entity::Column::Id.is_in(ids.to_vec()))
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleRepositoryImpl {
    async fn create(&self, schedule: &NewSchedule) -> Result<Schedule, RepositoryError> {
        let model = schedule_entity::ActiveModel {
            target: Set(schedule.target.into()),
            cron: Set(schedule.cron.clone()),
            is_active: Set(schedule.is_active),
            last_run: Set(None),
            comment: Set(schedule.comment.clone()),
            ..Default::default()
        };

        let saved: Schedule = model.insert(self.db.as_ref()).await?.into();
        self.write_log(&saved, ScheduleLogAction::Created).await?;
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, RepositoryError> {
        let model = schedule_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, schedule: &Schedule) -> Result<Schedule, RepositoryError> {
        let mut model: schedule_entity::ActiveModel = schedule_entity::Entity::find_by_id(schedule.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.target = Set(schedule.target.into());
        model.cron = Set(schedule.cron.clone());
        model.is_active = Set(schedule.is_active);
        model.last_run = Set(schedule.last_run);
        model.comment = Set(schedule.comment.clone());

        let saved: Schedule = model.update(self.db.as_ref()).await?.into();
        self.write_log(&saved, ScheduleLogAction::Updated).await?;
        Ok(saved)
    }

    async fn list(&self, query: &ListQuery) -> Result<Page<Schedule>, RepositoryError> {
        let total = schedule_entity::Entity::find()
            .count(self.db.as_ref())
            .await?;
        let models = apply_list_query(
            schedule_entity::Entity::find(),
            query,
            (schedule_entity::Column::Id, Order::Asc),
            schedule_entity::Column::Id,
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
        Ok(schedule_entity::Entity::find()
            .count(self.db.as_ref())
            .await?)
    }

    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError> {
        let existing = self.find_many(ids).await?;

        let result = schedule_entity::Entity::delete_many()
            .filter(schedule_entity::Column::Id.is_in(ids.to_vec()))
            .exec(self.db.as_ref())
            .await?;

        for schedule in &existing {
            self.write_log(schedule, ScheduleLogAction::Deleted).await?;
        }
        Ok(result.rows_affected)
    }

    async fn set_active(&self, ids: &[i32], active: bool) -> Result<u64, RepositoryError> {
        let changed: Vec<Schedule> = self
            .find_many(ids)
            .await?
            .into_iter()
            .filter(|s| s.is_active != active)
            .collect();
        if changed.is_empty() {
            return Ok(0);
        }

        let changed_ids: Vec<i32> = changed.iter().map(|s| s.id).collect();
        let result = schedule_entity::Entity::update_many()
            .col_expr(schedule_entity::Column::IsActive, Expr::value(active))
            .filter(schedule_entity::Column::Id.is_in(changed_ids))
            .exec(self.db.as_ref())
            .await?;

        let action = if active {
            ScheduleLogAction::Enabled
        } else {
            ScheduleLogAction::Disabled
        };
        for mut schedule in changed {
            schedule.is_active = active;
            self.write_log(&schedule, action).await?;
        }
        Ok(result.rows_affected)
    }

    async fn logs(&self, schedule_id: i32) -> Result<Vec<ScheduleLog>, RepositoryError> {
        let models = schedule_log_entity::Entity::find()
            .filter(schedule_log_entity::Column::ScheduleId.eq(schedule_id))
            .order_by_asc(schedule_log_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    fn suspend_logging(&self) -> LoggingSuspension {
        LoggingSuspension::new(self.suspended.clone())
    }
}
