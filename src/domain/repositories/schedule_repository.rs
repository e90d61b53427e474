// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ListQuery, Page, RepositoryError};
use crate::domain::models::schedule::{NewSchedule, Schedule, ScheduleLog};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// 计划变更日志的暂停守卫
///
/// 守卫存活期间不写入任何变更日志，守卫可以嵌套。
#[derive(Debug)]
pub struct LoggingSuspension {
    counter: Arc<AtomicUsize>,
}

impl LoggingSuspension {
    pub fn new(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for LoggingSuspension {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// 计划仓库特质
///
/// 每次创建、修改、删除计划都会写入一条变更日志，除非日志已被暂停。
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn create(&self, schedule: &NewSchedule) -> Result<Schedule, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, RepositoryError>;
    async fn update(&self, schedule: &Schedule) -> Result<Schedule, RepositoryError>;
    async fn list(&self, query: &ListQuery) -> Result<Page<Schedule>, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// 批量删除，返回实际删除的行数
    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
    /// 批量启用或停用，返回状态实际发生变化的行数
    async fn set_active(&self, ids: &[i32], active: bool) -> Result<u64, RepositoryError>;
    /// 某个计划的变更日志，按时间先后排列
    async fn logs(&self, schedule_id: i32) -> Result<Vec<ScheduleLog>, RepositoryError>;
    /// 暂停变更日志，直到返回的守卫被释放
    fn suspend_logging(&self) -> LoggingSuspension;
}
