// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::crawl::CrawlTarget;

/// 定时爬取计划
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i32,
    pub target: CrawlTarget,
    /// cron 表达式，由外部调度器解释
    pub cron: String,
    pub is_active: bool,
    pub last_run: Option<DateTime<Utc>>,
    pub comment: String,
}

/// 新建计划
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSchedule {
    pub target: CrawlTarget,
    #[validate(length(min = 1, max = 100))]
    pub cron: String,
    pub is_active: bool,
    #[validate(length(max = 200))]
    pub comment: String,
}

/// 计划变更日志中的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleLogAction {
    Created,
    Updated,
    Deleted,
    Enabled,
    Disabled,
}

impl fmt::Display for ScheduleLogAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScheduleLogAction::Created => write!(f, "created"),
            ScheduleLogAction::Updated => write!(f, "updated"),
            ScheduleLogAction::Deleted => write!(f, "deleted"),
            ScheduleLogAction::Enabled => write!(f, "enabled"),
            ScheduleLogAction::Disabled => write!(f, "disabled"),
        }
    }
}

/// 计划变更日志
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleLog {
    pub id: i32,
    pub schedule_id: i32,
    pub action: String,
    /// 变更时计划的完整快照
    pub snapshot: serde_json::Value,
    pub logged_at: DateTime<Utc>,
}
