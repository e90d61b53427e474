// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model_name::ModelName;

/// 爬取记录实体
///
/// 外部爬虫每次执行（手动或定时）都会写入一条记录，
/// 本服务只负责展示这些记录以及插入等待中的手动爬取请求。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crawl {
    /// 自增ID
    pub id: i32,
    /// 爬取目标
    pub target: CrawlTarget,
    /// 是否为手动触发，`None` 表示来源未知（孤立记录）
    pub manual: Option<bool>,
    /// 爬取状态
    pub status: CrawlStatus,
    /// 开始时间
    pub started: DateTime<Utc>,
    /// 结束时间
    pub ended: Option<DateTime<Utc>>,
    /// 抓取到的条目数
    pub count: i32,
    /// 执行爬取的主机名
    pub host: String,
    /// 执行爬取的进程ID
    pub pid: i32,
}

impl Crawl {
    /// 表格视图中的爬取类型
    pub fn type_label(&self) -> &'static str {
        match self.manual {
            None => "Orphan",
            Some(true) => "Manual",
            Some(false) => "Scheduled",
        }
    }

    /// 管理页面中的爬取类型
    pub fn admin_type_label(&self) -> &'static str {
        if self.manual.unwrap_or(false) {
            "Manual Crawl"
        } else {
            "Auto Crawl"
        }
    }
}

/// 新建爬取记录
#[derive(Debug, Clone)]
pub struct NewCrawl {
    pub target: CrawlTarget,
    pub manual: Option<bool>,
    pub status: CrawlStatus,
    pub started: DateTime<Utc>,
    pub host: String,
    pub pid: i32,
}

/// 爬取目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlTarget {
    News,
    Tip,
}

impl CrawlTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrawlTarget::News => "news",
            CrawlTarget::Tip => "tip",
        }
    }

    /// 触发该目标爬取所需的权限
    pub fn crawl_permission(&self) -> String {
        format!("crawl_{}", self.as_str())
    }

    /// 爬取结果所在的模型
    pub fn model(&self) -> ModelName {
        match self {
            CrawlTarget::News => ModelName::News,
            CrawlTarget::Tip => ModelName::Tip,
        }
    }
}

impl fmt::Display for CrawlTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrawlTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(CrawlTarget::News),
            "tip" => Ok(CrawlTarget::Tip),
            _ => Err(()),
        }
    }
}

/// 爬取状态枚举
///
/// 状态转换遵循以下流程：
/// Waiting → Started → Running → Complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStatus {
    /// 等待执行
    #[default]
    Waiting,
    /// 已启动
    Started,
    /// 运行中
    Running,
    /// 已完成
    Complete,
}

impl CrawlStatus {
    pub const ALL: [CrawlStatus; 4] = [
        CrawlStatus::Waiting,
        CrawlStatus::Started,
        CrawlStatus::Running,
        CrawlStatus::Complete,
    ];
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrawlStatus::Waiting => write!(f, "waiting"),
            CrawlStatus::Started => write!(f, "started"),
            CrawlStatus::Running => write!(f, "running"),
            CrawlStatus::Complete => write!(f, "complete"),
        }
    }
}

impl FromStr for CrawlStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(CrawlStatus::Waiting),
            "started" => Ok(CrawlStatus::Started),
            "running" => Ok(CrawlStatus::Running),
            "complete" => Ok(CrawlStatus::Complete),
            _ => Err(()),
        }
    }
}
