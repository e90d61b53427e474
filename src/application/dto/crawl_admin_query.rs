// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::{CrawlStatus, CrawlTarget};
use crate::domain::repositories::crawl_repository::CrawlFilter;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// 允许过滤的开始年份
const FILTER_YEARS: RangeInclusive<i32> = 1..=9999;

/// 爬取管理页面的过滤参数
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CrawlAdminQueryDto {
    pub manual: Option<String>,
    pub target: Option<String>,
    pub status: Option<String>,
    pub year: Option<i32>,
    pub page: Option<u64>,
}

impl CrawlAdminQueryDto {
    /// 转换为仓库过滤条件，未知的取值返回错误信息
    pub fn to_filter(&self) -> Result<CrawlFilter, String> {
        let manual = match self.manual.as_deref() {
            None | Some("") => None,
            Some("1") => Some(true),
            Some("0") => Some(false),
            Some(other) => return Err(format!("unknown manual filter '{}'", other)),
        };
        let target = match self.target.as_deref() {
            None | Some("") => None,
            Some(target) => Some(
                target
                    .parse::<CrawlTarget>()
                    .map_err(|_| format!("unknown target '{}'", target))?,
            ),
        };
        let status = match self.status.as_deref() {
            None | Some("") => None,
            Some(status) => Some(
                status
                    .parse::<CrawlStatus>()
                    .map_err(|_| format!("unknown status '{}'", status))?,
            ),
        };

        let year = match self.year {
            Some(year) if !FILTER_YEARS.contains(&year) => {
                return Err(format!("year {} out of range", year))
            }
            year => year,
        };

        Ok(CrawlFilter {
            manual,
            target,
            status,
            year,
        })
    }

    /// 当前过滤条件的查询串，`key` 被替换为 `value`（`None` 表示移除）
    pub fn query_string_with(&self, key: &str, value: Option<&str>) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        let current = [
            ("manual", self.manual.clone()),
            ("target", self.target.clone()),
            ("status", self.status.clone()),
            ("year", self.year.map(|y| y.to_string())),
        ];
        for (name, current_value) in current {
            let value = if name == key {
                value.map(str::to_string)
            } else {
                current_value
            };
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                pairs.push((name, value));
            }
        }
        if pairs.is_empty() {
            return "?".to_string();
        }
        format!("?{}", serde_urlencoded::to_string(&pairs).unwrap_or_default())
    }
}
