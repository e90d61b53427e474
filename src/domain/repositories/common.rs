// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 数据库中的值无法映射到领域模型
    #[error("Invalid stored value: {0}")]
    InvalidData(String),
}

/// 请求可以指定的最大页码
pub const MAX_PAGE: u64 = 1_000_000;

/// 列表查询参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 排序列名，`None` 时使用仓库默认排序
    pub sort: Option<String>,
    pub descending: bool,
    /// 页码，从1开始
    pub page: u64,
    pub per_page: u64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort: None,
            descending: false,
            page: 1,
            per_page: 25,
        }
    }
}

impl ListQuery {
    /// 解析形如 `-published` 的排序参数
    pub fn with_sort(mut self, sort: &str) -> Self {
        match sort.strip_prefix('-') {
            Some(column) => {
                self.sort = Some(column.to_string());
                self.descending = true;
            }
            None => {
                self.sort = Some(sort.to_string());
                self.descending = false;
            }
        }
        self
    }

    /// 设置页码，缺省为第1页，超出范围时截断到 `1..=MAX_PAGE`
    pub fn with_page(mut self, page: Option<u64>) -> Self {
        self.page = page.unwrap_or(1).clamp(1, MAX_PAGE);
        self
    }

    /// 跳过的行数，不超过数据库能表示的范围
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 符合条件的总行数
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn num_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 1;
        }
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.num_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
