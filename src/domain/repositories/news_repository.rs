// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ListQuery, Page, RepositoryError};
use crate::domain::models::news::{News, NewsSummary};
use async_trait::async_trait;

/// 新闻仓库特质
///
/// 列表查询只返回摘要，完整正文需要按ID单独加载。
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// 保存新闻（爬虫写入或测试数据）
    async fn create(&self, news: &News) -> Result<News, RepositoryError>;
    /// 根据ID加载完整新闻
    async fn find_by_id(&self, id: i32) -> Result<Option<News>, RepositoryError>;
    /// 分页列出新闻摘要
    async fn list(&self, query: &ListQuery) -> Result<Page<NewsSummary>, RepositoryError>;
    /// 分页列出完整新闻，供需要正文预览的页面使用
    async fn list_full(&self, query: &ListQuery) -> Result<Page<News>, RepositoryError>;
    /// 新闻总数
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// 批量删除，返回实际删除的行数
    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
}
