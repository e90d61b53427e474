// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ListQuery, Page, RepositoryError};
use crate::domain::models::tip::{Tip, TipSummary};
use async_trait::async_trait;

/// 投注建议仓库特质
#[async_trait]
pub trait TipRepository: Send + Sync {
    async fn create(&self, tip: &Tip) -> Result<Tip, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Tip>, RepositoryError>;
    /// 分页列出摘要，不加载正文
    async fn list(&self, query: &ListQuery) -> Result<Page<TipSummary>, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
}
