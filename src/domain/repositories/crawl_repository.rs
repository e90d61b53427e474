// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ListQuery, Page, RepositoryError};
use crate::domain::models::crawl::{Crawl, CrawlStatus, CrawlTarget, NewCrawl};
use async_trait::async_trait;

/// 爬取记录过滤条件
///
/// 所有条件为空时不过滤。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlFilter {
    /// 手动 / 自动
    pub manual: Option<bool>,
    pub target: Option<CrawlTarget>,
    pub status: Option<CrawlStatus>,
    /// 按开始时间所在年份过滤
    pub year: Option<i32>,
}

/// 爬取记录仓库特质
///
/// 定义爬取记录数据访问接口。记录主要由外部爬虫写入，
/// 本服务负责展示、删除以及插入手动爬取请求。
#[async_trait]
pub trait CrawlRepository: Send + Sync {
    /// 创建爬取记录
    ///
    /// # 参数
    ///
    /// * `crawl` - 新记录的内容
    ///
    /// # 返回值
    ///
    /// * `Ok(Crawl)` - 包含生成ID的记录
    /// * `Err(RepositoryError)` - 创建失败时返回错误
    async fn create(&self, crawl: &NewCrawl) -> Result<Crawl, RepositoryError>;

    /// 根据ID查找爬取记录
    async fn find_by_id(&self, id: i32) -> Result<Option<Crawl>, RepositoryError>;

    /// 按条件分页列出爬取记录
    async fn list(
        &self,
        filter: &CrawlFilter,
        query: &ListQuery,
    ) -> Result<Page<Crawl>, RepositoryError>;

    /// 有爬取记录的年份，降序排列
    async fn years(&self) -> Result<Vec<i32>, RepositoryError>;

    /// 爬取记录总数
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// 批量删除
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 实际删除的行数
    /// * `Err(RepositoryError)` - 操作失败时返回错误
    async fn delete_many(&self, ids: &[i32]) -> Result<u64, RepositoryError>;
}
