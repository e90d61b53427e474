// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::{Crawl, CrawlStatus, CrawlTarget, NewCrawl};
use crate::domain::models::user::AuthUser;
use crate::domain::repositories::common::RepositoryError;
use crate::domain::repositories::crawl_repository::CrawlRepository;
use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use sysinfo::System;
use thiserror::Error;
use tracing::info;

/// 爬取请求错误
#[derive(Error, Debug)]
pub enum CrawlRequestError {
    #[error("Permission denied: {0} required")]
    Forbidden(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 手动爬取请求服务
///
/// 只负责登记一条等待中的爬取记录，实际的爬取由外部进程完成。
pub struct CrawlRequestService {
    crawl_repo: Arc<dyn CrawlRepository>,
}

impl CrawlRequestService {
    pub fn new(crawl_repo: Arc<dyn CrawlRepository>) -> Self {
        Self { crawl_repo }
    }

    /// 登记一次手动爬取
    ///
    /// # 参数
    ///
    /// * `target` - 爬取目标
    /// * `user` - 发起请求的用户，需要 `crawl_{target}` 权限
    ///
    /// # 返回值
    ///
    /// * `Ok(Crawl)` - 新建的等待中爬取记录
    /// * `Err(CrawlRequestError)` - 权限不足或数据库错误
    pub async fn request_crawl(
        &self,
        target: CrawlTarget,
        user: &AuthUser,
    ) -> Result<Crawl, CrawlRequestError> {
        let permission = target.crawl_permission();
        if !user.has_perm(&permission) {
            return Err(CrawlRequestError::Forbidden(permission));
        }

        let crawl = self
            .crawl_repo
            .create(&NewCrawl {
                target,
                manual: Some(true),
                status: CrawlStatus::Waiting,
                started: Utc::now(),
                host: host_name(),
                pid: pid_column(std::process::id()),
            })
            .await?;

        counter!("dz_crawl_requests_total", "target" => target.as_str()).increment(1);
        info!(
            "User {} requested {} crawl {}",
            user.username, target, crawl.id
        );
        Ok(crawl)
    }
}

fn host_name() -> String {
    System::host_name().unwrap_or_else(|| "localhost".to_string())
}

/// 进程号超出列的范围时记为 `i32::MAX`
fn pid_column(pid: u32) -> i32 {
    i32::try_from(pid).unwrap_or(i32::MAX)
}
