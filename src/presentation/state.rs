// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::models::model_name::ModelName;
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::news_repository::NewsRepository;
use crate::domain::repositories::schedule_repository::ScheduleRepository;
use crate::domain::repositories::tip_repository::TipRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::crawl_request_service::CrawlRequestService;
use crate::domain::services::row_action_service::{
    CrawlRows, NewsRows, RowActionService, ScheduleRows, TipRows, UserRows,
};
use crate::domain::services::user_sync_service::UserSyncService;
use crate::infrastructure::repositories::{
    crawl_repo_impl::CrawlRepositoryImpl, news_repo_impl::NewsRepositoryImpl,
    schedule_repo_impl::ScheduleRepositoryImpl, tip_repo_impl::TipRepositoryImpl,
    user_repo_impl::UserRepositoryImpl,
};
use crate::infrastructure::security::password::PasswordHasher;
use crate::infrastructure::session::store::SessionStore;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;

/// 应用共享状态
///
/// 所有仓库和服务在启动时创建一次，由各个请求共享。
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub sessions: Arc<SessionStore>,
    pub news_repo: Arc<dyn NewsRepository>,
    pub tip_repo: Arc<dyn TipRepository>,
    pub crawl_repo: Arc<dyn CrawlRepository>,
    pub schedule_repo: Arc<dyn ScheduleRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub user_sync: Arc<UserSyncService>,
    pub row_actions: Arc<RowActionService>,
    pub crawl_requests: Arc<CrawlRequestService>,
}

impl AppState {
    /// 基于数据库连接组装全部仓库和服务
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    /// * `settings` - 应用配置
    ///
    /// # 返回值
    ///
    /// * `Err` - 密码哈希参数不合法
    pub fn new(db: Arc<DatabaseConnection>, settings: Arc<Settings>) -> anyhow::Result<Self> {
        let news_repo: Arc<dyn NewsRepository> = Arc::new(NewsRepositoryImpl::new(db.clone()));
        let tip_repo: Arc<dyn TipRepository> = Arc::new(TipRepositoryImpl::new(db.clone()));
        let crawl_repo: Arc<dyn CrawlRepository> = Arc::new(CrawlRepositoryImpl::new(db.clone()));
        let schedule_repo: Arc<dyn ScheduleRepository> =
            Arc::new(ScheduleRepositoryImpl::new(db.clone()));
        let user_repo: Arc<dyn UserRepository> = Arc::new(UserRepositoryImpl::new(db));

        let hasher = PasswordHasher::new(&settings.auth)?;
        let user_sync = Arc::new(UserSyncService::new(user_repo.clone(), hasher));
        let row_actions = RowActionService::new()
            .register(ModelName::News, Arc::new(NewsRows(news_repo.clone())))
            .register(ModelName::Tip, Arc::new(TipRows(tip_repo.clone())))
            .register(ModelName::Crawl, Arc::new(CrawlRows(crawl_repo.clone())))
            .register(
                ModelName::Schedule,
                Arc::new(ScheduleRows(schedule_repo.clone())),
            )
            .register(
                ModelName::User,
                Arc::new(UserRows {
                    sync: user_sync.clone(),
                    user_repo: user_repo.clone(),
                }),
            );
        let crawl_requests = Arc::new(CrawlRequestService::new(crawl_repo.clone()));
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(
            settings.auth.session_ttl_secs,
        )));

        Ok(Self {
            settings,
            sessions,
            news_repo,
            tip_repo,
            crawl_repo,
            schedule_repo,
            user_repo,
            user_sync,
            row_actions: Arc::new(row_actions),
            crawl_requests,
        })
    }
}
