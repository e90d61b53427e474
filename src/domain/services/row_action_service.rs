// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::model_name::ModelName;
use crate::domain::models::user::{AuthUser, AuthUserChange};
use crate::domain::repositories::common::RepositoryError;
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::news_repository::NewsRepository;
use crate::domain::repositories::schedule_repository::ScheduleRepository;
use crate::domain::repositories::tip_repository::TipRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::services::user_sync_service::{UserSyncError, UserSyncService};
use async_trait::async_trait;
use metrics::counter;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// 行操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Enable,
    Disable,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::Delete => "delete",
            RowAction::Enable => "enable",
            RowAction::Disable => "disable",
        }
    }

    /// 对某个模型执行该操作所需的权限
    pub fn required_permission(&self, model: ModelName) -> String {
        match self {
            RowAction::Delete => model.delete_permission(),
            RowAction::Enable | RowAction::Disable => model.change_permission(),
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delete" => Ok(RowAction::Delete),
            "enable" => Ok(RowAction::Enable),
            "disable" => Ok(RowAction::Disable),
            _ => Err(()),
        }
    }
}

/// 行操作错误
#[derive(Error, Debug)]
pub enum RowActionError {
    /// 请求参数不合法
    #[error("Invalid row action: {0}")]
    Invalid(String),
    /// 缺少所需权限
    #[error("Permission denied: {0} required")]
    Forbidden(String),
    /// 模型不支持该操作
    #[error("Action {action} is not supported for {model}")]
    Unsupported { model: ModelName, action: RowAction },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    UserSync(#[from] UserSyncError),
}

/// 解析后的行操作请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActionRequest {
    pub model: ModelName,
    pub action: RowAction,
    /// 去重后的主键，保持提交顺序
    pub ids: Vec<i32>,
}

impl RowActionRequest {
    /// 解析表单字段
    ///
    /// # 参数
    ///
    /// * `model_name` - 模型名称
    /// * `action` - 操作名称
    /// * `row_ids` - 逗号分隔的主键列表
    ///
    /// # 返回值
    ///
    /// * `Ok(RowActionRequest)` - 解析成功
    /// * `Err(RowActionError::Invalid)` - 任一字段缺失或不合法
    pub fn parse(
        model_name: Option<&str>,
        action: Option<&str>,
        row_ids: Option<&str>,
    ) -> Result<Self, RowActionError> {
        let model_name = required(model_name, "model_name")?;
        let action = required(action, "action")?;
        let row_ids = required(row_ids, "row_ids")?;

        let model = model_name
            .parse::<ModelName>()
            .map_err(|_| RowActionError::Invalid(format!("unknown model '{}'", model_name)))?;
        let action = action
            .parse::<RowAction>()
            .map_err(|_| RowActionError::Invalid(format!("unknown action '{}'", action)))?;

        let mut ids = Vec::new();
        for raw in row_ids.split(',') {
            let id = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| RowActionError::Invalid(format!("invalid row id '{}'", raw)))?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Ok(Self { model, action, ids })
    }

    pub fn required_permission(&self) -> String {
        self.action.required_permission(self.model)
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, RowActionError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RowActionError::Invalid(format!("{} is required", field))),
    }
}

/// 可以执行行操作的模型
#[async_trait]
pub trait RowActionTarget: Send + Sync {
    /// 删除给定主键的行，返回实际删除的行数
    async fn delete_rows(&self, ids: &[i32]) -> Result<u64, RowActionError>;

    /// 是否支持启用和停用
    fn supports_enable(&self) -> bool {
        false
    }

    /// 启用或停用给定主键的行，返回状态发生变化的行数
    ///
    /// 只在 `supports_enable` 返回 true 时调用。
    async fn set_enabled(&self, _ids: &[i32], _enabled: bool) -> Result<u64, RowActionError> {
        Ok(0)
    }
}

pub struct NewsRows(pub Arc<dyn NewsRepository>);

#[async_trait]
impl RowActionTarget for NewsRows {
    async fn delete_rows(&self, ids: &[i32]) -> Result<u64, RowActionError> {
        Ok(self.0.delete_many(ids).await?)
    }
}

pub struct TipRows(pub Arc<dyn TipRepository>);

#[async_trait]
impl RowActionTarget for TipRows {
    async fn delete_rows(&self, ids: &[i32]) -> Result<u64, RowActionError> {
        Ok(self.0.delete_many(ids).await?)
    }
}

pub struct CrawlRows(pub Arc<dyn CrawlRepository>);

#[async_trait]
impl RowActionTarget for CrawlRows {
    async fn delete_rows(&self, ids: &[i32]) -> Result<u64, RowActionError> {
        Ok(self.0.delete_many(ids).await?)
    }
}

pub struct ScheduleRows(pub Arc<dyn ScheduleRepository>);

#[async_trait]
impl RowActionTarget for ScheduleRows {
    async fn delete_rows(&self, ids: &[i32]) -> Result<u64, RowActionError> {
        Ok(self.0.delete_many(ids).await?)
    }

    fn supports_enable(&self) -> bool {
        true
    }

    async fn set_enabled(&self, ids: &[i32], enabled: bool) -> Result<u64, RowActionError> {
        Ok(self.0.set_active(ids, enabled).await?)
    }
}

/// 用户行操作，删除和启停都经过用户同步服务
pub struct UserRows {
    pub sync: Arc<UserSyncService>,
    pub user_repo: Arc<dyn UserRepository>,
}

#[async_trait]
impl RowActionTarget for UserRows {
    async fn delete_rows(&self, ids: &[i32]) -> Result<u64, RowActionError> {
        Ok(self.sync.delete_dz_users(ids).await?)
    }

    fn supports_enable(&self) -> bool {
        true
    }

    async fn set_enabled(&self, ids: &[i32], enabled: bool) -> Result<u64, RowActionError> {
        let mut changed = 0;
        for &id in ids {
            let Some(user) = self.user_repo.find_auth_by_id(id).await? else {
                continue;
            };
            if user.is_active == enabled {
                continue;
            }
            self.sync
                .save_auth_user(AuthUserChange {
                    id,
                    is_active: Some(enabled),
                    ..Default::default()
                })
                .await?;
            changed += 1;
        }
        Ok(changed)
    }
}

/// 行操作分发服务
///
/// 按模型名称把请求分发给注册的 `RowActionTarget`，执行前校验权限。
#[derive(Default)]
pub struct RowActionService {
    targets: HashMap<ModelName, Arc<dyn RowActionTarget>>,
}

impl RowActionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册模型的行操作实现
    pub fn register(mut self, model: ModelName, target: Arc<dyn RowActionTarget>) -> Self {
        self.targets.insert(model, target);
        self
    }

    /// 执行行操作
    ///
    /// # 参数
    ///
    /// * `user` - 当前登录用户
    /// * `request` - 已解析的请求
    ///
    /// # 返回值
    ///
    /// * `Ok(u64)` - 受影响的行数
    /// * `Err(RowActionError)` - 权限不足、模型不支持或数据库错误
    pub async fn execute(
        &self,
        user: &AuthUser,
        request: &RowActionRequest,
    ) -> Result<u64, RowActionError> {
        let permission = request.required_permission();
        if !user.has_perm(&permission) {
            return Err(RowActionError::Forbidden(permission));
        }

        let target = self.targets.get(&request.model).ok_or_else(|| {
            RowActionError::Invalid(format!("no row actions for '{}'", request.model))
        })?;

        let affected = match request.action {
            RowAction::Delete => target.delete_rows(&request.ids).await?,
            RowAction::Enable | RowAction::Disable => {
                if !target.supports_enable() {
                    return Err(RowActionError::Unsupported {
                        model: request.model,
                        action: request.action,
                    });
                }
                target
                    .set_enabled(&request.ids, request.action == RowAction::Enable)
                    .await?
            }
        };

        counter!(
            "dz_row_actions_total",
            "model" => request.model.as_str(),
            "action" => request.action.as_str()
        )
        .increment(1);
        counter!("dz_rows_affected_total", "model" => request.model.as_str()).increment(affected);
        info!(
            "User {} ran {} on {} {:?}: {} rows affected",
            user.username, request.action, request.model, request.ids, affected
        );
        Ok(affected)
    }

    /// 用户可以对该模型使用的行操作
    pub fn available_actions(&self, user: &AuthUser, model: ModelName) -> Vec<RowAction> {
        let Some(target) = self.targets.get(&model) else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        if target.supports_enable() && user.has_perm(&model.change_permission()) {
            actions.push(RowAction::Enable);
            actions.push(RowAction::Disable);
        }
        if user.has_perm(&model.delete_permission()) {
            actions.push(RowAction::Delete);
        }
        actions
    }
}
