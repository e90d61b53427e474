// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{
    AuthUser, AuthUserChange, DzUser, DzUserDraft, SPECIAL_USERNAME,
};
use crate::domain::repositories::common::RepositoryError;
use crate::domain::repositories::user_repository::{LinkedUser, UserRepository};
use crate::infrastructure::security::password::{PasswordHasher, UNUSABLE_PASSWORD};
use argon2::password_hash::Error as PasswordHashError;
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use validator::{Validate, ValidationErrors};

/// 用户同步错误
#[derive(Error, Debug)]
pub enum UserSyncError {
    #[error("Invalid user data: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Auth user {0} not found")]
    AuthUserNotFound(i32),
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] PasswordHashError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 用户同步服务
///
/// 维护应用用户与认证用户之间的一对一关系：
/// - 保存应用用户时，先确保存在认证用户，再把名称、邮箱、权限标志和密码推送过去；
/// - 保存认证用户时，如果用户名或新设置的密码与应用用户不同，回写应用用户；
/// - 删除应用用户时一并删除认证用户，`admin` 用户除外。
///
/// 两张表的写入总在同一个事务里完成，失败时不会留下只改了一边的记录。
pub struct UserSyncService {
    user_repo: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserSyncService {
    pub fn new(user_repo: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { user_repo, hasher }
    }

    /// 保存应用用户并同步认证用户
    ///
    /// # 参数
    ///
    /// * `draft` - 待保存的应用用户，`id` 为空时按用户名关联或新建认证用户
    ///
    /// # 返回值
    ///
    /// * `Ok(DzUser)` - 保存后的应用用户
    /// * `Err(UserSyncError)` - 校验或数据库错误，此时两张表都未被修改
    pub async fn save_dz_user(&self, draft: DzUserDraft) -> Result<DzUser, UserSyncError> {
        draft.validate()?;

        let base = match draft.id {
            Some(id) => Some(
                self.user_repo
                    .find_auth_by_id(id)
                    .await?
                    .ok_or(UserSyncError::AuthUserNotFound(id))?,
            ),
            None => self.user_repo.find_auth_by_username(&draft.username).await?,
        };

        let password_hash = self.auth_password(&draft, base.as_ref())?;
        let (dz_user, _) = self
            .persist(draft, base.map(|user| user.id), password_hash)
            .await?;
        debug!("Saved dz user {} ({})", dz_user.username, dz_user.id);
        Ok(dz_user)
    }

    /// 保存认证用户，并在需要时回写应用用户
    pub async fn save_auth_user(&self, change: AuthUserChange) -> Result<AuthUser, UserSyncError> {
        let mut auth_user = self
            .user_repo
            .find_auth_by_id(change.id)
            .await?
            .ok_or(UserSyncError::AuthUserNotFound(change.id))?;

        if let Some(username) = &change.username {
            auth_user.username = username.clone();
        }
        if let Some(is_active) = change.is_active {
            auth_user.is_active = is_active;
        }
        if let Some(raw) = &change.raw_password {
            auth_user.password = self.hasher.hash(raw)?;
        }

        let changed = self
            .user_repo
            .find_dz_by_id(auth_user.id)
            .await?
            .and_then(|dz_user| reconcile(&auth_user, &dz_user, change.raw_password.as_deref()));

        match changed {
            Some(changed) => {
                debug!("Auth user {} changed, updating dz user", auth_user.id);
                let draft = DzUserDraft::from(changed);
                draft.validate()?;
                let password_hash = self.auth_password(&draft, Some(&auth_user))?;
                let (_, auth_user) = self
                    .persist(draft, Some(auth_user.id), password_hash)
                    .await?;
                Ok(auth_user)
            }
            None => Ok(self.user_repo.update_auth(&auth_user).await?),
        }
    }

    /// 批量删除应用用户
    ///
    /// 返回删除的应用用户数量。非特殊用户的认证用户同时被删除。
    pub async fn delete_dz_users(&self, ids: &[i32]) -> Result<u64, UserSyncError> {
        let mut deleted = 0;
        for &id in ids {
            let Some(dz_user) = self.user_repo.find_dz_by_id(id).await? else {
                continue;
            };
            let (dz_rows, _) = self.user_repo.delete_linked(id, dz_user.is_special()).await?;
            deleted += dz_rows;
            info!("Deleted dz user {}", dz_user);
        }
        Ok(deleted)
    }

    /// 批量删除认证用户，关联的应用用户随之删除
    pub async fn delete_auth_users(&self, ids: &[i32]) -> Result<u64, UserSyncError> {
        let mut deleted = 0;
        for &id in ids {
            let (_, auth_rows) = self.user_repo.delete_linked(id, false).await?;
            deleted += auth_rows;
        }
        Ok(deleted)
    }

    /// 确保存在特殊的 `admin` 用户
    ///
    /// # 参数
    ///
    /// * `password` - 新建认证用户时使用的登录密码
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 新建了 `admin` 用户
    /// * `Ok(false)` - `admin` 用户已存在
    pub async fn ensure_admin(&self, password: &str) -> Result<bool, UserSyncError> {
        if self
            .user_repo
            .find_dz_by_username(SPECIAL_USERNAME)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let draft = DzUserDraft {
            id: None,
            username: SPECIAL_USERNAME.to_string(),
            password: String::new(),
            is_admin: true,
        };
        let (auth_id, password_hash) =
            match self.user_repo.find_auth_by_username(SPECIAL_USERNAME).await? {
                Some(user) => (Some(user.id), user.password),
                None => (None, self.hasher.hash(password)?),
            };

        self.persist(draft, auth_id, password_hash).await?;
        info!("Created special user {}", SPECIAL_USERNAME);
        Ok(true)
    }

    /// 校验登录凭据
    ///
    /// 只有启用状态且密码匹配的用户才能通过。
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthUser>, UserSyncError> {
        let user = self
            .user_repo
            .find_auth_by_username(username)
            .await?
            .filter(|user| user.is_active && self.hasher.verify(password, &user.password));

        let outcome = if user.is_some() { "success" } else { "failure" };
        counter!("dz_logins_total", "outcome" => outcome).increment(1);
        Ok(user)
    }

    pub async fn grant_permission(&self, user_id: i32, codename: &str) -> Result<(), UserSyncError> {
        self.user_repo.grant_permission(user_id, codename).await?;
        Ok(())
    }

    /// 推送到认证用户的密码哈希
    ///
    /// 特殊用户保留认证用户原有的密码，其他用户使用应用用户的密码。
    fn auth_password(
        &self,
        draft: &DzUserDraft,
        base: Option<&AuthUser>,
    ) -> Result<String, UserSyncError> {
        if draft.username == SPECIAL_USERNAME {
            return Ok(base
                .map(|user| user.password.clone())
                .unwrap_or_else(|| UNUSABLE_PASSWORD.to_string()));
        }
        Ok(self.hasher.hash(&draft.password)?)
    }

    async fn persist(
        &self,
        draft: DzUserDraft,
        auth_id: Option<i32>,
        password_hash: String,
    ) -> Result<(DzUser, AuthUser), UserSyncError> {
        let is_special = draft.username == SPECIAL_USERNAME;
        let linked = LinkedUser {
            auth_id,
            first_name: draft.username.clone(),
            email: format!("{}@example.com", draft.username),
            username: draft.username,
            password_hash,
            is_active: true,
            is_staff: true,
            is_superuser: draft.is_admin || is_special,
            dz_password: draft.password,
            is_admin: draft.is_admin,
        };
        if auth_id.is_none() {
            debug!("Creating auth user for dz user {}", linked.username);
        }
        Ok(self.user_repo.save_linked(&linked).await?)
    }
}

/// 计算认证用户保存后应用用户需要的变化
///
/// `raw_password` 是本次保存中设置的明文密码，未设置时不比较密码。
/// 返回 `None` 表示应用用户无需更新。
fn reconcile(auth_user: &AuthUser, dz_user: &DzUser, raw_password: Option<&str>) -> Option<DzUser> {
    let mut changed = dz_user.clone();
    let mut dirty = false;

    if auth_user.username != dz_user.username {
        changed.username = auth_user.username.clone();
        dirty = true;
    }
    if let Some(raw) = raw_password {
        if raw != dz_user.password {
            changed.password = raw.to_string();
            dirty = true;
        }
    }

    dirty.then_some(changed)
}
