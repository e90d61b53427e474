// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::common::{ListQuery, Page, RepositoryError};
use crate::domain::models::user::{AuthUser, DzUser};
use async_trait::async_trait;

/// 一次写入的认证用户与应用用户
///
/// 两条记录在同一个事务中保存，共享同一个ID。
#[derive(Debug, Clone)]
pub struct LinkedUser {
    /// 已存在的认证用户ID，为空时插入新的认证用户
    pub auth_id: Option<i32>,
    pub username: String,
    /// 认证用户的密码哈希，`!` 表示不可用密码
    pub password_hash: String,
    pub first_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    /// 应用用户保存的明文密码
    pub dz_password: String,
    pub is_admin: bool,
}

/// 删除结果：(应用用户行数, 认证用户行数)
pub type DeletedRows = (u64, u64);

/// 用户仓库特质
///
/// 同时管理认证用户和应用用户两张表。两者之间的同步规则
/// 由 `UserSyncService` 负责；涉及两张表的写入由仓库放在同一个事务中完成。
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_auth_by_id(&self, id: i32) -> Result<Option<AuthUser>, RepositoryError>;
    async fn find_auth_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AuthUser>, RepositoryError>;
    /// 保存认证用户的全部字段（权限列表除外）
    async fn update_auth(&self, user: &AuthUser) -> Result<AuthUser, RepositoryError>;
    /// 授予权限，已拥有时不做任何事
    async fn grant_permission(&self, user_id: i32, codename: &str) -> Result<(), RepositoryError>;

    async fn find_dz_by_id(&self, id: i32) -> Result<Option<DzUser>, RepositoryError>;
    async fn find_dz_by_username(&self, username: &str)
        -> Result<Option<DzUser>, RepositoryError>;
    async fn list_dz(&self, query: &ListQuery) -> Result<Page<DzUser>, RepositoryError>;
    async fn count_dz(&self) -> Result<u64, RepositoryError>;

    /// 在一个事务中写入认证用户和应用用户
    ///
    /// 任意一步失败时两张表都保持原样。
    async fn save_linked(&self, user: &LinkedUser) -> Result<(DzUser, AuthUser), RepositoryError>;
    /// 在一个事务中删除应用用户，`keep_auth` 为假时连同认证用户及其权限一起删除
    async fn delete_linked(&self, id: i32, keep_auth: bool) -> Result<DeletedRows, RepositoryError>;
}
