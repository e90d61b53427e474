// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// 特殊的引导管理员账号名
pub const SPECIAL_USERNAME: &str = "admin";

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.@+-]+$").unwrap());

/// 认证用户
///
/// 登录、会话和权限检查都基于该记录。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    /// 密码哈希
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    /// 直接授予的权限代码
    pub permissions: Vec<String>,
    pub date_joined: DateTime<Utc>,
}

impl AuthUser {
    /// 检查用户是否拥有指定权限
    ///
    /// 停用的用户没有任何权限，超级用户拥有全部权限。
    pub fn has_perm(&self, codename: &str) -> bool {
        if !self.is_active {
            return false;
        }
        self.is_superuser || self.permissions.iter().any(|p| p == codename)
    }
}

/// 应用用户（dz 用户）
///
/// 与认证用户一一对应，共享同一个ID。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DzUser {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub is_admin: bool,
}

impl DzUser {
    /// 是否为不可变的引导管理员账号
    pub fn is_special(&self) -> bool {
        self.username == SPECIAL_USERNAME
    }
}

impl fmt::Display for DzUser {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// 待保存的应用用户
///
/// `id` 为空时表示新用户，保存时会先关联（或创建）同名的认证用户。
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DzUserDraft {
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 20), regex(path = *USERNAME_RE))]
    pub username: String,
    #[validate(length(max = 64))]
    pub password: String,
    pub is_admin: bool,
}

impl DzUserDraft {
    pub fn new(username: impl Into<String>, password: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password.into(),
            is_admin,
        }
    }
}

impl From<DzUser> for DzUserDraft {
    fn from(user: DzUser) -> Self {
        Self {
            id: Some(user.id),
            username: user.username,
            password: user.password,
            is_admin: user.is_admin,
        }
    }
}

/// 直接修改认证用户的请求
///
/// 未设置的字段保持不变。
#[derive(Debug, Clone, Default)]
pub struct AuthUserChange {
    pub id: i32,
    pub username: Option<String>,
    /// 明文密码，保存时会被哈希
    pub raw_password: Option<String>,
    pub is_active: Option<bool>,
}
