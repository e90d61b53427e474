// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
struct SessionEntry {
    user_id: i32,
    expires_at: Instant,
}

/// 进程内会话存储
///
/// 以随机令牌为键保存登录用户的ID，过期的会话在访问时被移除。
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    /// 创建新的会话存储
    ///
    /// # 参数
    ///
    /// * `ttl` - 会话有效期
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// 为用户创建会话，返回会话令牌
    pub fn create(&self, user_id: i32) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(
            token.clone(),
            SessionEntry {
                user_id,
                expires_at: Instant::now() + self.ttl,
            },
        );
        debug!("Created session for user {}", user_id);
        token
    }

    /// 查找会话对应的用户ID
    pub fn get(&self, token: &str) -> Option<i32> {
        let entry = *self.sessions.get(token)?;
        if entry.expires_at <= Instant::now() {
            self.sessions.remove(token);
            debug!("Session for user {} expired", entry.user_id);
            return None;
        }
        Some(entry.user_id)
    }

    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }
}
