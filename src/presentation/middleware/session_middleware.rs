// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::user::AuthUser;
use crate::presentation::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error};

/// 会话 cookie 名称
pub const SESSION_COOKIE: &str = "dz_session";

/// 当前请求的登录用户，匿名请求为 `None`
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<AuthUser>);

/// 从请求头中读取会话令牌
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
}

/// 会话中间件
///
/// 根据会话 cookie 加载登录用户并放入请求扩展。停用的用户视为匿名。
///
/// # 参数
///
/// * `state` - 应用状态
/// * `req` - HTTP请求
/// * `next` - 下一个中间件
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let user_id = session_token(req.headers()).and_then(|token| state.sessions.get(&token));

    let user = match user_id {
        Some(id) => match state.user_repo.find_auth_by_id(id).await {
            Ok(user) => user.filter(|u| u.is_active),
            Err(e) => {
                error!("Database error loading session user {}: {}", id, e);
                None
            }
        },
        None => None,
    };

    if let Some(user) = &user {
        debug!("Request from user {}", user.username);
    }
    req.extensions_mut().insert(CurrentUser(user));
    next.run(req).await
}
