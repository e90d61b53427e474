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
use crate::presentation::middleware::session_middleware::CurrentUser;
use crate::presentation::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// 已登录用户
///
/// 匿名请求被重定向到登录页面，`next` 参数指向原请求路径。
#[derive(Debug, Clone)]
pub struct LoggedInUser(pub AuthUser);

impl FromRequestParts<AppState> for LoggedInUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<CurrentUser>() {
            Some(CurrentUser(Some(user))) => Ok(LoggedInUser(user.clone())),
            _ => {
                let location = login_redirect_url(&state.settings.auth.login_url, parts.uri.path());
                Err((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
            }
        }
    }
}

/// 生成带 `next` 参数的登录地址
pub fn login_redirect_url(login_url: &str, next: &str) -> String {
    // keep slashes readable
    let next = urlencoding::encode(next).replace("%2F", "/");
    format!("{}?next={}", login_url, next)
}
