// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 登录后默认跳转的页面
pub const DEFAULT_NEXT: &str = "/dz/news/";

/// 登录表单，缺失的字段按空值处理
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub next: Option<String>,
}

impl LoginRequestDto {
    /// 登录成功后跳转的地址，只接受站内路径
    pub fn next_url(&self) -> &str {
        safe_next(self.next.as_deref())
    }
}

/// 过滤掉站外地址
///
/// 浏览器把 `\` 当作 `/` 处理，`/\host` 与 `//host` 一样指向其他站点。
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(next) if is_local_path(next) => next,
        _ => DEFAULT_NEXT,
    }
}

fn is_local_path(path: &str) -> bool {
    let mut chars = path.chars();
    chars.next() == Some('/') && !matches!(chars.next(), Some('/' | '\\'))
}
