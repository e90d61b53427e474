// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::model_name::ModelName;
use crate::domain::models::user::AuthUser;
use crate::utils::text::{escape, escape_attr};

/// 渲染完整页面
///
/// 顶部菜单列出各模型的列表页，并显示当前用户名。
///
/// # 参数
///
/// * `title` - 页面标题（未转义）
/// * `user` - 当前用户
/// * `body` - 已渲染的页面主体 HTML
pub fn layout(title: &str, user: Option<&AuthUser>, body: &str) -> String {
    let mut nav = String::new();
    if let Some(user) = user {
        for model in ModelName::ALL {
            if user.has_perm(&model.view_permission()) {
                nav.push_str(&format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    model.list_url(),
                    title_case(model.verbose_plural())
                ));
            }
        }
    }

    let user_menu = match user {
        Some(user) => format!(
            r#"<p class="navbar-text">{}</p><form class="navbar-form" method="post" action="/dz-admin/logout/"><button type="submit" class="btn btn-link">Log out</button></form>"#,
            escape(&user.username)
        ),
        None => r#"<a class="navbar-link" href="/dz-admin/login/">Log in</a>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} | dz</title></head>
<body>
<nav class="navbar"><a class="navbar-brand" href="/dz/news/">dz</a><ul class="nav navbar-nav">{nav}</ul>{user_menu}</nav>
<div class="container">
{body}
</div>
</body>
</html>
"#,
        title = escape(title),
        nav = nav,
        user_menu = user_menu,
        body = body,
    )
}

/// 渲染一个隐藏表单字段
pub fn hidden_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="hidden" name="{}" value="{}">"#,
        escape_attr(name),
        escape_attr(value)
    )
}

/// 首字母大写
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
