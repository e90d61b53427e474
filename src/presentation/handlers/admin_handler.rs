// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::crawl_admin_query::CrawlAdminQueryDto;
use crate::application::dto::login_request::{safe_next, LoginRequestDto};
use crate::domain::models::crawl::CrawlStatus;
use crate::domain::models::user::AuthUser;
use crate::domain::repositories::common::ListQuery;
use crate::presentation::errors::{AccessError, AppError};
use crate::presentation::extractors::logged_in_user::LoggedInUser;
use crate::presentation::middleware::session_middleware::{session_token, SESSION_COOKIE};
use crate::presentation::state::AppState;
use crate::presentation::tables::admin::{CrawlAdminTable, NewsAdminTable};
use crate::presentation::tables::render_table_with_params;
use crate::presentation::templates::{hidden_input, layout};
use crate::utils::text::{escape, escape_attr};

/// 管理页面每页行数
const ADMIN_PER_PAGE: u64 = 100;

#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminPageQuery {
    pub page: Option<u64>,
}

fn require_staff(user: &AuthUser) -> Result<(), AccessError> {
    if user.is_active && user.is_staff {
        Ok(())
    } else {
        Err(AccessError::StaffOnly)
    }
}

fn render_login(login_url: &str, next: &str, error: Option<&str>) -> Html<String> {
    let error = error
        .map(|e| format!(r#"<p class="errornote">{}</p>"#, escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>Log in</h1>
{error}
<form method="post" action="{action}" id="login-form">
{next}
<p><label for="id_username">Username:</label> <input type="text" name="username" id="id_username" maxlength="150" required></p>
<p><label for="id_password">Password:</label> <input type="password" name="password" id="id_password" required></p>
<button type="submit" class="btn btn-primary">Log in</button>
</form>"#,
        error = error,
        action = escape_attr(login_url),
        next = hidden_input("next", next),
    );
    Html(layout("Log in", None, &body))
}

/// 登录页面
pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginPageQuery>,
) -> Html<String> {
    render_login(
        &state.settings.auth.login_url,
        safe_next(query.next.as_deref()),
        None,
    )
}

/// 登录
///
/// 凭据正确时创建会话并跳转到 `next`，否则重新显示登录表单。
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginRequestDto>,
) -> Result<Response, AppError> {
    let login_url = &state.settings.auth.login_url;
    if form.validate().is_err() {
        return Ok(render_login(login_url, form.next_url(), Some("Please enter a username and password.")).into_response());
    }

    let Some(user) = state
        .user_sync
        .authenticate(&form.username, &form.password)
        .await?
    else {
        warn!("Failed login for {}", form.username);
        return Ok(render_login(
            login_url,
            form.next_url(),
            Some("Please enter a correct username and password."),
        )
        .into_response());
    };

    let token = state.sessions.create(user.id);
    info!("User {} logged in", user.username);
    let cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, state.settings.auth.session_ttl_secs
    );
    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, form.next_url().to_string()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response())
}

/// 登出，删除会话后回到登录页面
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.remove(&token);
    }
    let cookie = format!("{}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0", SESSION_COOKIE);
    (
        StatusCode::FOUND,
        [
            (header::LOCATION, state.settings.auth.login_url.clone()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}

fn filter_group(title: &str, links: Vec<(String, String, bool)>) -> String {
    let items: String = links
        .into_iter()
        .map(|(href, label, selected)| {
            let class = if selected { r#" class="selected""# } else { "" };
            format!(
                r#"<li{}><a href="{}">{}</a></li>"#,
                class,
                escape_attr(&href),
                escape(&label)
            )
        })
        .collect();
    format!("<h3>{}</h3><ul>{}</ul>", escape(title), items)
}

fn crawl_filters(query: &CrawlAdminQueryDto, years: &[i32]) -> String {
    let manual = query.manual.as_deref().unwrap_or("");
    let target = query.target.as_deref().unwrap_or("");
    let status = query.status.as_deref().unwrap_or("");

    let mut html = String::from(r#"<div id="changelist-filter"><h2>Filter</h2>"#);
    html.push_str(&filter_group(
        "By type",
        vec![
            (query.query_string_with("manual", None), "All".into(), manual.is_empty()),
            (query.query_string_with("manual", Some("1")), "Manual Crawl".into(), manual == "1"),
            (query.query_string_with("manual", Some("0")), "Auto Crawl".into(), manual == "0"),
        ],
    ));

    let mut targets = vec![(query.query_string_with("target", None), "All".to_string(), target.is_empty())];
    for name in ["news", "tip"] {
        targets.push((query.query_string_with("target", Some(name)), name.to_string(), target == name));
    }
    html.push_str(&filter_group("By target", targets));

    let mut statuses = vec![(query.query_string_with("status", None), "All".to_string(), status.is_empty())];
    for value in CrawlStatus::ALL {
        let value = value.to_string();
        statuses.push((query.query_string_with("status", Some(&value)), value.clone(), status == value));
    }
    html.push_str(&filter_group("By status", statuses));
    html.push_str("</div>\n");

    let mut hierarchy = vec![(query.query_string_with("year", None), "All dates".to_string(), query.year.is_none())];
    for year in years {
        let value = year.to_string();
        hierarchy.push((query.query_string_with("year", Some(&value)), value, query.year == Some(*year)));
    }
    html.push_str(r#"<div class="xfull"><ul class="toplinks">"#);
    for (href, label, selected) in hierarchy {
        let class = if selected { r#" class="selected""# } else { "" };
        html.push_str(&format!(
            r#"<li{}><a href="{}">{}</a></li>"#,
            class,
            escape_attr(&href),
            escape(&label)
        ));
    }
    html.push_str("</ul></div>\n");
    html
}

/// 爬取记录管理页面
///
/// 支持按类型、目标、状态和开始年份过滤，仅限职员访问。
pub async fn crawl_admin(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(query): Query<CrawlAdminQueryDto>,
) -> Result<Html<String>, AppError> {
    require_staff(&user)?;
    let filter = query.to_filter().map_err(AccessError::BadRequest)?;

    let list_query = ListQuery {
        per_page: ADMIN_PER_PAGE,
        ..Default::default()
    }
    .with_page(query.page)
    .with_sort("-id");
    let page = state.crawl_repo.list(&filter, &list_query).await?;
    let years = state.crawl_repo.years().await?;

    let mut params = Vec::new();
    for (name, value) in [
        ("manual", query.manual.clone()),
        ("target", query.target.clone()),
        ("status", query.status.clone()),
        ("year", query.year.map(|y| y.to_string())),
    ] {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            params.push((name, value));
        }
    }

    let body = format!(
        r#"<h1>Crawls</h1>
{}
<div id="changelist">{}</div>"#,
        crawl_filters(&query, &years),
        render_table_with_params::<CrawlAdminTable>(&page, &list_query, &[], &params)
    );
    Ok(Html(layout("Crawls", Some(&user), &body)))
}

/// 新闻管理页面，带正文预览，仅限职员访问
pub async fn news_admin(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(query): Query<AdminPageQuery>,
) -> Result<Html<String>, AppError> {
    require_staff(&user)?;

    let list_query = ListQuery {
        per_page: ADMIN_PER_PAGE,
        ..Default::default()
    }
    .with_page(query.page)
    .with_sort("-published");
    let page = state.news_repo.list_full(&list_query).await?;

    let body = format!(
        r#"<h1>News</h1>
<div id="changelist">{}</div>"#,
        render_table_with_params::<NewsAdminTable>(&page, &list_query, &[], &[])
    );
    Ok(Html(layout("News", Some(&user), &body)))
}
