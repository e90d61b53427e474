// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, Query, State},
    response::Html,
};

use crate::application::dto::table_query::TableQueryDto;
use crate::domain::models::crawl::CrawlTarget;
use crate::domain::models::model_name::ModelName;
use crate::domain::models::user::AuthUser;
use crate::domain::repositories::common::{ListQuery, Page};
use crate::presentation::errors::{AccessError, AppError};
use crate::presentation::extractors::logged_in_user::LoggedInUser;
use crate::presentation::state::AppState;
use crate::presentation::tables::{
    crawl::CrawlTable, news::NewsTable, render_table, schedule::ScheduleTable, tip::TipTable,
    user::UserTable, DzTable,
};
use crate::presentation::templates::{layout, title_case};
use crate::utils::text::{escape, external_link, strip_tags};

/// 校验查看权限
fn require_view(user: &AuthUser, model: ModelName) -> Result<(), AccessError> {
    let permission = model.view_permission();
    if user.has_perm(&permission) {
        Ok(())
    } else {
        Err(AccessError::Forbidden(permission))
    }
}

fn list_query<T: DzTable>(state: &AppState, params: &TableQueryDto) -> ListQuery {
    params.to_list_query(
        &T::sortable_columns(),
        T::DEFAULT_SORT,
        &state.settings.tables,
    )
}

fn crawl_button(user: &AuthUser, model: ModelName) -> String {
    let target = match model {
        ModelName::News => CrawlTarget::News,
        ModelName::Tip => CrawlTarget::Tip,
        _ => return String::new(),
    };
    if !user.has_perm(&target.crawl_permission()) {
        return String::new();
    }
    format!(
        r#"<form class="crawl-form" method="post" action="/dz/crawl/{}/"><button type="submit" class="btn btn-primary">Crawl {} Now</button></form>"#,
        target,
        title_case(model.verbose_plural())
    )
}

/// 渲染列表页
fn render_list_page<T: DzTable>(
    state: &AppState,
    user: &AuthUser,
    query: &ListQuery,
    page: &Page<T::Row>,
) -> Html<String> {
    let actions = state.row_actions.available_actions(user, T::MODEL);
    let title = title_case(T::MODEL.verbose_plural());
    let body = format!(
        r#"<div class="page-header"><h1>{}</h1>{}</div>
{}"#,
        escape(&title),
        crawl_button(user, T::MODEL),
        render_table::<T>(page, query, &actions)
    );
    Html(layout(&title, Some(user), &body))
}

/// 新闻列表
pub async fn news_list(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(params): Query<TableQueryDto>,
) -> Result<Html<String>, AppError> {
    require_view(&user, ModelName::News)?;
    let query = list_query::<NewsTable>(&state, &params);
    let page = state.news_repo.list(&query).await?;
    Ok(render_list_page::<NewsTable>(&state, &user, &query, &page))
}

/// 投注建议列表
pub async fn tip_list(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(params): Query<TableQueryDto>,
) -> Result<Html<String>, AppError> {
    require_view(&user, ModelName::Tip)?;
    let query = list_query::<TipTable>(&state, &params);
    let page = state.tip_repo.list(&query).await?;
    Ok(render_list_page::<TipTable>(&state, &user, &query, &page))
}

/// 爬取记录列表
pub async fn crawl_list(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(params): Query<TableQueryDto>,
) -> Result<Html<String>, AppError> {
    require_view(&user, ModelName::Crawl)?;
    let query = list_query::<CrawlTable>(&state, &params);
    let page = state.crawl_repo.list(&Default::default(), &query).await?;
    Ok(render_list_page::<CrawlTable>(&state, &user, &query, &page))
}

/// 应用用户列表
pub async fn user_list(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(params): Query<TableQueryDto>,
) -> Result<Html<String>, AppError> {
    require_view(&user, ModelName::User)?;
    let query = list_query::<UserTable>(&state, &params);
    let page = state.user_repo.list_dz(&query).await?;
    Ok(render_list_page::<UserTable>(&state, &user, &query, &page))
}

/// 爬取计划列表
pub async fn schedule_list(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Query(params): Query<TableQueryDto>,
) -> Result<Html<String>, AppError> {
    require_view(&user, ModelName::Schedule)?;
    let query = list_query::<ScheduleTable>(&state, &params);
    let page = state.schedule_repo.list(&query).await?;
    Ok(render_list_page::<ScheduleTable>(&state, &user, &query, &page))
}

/// 新闻详情
pub async fn news_detail(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    require_view(&user, ModelName::News)?;
    let news = state
        .news_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AccessError::NotFound(format!("News {}", id)))?;

    let body = format!(
        r#"<article class="dz-news">
<h1>{title}</h1>
<p class="meta">{section} / {subsection} &middot; {published}</p>
<p class="dz_pre">{preamble}</p>
<div class="dz_body">{content}</div>
<div class="dz_subtable">{subtable}</div>
<p>{link}</p>
</article>"#,
        title = escape(&news.title),
        section = escape(&news.section),
        subsection = escape(&news.subsection),
        published = news.published.format("%Y-%m-%d %H:%M"),
        preamble = escape(&strip_tags(news.preamble.as_deref().unwrap_or(""))),
        content = escape(&strip_tags(&news.content)),
        subtable = escape(&strip_tags(&news.subtable)),
        link = external_link(&news.url),
    );
    Ok(Html(layout(&news.to_string(), Some(&user), &body)))
}
