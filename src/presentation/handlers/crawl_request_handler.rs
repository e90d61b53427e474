// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::models::crawl::CrawlTarget;
use crate::presentation::errors::{AccessError, AppError};
use crate::presentation::extractors::logged_in_user::LoggedInUser;
use crate::presentation::state::AppState;

/// 请求一次手动爬取，成功后回到目标模型的列表页
pub async fn request_crawl(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    Path(target): Path<String>,
) -> Result<Response, AppError> {
    let target: CrawlTarget = target
        .parse()
        .map_err(|_| AccessError::NotFound(format!("Crawl target {}", target)))?;

    state.crawl_requests.request_crawl(target, &user).await?;
    Ok(Redirect::to(&target.model().list_url()).into_response())
}
