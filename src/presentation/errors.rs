// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::repositories::common::RepositoryError;
use crate::domain::services::crawl_request_service::CrawlRequestError;
use crate::domain::services::row_action_service::RowActionError;
use crate::domain::services::user_sync_service::UserSyncError;
use crate::utils::text::escape;

/// 页面访问错误
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Permission denied: {0} required")]
    Forbidden(String),
    #[error("Staff access required")]
    StaffOnly,
    #[error("Only POST requests are accepted")]
    PostRequired,
    #[error("{0} not found")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按错误类型映射为HTTP状态码
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if let Some(e) = self.0.downcast_ref::<AccessError>() {
            return match e {
                AccessError::Forbidden(_) | AccessError::StaffOnly | AccessError::PostRequired => {
                    StatusCode::FORBIDDEN
                }
                AccessError::NotFound(_) => StatusCode::NOT_FOUND,
                AccessError::BadRequest(_) => StatusCode::BAD_REQUEST,
            };
        }
        if let Some(e) = self.0.downcast_ref::<RowActionError>() {
            return match e {
                RowActionError::Invalid(_) | RowActionError::Unsupported { .. } => {
                    StatusCode::BAD_REQUEST
                }
                RowActionError::Forbidden(_) => StatusCode::FORBIDDEN,
                RowActionError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
                RowActionError::UserSync(UserSyncError::Validation(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }
        if let Some(CrawlRequestError::Forbidden(_)) = self.0.downcast_ref::<CrawlRequestError>() {
            return StatusCode::FORBIDDEN;
        }
        if let Some(UserSyncError::Validation(_)) = self.0.downcast_ref::<UserSyncError>() {
            return StatusCode::BAD_REQUEST;
        }
        if let Some(RepositoryError::NotFound) = self.0.downcast_ref::<RepositoryError>() {
            return StatusCode::NOT_FOUND;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {:#}", self.0);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self.0);
            self.0.to_string()
        };

        let body = Html(format!(
            "<!DOCTYPE html><html><body><h1>{}</h1><p>{}</p></body></html>",
            status,
            escape(&message)
        ));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
