// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::dto::row_action_form::RowActionForm;
use crate::presentation::errors::{AccessError, AppError};
use crate::presentation::extractors::logged_in_user::LoggedInUser;
use crate::presentation::state::AppState;

/// 执行行操作
///
/// 成功后重定向到对应模型的列表页。
///
/// # 参数
///
/// * `state` - 应用状态
/// * `user` - 当前登录用户
/// * `body` - urlencoded 表单（`model_name`、`action`、`row_ids`）
pub async fn run_row_action(
    State(state): State<AppState>,
    LoggedInUser(user): LoggedInUser,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = RowActionForm::from_body(&body)?.into_request()?;
    state.row_actions.execute(&user, &request).await?;
    Ok(Redirect::to(&request.model.list_url()).into_response())
}

/// 行操作只接受 POST
pub async fn reject_row_action_get(LoggedInUser(_user): LoggedInUser) -> AppError {
    AccessError::PostRequired.into()
}
