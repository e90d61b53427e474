// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::row_action_service::{RowActionError, RowActionRequest};
use serde::Deserialize;

/// 行操作表单
///
/// 所有字段都是可选的，缺失字段由 `RowActionRequest::parse` 报告。
#[derive(Debug, Default, Deserialize)]
pub struct RowActionForm {
    pub model_name: Option<String>,
    pub action: Option<String>,
    pub row_ids: Option<String>,
}

impl RowActionForm {
    /// 解析 urlencoded 请求体
    pub fn from_body(body: &[u8]) -> Result<Self, RowActionError> {
        serde_urlencoded::from_bytes(body)
            .map_err(|e| RowActionError::Invalid(format!("malformed form: {}", e)))
    }

    pub fn into_request(self) -> Result<RowActionRequest, RowActionError> {
        RowActionRequest::parse(
            self.model_name.as_deref(),
            self.action.as_deref(),
            self.row_ids.as_deref(),
        )
    }
}
