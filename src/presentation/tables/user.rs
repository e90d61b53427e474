// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{format_bool, Column, DzTable};
use crate::domain::models::model_name::ModelName;
use crate::domain::models::user::DzUser;
use crate::utils::text::escape;

/// 应用用户表格
pub struct UserTable;

impl DzTable for UserTable {
    type Row = DzUser;

    const MODEL: ModelName = ModelName::User;
    const COLUMNS: &'static [Column] = &[
        Column::sortable("id", "ID"),
        Column::sortable("username", "User name"),
        Column::sortable("is_admin", "Administrator"),
    ];
    const DEFAULT_SORT: &'static str = "username";

    fn row_id(row: &DzUser) -> i32 {
        row.id
    }

    fn cells(row: &DzUser) -> Vec<String> {
        vec![
            row.id.to_string(),
            escape(&row.username),
            format_bool(row.is_admin || row.is_special()),
        ]
    }
}
