// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{format_datetime, Column, DzTable};
use crate::domain::models::model_name::ModelName;
use crate::domain::models::tip::TipSummary;
use crate::utils::text::escape;

/// 投注建议表格
pub struct TipTable;

impl DzTable for TipTable {
    type Row = TipSummary;

    const MODEL: ModelName = ModelName::Tip;
    const COLUMNS: &'static [Column] = &[
        Column::sortable("id", "ID"),
        Column::sortable("title", "Title"),
        Column::sortable("tipster", "Tipster"),
        Column::sortable("section", "Section"),
        Column::sortable("published", "Published"),
        Column::sortable("result", "Result"),
    ];
    const DEFAULT_SORT: &'static str = "-published";

    fn row_id(row: &TipSummary) -> i32 {
        row.id
    }

    fn cells(row: &TipSummary) -> Vec<String> {
        vec![
            row.id.to_string(),
            escape(&row.title),
            escape(&row.tipster),
            escape(&row.section),
            format_datetime(&row.published),
            escape(row.result.as_deref().unwrap_or("")),
        ]
    }
}
