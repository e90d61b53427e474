// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{format_bool, format_optional_datetime, Column, DzTable};
use crate::domain::models::model_name::ModelName;
use crate::domain::models::schedule::Schedule;
use crate::utils::text::escape;

/// 爬取计划表格
pub struct ScheduleTable;

impl DzTable for ScheduleTable {
    type Row = Schedule;

    const MODEL: ModelName = ModelName::Schedule;
    const COLUMNS: &'static [Column] = &[
        Column::sortable("id", "ID"),
        Column::sortable("target", "Target"),
        Column::sortable("cron", "Cron"),
        Column::sortable("is_active", "Active"),
        Column::sortable("last_run", "Last run"),
        Column::fixed("comment", "Comment"),
    ];
    const DEFAULT_SORT: &'static str = "id";

    fn row_id(row: &Schedule) -> i32 {
        row.id
    }

    fn cells(row: &Schedule) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.target.to_string(),
            escape(&row.cron),
            format_bool(row.is_active),
            format_optional_datetime(row.last_run.as_ref()),
            escape(&row.comment),
        ]
    }
}
