// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{format_datetime, format_optional_datetime, Column, DzTable};
use crate::domain::models::crawl::Crawl;
use crate::domain::models::model_name::ModelName;
use crate::utils::text::escape;

/// 爬取记录表格
pub struct CrawlTable;

impl DzTable for CrawlTable {
    type Row = Crawl;

    const MODEL: ModelName = ModelName::Crawl;
    const COLUMNS: &'static [Column] = &[
        Column::sortable("id", "ID"),
        Column::sortable("target", "Target"),
        Column::fixed("type_str", "Type"),
        Column::sortable("status", "Status"),
        Column::sortable("started", "Started"),
        Column::sortable("ended", "Ended"),
        Column::sortable("count", "Count"),
        Column::sortable("host", "Host"),
        Column::sortable("pid", "PID"),
    ];
    const DEFAULT_SORT: &'static str = "-id";

    fn row_id(row: &Crawl) -> i32 {
        row.id
    }

    fn cells(row: &Crawl) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.target.to_string(),
            row.type_label().to_string(),
            row.status.to_string(),
            format_datetime(&row.started),
            format_optional_datetime(row.ended.as_ref()),
            row.count.to_string(),
            escape(&row.host),
            row.pid.to_string(),
        ]
    }
}
