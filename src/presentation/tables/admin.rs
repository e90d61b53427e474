// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{format_datetime, format_optional_datetime, Column, DzTable};
use crate::domain::models::crawl::Crawl;
use crate::domain::models::model_name::ModelName;
use crate::domain::models::news::News;
use crate::utils::text::escape;

/// 管理页面的爬取记录表格，按ID降序排列
pub struct CrawlAdminTable;

impl DzTable for CrawlAdminTable {
    type Row = Crawl;

    const MODEL: ModelName = ModelName::Crawl;
    const COLUMNS: &'static [Column] = &[
        Column::fixed("id", "ID"),
        Column::fixed("target", "Target"),
        Column::fixed("type_str", "Type"),
        Column::fixed("status_str", "Status"),
        Column::fixed("started", "Started"),
        Column::fixed("ended", "Ended"),
        Column::fixed("count", "Count"),
        Column::fixed("host", "Host"),
        Column::fixed("pid", "PID"),
    ];
    const DEFAULT_SORT: &'static str = "-id";

    fn row_id(row: &Crawl) -> i32 {
        row.id
    }

    fn cells(row: &Crawl) -> Vec<String> {
        vec![
            row.id.to_string(),
            row.target.to_string(),
            row.admin_type_label().to_string(),
            row.status.to_string(),
            format_datetime(&row.started),
            format_optional_datetime(row.ended.as_ref()),
            row.count.to_string(),
            escape(&row.host),
            row.pid.to_string(),
        ]
    }
}

/// 管理页面的新闻表格，带正文预览
pub struct NewsAdminTable;

impl DzTable for NewsAdminTable {
    type Row = News;

    const MODEL: ModelName = ModelName::News;
    const COLUMNS: &'static [Column] = &[
        Column::fixed("id", "ID"),
        Column::fixed("title", "Title"),
        Column::fixed("section", "Section"),
        Column::fixed("published", "Published"),
        Column::fixed("archived", "Archived"),
        Column::fixed("preview", "Preview"),
    ];
    const DEFAULT_SORT: &'static str = "-published";

    fn row_id(row: &News) -> i32 {
        row.id
    }

    fn cells(row: &News) -> Vec<String> {
        vec![
            row.id.to_string(),
            escape(&row.title),
            escape(&row.section),
            format_datetime(&row.published),
            row.archived.to_string(),
            row.preview_html(),
        ]
    }
}
