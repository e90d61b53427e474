// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{format_datetime, Column, DzTable};
use crate::domain::models::model_name::ModelName;
use crate::domain::models::news::NewsSummary;
use crate::utils::text::{escape, escape_attr};

/// 新闻表格
pub struct NewsTable;

impl DzTable for NewsTable {
    type Row = NewsSummary;

    const MODEL: ModelName = ModelName::News;
    const COLUMNS: &'static [Column] = &[
        Column::sortable("id", "ID"),
        Column::sortable("title", "Title"),
        Column::sortable("section", "Section"),
        Column::sortable("subsection", "Subsection"),
        Column::sortable("published", "Published"),
        Column::sortable("updated", "Updated"),
        Column::sortable("archived", "Archived"),
    ];
    const DEFAULT_SORT: &'static str = "-published";

    fn row_id(row: &NewsSummary) -> i32 {
        row.id
    }

    fn cells(row: &NewsSummary) -> Vec<String> {
        vec![
            row.id.to_string(),
            format!(
                r#"<a href="/dz/news/{}/" title="{}">{}</a>"#,
                row.id,
                escape_attr(&row.short_title),
                escape(&row.title)
            ),
            escape(&row.section),
            escape(&row.subsection),
            format_datetime(&row.published),
            format_datetime(&row.updated),
            row.archived.to_string(),
        ]
    }
}
