// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! HTML 表格
//!
//! 每个模型一张表，描述列、默认排序以及单行的渲染方式。
//! 表格渲染负责表头排序链接、行选择列、行操作列和分页。

pub mod admin;
pub mod crawl;
pub mod news;
pub mod schedule;
pub mod tip;
pub mod user;

use crate::domain::models::model_name::ModelName;
use crate::domain::repositories::common::{ListQuery, Page};
use crate::domain::services::row_action_service::RowAction;
use crate::presentation::templates::{hidden_input, title_case};
use crate::utils::text::{escape, escape_attr};
use chrono::{DateTime, Utc};

/// 表格列
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// 列名，同时也是排序参数
    pub name: &'static str,
    pub header: &'static str,
    pub sortable: bool,
}

impl Column {
    pub const fn sortable(name: &'static str, header: &'static str) -> Self {
        Self {
            name,
            header,
            sortable: true,
        }
    }

    pub const fn fixed(name: &'static str, header: &'static str) -> Self {
        Self {
            name,
            header,
            sortable: false,
        }
    }
}

/// 模型表格
pub trait DzTable {
    type Row;

    const MODEL: ModelName;
    const COLUMNS: &'static [Column];
    /// 默认排序，`-` 前缀表示降序
    const DEFAULT_SORT: &'static str;

    fn row_id(row: &Self::Row) -> i32;

    /// 单行各列的 HTML，与 `COLUMNS` 一一对应，内容已转义
    fn cells(row: &Self::Row) -> Vec<String>;

    fn sortable_columns() -> Vec<&'static str> {
        Self::COLUMNS
            .iter()
            .filter(|c| c.sortable)
            .map(|c| c.name)
            .collect()
    }
}

/// 渲染表格
///
/// `actions` 为空时不渲染行选择列和行操作列。
pub fn render_table<T: DzTable>(
    page: &Page<T::Row>,
    query: &ListQuery,
    actions: &[RowAction],
) -> String {
    render_table_with_params::<T>(page, query, actions, &[])
}

/// 渲染表格，排序和分页链接附带额外的查询参数
pub fn render_table_with_params<T: DzTable>(
    page: &Page<T::Row>,
    query: &ListQuery,
    actions: &[RowAction],
    extra_params: &[(&str, String)],
) -> String {
    let extra: String = extra_params
        .iter()
        .map(|(name, value)| format!("&amp;{}={}", name, escape_attr(&urlencoding::encode(value))))
        .collect();
    let with_actions = !actions.is_empty();
    let mut html = String::new();

    html.push_str(&format!("<h2>List ({})</h2>\n", page.total));
    if with_actions {
        html.push_str(&bulk_action_form(T::MODEL, actions));
    }

    html.push_str(r#"<table class="table table-striped"><thead><tr>"#);
    if with_actions {
        html.push_str(r#"<th class="col-row_selector"><input type="checkbox" class="select-all"></th>"#);
    }
    for column in T::COLUMNS {
        html.push_str(&header_cell(column, query, &extra));
    }
    if with_actions {
        html.push_str(r#"<th class="col-row_actions">Actions</th>"#);
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &page.items {
        let id = T::row_id(row);
        html.push_str("<tr>");
        if with_actions {
            html.push_str(&format!(
                r#"<td class="col-row_selector"><input type="checkbox" class="row-selector" value="{}"></td>"#,
                id
            ));
        }
        for (column, cell) in T::COLUMNS.iter().zip(T::cells(row)) {
            html.push_str(&format!(r#"<td class="col-{}">{}</td>"#, column.name, cell));
        }
        if with_actions {
            html.push_str(&format!(
                r#"<td class="col-row_actions">{}</td>"#,
                row_action_buttons(T::MODEL, id, actions)
            ));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody></table>\n");
    html.push_str(&pagination(page, query, &extra));
    html
}

fn sort_param(query: &ListQuery) -> Option<String> {
    query.sort.as_ref().map(|sort| {
        if query.descending {
            format!("-{}", sort)
        } else {
            sort.clone()
        }
    })
}

fn header_cell(column: &Column, query: &ListQuery, extra: &str) -> String {
    if !column.sortable {
        return format!(r#"<th class="col-{}">{}</th>"#, column.name, escape(column.header));
    }

    let active = query.sort.as_deref() == Some(column.name);
    let (next_sort, class) = match (active, query.descending) {
        (true, false) => (format!("-{}", column.name), " asc"),
        (true, true) => (column.name.to_string(), " desc"),
        (false, _) => (column.name.to_string(), ""),
    };
    format!(
        r#"<th class="col-{name} orderable{class}"><a href="?sort={sort}&amp;per_page={per_page}{extra}">{header}</a></th>"#,
        name = column.name,
        class = class,
        sort = escape_attr(&next_sort),
        per_page = query.per_page,
        extra = extra,
        header = escape(column.header),
    )
}

fn action_label(action: RowAction) -> String {
    title_case(action.as_str())
}

fn bulk_action_form(model: ModelName, actions: &[RowAction]) -> String {
    let options: String = actions
        .iter()
        .map(|action| {
            format!(
                r#"<option value="{}">{}</option>"#,
                action.as_str(),
                action_label(*action)
            )
        })
        .collect();
    format!(
        r#"<form class="form-inline row-action-form" method="post" action="/dz/row-action/">{}<select name="action">{}</select><input type="text" name="row_ids" placeholder="1,2,3"><button type="submit" class="btn btn-default">Apply</button></form>
"#,
        hidden_input("model_name", model.as_str()),
        options
    )
}

fn row_action_buttons(model: ModelName, id: i32, actions: &[RowAction]) -> String {
    actions
        .iter()
        .map(|action| {
            format!(
                r#"<form class="row-action" method="post" action="/dz/row-action/">{}{}{}<button type="submit" class="btn btn-xs">{}</button></form>"#,
                hidden_input("model_name", model.as_str()),
                hidden_input("action", action.as_str()),
                hidden_input("row_ids", &id.to_string()),
                action_label(*action)
            )
        })
        .collect()
}

fn pagination<T>(page: &Page<T>, query: &ListQuery, extra: &str) -> String {
    if page.num_pages() <= 1 {
        return String::new();
    }

    let sort = sort_param(query)
        .map(|sort| format!("&amp;sort={}", escape_attr(&sort)))
        .unwrap_or_default();
    let link = |number: u64, label: &str| {
        format!(
            r#"<li><a href="?page={}&amp;per_page={}{}{}">{}</a></li>"#,
            number, page.per_page, sort, extra, label
        )
    };

    let mut html = String::from(r#"<ul class="pagination">"#);
    if page.has_previous() {
        html.push_str(&link(page.page - 1, "previous"));
    }
    html.push_str(&format!(
        r#"<li class="cardinality">{} of {}</li>"#,
        page.page,
        page.num_pages()
    ));
    if page.has_next() {
        html.push_str(&link(page.page + 1, "next"));
    }
    html.push_str("</ul>\n");
    html
}

/// 格式化时间列
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_optional_datetime(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "&mdash;".to_string())
}

pub fn format_bool(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}
