// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::text::{cut_str, escape, escape_attr, strip_tags};

/// 新闻实体
///
/// 新闻ID由来源网站分配，不是自增主键。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct News {
    pub id: i32,
    pub url: String,
    pub title: String,
    /// 参赛双方
    pub short_title: String,
    /// 运动项目
    pub section: String,
    /// 联赛
    pub subsection: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    /// 抓取时间
    pub crawled: DateTime<Utc>,
    pub archived: Archived,
    pub preamble: Option<String>,
    /// 完整正文（HTML）
    pub content: String,
    /// 附表（HTML）
    pub subtable: String,
}

impl News {
    /// 截断后的HTML预览，用于管理页面的列表列
    pub fn preview_html(&self) -> String {
        let pre = cut_str(&strip_tags(self.preamble.as_deref().unwrap_or("")), 60);
        let text = cut_str(&strip_tags(&self.content), 100);
        let url = format!("/dz/news/{}/", self.id);
        format!(
            "<div class=\"dz_pre\">{}</div> <div class=\"dz_body\"><span>{}</span> \
             <a href=\"{}\" target=\"_blank\">(more...)</a></div>",
            escape(&pre),
            escape(&text),
            escape_attr(&url)
        )
    }
}

impl fmt::Display for News {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

/// 新闻摘要
///
/// 列表查询默认不加载 `content` 和 `subtable` 两个大字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSummary {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub short_title: String,
    pub section: String,
    pub subsection: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub crawled: DateTime<Utc>,
    pub archived: Archived,
    pub preamble: Option<String>,
}

/// 归档状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Archived {
    /// 新抓取，尚未归档
    #[default]
    Fresh,
    /// 正在归档
    Archiving,
    /// 已归档
    Archived,
}

impl fmt::Display for Archived {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Archived::Fresh => write!(f, "fresh"),
            Archived::Archiving => write!(f, "archiving"),
            Archived::Archived => write!(f, "archived"),
        }
    }
}

impl FromStr for Archived {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fresh" => Ok(Archived::Fresh),
            "archiving" => Ok(Archived::Archiving),
            "archived" => Ok(Archived::Archived),
            _ => Err(()),
        }
    }
}
