// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::news::Archived;

/// 投注建议实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub tipster: String,
    pub section: String,
    pub subsection: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub crawled: DateTime<Utc>,
    pub archived: Archived,
    pub preamble: Option<String>,
    pub content: String,
    /// 比赛结束后的结果，未知时为空
    pub result: Option<String>,
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}

/// 投注建议摘要，不含正文
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipSummary {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub tipster: String,
    pub section: String,
    pub subsection: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub crawled: DateTime<Utc>,
    pub archived: Archived,
    pub preamble: Option<String>,
    pub result: Option<String>,
}
