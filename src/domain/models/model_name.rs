// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 可在列表视图和行操作中引用的模型名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelName {
    News,
    Tip,
    Crawl,
    User,
    Schedule,
}

impl ModelName {
    /// 所有模型，按菜单顺序排列
    pub const ALL: [ModelName; 5] = [
        ModelName::News,
        ModelName::Tip,
        ModelName::Crawl,
        ModelName::User,
        ModelName::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::News => "news",
            ModelName::Tip => "tip",
            ModelName::Crawl => "crawl",
            ModelName::User => "user",
            ModelName::Schedule => "schedule",
        }
    }

    /// 列表视图地址
    pub fn list_url(&self) -> String {
        format!("/dz/{}/", self.as_str())
    }

    /// 复数形式，用于标题和按钮文字
    pub fn verbose_plural(&self) -> &'static str {
        match self {
            ModelName::News => "news",
            ModelName::Tip => "tips",
            ModelName::Crawl => "crawls",
            ModelName::User => "users",
            ModelName::Schedule => "schedules",
        }
    }

    pub fn view_permission(&self) -> String {
        format!("view_{}", self.as_str())
    }

    pub fn change_permission(&self) -> String {
        format!("change_{}", self.as_str())
    }

    pub fn delete_permission(&self) -> String {
        format!("delete_{}", self.as_str())
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "news" => Ok(ModelName::News),
            "tip" => Ok(ModelName::Tip),
            "crawl" => Ok(ModelName::Crawl),
            "user" => Ok(ModelName::User),
            "schedule" => Ok(ModelName::Schedule),
            _ => Err(()),
        }
    }
}
