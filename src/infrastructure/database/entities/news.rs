// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sea_orm_active_enums::SeaArchived;
use sea_orm::entity::prelude::*;

/// 新闻数据库实体模型
///
/// 对应数据库中的 news 表，主键由来源网站分配
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub url: String,
    pub title: String,
    pub short_title: String,
    pub section: String,
    pub subsection: String,
    pub published: ChronoDateTimeUtc,
    pub updated: ChronoDateTimeUtc,
    pub crawled: ChronoDateTimeUtc,
    pub archived: SeaArchived,
    pub preamble: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text")]
    pub subtable: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
