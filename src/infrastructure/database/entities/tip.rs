// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sea_orm_active_enums::SeaArchived;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub url: String,
    pub title: String,
    pub tipster: String,
    pub section: String,
    pub subsection: String,
    pub published: ChronoDateTimeUtc,
    pub updated: ChronoDateTimeUtc,
    pub crawled: ChronoDateTimeUtc,
    pub archived: SeaArchived,
    pub preamble: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub result: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
