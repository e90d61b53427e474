// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::sea_orm_active_enums::{SeaCrawlStatus, SeaCrawlTarget};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "crawls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub target: SeaCrawlTarget,
    pub manual: Option<bool>,
    pub status: SeaCrawlStatus,
    pub started: ChronoDateTimeUtc,
    pub ended: Option<ChronoDateTimeUtc>,
    pub count: i32,
    pub host: String,
    pub pid: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
