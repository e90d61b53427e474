// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::{CrawlStatus, CrawlTarget};
use crate::domain::models::news::Archived;
use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum SeaCrawlStatus {
    #[sea_orm(string_value = "waiting")]
    Waiting,
    #[sea_orm(string_value = "started")]
    Started,
    #[sea_orm(string_value = "running")]
    Running,
    #[sea_orm(string_value = "complete")]
    Complete,
}

impl From<CrawlStatus> for SeaCrawlStatus {
    fn from(status: CrawlStatus) -> Self {
        match status {
            CrawlStatus::Waiting => SeaCrawlStatus::Waiting,
            CrawlStatus::Started => SeaCrawlStatus::Started,
            CrawlStatus::Running => SeaCrawlStatus::Running,
            CrawlStatus::Complete => SeaCrawlStatus::Complete,
        }
    }
}

impl From<SeaCrawlStatus> for CrawlStatus {
    fn from(status: SeaCrawlStatus) -> Self {
        match status {
            SeaCrawlStatus::Waiting => CrawlStatus::Waiting,
            SeaCrawlStatus::Started => CrawlStatus::Started,
            SeaCrawlStatus::Running => CrawlStatus::Running,
            SeaCrawlStatus::Complete => CrawlStatus::Complete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum SeaCrawlTarget {
    #[sea_orm(string_value = "news")]
    News,
    #[sea_orm(string_value = "tip")]
    Tip,
}

impl From<CrawlTarget> for SeaCrawlTarget {
    fn from(target: CrawlTarget) -> Self {
        match target {
            CrawlTarget::News => SeaCrawlTarget::News,
            CrawlTarget::Tip => SeaCrawlTarget::Tip,
        }
    }
}

impl From<SeaCrawlTarget> for CrawlTarget {
    fn from(target: SeaCrawlTarget) -> Self {
        match target {
            SeaCrawlTarget::News => CrawlTarget::News,
            SeaCrawlTarget::Tip => CrawlTarget::Tip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(9))")]
pub enum SeaArchived {
    #[sea_orm(string_value = "fresh")]
    Fresh,
    #[sea_orm(string_value = "archiving")]
    Archiving,
    #[sea_orm(string_value = "archived")]
    Archived,
}

impl From<Archived> for SeaArchived {
    fn from(archived: Archived) -> Self {
        match archived {
            Archived::Fresh => SeaArchived::Fresh,
            Archived::Archiving => SeaArchived::Archiving,
            Archived::Archived => SeaArchived::Archived,
        }
    }
}

impl From<SeaArchived> for Archived {
    fn from(archived: SeaArchived) -> Self {
        match archived {
            SeaArchived::Fresh => Archived::Fresh,
            SeaArchived::Archiving => Archived::Archiving,
            SeaArchived::Archived => Archived::Archived,
        }
    }
}
