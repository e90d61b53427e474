// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 认证用户数据库实体模型
///
/// 对应数据库中的 auth_users 表，存储登录凭据和权限标志
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "auth_users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auth_user_permission::Entity")]
    Permissions,
    #[sea_orm(has_one = "super::dz_user::Entity")]
    DzUser,
}

impl Related<super::auth_user_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permissions.def()
    }
}

impl Related<super::dz_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DzUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
