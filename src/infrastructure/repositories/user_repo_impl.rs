// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query_helpers::apply_list_query;
use crate::domain::models::user::{AuthUser, DzUser};
use crate::domain::repositories::common::{ListQuery, Page, RepositoryError};
use crate::domain::repositories::user_repository::{DeletedRows, LinkedUser, UserRepository};
use crate::infrastructure::database::entities::{
    auth_user as auth_entity, auth_user_permission as permission_entity, dz_user as dz_entity,
};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

impl From<dz_entity::Model> for DzUser {
    fn from(m: dz_entity::Model) -> Self {
        DzUser {
            id: m.id,
            username: m.username,
            password: m.password,
            is_admin: m.is_admin,
        }
    }
}

fn to_auth_user(m: auth_entity::Model, permissions: Vec<String>) -> AuthUser {
    AuthUser {
        id: m.id,
        username: m.username,
        password: m.password,
        first_name: m.first_name,
        email: m.email,
        is_active: m.is_active,
        is_staff: m.is_staff,
        is_superuser: m.is_superuser,
        permissions,
        date_joined: m.date_joined,
    }
}

/// 用户仓库实现
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn with_permissions<C: ConnectionTrait>(
    conn: &C,
    model: auth_entity::Model,
) -> Result<AuthUser, RepositoryError> {
    let permissions = permission_entity::Entity::find()
        .filter(permission_entity::Column::UserId.eq(model.id))
        .order_by_asc(permission_entity::Column::Codename)
        .all(conn)
        .await?
        .into_iter()
        .map(|p| p.codename)
        .collect();
    Ok(to_auth_user(model, permissions))
}

async fn write_auth<C: ConnectionTrait>(
    conn: &C,
    user: &LinkedUser,
) -> Result<auth_entity::Model, RepositoryError> {
    let mut model = match user.auth_id {
        Some(id) => auth_entity::Entity::find_by_id(id)
            .one(conn)
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into(),
        None => auth_entity::ActiveModel {
            date_joined: Set(Utc::now()),
            ..Default::default()
        },
    };

    model.username = Set(user.username.clone());
    model.password = Set(user.password_hash.clone());
    model.first_name = Set(user.first_name.clone());
    model.email = Set(user.email.clone());
    model.is_active = Set(user.is_active);
    model.is_staff = Set(user.is_staff);
    model.is_superuser = Set(user.is_superuser);

    Ok(match user.auth_id {
        Some(_) => model.update(conn).await?,
        None => model.insert(conn).await?,
    })
}

async fn write_dz<C: ConnectionTrait>(
    conn: &C,
    id: i32,
    user: &LinkedUser,
) -> Result<dz_entity::Model, RepositoryError> {
    let existing = dz_entity::Entity::find_by_id(id).one(conn).await?;

    let saved = match existing {
        Some(model) => {
            let mut model: dz_entity::ActiveModel = model.into();
            model.username = Set(user.username.clone());
            model.password = Set(user.dz_password.clone());
            model.is_admin = Set(user.is_admin);
            model.update(conn).await?
        }
        None => {
            dz_entity::ActiveModel {
                id: Set(id),
                username: Set(user.username.clone()),
                password: Set(user.dz_password.clone()),
                is_admin: Set(user.is_admin),
            }
            .insert(conn)
            .await?
        }
    };
    Ok(saved)
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_auth_by_id(&self, id: i32) -> Result<Option<AuthUser>, RepositoryError> {
        match auth_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
        {
            Some(model) => Ok(Some(with_permissions(self.db.as_ref(), model).await?)),
            None => Ok(None),
        }
    }

    async fn find_auth_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AuthUser>, RepositoryError> {
        match auth_entity::Entity::find()
            .filter(auth_entity::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?
        {
            Some(model) => Ok(Some(with_permissions(self.db.as_ref(), model).await?)),
            None => Ok(None),
        }
    }

    async fn update_auth(&self, user: &AuthUser) -> Result<AuthUser, RepositoryError> {
        let mut model: auth_entity::ActiveModel = auth_entity::Entity::find_by_id(user.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.username = Set(user.username.clone());
        model.password = Set(user.password.clone());
        model.first_name = Set(user.first_name.clone());
        model.email = Set(user.email.clone());
        model.is_active = Set(user.is_active);
        model.is_staff = Set(user.is_staff);
        model.is_superuser = Set(user.is_superuser);

        let saved = model.update(self.db.as_ref()).await?;
        with_permissions(self.db.as_ref(), saved).await
    }

    async fn grant_permission(&self, user_id: i32, codename: &str) -> Result<(), RepositoryError> {
        let existing = permission_entity::Entity::find()
            .filter(permission_entity::Column::UserId.eq(user_id))
            .filter(permission_entity::Column::Codename.eq(codename))
            .one(self.db.as_ref())
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        let model = permission_entity::ActiveModel {
            user_id: Set(user_id),
            codename: Set(codename.to_string()),
            ..Default::default()
        };
        model.insert(self.db.as_ref()).await?;
        Ok(())
    }

    async fn find_dz_by_id(&self, id: i32) -> Result<Option<DzUser>, RepositoryError> {
        let model = dz_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_dz_by_username(
        &self,
        username: &str,
    ) -> Result<Option<DzUser>, RepositoryError> {
        let model = dz_entity::Entity::find()
            .filter(dz_entity::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_dz(&self, query: &ListQuery) -> Result<Page<DzUser>, RepositoryError> {
        let total = dz_entity::Entity::find().count(self.db.as_ref()).await?;
        let models = apply_list_query(
            dz_entity::Entity::find(),
            query,
            (dz_entity::Column::Username, Order::Asc),
            dz_entity::Column::Id,
        )
        .all(self.db.as_ref())
        .await?;

        Ok(Page {
            items: models.into_iter().map(Into::into).collect(),
            total,
            page: query.page,
            per_page: query.per_page,
        })
    }

    async fn count_dz(&self) -> Result<u64, RepositoryError> {
        Ok(dz_entity::Entity::find().count(self.db.as_ref()).await?)
    }

    async fn save_linked(&self, user: &LinkedUser) -> Result<(DzUser, AuthUser), RepositoryError> {
        let txn = self.db.begin().await?;

        let auth = write_auth(&txn, user).await?;
        let dz = write_dz(&txn, auth.id, user).await?;
        let auth = with_permissions(&txn, auth).await?;

        txn.commit().await?;
        Ok((dz.into(), auth))
    }

    async fn delete_linked(&self, id: i32, keep_auth: bool) -> Result<DeletedRows, RepositoryError> {
        let txn = self.db.begin().await?;

        let dz_rows = dz_entity::Entity::delete_by_id(id)
            .exec(&txn)
            .await?
            .rows_affected;
        let mut auth_rows = 0;
        if !keep_auth {
            permission_entity::Entity::delete_many()
                .filter(permission_entity::Column::UserId.eq(id))
                .exec(&txn)
                .await?;
            auth_rows = auth_entity::Entity::delete_by_id(id)
                .exec(&txn)
                .await?
                .rows_affected;
        }

        txn.commit().await?;
        Ok((dz_rows, auth_rows))
    }
}
