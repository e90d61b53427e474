use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create auth_users table
        manager
            .create_table(
                Table::create()
                    .table(AuthUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthUsers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuthUsers::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AuthUsers::Password).string_len(128).not_null())
                    .col(
                        ColumnDef::new(AuthUsers::FirstName)
                            .string_len(150)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(AuthUsers::Email)
                            .string_len(254)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(AuthUsers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AuthUsers::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AuthUsers::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AuthUsers::DateJoined)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create auth_user_permissions table
        manager
            .create_table(
                Table::create()
                    .table(AuthUserPermissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthUserPermissions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuthUserPermissions::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AuthUserPermissions::Codename)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auth_user_permissions_user")
                            .from(AuthUserPermissions::Table, AuthUserPermissions::UserId)
                            .to(AuthUsers::Table, AuthUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_auth_user_permissions_user_codename")
                    .table(AuthUserPermissions::Table)
                    .col(AuthUserPermissions::UserId)
                    .col(AuthUserPermissions::Codename)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create dz_users table, sharing its primary key with auth_users
        manager
            .create_table(
                Table::create()
                    .table(DzUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DzUsers::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DzUsers::Username)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DzUsers::Password).string_len(64).not_null())
                    .col(
                        ColumnDef::new(DzUsers::IsAdmin)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dz_users_auth_user")
                            .from(DzUsers::Table, DzUsers::Id)
                            .to(AuthUsers::Table, AuthUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DzUsers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthUserPermissions::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AuthUsers {
    Table,
    Id,
    Username,
    Password,
    FirstName,
    Email,
    IsActive,
    IsStaff,
    IsSuperuser,
    DateJoined,
}

#[derive(DeriveIden)]
enum AuthUserPermissions {
    Table,
    Id,
    UserId,
    Codename,
}

#[derive(DeriveIden)]
enum DzUsers {
    Table,
    Id,
    Username,
    Password,
    IsAdmin,
}
