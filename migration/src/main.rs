// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// dzcms 数据库迁移命令行
///
/// 连接地址取自 `DATABASE_URL`，例如 `sqlite://dzcms.db?mode=rwc`。
#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
