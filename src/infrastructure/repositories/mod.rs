// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口基于 sea-orm 的具体实现
pub mod crawl_repo_impl;
pub mod news_repo_impl;
mod query_helpers;
pub mod schedule_repo_impl;
pub mod tip_repo_impl;
pub mod user_repo_impl;
