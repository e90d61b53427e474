// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 公共类型（common）：错误类型、列表查询参数和分页结果
/// - 爬取记录仓库（crawl_repository）
/// - 新闻仓库（news_repository）
/// - 计划仓库（schedule_repository）：包含变更日志的暂停守卫
/// - 投注建议仓库（tip_repository）
/// - 用户仓库（user_repository）：认证用户和应用用户
pub mod common;
pub mod crawl_repository;
pub mod news_repository;
pub mod schedule_repository;
pub mod tip_repository;
pub mod user_repository;
