// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 爬取记录（crawl）：外部爬虫每次执行的日志
/// - 新闻（news）与投注建议（tip）：爬虫写入的内容
/// - 计划（schedule）：定时爬取配置及其变更日志
/// - 用户（user）：应用用户与认证用户
/// - 模型名称（model_name）：列表视图和行操作使用的模型标识
pub mod crawl;
pub mod model_name;
pub mod news;
pub mod schedule;
pub mod tip;
pub mod user;
