// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 连接池配置（SQLite / PostgreSQL）以及新闻、投注建议、爬取、计划和用户表的实体定义
pub mod connection;
pub mod entities;
