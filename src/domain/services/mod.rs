// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 爬取请求服务（crawl_request_service）：登记手动爬取
/// - 行操作服务（row_action_service）：按模型分发批量删除、启用、停用
/// - 用户同步服务（user_sync_service）：保持应用用户和认证用户一致
pub mod crawl_request_service;
pub mod row_action_service;
pub mod user_sync_service;
