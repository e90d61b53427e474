// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 包含各个页面和表单端点的具体处理逻辑
pub mod admin_handler;
pub mod crawl_request_handler;
pub mod row_action_handler;
pub mod table_handler;
