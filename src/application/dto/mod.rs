// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义页面表单和查询参数，在HTTP请求和领域模型之间传输数据
pub mod crawl_admin_query;
pub mod login_request;
pub mod row_action_form;
pub mod table_query;
