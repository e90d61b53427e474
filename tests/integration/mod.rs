// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod admin_test;
pub mod crawl_request_test;
pub mod helpers;
pub mod row_action_test;
pub mod schedule_log_test;
pub mod table_views_test;
pub mod user_sync_test;
