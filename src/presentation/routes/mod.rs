// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::presentation::handlers::{
    admin_handler, crawl_request_handler, row_action_handler, table_handler,
};
use crate::presentation::middleware::session_middleware::session_middleware;
use crate::presentation::state::AppState;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `state` - 应用共享状态
///
/// # 返回值
///
/// 返回配置好的路由，所有请求都经过会话中间件
pub fn app(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/", get(|| async { Redirect::to("/dz/news/") }));

    let table_routes = Router::new()
        .route("/dz/news/", get(table_handler::news_list))
        .route("/dz/news/{id}/", get(table_handler::news_detail))
        .route("/dz/tip/", get(table_handler::tip_list))
        .route("/dz/crawl/", get(table_handler::crawl_list))
        .route("/dz/user/", get(table_handler::user_list))
        .route("/dz/schedule/", get(table_handler::schedule_list))
        .route(
            "/dz/row-action/",
            post(row_action_handler::run_row_action)
                .get(row_action_handler::reject_row_action_get),
        )
        .route(
            "/dz/crawl/{target}/",
            post(crawl_request_handler::request_crawl),
        );

    let admin_routes = Router::new()
        .route(
            "/dz-admin/login/",
            get(admin_handler::login_page).post(admin_handler::login),
        )
        .route(
            "/dz-admin/logout/",
            get(admin_handler::logout).post(admin_handler::logout),
        )
        .route("/dz-admin/crawl/", get(admin_handler::crawl_admin))
        .route("/dz-admin/news/", get(admin_handler::news_admin));

    Router::new()
        .merge(public_routes)
        .merge(table_routes)
        .merge(admin_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
