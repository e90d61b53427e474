// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, location, MODEL_BATCH_SIZE};
use axum::http::StatusCode;
use dzcms::domain::models::crawl::{CrawlStatus, CrawlTarget};
use dzcms::domain::models::model_name::ModelName;
use dzcms::domain::repositories::common::ListQuery;
use dzcms::domain::repositories::crawl_repository::CrawlFilter;

/// 手动爬取请求插入一条等待中的记录
#[tokio::test]
async fn super_user_requests_manual_crawl() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let response = app.post_form("/dz/crawl/tip/", "", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dz/tip/");
    assert_eq!(app.count(ModelName::Crawl).await, MODEL_BATCH_SIZE + 1);

    let filter = CrawlFilter {
        manual: Some(true),
        target: Some(CrawlTarget::Tip),
        status: Some(CrawlStatus::Waiting),
        ..Default::default()
    };
    let page = app
        .state
        .crawl_repo
        .list(&filter, &ListQuery::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);

    let crawl = &page.items[0];
    assert_eq!(crawl.pid, std::process::id() as i32);
    assert!(!crawl.host.is_empty());
    assert!(crawl.ended.is_none());
    assert_eq!(crawl.count, 0);
}

#[tokio::test]
async fn crawl_request_requires_permission() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let response = app.post_form("/dz/crawl/news/", "", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.count(ModelName::Crawl).await, MODEL_BATCH_SIZE);
}

#[tokio::test]
async fn granted_permission_allows_crawl_request() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;
    app.state
        .user_sync
        .grant_permission(simple.id, &CrawlTarget::News.crawl_permission())
        .await
        .unwrap();
    let cookie = app.session_cookie("simple").await;

    let response = app.post_form("/dz/crawl/news/", "", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.count(ModelName::Crawl).await, MODEL_BATCH_SIZE + 1);
}

#[tokio::test]
async fn unknown_crawl_target_is_not_found() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let response = app.post_form("/dz/crawl/schedule/", "", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
