// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{body_text, create_test_app, location, MODEL_BATCH_SIZE};
use axum::http::StatusCode;
use dzcms::domain::models::model_name::ModelName;

/// 未登录用户被重定向到登录页，并带上原始地址
#[tokio::test]
async fn anonymous_user_is_redirected_to_login() {
    let app = create_test_app().await;

    for model in ModelName::ALL {
        let response = app.get(&model.list_url(), None).await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            location(&response),
            format!("/dz-admin/login/?next=/dz/{}/", model)
        );
    }
}

#[tokio::test]
async fn unknown_session_is_treated_as_anonymous() {
    let app = create_test_app().await;

    let response = app.get("/dz/news/", Some("dz_session=not-a-session")).await;

    assert_eq!(response.status(), StatusCode::FOUND);
}

/// 管理员可以看到所有行以及行操作列
#[tokio::test]
async fn super_user_sees_rows_and_actions() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    for model in [ModelName::News, ModelName::Tip, ModelName::Crawl, ModelName::Schedule] {
        let response = app.get(&model.list_url(), Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(&format!("List ({})", MODEL_BATCH_SIZE)), "{}", model);
        assert!(body.contains("col-row_selector"), "{}", model);
        assert!(body.contains("col-row_actions"), "{}", model);
        assert!(body.contains(r#"<p class="navbar-text">super</p>"#));
    }
}

#[tokio::test]
async fn super_user_sees_crawl_buttons_only_on_crawlable_lists() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let news = body_text(app.get("/dz/news/", Some(&cookie)).await).await;
    assert!(news.contains(">Crawl News Now</button>"));

    let tips = body_text(app.get("/dz/tip/", Some(&cookie)).await).await;
    assert!(tips.contains(">Crawl Tips Now</button>"));

    let schedules = body_text(app.get("/dz/schedule/", Some(&cookie)).await).await;
    assert!(!schedules.contains("Now</button>"));
}

#[tokio::test]
async fn user_list_contains_synced_users() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let response = app.get("/dz/user/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    // admin, super, simple
    assert!(body.contains("List (3)"));
    for username in ["admin", "super", "simple"] {
        assert!(body.contains(&format!(">{}<", username)), "{}", username);
    }
}

/// 只有查看权限的用户看不到行操作
#[tokio::test]
async fn view_only_user_sees_rows_without_actions() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    for model in ModelName::ALL {
        let response = app.get(&model.list_url(), Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", model);

        let body = body_text(response).await;
        assert!(body.contains("<h2>List ("), "{}", model);
        assert!(!body.contains("col-row_selector"), "{}", model);
        assert!(!body.contains("col-row_actions"), "{}", model);
        assert!(!body.contains("Now</button>"), "{}", model);
    }
}

#[tokio::test]
async fn user_without_view_permission_is_forbidden() {
    let app = create_test_app().await;
    app.insert_auth_user("nobody", None).await;
    let cookie = app.session_cookie("nobody").await;

    for model in ModelName::ALL {
        let response = app.get(&model.list_url(), Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", model);
    }
}

#[tokio::test]
async fn inactive_user_is_redirected_to_login() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;
    let simple = app.dz_user("simple").await;
    app.state
        .user_sync
        .save_auth_user(dzcms::domain::models::user::AuthUserChange {
            id: simple.id,
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    let response = app.get("/dz/news/", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn table_sorts_by_requested_column() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let body = body_text(app.get("/dz/news/?sort=title", Some(&cookie)).await).await;
    let first = body.find("Match report 0").unwrap();
    let last = body.find("Match report 4").unwrap();
    assert!(first < last);

    let body = body_text(app.get("/dz/news/?sort=-title", Some(&cookie)).await).await;
    let first = body.find("Match report 0").unwrap();
    let last = body.find("Match report 4").unwrap();
    assert!(first > last);
}

#[tokio::test]
async fn unknown_sort_column_falls_back_to_default() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let response = app.get("/dz/news/?sort=content", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    // newest first
    let body = body_text(response).await;
    assert!(body.find("Match report 4").unwrap() < body.find("Match report 0").unwrap());
}

#[tokio::test]
async fn table_paginates() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let body = body_text(app.get("/dz/tip/?per_page=2", Some(&cookie)).await).await;
    assert!(body.contains("List (5)"));
    assert!(body.contains("1 of 3"));
    assert!(body.contains(">next<"));
    assert!(!body.contains(">previous<"));

    let body = body_text(app.get("/dz/tip/?per_page=2&page=3", Some(&cookie)).await).await;
    assert!(body.contains("3 of 3"));
    assert!(body.contains(">previous<"));
    assert!(body.contains("Tip 0"));
    assert!(!body.contains("Tip 4"));
}

#[tokio::test]
async fn page_beyond_range_renders_empty_table() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    for uri in [
        "/dz/news/?page=1000000000000000000",
        "/dz/news/?page=18446744073709551615",
        "/dz/user/?page=18446744073709551615&per_page=100",
    ] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        let body = body_text(response).await;
        assert!(body.contains("<h2>List ("), "{}", uri);
        assert!(!body.contains("Match report"), "{}", uri);
    }

    let admin_cookie = app.session_cookie("admin").await;
    for uri in [
        "/dz-admin/crawl/?page=18446744073709551615",
        "/dz-admin/news/?page=18446744073709551615",
    ] {
        let response = app.get(uri, Some(&admin_cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }
}

#[tokio::test]
async fn news_detail_shows_plain_text() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let response = app.get("/dz/news/1002/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Match report 2"));
    assert!(body.contains("Full content of report 2"));
    assert!(!body.contains("<b>content</b>"));
}

#[tokio::test]
async fn news_detail_links_only_web_urls() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let body = body_text(app.get("/dz/news/1001/", Some(&cookie)).await).await;
    assert!(body.contains(r#"<a href="https://example.com/news/1001">"#));

    let mut news = app.state.news_repo.find_by_id(1001).await.unwrap().unwrap();
    news.id = 1100;
    news.url = "javascript:alert(document.cookie)".to_string();
    app.state.news_repo.create(&news).await.unwrap();

    let response = app.get("/dz/news/1100/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<p>javascript:alert(document.cookie)</p>"));
    assert!(!body.contains(r#"href="javascript:"#));
}

#[tokio::test]
async fn missing_news_detail_is_not_found() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let response = app.get("/dz/news/999/", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
