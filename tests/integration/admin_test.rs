// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{body_text, create_test_app, location, TestApp, ADMIN_PASSWORD};
use axum::http::{header, StatusCode};

fn set_cookie(response: &axum::http::Response<axum::body::Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

/// `dz_session=...; HttpOnly; ...` 中的 `name=value` 部分
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or("").to_string()
}

async fn login(app: &TestApp, username: &str, password: &str, next: &str) -> String {
    let body = format!(
        "username={}&password={}&next={}",
        username,
        password,
        urlencoding::encode(next)
    );
    let response = app.post_form("/dz-admin/login/", &body, None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    cookie_pair(&set_cookie(&response))
}

#[tokio::test]
async fn login_page_renders_form() {
    let app = create_test_app().await;

    let response = app.get("/dz-admin/login/?next=/dz/tip/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"id="login-form""#));
    assert!(body.contains(r#"name="next" value="/dz/tip/""#));
}

#[tokio::test]
async fn login_sets_session_and_redirects_to_next() {
    let app = create_test_app().await;

    let response = app
        .post_form(
            "/dz-admin/login/",
            "username=simple&password=simple-pass&next=%2Fdz%2Ftip%2F",
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/dz/tip/");
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("dz_session="));
    assert!(cookie.contains("HttpOnly"));

    let response = app.get("/dz/tip/", Some(&cookie_pair(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_ignores_external_next() {
    let app = create_test_app().await;

    for next in [
        "https%3A%2F%2Fevil.example%2F",
        "%2F%2Fevil.example%2F",
        "%2F%5Cevil.example",
    ] {
        let response = app
            .post_form(
                "/dz-admin/login/",
                &format!("username=simple&password=simple-pass&next={}", next),
                None,
            )
            .await;

        assert_eq!(response.status(), StatusCode::FOUND, "{}", next);
        assert_eq!(location(&response), "/dz/news/", "{}", next);
    }
}

#[tokio::test]
async fn wrong_password_rerenders_form() {
    let app = create_test_app().await;

    for body in [
        "username=simple&password=wrong",
        "username=nobody&password=simple-pass",
        "username=&password=",
    ] {
        let response = app.post_form("/dz-admin/login/", body, None).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", body);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_text(response).await.contains("errornote"));
    }
}

#[tokio::test]
async fn special_user_logs_in_with_bootstrap_password() {
    let app = create_test_app().await;

    let cookie = login(&app, "admin", ADMIN_PASSWORD, "/dz/user/").await;

    let response = app.get("/dz/user/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_ends_session() {
    let app = create_test_app().await;
    let cookie = login(&app, "simple", "simple-pass", "/dz/news/").await;

    let response = app.post_form("/dz-admin/logout/", "", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/dz-admin/login/");
    assert!(set_cookie(&response).contains("Max-Age=0"));

    let response = app.get("/dz/news/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn crawl_admin_lists_and_filters() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let cases = [
        ("/dz-admin/crawl/", 5),
        ("/dz-admin/crawl/?manual=1", 2),
        ("/dz-admin/crawl/?manual=0", 3),
        ("/dz-admin/crawl/?year=2017", 2),
        ("/dz-admin/crawl/?target=news&year=2018", 2),
        ("/dz-admin/crawl/?status=running", 1),
        ("/dz-admin/crawl/?year=2016", 0),
    ];
    for (uri, expected) in cases {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        let body = body_text(response).await;
        assert!(body.contains(&format!("List ({})", expected)), "{}", uri);
    }
}

#[tokio::test]
async fn crawl_admin_shows_filters_and_years() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let body = body_text(app.get("/dz-admin/crawl/?manual=1", Some(&cookie)).await).await;

    assert!(body.contains(r#"<li class="selected"><a href="?manual=1">Manual Crawl</a></li>"#));
    assert!(body.contains(">Auto Crawl</a>"));
    assert!(body.contains(r#"<a href="?manual=1&amp;year=2018">2018</a>"#));
    assert!(body.contains(r#"<a href="?manual=1&amp;year=2017">2017</a>"#));
    assert_eq!(body.matches(r#"year=2018">2018</a>"#).count(), 1);
    assert!(body.find(">2018</a>").unwrap() < body.find(">2017</a>").unwrap());
    assert!(body.contains("<td class=\"col-type_str\">Manual Crawl</td>"));
    assert!(!body.contains("col-row_selector"));
}

#[tokio::test]
async fn crawl_admin_rejects_unknown_filter_values() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    for uri in [
        "/dz-admin/crawl/?manual=maybe",
        "/dz-admin/crawl/?target=trump",
        "/dz-admin/crawl/?status=lost",
        "/dz-admin/crawl/?year=2147483647",
        "/dz-admin/crawl/?year=500000",
        "/dz-admin/crawl/?year=0",
    ] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }
}

#[tokio::test]
async fn admin_pages_require_staff() {
    let app = create_test_app().await;
    app.insert_auth_user("reader", Some("reader-pass")).await;
    let cookie = app.session_cookie("reader").await;

    for uri in ["/dz-admin/crawl/", "/dz-admin/news/"] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", uri);
    }

    let response = app.get("/dz-admin/crawl/", None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn news_admin_shows_preview() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    let response = app.get("/dz-admin/news/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("List (5)"));
    assert!(body.contains(r#"<div class="dz_pre">Preamble of report 3</div>"#));
    assert!(body.contains(r#"<a href="/dz/news/1003/" target="_blank">(more...)</a>"#));
}
