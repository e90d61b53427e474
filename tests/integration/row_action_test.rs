// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{body_text, create_test_app, location, MODEL_BATCH_SIZE};
use axum::http::StatusCode;
use dzcms::domain::models::model_name::ModelName;

const ROW_ACTION_URL: &str = "/dz/row-action/";

fn delete_form(model: ModelName, ids: &[i32]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!(
        "model_name={}&action=delete&row_ids={}",
        model,
        urlencoding::encode(&ids.join(","))
    )
}

/// 没有删除权限时所有模型都返回 403，数据不变
#[tokio::test]
async fn view_only_user_cannot_delete() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("simple").await;

    for model in ModelName::ALL {
        let before = app.count(model).await;
        let ids = app.first_two_ids(model).await;

        let response = app
            .post_form(ROW_ACTION_URL, &delete_form(model, &ids), Some(&cookie))
            .await;

        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", model);
        assert_eq!(app.count(model).await, before, "{}", model);
    }
}

#[tokio::test]
async fn super_user_deletes_rows_of_every_model() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    for model in ModelName::ALL {
        let before = app.count(model).await;
        let ids = app.first_two_ids(model).await;
        assert_eq!(ids.len(), 2, "{}", model);

        let response = app
            .post_form(ROW_ACTION_URL, &delete_form(model, &ids), Some(&cookie))
            .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", model);
        assert_eq!(location(&response), model.list_url());
        assert_eq!(app.count(model).await, before - 2, "{}", model);
    }
}

#[tokio::test]
async fn deleting_special_user_keeps_its_auth_user() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;
    let admin = app.dz_user("admin").await;
    let simple = app.dz_user("simple").await;

    let response = app
        .post_form(
            ROW_ACTION_URL,
            &delete_form(ModelName::User, &[admin.id, simple.id]),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let repo = &app.state.user_repo;
    assert!(repo.find_dz_by_id(admin.id).await.unwrap().is_none());
    assert!(repo.find_auth_by_id(admin.id).await.unwrap().is_some());
    assert!(repo.find_dz_by_id(simple.id).await.unwrap().is_none());
    assert!(repo.find_auth_by_id(simple.id).await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_ids_are_ignored() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let response = app
        .post_form(
            ROW_ACTION_URL,
            &delete_form(ModelName::News, &[1, 2]),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.count(ModelName::News).await, MODEL_BATCH_SIZE);
}

#[tokio::test]
async fn invalid_requests_are_rejected() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    for body in [
        "",
        "model_name=news&action=delete",
        "model_name=trump&action=delete&row_ids=1",
        "model_name=news&action=explode&row_ids=1",
        "model_name=news&action=delete&row_ids=1%2Cx",
        "model_name=news&action=delete&row_ids=1%2C%2C2",
    ] {
        let response = app.post_form(ROW_ACTION_URL, body, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{:?}", body);
    }
    assert_eq!(app.count(ModelName::News).await, MODEL_BATCH_SIZE);
}

#[tokio::test]
async fn get_is_not_allowed() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let response = app.get(ROW_ACTION_URL, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn anonymous_user_is_redirected() {
    let app = create_test_app().await;
    let ids = app.first_two_ids(ModelName::News).await;

    let response = app
        .post_form(ROW_ACTION_URL, &delete_form(ModelName::News, &ids), None)
        .await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/dz-admin/login/?next=/dz/row-action/");
    assert_eq!(app.count(ModelName::News).await, MODEL_BATCH_SIZE);
}

#[tokio::test]
async fn schedules_can_be_disabled_and_enabled() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;
    let ids = app.first_two_ids(ModelName::Schedule).await;
    let row_ids = urlencoding::encode(&format!("{},{}", ids[0], ids[1])).into_owned();

    let response = app
        .post_form(
            ROW_ACTION_URL,
            &format!("model_name=schedule&action=disable&row_ids={}", row_ids),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    for id in &ids {
        let schedule = app.state.schedule_repo.find_by_id(*id).await.unwrap().unwrap();
        assert!(!schedule.is_active);
    }

    let response = app
        .post_form(
            ROW_ACTION_URL,
            &format!("model_name=schedule&action=enable&row_ids={}", row_ids),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    for id in &ids {
        let schedule = app.state.schedule_repo.find_by_id(*id).await.unwrap().unwrap();
        assert!(schedule.is_active);
    }
}

#[tokio::test]
async fn disabled_user_loses_access() {
    let app = create_test_app().await;
    let super_cookie = app.session_cookie("super").await;
    let simple_cookie = app.session_cookie("simple").await;
    let simple = app.dz_user("simple").await;

    let response = app
        .post_form(
            ROW_ACTION_URL,
            &format!("model_name=user&action=disable&row_ids={}", simple.id),
            Some(&super_cookie),
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let auth = app
        .state
        .user_repo
        .find_auth_by_id(simple.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!auth.is_active);
    // still listed
    assert_eq!(app.count(ModelName::User).await, 3);

    let response = app.get("/dz/news/", Some(&simple_cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
}

#[tokio::test]
async fn enable_is_unsupported_for_news() {
    let app = create_test_app().await;
    let cookie = app.session_cookie("super").await;

    let response = app
        .post_form(
            ROW_ACTION_URL,
            "model_name=news&action=enable&row_ids=1000",
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("not supported"));
}
