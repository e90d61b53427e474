// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_empty_app, create_test_app, ADMIN_PASSWORD};
use dzcms::domain::models::user::{AuthUserChange, DzUserDraft};
use dzcms::domain::services::user_sync_service::UserSyncError;

#[tokio::test]
async fn saving_dz_user_creates_matching_auth_user() {
    let app = create_empty_app().await;

    let dz = app
        .state
        .user_sync
        .save_dz_user(DzUserDraft::new("editor", "secret", false))
        .await
        .unwrap();

    let auth = app
        .state
        .user_repo
        .find_auth_by_id(dz.id)
        .await
        .unwrap()
        .expect("auth user shares the dz id");
    assert_eq!(auth.username, "editor");
    assert_eq!(auth.first_name, "editor");
    assert_eq!(auth.email, "editor@example.com");
    assert!(auth.is_active);
    assert!(auth.is_staff);
    assert!(!auth.is_superuser);
    assert_ne!(auth.password, "secret");

    let logged_in = app.state.user_sync.authenticate("editor", "secret").await.unwrap();
    assert_eq!(logged_in.map(|u| u.id), Some(dz.id));
}

#[tokio::test]
async fn admin_flag_maps_to_superuser() {
    let app = create_empty_app().await;

    let dz = app
        .state
        .user_sync
        .save_dz_user(DzUserDraft::new("boss", "secret", true))
        .await
        .unwrap();
    let auth = app.state.user_repo.find_auth_by_id(dz.id).await.unwrap().unwrap();
    assert!(auth.is_superuser);

    let mut draft = DzUserDraft::from(dz);
    draft.is_admin = false;
    let dz = app.state.user_sync.save_dz_user(draft).await.unwrap();
    let auth = app.state.user_repo.find_auth_by_id(dz.id).await.unwrap().unwrap();
    assert!(!auth.is_superuser);
}

#[tokio::test]
async fn existing_auth_user_is_reused() {
    let app = create_empty_app().await;
    let auth_id = app.insert_auth_user("legacy", None).await;

    let dz = app
        .state
        .user_sync
        .save_dz_user(DzUserDraft::new("legacy", "pw", false))
        .await
        .unwrap();

    assert_eq!(dz.id, auth_id);
}

#[tokio::test]
async fn invalid_username_is_rejected() {
    let app = create_empty_app().await;

    for username in ["", "has space", "much-too-long-username-here"] {
        let result = app
            .state
            .user_sync
            .save_dz_user(DzUserDraft::new(username, "pw", false))
            .await;
        assert!(
            matches!(result, Err(UserSyncError::Validation(_))),
            "{:?}",
            username
        );
    }
    assert_eq!(app.state.user_repo.count_dz().await.unwrap(), 0);
}

#[tokio::test]
async fn auth_rename_and_password_flow_back_to_dz_user() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;

    app.state
        .user_sync
        .save_auth_user(AuthUserChange {
            id: simple.id,
            username: Some("renamed".to_string()),
            raw_password: Some("fresh-pass".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let dz = app.state.user_repo.find_dz_by_id(simple.id).await.unwrap().unwrap();
    assert_eq!(dz.username, "renamed");
    assert_eq!(dz.password, "fresh-pass");

    let sync = &app.state.user_sync;
    assert!(sync.authenticate("renamed", "fresh-pass").await.unwrap().is_some());
    assert!(sync.authenticate("renamed", "simple-pass").await.unwrap().is_none());
    assert!(sync.authenticate("simple", "simple-pass").await.unwrap().is_none());
}

#[tokio::test]
async fn auth_activity_change_keeps_dz_user() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;

    let auth = app
        .state
        .user_sync
        .save_auth_user(AuthUserChange {
            id: simple.id,
            is_active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(!auth.is_active);
    assert_eq!(app.dz_user("simple").await, simple);
    assert!(app
        .state
        .user_sync
        .authenticate("simple", "simple-pass")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn saving_unknown_auth_user_fails() {
    let app = create_empty_app().await;

    let result = app
        .state
        .user_sync
        .save_auth_user(AuthUserChange {
            id: 42,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(UserSyncError::AuthUserNotFound(42))));
}

#[tokio::test]
async fn deleting_auth_user_removes_dz_user() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;

    let deleted = app.state.user_sync.delete_auth_users(&[simple.id]).await.unwrap();

    assert_eq!(deleted, 1);
    assert!(app.state.user_repo.find_dz_by_id(simple.id).await.unwrap().is_none());
}

#[tokio::test]
async fn ensure_admin_runs_once() {
    let app = create_empty_app().await;
    let sync = &app.state.user_sync;

    assert!(sync.ensure_admin(ADMIN_PASSWORD).await.unwrap());
    assert!(!sync.ensure_admin("other").await.unwrap());

    let admin = app.dz_user("admin").await;
    assert!(admin.is_special());
    let auth = app.state.user_repo.find_auth_by_id(admin.id).await.unwrap().unwrap();
    assert!(auth.is_superuser);
    assert!(sync.authenticate("admin", ADMIN_PASSWORD).await.unwrap().is_some());
    assert!(sync.authenticate("admin", "other").await.unwrap().is_none());
}

#[tokio::test]
async fn resaving_special_user_keeps_password() {
    let app = create_test_app().await;
    let admin = app.dz_user("admin").await;

    app.state
        .user_sync
        .save_dz_user(DzUserDraft::from(admin))
        .await
        .unwrap();

    assert!(app
        .state
        .user_sync
        .authenticate("admin", ADMIN_PASSWORD)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn failed_save_leaves_both_users_unchanged() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;
    app.insert_auth_user("orphan", None).await;

    let mut draft = DzUserDraft::from(simple.clone());
    draft.username = "orphan".to_string();
    let result = app.state.user_sync.save_dz_user(draft).await;
    assert!(matches!(result, Err(UserSyncError::Repository(_))), "{:?}", result);

    assert_eq!(app.dz_user("simple").await, simple);
    let auth = app.state.user_repo.find_auth_by_id(simple.id).await.unwrap().unwrap();
    assert_eq!(auth.username, "simple");
    assert!(app
        .state
        .user_sync
        .authenticate("simple", "simple-pass")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn failed_auth_rename_leaves_both_users_unchanged() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;
    app.insert_auth_user("orphan", None).await;

    let result = app
        .state
        .user_sync
        .save_auth_user(AuthUserChange {
            id: simple.id,
            username: Some("orphan".to_string()),
            ..Default::default()
        })
        .await;
    assert!(result.is_err());

    assert_eq!(app.dz_user("simple").await, simple);
    let auth = app.state.user_repo.find_auth_by_id(simple.id).await.unwrap().unwrap();
    assert_eq!(auth.username, "simple");
}

#[tokio::test]
async fn deleting_special_user_keeps_auth_user() {
    let app = create_test_app().await;
    let admin = app.dz_user("admin").await;
    let simple = app.dz_user("simple").await;

    let deleted = app
        .state
        .user_sync
        .delete_dz_users(&[admin.id, simple.id, 9999])
        .await
        .unwrap();

    assert_eq!(deleted, 2);
    let repo = &app.state.user_repo;
    assert!(repo.find_auth_by_id(admin.id).await.unwrap().is_some());
    assert!(repo.find_auth_by_id(simple.id).await.unwrap().is_none());
    assert!(repo.find_dz_by_id(admin.id).await.unwrap().is_none());
}

#[tokio::test]
async fn stored_password_is_argon2_hash() {
    let app = create_test_app().await;
    let simple = app.dz_user("simple").await;

    let auth = app.state.user_repo.find_auth_by_id(simple.id).await.unwrap().unwrap();
    assert!(auth.password.starts_with("$argon2id$"), "{}", auth.password);
}
