// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use chrono::{TimeZone, Utc};
use dzcms::config::settings::{
    AuthSettings, DatabaseSettings, MetricsSettings, ServerSettings, Settings, TableSettings,
};
use dzcms::domain::models::crawl::{CrawlStatus, CrawlTarget, NewCrawl};
use dzcms::domain::models::model_name::ModelName;
use dzcms::domain::models::news::{Archived, News};
use dzcms::domain::models::schedule::NewSchedule;
use dzcms::domain::models::tip::Tip;
use dzcms::domain::models::user::{DzUser, DzUserDraft};
use dzcms::infrastructure::database::connection;
use dzcms::infrastructure::database::entities::auth_user;
use dzcms::infrastructure::security::password::{PasswordHasher, UNUSABLE_PASSWORD};
use dzcms::presentation::middleware::session_middleware::SESSION_COOKIE;
use dzcms::presentation::routes;
use dzcms::presentation::state::AppState;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// 每个模型预置的数据行数
pub const MODEL_BATCH_SIZE: u64 = 5;

/// 预置用户：(用户名, 密码, 是否管理员)
pub const TEST_USERS: [(&str, &str, bool); 2] = [("super", "super-pass", true), ("simple", "simple-pass", false)];

pub const ADMIN_PASSWORD: &str = "admin-pass";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub db: Arc<DatabaseConnection>,
    // Keep the database file alive
    pub dir: TempDir,
}

pub fn test_settings(url: String) -> Settings {
    Settings {
        database: DatabaseSettings {
            url,
            max_connections: Some(1),
            min_connections: Some(1),
            connect_timeout: Some(10),
            idle_timeout: None,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        auth: AuthSettings {
            session_ttl_secs: 3600,
            admin_password: ADMIN_PASSWORD.to_string(),
            login_url: "/dz-admin/login/".to_string(),
            argon2_m_cost: 8,
            argon2_t_cost: 1,
            argon2_p_cost: 1,
        },
        tables: TableSettings {
            per_page: 25,
            max_per_page: 100,
        },
        metrics: MetricsSettings::default(),
    }
}

/// 创建迁移完成但没有任何数据的应用
pub async fn create_empty_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("dz.db").display());
    let settings = Arc::new(test_settings(url));

    let db = Arc::new(
        connection::create_pool(&settings.database)
            .await
            .expect("connect to sqlite"),
    );
    Migrator::up(db.as_ref(), None).await.expect("migrations");

    let state = AppState::new(db.clone(), settings).expect("app state");
    let router = routes::app(state.clone());
    TestApp {
        router,
        state,
        db,
        dir,
    }
}

/// 创建带有预置用户和数据的应用
///
/// 用户：`admin`（特殊用户）、`super`（管理员）、`simple`（只有查看权限）
pub async fn create_test_app() -> TestApp {
    let app = create_empty_app().await;
    app.state
        .user_sync
        .ensure_admin(ADMIN_PASSWORD)
        .await
        .expect("bootstrap admin");

    for (username, password, is_admin) in TEST_USERS {
        app.state
            .user_sync
            .save_dz_user(DzUserDraft::new(username, password, is_admin))
            .await
            .expect("seed user");
    }
    let simple = app.dz_user("simple").await;
    for model in ModelName::ALL {
        app.state
            .user_sync
            .grant_permission(simple.id, &model.view_permission())
            .await
            .expect("grant view permission");
    }

    seed_content(&app).await;
    app
}

async fn seed_content(app: &TestApp) {
    let manual = [Some(true), Some(false), None, Some(true), Some(false)];
    let statuses = [
        CrawlStatus::Complete,
        CrawlStatus::Complete,
        CrawlStatus::Running,
        CrawlStatus::Started,
        CrawlStatus::Waiting,
    ];

    for i in 0..MODEL_BATCH_SIZE as i32 {
        let published = Utc.with_ymd_and_hms(2018, 3, 1 + i as u32, 12, 0, 0).unwrap();
        app.state
            .news_repo
            .create(&News {
                id: 1000 + i,
                url: format!("https://example.com/news/{}", 1000 + i),
                title: format!("Match report {}", i),
                short_title: format!("Home {} - Away {}", i, i),
                section: "football".to_string(),
                subsection: "Premier League".to_string(),
                published,
                updated: published,
                crawled: published,
                archived: Archived::Fresh,
                preamble: Some(format!("<p>Preamble of report {}</p>", i)),
                content: format!("<p>Full <b>content</b> of report {}</p>", i),
                subtable: String::new(),
            })
            .await
            .expect("seed news");

        app.state
            .tip_repo
            .create(&Tip {
                id: 2000 + i,
                url: format!("https://example.com/tips/{}", 2000 + i),
                title: format!("Tip {}", i),
                tipster: "oracle".to_string(),
                section: "tennis".to_string(),
                subsection: "ATP".to_string(),
                published,
                updated: published,
                crawled: published,
                archived: Archived::Fresh,
                preamble: None,
                content: format!("Back player {}", i),
                result: None,
            })
            .await
            .expect("seed tip");

        let year = if i < 2 { 2017 } else { 2018 };
        app.state
            .crawl_repo
            .create(&NewCrawl {
                target: if i % 2 == 0 {
                    CrawlTarget::News
                } else {
                    CrawlTarget::Tip
                },
                manual: manual[i as usize],
                status: statuses[i as usize],
                started: Utc.with_ymd_and_hms(year, 6, 1, 8, i as u32, 0).unwrap(),
                host: "crawler-1".to_string(),
                pid: 4000 + i,
            })
            .await
            .expect("seed crawl");

        app.state
            .schedule_repo
            .create(&NewSchedule {
                target: CrawlTarget::News,
                cron: format!("{} * * * *", i * 10),
                is_active: true,
                comment: format!("every hour at {}", i * 10),
            })
            .await
            .expect("seed schedule");
    }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn dz_user(&self, username: &str) -> DzUser {
        self.state
            .user_repo
            .find_dz_by_username(username)
            .await
            .expect("query dz user")
            .expect("dz user exists")
    }

    /// 插入一个没有应用用户的认证用户，返回其ID
    ///
    /// `password` 为空时使用不可用密码。
    pub async fn insert_auth_user(&self, username: &str, password: Option<&str>) -> i32 {
        let password = match password {
            Some(raw) => PasswordHasher::new(&self.state.settings.auth)
                .expect("hasher")
                .hash(raw)
                .expect("hash password"),
            None => UNUSABLE_PASSWORD.to_string(),
        };
        auth_user::ActiveModel {
            username: Set(username.to_string()),
            password: Set(password),
            first_name: Set(String::new()),
            email: Set(String::new()),
            is_active: Set(true),
            is_staff: Set(false),
            is_superuser: Set(false),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await
        .expect("insert auth user")
        .id
    }

    /// 直接创建会话，返回可用于请求的 cookie
    pub async fn session_cookie(&self, username: &str) -> String {
        let user = self
            .state
            .user_repo
            .find_auth_by_username(username)
            .await
            .expect("query auth user")
            .expect("auth user exists");
        let token = self.state.sessions.create(user.id);
        format!("{}={}", SESSION_COOKIE, token)
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn count(&self, model: ModelName) -> u64 {
        match model {
            ModelName::News => self.state.news_repo.count().await,
            ModelName::Tip => self.state.tip_repo.count().await,
            ModelName::Crawl => self.state.crawl_repo.count().await,
            ModelName::User => self.state.user_repo.count_dz().await,
            ModelName::Schedule => self.state.schedule_repo.count().await,
        }
        .expect("count rows")
    }

    /// 按主键升序取前两行
    pub async fn first_two_ids(&self, model: ModelName) -> Vec<i32> {
        let query = dzcms::domain::repositories::common::ListQuery {
            per_page: 100,
            ..Default::default()
        }
        .with_sort("id");
        let mut ids: Vec<i32> = match model {
            ModelName::News => self.state.news_repo.list(&query).await.unwrap().items.iter().map(|n| n.id).collect(),
            ModelName::Tip => self.state.tip_repo.list(&query).await.unwrap().items.iter().map(|t| t.id).collect(),
            ModelName::Crawl => self
                .state
                .crawl_repo
                .list(&Default::default(), &query)
                .await
                .unwrap()
                .items
                .iter()
                .map(|c| c.id)
                .collect(),
            ModelName::User => {
                // keep the logged in super user
                let mut ids = Vec::new();
                for name in ["admin", "simple"] {
                    ids.push(self.dz_user(name).await.id);
                }
                ids
            }
            ModelName::Schedule => self.state.schedule_repo.list(&query).await.unwrap().items.iter().map(|s| s.id).collect(),
        };
        ids.sort();
        ids.truncate(2);
        ids
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
