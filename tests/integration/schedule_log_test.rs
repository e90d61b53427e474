// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_empty_app;
use dzcms::domain::models::crawl::CrawlTarget;
use dzcms::domain::models::schedule::NewSchedule;

fn hourly() -> NewSchedule {
    NewSchedule {
        target: CrawlTarget::Tip,
        cron: "0 * * * *".to_string(),
        is_active: true,
        comment: "hourly".to_string(),
    }
}

/// 每次变更都会写入一条带快照的日志
#[tokio::test]
async fn schedule_changes_are_logged() {
    let app = create_empty_app().await;
    let repo = &app.state.schedule_repo;

    let mut schedule = repo.create(&hourly()).await.unwrap();
    schedule.cron = "30 * * * *".to_string();
    let schedule = repo.update(&schedule).await.unwrap();
    repo.set_active(&[schedule.id], false).await.unwrap();
    repo.set_active(&[schedule.id], true).await.unwrap();
    repo.delete_many(&[schedule.id]).await.unwrap();

    let logs = repo.logs(schedule.id).await.unwrap();
    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(
        actions,
        vec!["created", "updated", "disabled", "enabled", "deleted"]
    );
    assert_eq!(logs[1].snapshot["cron"], "30 * * * *");
    assert_eq!(logs[2].snapshot["is_active"], false);
    assert_eq!(logs[4].snapshot["target"], "tip");
}

#[tokio::test]
async fn unchanged_rows_are_not_logged() {
    let app = create_empty_app().await;
    let repo = &app.state.schedule_repo;
    let schedule = repo.create(&hourly()).await.unwrap();

    // already active
    let changed = repo.set_active(&[schedule.id], true).await.unwrap();

    assert_eq!(changed, 0);
    assert_eq!(repo.logs(schedule.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn suspended_logging_skips_entries() {
    let app = create_empty_app().await;
    let repo = &app.state.schedule_repo;

    let schedule = {
        let _guard = repo.suspend_logging();
        let schedule = repo.create(&hourly()).await.unwrap();
        repo.set_active(&[schedule.id], false).await.unwrap();
        schedule
    };
    assert!(repo.logs(schedule.id).await.unwrap().is_empty());

    repo.set_active(&[schedule.id], true).await.unwrap();
    let logs = repo.logs(schedule.id).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, "enabled");
}
