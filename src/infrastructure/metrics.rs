// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 初始化指标系统
///
/// 未配置监听地址时不安装导出器，指标宏此时不做任何事。
///
/// # 参数
///
/// * `listen_addr` - Prometheus 导出器的监听地址
pub fn init_metrics(listen_addr: Option<&str>) -> anyhow::Result<()> {
    let Some(listen_addr) = listen_addr else {
        info!("Metrics exporter disabled");
        return Ok(());
    };
    let addr: SocketAddr = listen_addr.parse()?;

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return Ok(());
    }

    describe_counter!(
        "dz_row_actions_total",
        "Total number of row actions executed, by model and action"
    );
    describe_counter!(
        "dz_rows_affected_total",
        "Total number of rows changed by row actions"
    );
    describe_counter!("dz_logins_total", "Login attempts by outcome");
    describe_counter!(
        "dz_crawl_requests_total",
        "Manual crawl requests by target"
    );

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}
