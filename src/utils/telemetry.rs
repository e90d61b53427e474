// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未设置 `RUST_LOG` 时使用的过滤规则
pub const DEFAULT_FILTER: &str = "info,dzcms=debug,sea_orm=warn";

/// 控制日志格式的环境变量，取值 `json` 时输出结构化日志
pub const LOG_FORMAT_ENV: &str = "DZ_LOG_FORMAT";

fn wants_json(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.eq_ignore_ascii_case("json"))
}

/// 初始化全局日志订阅者
pub fn init_telemetry() {
    let format = std::env::var(LOG_FORMAT_ENV).ok();
    let json = wants_json(format.as_deref());

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(|| fmt::layer()))
        .init();
}
