// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 登录与会话配置
    pub auth: AuthSettings,
    /// 表格列表配置
    pub tables: TableSettings,
    /// 指标导出配置
    #[serde(default)]
    pub metrics: MetricsSettings,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 登录与会话配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// 会话有效期（秒）
    pub session_ttl_secs: u64,
    /// 首次启动时创建的 `admin` 用户的密码
    pub admin_password: String,
    /// 登录页面路径
    pub login_url: String,
    /// Argon2 内存成本（KiB）
    pub argon2_m_cost: u32,
    /// Argon2 迭代次数
    pub argon2_t_cost: u32,
    /// Argon2 并行度
    pub argon2_p_cost: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            session_ttl_secs: 14 * 24 * 3600,
            admin_password: "admin".to_string(),
            login_url: "/dz-admin/login/".to_string(),
            argon2_m_cost: argon2::Params::DEFAULT_M_COST,
            argon2_t_cost: argon2::Params::DEFAULT_T_COST,
            argon2_p_cost: argon2::Params::DEFAULT_P_COST,
        }
    }
}

/// 表格列表配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    /// 默认每页行数
    pub per_page: u64,
    /// 每页行数上限
    pub max_per_page: u64,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsSettings {
    /// Prometheus 导出器监听地址，未设置时不导出
    pub listen_addr: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和 `DZ__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("DZ").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "sqlite://dzcms.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("auth.session_ttl_secs", 14 * 24 * 3600)?
            .set_default("auth.admin_password", "admin")?
            .set_default("auth.login_url", "/dz-admin/login/")?
            .set_default("auth.argon2_m_cost", argon2::Params::DEFAULT_M_COST)?
            .set_default("auth.argon2_t_cost", argon2::Params::DEFAULT_T_COST)?
            .set_default("auth.argon2_p_cost", argon2::Params::DEFAULT_P_COST)?
            .set_default("tables.per_page", 25)?
            .set_default("tables.max_per_page", 200)
    }
}
