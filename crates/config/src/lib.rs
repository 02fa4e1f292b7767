//! storefront-config - 配置加载库
//!
//! 加载顺序（后者覆盖前者）：
//! 服务默认值 → `{config_dir}/default.toml` → `{config_dir}/{APP_ENV}.toml` → `APP_*` 环境变量

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    // 开发环境: 10, 生产环境: 50
    match std::env::var("APP_ENV").as_deref() {
        Ok("production") => 50,
        _ => 10,
    }
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    /// 单个请求的处理超时（秒）
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 评分服务客户端配置（product-service 使用）
#[derive(Debug, Clone, Deserialize)]
pub struct RatingClientConfig {
    #[serde(default = "default_rating_base_url")]
    pub base_url: String,
    /// 每次查询的超时（毫秒）
    #[serde(default = "default_rating_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RatingClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_rating_base_url(),
            timeout_ms: default_rating_timeout_ms(),
        }
    }
}

fn default_rating_base_url() -> String {
    "http://localhost:4000/api/ratings".to_string()
}

fn default_rating_timeout_ms() -> u64 {
    2000
}

/// 评分存储配置（rating-service 使用）
#[derive(Debug, Clone, Deserialize)]
pub struct RatingsConfig {
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for RatingsConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}

/// 各服务自带的默认值，优先级最低
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDefaults {
    pub app_name: String,
    pub server: ServerDefaults,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerDefaults {
    pub port: u16,
}

impl ServiceDefaults {
    pub fn new(app_name: impl Into<String>, port: u16) -> Self {
        Self {
            app_name: app_name.into(),
            server: ServerDefaults { port },
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub rating_client: RatingClientConfig,
    #[serde(default)]
    pub ratings: RatingsConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str, defaults: ServiceDefaults) -> Result<Self, ConfigError> {
        // .env 不存在时忽略
        let _ = dotenvy::dotenv();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config: Self = Figment::new()
            .merge(Serialized::defaults(defaults))
            .merge(Serialized::default("app_env", &env))
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()?;

        Ok(config)
    }

    /// 配置目录：`CONFIG_DIR` 或 `config`
    pub fn config_dir() -> String {
        std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string())
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
