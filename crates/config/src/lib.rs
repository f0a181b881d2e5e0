//! oms-config - 配置加载库
//!
//! 两个进程都只从环境变量读取配置，每个键都有文档化的默认值。
//! 进程启动时由 `dotenvy` 先把 `.env` 载入环境。

use std::net::SocketAddr;
use std::time::Duration;

use figment::{Figment, providers::Env};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid address for {key}: {value}")]
    InvalidAddress { key: &'static str, value: String },
}

const TELEMETRY_KEYS: [&str; 2] = ["APP_ENV", "LOG_LEVEL"];

/// 遥测配置（两个进程共用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            log_level: default_log_level(),
        }
    }
}

impl TelemetryConfig {
    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

/// Gateway 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten)]
    pub telemetry: TelemetryConfig,
    /// HTTP 监听地址（HTTP_ADDR）
    #[serde(default = "default_http_addr")]
    pub http_addr: String,
    /// 订单服务地址（ORDERS_SERVICE_ADDR）
    #[serde(default = "default_orders_service_addr")]
    pub orders_service_addr: String,
    /// 单次远程调用的截止时间（REQUEST_TIMEOUT_MS）
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// 建立连接的超时（CONNECT_TIMEOUT_MS）
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_http_addr() -> String {
    ":3000".to_string()
}

fn default_orders_service_addr() -> String {
    "localhost:2000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_connect_timeout_ms() -> u64 {
    3000
}

const GATEWAY_KEYS: [&str; 4] = [
    "HTTP_ADDR",
    "ORDERS_SERVICE_ADDR",
    "REQUEST_TIMEOUT_MS",
    "CONNECT_TIMEOUT_MS",
];

impl GatewayConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Env::raw().only(&TELEMETRY_KEYS))
            .merge(Env::raw().only(&GATEWAY_KEYS));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr("HTTP_ADDR", &self.http_addr)
    }

    /// 订单服务的 gRPC endpoint URI
    pub fn orders_endpoint(&self) -> String {
        normalize_endpoint(&self.orders_service_addr)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// 订单服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersConfig {
    #[serde(flatten)]
    pub telemetry: TelemetryConfig,
    /// gRPC 监听地址（GRPC_ADDR）
    #[serde(default = "default_grpc_addr")]
    pub grpc_addr: String,
}

fn default_grpc_addr() -> String {
    ":2000".to_string()
}

impl OrdersConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Env::raw().only(&TELEMETRY_KEYS))
            .merge(Env::raw().only(&["GRPC_ADDR"]));
        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_listen_addr("GRPC_ADDR", &self.grpc_addr)
    }
}

/// 解析监听地址，`:3000` 表示监听所有网卡
pub fn parse_listen_addr(key: &'static str, value: &str) -> Result<SocketAddr, ConfigError> {
    let trimmed = value.trim();
    let candidate = if trimmed.starts_with(':') {
        format!("0.0.0.0{trimmed}")
    } else {
        trimmed.to_string()
    };

    candidate.parse().map_err(|_| ConfigError::InvalidAddress {
        key,
        value: value.to_string(),
    })
}

/// 没有 scheme 的地址补上 `http://`
pub fn normalize_endpoint(addr: &str) -> String {
    let trimmed = addr.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
