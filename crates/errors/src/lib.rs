//! oms-errors - 统一错误处理
//!
//! 错误种类是封闭集合：`InvalidRequest`、`Internal`、`Unavailable`。
//! HTTP 状态码与 gRPC 状态码的映射都是纯查表，不依赖错误文本。
//! 对外错误体基于 RFC 7807 Problem Details 规范。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 对外隐藏内部细节时使用的通用提示
pub const GENERIC_INTERNAL_MESSAGE: &str = "internal server error";
pub const GENERIC_UNAVAILABLE_MESSAGE: &str = "service temporarily unavailable";

/// 应用错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// 错误种类（不携带消息，便于断言和查表）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRequest,
    Internal,
    Unavailable,
}

impl AppError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Self::Internal(_) => ErrorKind::Internal,
            Self::Unavailable(_) => ErrorKind::Unavailable,
        }
    }

    /// 原始错误消息（仅用于日志）
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidRequest(msg) | Self::Internal(msg) | Self::Unavailable(msg) => msg,
        }
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            Self::Internal(_) => 500,
            Self::Unavailable(_) => 500,
        }
    }

    /// 转换为 gRPC 状态码
    pub fn grpc_code(&self) -> tonic::Code {
        match self {
            Self::InvalidRequest(_) => tonic::Code::InvalidArgument,
            Self::Internal(_) => tonic::Code::Internal,
            Self::Unavailable(_) => tonic::Code::Unavailable,
        }
    }

    /// 根据远端返回的 gRPC 状态还原错误种类
    ///
    /// 只看状态码；消息原样保留，供日志使用。
    pub fn from_status(status: &tonic::Status) -> Self {
        let msg = status.message().to_string();
        match status.code() {
            tonic::Code::InvalidArgument
            | tonic::Code::OutOfRange
            | tonic::Code::FailedPrecondition => Self::InvalidRequest(msg),
            tonic::Code::Unavailable
            | tonic::Code::DeadlineExceeded
            | tonic::Code::Cancelled => Self::Unavailable(msg),
            _ => Self::Internal(msg),
        }
    }

    /// 可以返回给调用方的错误描述
    ///
    /// 只有 `InvalidRequest` 会回显细节，其余一律返回通用消息。
    pub fn public_detail(&self) -> String {
        match self {
            Self::InvalidRequest(msg) => msg.clone(),
            Self::Internal(_) => GENERIC_INTERNAL_MESSAGE.to_string(),
            Self::Unavailable(_) => GENERIC_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type().to_string(),
            title: self.problem_title().to_string(),
            status: self.status_code(),
            detail: self.public_detail(),
            instance: None,
        }
    }

    fn problem_type(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "https://api.oms.dev/problems/invalid-request",
            Self::Internal(_) => "https://api.oms.dev/problems/internal",
            Self::Unavailable(_) => "https://api.oms.dev/problems/unavailable",
        }
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "Invalid Request",
            Self::Internal(_) => "Internal Server Error",
            Self::Unavailable(_) => "Service Unavailable",
        }
    }
}

impl From<AppError> for tonic::Status {
    fn from(err: AppError) -> Self {
        tonic::Status::new(err.grpc_code(), err.message().to_string())
    }
}

impl From<tonic::Status> for AppError {
    fn from(status: tonic::Status) -> Self {
        Self::from_status(&status)
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
