//! HTTP 错误响应
//!
//! 错误种类到状态码的映射在 `oms_errors::AppError::status_code` 中查表完成，
//! 这里只负责写出 Problem Details 响应体。

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use oms_errors::{AppError, ErrorKind};
use tracing::{error, warn};

/// 网关 handler 的错误类型
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 内部细节只进日志，不进响应
        match self.0.kind() {
            ErrorKind::InvalidRequest => warn!(error = %self.0, "Rejected request"),
            ErrorKind::Internal | ErrorKind::Unavailable => {
                error!(error = %self.0, "Order service call failed")
            }
        }

        let problem = self.0.to_problem_details();
        let status =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(problem)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}
