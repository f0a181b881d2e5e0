//! OMS API Gateway
//!
//! 无状态 HTTP 前端：一个路由对应一次订单服务的 gRPC 调用。

pub mod error;
pub mod grpc;
pub mod orders;
pub mod routing;
pub mod security_headers;

use axum::{Router, middleware};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use orders::AppState;

/// 请求体上限（订单行 JSON 数组）
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// 构建网关路由
pub fn build_router(state: AppState) -> Router {
    orders::order_routes()
        .with_state(state)
        .merge(routing::health_routes())
        .layer(middleware::from_fn(security_headers::security_headers_middleware))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
