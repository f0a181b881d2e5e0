//! 安全响应头中间件

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// 添加安全响应头的中间件
///
/// 网关只返回 JSON，因此只保留和 API 相关的头：
/// - X-Content-Type-Options: 防止 MIME 类型嗅探
/// - X-Frame-Options: 防止点击劫持
/// - Referrer-Policy: 不发送 Referer
/// - Cache-Control: 订单结果不允许被缓存
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("no-referrer"),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    response
}
