//! 服务启动器
//!
//! 提供统一的 gRPC 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;

use crate::runtime::shutdown_signal;

/// 运行 gRPC 服务
///
/// 绑定地址后一直服务到收到 Ctrl+C / SIGTERM。
///
/// # 示例
///
/// ```ignore
/// use oms_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let service = OrderServiceServer::new(OrderServiceImpl::new(handler));
///     run(addr, service).await
/// }
/// ```
pub async fn run<S>(addr: SocketAddr, service: S) -> Result<(), Box<dyn std::error::Error>>
where
    S: tonic::codegen::Service<
            http::Request<tonic::body::Body>,
            Response = http::Response<tonic::body::Body>,
            Error = std::convert::Infallible,
        > + tonic::server::NamedService
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "gRPC server starting");

    serve_on(listener, service, shutdown_signal()).await?;

    info!("Service stopped");

    Ok(())
}

/// 在已绑定的监听器上运行 gRPC 服务，直到 `shutdown` 完成
///
/// 测试中绑定 `127.0.0.1:0` 后直接调用。
pub async fn serve_on<S, F>(
    listener: TcpListener,
    service: S,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    S: tonic::codegen::Service<
            http::Request<tonic::body::Body>,
            Response = http::Response<tonic::body::Body>,
            Error = std::convert::Infallible,
        > + tonic::server::NamedService
        + Clone
        + Send
        + Sync
        + 'static,
    S::Future: Send + 'static,
    F: Future<Output = ()>,
{
    Server::builder()
        .add_service(service)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}
