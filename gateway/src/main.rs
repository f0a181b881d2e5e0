//! OMS API Gateway

use std::sync::Arc;

use oms_bootstrap::{init_runtime, shutdown_signal};
use oms_config::GatewayConfig;
use oms_gateway::grpc::GrpcClients;
use oms_gateway::{AppState, build_router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 载入 .env（不存在时忽略）
    dotenvy::dotenv().ok();

    // 加载配置
    let config = GatewayConfig::from_env()?;
    init_runtime("gateway", &config.telemetry);

    // 初始化 gRPC 客户端
    info!(endpoint = %config.orders_endpoint(), "Dialing orders service");
    let grpc_clients = GrpcClients::new(&config)?;

    let app = build_router(AppState::new(Arc::new(grpc_clients)));

    // 启动服务器
    let addr = config.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "Starting gateway");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Gateway stopped");

    Ok(())
}
