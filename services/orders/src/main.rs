//! orders Service - 订单服务

use std::sync::Arc;

use oms_bootstrap::{init_runtime, run};
use oms_config::OrdersConfig;
use oms_proto::OrderServiceServer;
use tracing::info;

use orders::api::OrderServiceImpl;
use orders::application::ServiceHandler;
use orders::domain::UuidIdGenerator;
use orders::infrastructure::persistence::InMemoryOrderStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 载入 .env（不存在时忽略）
    dotenvy::dotenv().ok();

    let config = OrdersConfig::from_env()?;
    init_runtime("orders", &config.telemetry);

    let addr = config.listen_addr()?;

    let store = Arc::new(InMemoryOrderStore::new());
    let handler = Arc::new(ServiceHandler::new(store, Arc::new(UuidIdGenerator)));
    let service = OrderServiceImpl::new(handler);
    info!("Order service initialized");

    run(addr, OrderServiceServer::new(service)).await
}
