//! gRPC 客户端

use std::time::Duration;

use async_trait::async_trait;
use oms_config::GatewayConfig;
use oms_errors::{AppError, AppResult};
use oms_proto::OrderServiceClient;
use oms_proto::v1::{CreateOrderRequest, Order};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

/// 订单服务的远程调用接口
///
/// handler 只依赖这个 trait，测试时可以替换为记录调用的假实现。
#[async_trait]
pub trait OrderServiceApi: Send + Sync {
    async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order>;
}

/// gRPC 客户端集合
#[derive(Clone)]
pub struct GrpcClients {
    pub orders: OrderServiceClient<Channel>,
    request_timeout: Duration,
}

impl GrpcClients {
    /// 创建新的 gRPC 客户端集合
    ///
    /// 连接是惰性的：订单服务暂时不可达时网关照常启动，
    /// 调用时再以 `Unavailable` 失败。
    pub fn new(config: &GatewayConfig) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(config.orders_endpoint())?
            .connect_timeout(config.connect_timeout())
            .connect_lazy();

        Ok(Self {
            orders: OrderServiceClient::new(channel),
            request_timeout: config.request_timeout(),
        })
    }
}

#[async_trait]
impl OrderServiceApi for GrpcClients {
    async fn create_order(&self, request: CreateOrderRequest) -> AppResult<Order> {
        let mut request = tonic::Request::new(request);
        // 通过 grpc-timeout 把截止时间传给订单服务
        request.set_timeout(self.request_timeout);

        let mut client = self.orders.clone();
        let response = tokio::time::timeout(self.request_timeout, client.create_order(request))
            .await
            .map_err(|_| AppError::unavailable("order service call timed out"))?
            .map_err(|status| {
                debug!(code = ?status.code(), message = %status.message(), "Order service returned error");
                AppError::from(status)
            })?;

        response
            .into_inner()
            .order
            .ok_or_else(|| AppError::internal("order service returned no order"))
    }
}
