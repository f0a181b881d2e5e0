//! gRPC service implementation

use std::sync::Arc;

use oms_proto::OrderService;
use oms_proto::v1::{CreateOrderRequest, CreateOrderResponse};
use tonic::{Request, Response, Status};
use tracing::{info, warn};

use crate::application::ServiceHandler;

use super::conversions::{create_order_command, order_to_proto};

/// `oms.orders.v1.OrderService` 的实现
///
/// 只做协议适配，业务逻辑都在 [`ServiceHandler`]。
pub struct OrderServiceImpl {
    handler: Arc<ServiceHandler>,
}

impl OrderServiceImpl {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

#[tonic::async_trait]
impl OrderService for OrderServiceImpl {
    async fn create_order(
        &self,
        request: Request<CreateOrderRequest>,
    ) -> Result<Response<CreateOrderResponse>, Status> {
        let req = request.into_inner();
        info!(
            customer_id = %req.customer_id,
            items = req.items.len(),
            "New order received"
        );

        // 1. 校验
        let cmd = create_order_command(req);
        if let Err(e) = cmd.validate() {
            warn!(customer_id = %cmd.customer_id, error = %e, "Rejected order request");
            return Err(e.into());
        }

        // 2. 交给业务层创建并持久化
        let order = self.handler.create_order(cmd).await?;

        Ok(Response::new(CreateOrderResponse {
            order: Some(order_to_proto(&order)),
        }))
    }
}
