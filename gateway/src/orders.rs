//! 订单路由
//!
//! 把 `POST /api/customers/{customerID}/orders` 翻译成一次 `CreateOrder` 远程调用。
//! 网关不做业务校验，只负责请求形状。

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use oms_errors::AppError;
use oms_proto::v1 as proto;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::grpc::OrderServiceApi;

/// 网关共享状态
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderServiceApi>,
}

impl AppState {
    pub fn new(orders: Arc<dyn OrderServiceApi>) -> Self {
        Self { orders }
    }
}

pub fn order_routes() -> Router<AppState> {
    Router::new().route(
        "/api/customers/{customer_id}/orders",
        post(handle_create_order),
    )
}

/// 请求体中的订单行
///
/// 只接受商品和数量；价格、订单号、时间戳之类的字段被忽略，不会转发。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWithQuantity {
    #[serde(rename = "productID")]
    pub product_id: String,
    pub quantity: i32,
}

impl From<ItemWithQuantity> for proto::ItemWithQuantity {
    fn from(item: ItemWithQuantity) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

impl From<proto::ItemWithQuantity> for ItemWithQuantity {
    fn from(item: proto::ItemWithQuantity) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    #[serde(rename = "customerID")]
    pub customer_id: String,
    pub items: Vec<ItemWithQuantity>,
}

impl From<proto::Order> for OrderResponse {
    fn from(order: proto::Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}

async fn handle_create_order(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    if customer_id.trim().is_empty() {
        return Err(AppError::invalid_request("customerID must not be empty").into());
    }

    let items: Vec<ItemWithQuantity> = serde_json::from_slice(&body)
        .map_err(|e| AppError::invalid_request(format!("invalid request body: {e}")))?;

    let request = proto::CreateOrderRequest {
        customer_id,
        items: items.into_iter().map(Into::into).collect(),
    };

    let order = state.orders.create_order(request).await?;
    info!(order_id = %order.id, customer_id = %order.customer_id, "Order created");

    Ok((StatusCode::CREATED, Json(order.into())))
}
