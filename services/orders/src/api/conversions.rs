//! Proto <-> 领域模型转换

use oms_proto::v1 as proto;

use crate::application::{CreateOrderCommand, ItemLine};
use crate::domain::Order;

/// gRPC 请求转换为命令（不做校验）
pub fn create_order_command(req: proto::CreateOrderRequest) -> CreateOrderCommand {
    CreateOrderCommand {
        customer_id: req.customer_id,
        items: req
            .items
            .into_iter()
            .map(|item| ItemLine {
                product_id: item.product_id,
                quantity: item.quantity,
            })
            .collect(),
    }
}

pub fn order_to_proto(order: &Order) -> proto::Order {
    proto::Order {
        id: order.id().to_string(),
        customer_id: order.customer_id().to_string(),
        items: order
            .items()
            .iter()
            .map(|item| proto::ItemWithQuantity {
                product_id: item.product_id().to_string(),
                quantity: item.quantity(),
            })
            .collect(),
    }
}
