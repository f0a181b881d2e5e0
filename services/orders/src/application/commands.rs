//! Order commands

use oms_errors::{AppError, AppResult};

use crate::domain::{Order, OrderItem};

/// 订单行输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLine {
    pub product_id: String,
    pub quantity: i32,
}

/// 创建订单命令
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub customer_id: String,
    pub items: Vec<ItemLine>,
}

impl CreateOrderCommand {
    /// 按领域规则校验整个命令
    ///
    /// 订单行的错误消息带上下标，例如 `items[1].quantity must be >= 1, got 0`。
    pub fn validate(&self) -> AppResult<()> {
        Order::check(&self.customer_id, self.items.len())?;

        for (idx, item) in self.items.iter().enumerate() {
            OrderItem::check(&item.product_id, item.quantity).map_err(|e| {
                AppError::invalid_request(format!("items[{idx}].{}", e.message()))
            })?;
        }

        Ok(())
    }
}
