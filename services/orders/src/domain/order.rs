//! 订单实体

use oms_common::{CustomerId, OrderId};
use oms_errors::{AppError, AppResult};

/// 订单行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    product_id: String,
    quantity: i32,
}

impl OrderItem {
    /// 创建订单行，数量必须 >= 1
    pub fn new(product_id: impl Into<String>, quantity: i32) -> AppResult<Self> {
        let product_id = product_id.into();
        Self::check(&product_id, quantity)?;

        Ok(Self {
            product_id,
            quantity,
        })
    }

    /// 订单行规则
    ///
    /// 错误消息以字段名开头（`productID`、`quantity`），调用方可以加上位置前缀。
    pub fn check(product_id: &str, quantity: i32) -> AppResult<()> {
        if product_id.trim().is_empty() {
            return Err(AppError::invalid_request("productID must not be empty"));
        }
        if quantity < 1 {
            return Err(AppError::invalid_request(format!(
                "quantity must be >= 1, got {quantity}"
            )));
        }
        Ok(())
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

/// 订单实体
///
/// 创建后不可修改：字段私有，只提供只读访问。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(id: OrderId, customer_id: CustomerId, items: Vec<OrderItem>) -> AppResult<Self> {
        Self::check(customer_id.as_str(), items.len())?;

        Ok(Self {
            id,
            customer_id,
            items,
        })
    }

    /// 订单头规则：客户不能为空，至少一个订单行
    pub fn check(customer_id: &str, item_count: usize) -> AppResult<()> {
        if customer_id.trim().is_empty() {
            return Err(AppError::invalid_request("customerID must not be empty"));
        }
        if item_count == 0 {
            return Err(AppError::invalid_request("items must not be empty"));
        }
        Ok(())
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oms_common::utils::random_id;

    #[test]
    fn test_item_rejects_non_positive_quantity() {
        assert!(OrderItem::new("P1", 0).is_err());
        assert!(OrderItem::new("P1", -3).is_err());
        assert_eq!(OrderItem::new("P1", 1).unwrap().quantity(), 1);
    }

    #[test]
    fn test_item_rejects_blank_product() {
        assert_eq!(
            OrderItem::new("  ", 1).unwrap_err(),
            AppError::invalid_request("productID must not be empty")
        );
    }

    #[test]
    fn test_item_keeps_wire_quantity() {
        assert_eq!(OrderItem::new("P1", i32::MAX).unwrap().quantity(), i32::MAX);
    }

    #[test]
    fn test_order_requires_customer_and_items() {
        let id = OrderId::from_uuid(random_id());
        let item = OrderItem::new("P1", 2).unwrap();

        assert!(Order::new(id, CustomerId::new(""), vec![item.clone()]).is_err());
        assert!(Order::new(id, CustomerId::new("C1"), vec![]).is_err());

        let order = Order::new(id, CustomerId::new("C1"), vec![item]).unwrap();
        assert_eq!(order.id(), id);
        assert_eq!(order.customer_id().as_str(), "C1");
        assert_eq!(order.items().len(), 1);
    }
}
