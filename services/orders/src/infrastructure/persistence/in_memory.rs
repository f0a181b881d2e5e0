//! 内存订单存储
//!
//! 每次 `save` 都是写锁下的一次插入，读者看不到部分写入。

use std::collections::HashMap;

use async_trait::async_trait;
use oms_common::OrderId;
use oms_errors::AppResult;
use tokio::sync::RwLock;

use crate::domain::{Order, OrderStore};

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已保存的订单数量
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: &Order) -> AppResult<()> {
        self.orders.write().await.insert(order.id(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
        Ok(self.orders.read().await.get(id).cloned())
    }
}
