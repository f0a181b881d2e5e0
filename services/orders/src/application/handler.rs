//! Business logic handler
//!
//! 订单创建流程，和传输层解耦，可以不经 gRPC 单独测试。

use std::sync::Arc;

use oms_common::{CustomerId, OrderId};
use oms_errors::{AppError, AppResult};
use tracing::{error, info};

use crate::domain::{IdGenerator, Order, OrderItem, OrderStore};

use super::commands::CreateOrderCommand;

pub struct ServiceHandler {
    store: Arc<dyn OrderStore>,
    id_generator: Arc<dyn IdGenerator>,
}

impl ServiceHandler {
    pub fn new(store: Arc<dyn OrderStore>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            store,
            id_generator,
        }
    }

    /// 创建订单
    ///
    /// 分配 ID、构建订单并持久化。存储失败一律归类为 `Internal`，
    /// 此时订单不会被返回。
    pub async fn create_order(&self, cmd: CreateOrderCommand) -> AppResult<Order> {
        let items = cmd
            .items
            .into_iter()
            .map(|line| OrderItem::new(line.product_id, line.quantity))
            .collect::<AppResult<Vec<_>>>()?;

        let order_id = self.id_generator.next_id();
        let order = Order::new(order_id, CustomerId::new(cmd.customer_id), items)?;

        self.store.save(&order).await.map_err(|e| {
            error!(order_id = %order_id, error = %e, "Failed to save order");
            AppError::internal(format!("failed to save order {order_id}: {}", e.message()))
        })?;

        info!(
            order_id = %order_id,
            customer_id = %order.customer_id(),
            items = order.items().len(),
            "Order created"
        );

        Ok(order)
    }

    /// 根据 ID 查询订单
    pub async fn get_order(&self, id: &OrderId) -> AppResult<Option<Order>> {
        self.store.find_by_id(id).await.map_err(|e| {
            error!(order_id = %id, error = %e, "Failed to load order");
            AppError::internal(format!("failed to load order {id}: {}", e.message()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::ItemLine;
    use crate::infrastructure::persistence::InMemoryOrderStore;
    use async_trait::async_trait;
    use mockall::mock;
    use oms_errors::ErrorKind;
    use std::sync::atomic::{AtomicU64, Ordering};

    mock! {
        pub Store {}

        #[async_trait]
        impl OrderStore for Store {
            async fn save(&self, order: &Order) -> AppResult<()>;
            async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>>;
        }
    }

    /// 顺序 ID，便于断言
    struct SequentialIds(AtomicU64);

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> OrderId {
            OrderId::from_uuid(uuid::Uuid::from_u128(u128::from(self.0.fetch_add(1, Ordering::SeqCst))))
        }
    }

    fn sequential_ids() -> Arc<SequentialIds> {
        Arc::new(SequentialIds(AtomicU64::new(1)))
    }

    fn command(customer_id: &str, items: &[(&str, i32)]) -> CreateOrderCommand {
        CreateOrderCommand {
            customer_id: customer_id.to_string(),
            items: items
                .iter()
                .map(|(product_id, quantity)| ItemLine {
                    product_id: product_id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_create_order_assigns_id_and_persists() {
        let store = Arc::new(InMemoryOrderStore::new());
        let handler = ServiceHandler::new(store.clone(), sequential_ids());

        let order = handler
            .create_order(command("C1", &[("P1", 2)]))
            .await
            .unwrap();

        assert_eq!(order.id(), OrderId::from_uuid(uuid::Uuid::from_u128(1)));
        assert_eq!(order.customer_id().as_str(), "C1");
        assert_eq!(order.items()[0].product_id(), "P1");
        assert_eq!(order.items()[0].quantity(), 2);

        let stored = handler.get_order(&order.id()).await.unwrap();
        assert_eq!(stored, Some(order));
    }

    #[tokio::test]
    async fn test_create_order_rejects_invalid_items_without_saving() {
        let mut store = MockStore::new();
        store.expect_save().never();
        let handler = ServiceHandler::new(Arc::new(store), sequential_ids());

        let err = handler
            .create_order(command("C1", &[("P1", 0)]))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);

        let err = handler.create_order(command("C1", &[])).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    /// 写入总是失败，读取走真实的内存存储
    struct RejectingStore(InMemoryOrderStore);

    #[async_trait]
    impl OrderStore for RejectingStore {
        async fn save(&self, _order: &Order) -> AppResult<()> {
            Err(AppError::unavailable("disk full"))
        }

        async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>> {
            self.0.find_by_id(id).await
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_and_nothing_visible() {
        let handler = ServiceHandler::new(
            Arc::new(RejectingStore(InMemoryOrderStore::new())),
            sequential_ids(),
        );

        let err = handler
            .create_order(command("C1", &[("P1", 1)]))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);

        // 失败时本应分配的 ID
        let speculative = OrderId::from_uuid(uuid::Uuid::from_u128(1));
        assert_eq!(handler.get_order(&speculative).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_internal() {
        let mut store = MockStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(AppError::invalid_request("bad key")));
        let handler = ServiceHandler::new(Arc::new(store), sequential_ids());

        let id = OrderId::from_uuid(uuid::Uuid::from_u128(7));
        let err = handler.get_order(&id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = Arc::new(InMemoryOrderStore::new());
        let handler = ServiceHandler::new(store, Arc::new(crate::domain::UuidIdGenerator));

        let first = handler.create_order(command("C1", &[("P1", 1)])).await.unwrap();
        let second = handler.create_order(command("C1", &[("P1", 1)])).await.unwrap();
        assert_ne!(first.id(), second.id());
        assert!(!first.id().to_string().is_empty());
    }
}
