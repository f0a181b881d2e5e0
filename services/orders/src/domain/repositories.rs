//! 订单仓储接口

use async_trait::async_trait;
use oms_common::OrderId;
use oms_errors::AppResult;

use super::order::Order;

/// 订单存储
///
/// `save` 成功返回后，订单必须能通过 `find_by_id` 读到；
/// 失败时不能留下部分写入。同一 ID 的并发 `save` 不做保证，
/// ID 由服务生成，视为不会冲突。
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// 保存订单（新建）
    async fn save(&self, order: &Order) -> AppResult<()>;

    /// 根据 ID 查找订单
    async fn find_by_id(&self, id: &OrderId) -> AppResult<Option<Order>>;
}
