//! 订单 ID 生成器

use oms_common::OrderId;
use oms_common::utils::random_id;

/// 订单 ID 生成器
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

/// 随机 UUID v4，不能从请求内容或时间推测
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> OrderId {
        OrderId::from_uuid(random_id())
    }
}
