//! 领域层
//!
//! 订单实体、仓储接口和 ID 生成器

pub mod id_generator;
pub mod order;
pub mod repositories;

pub use id_generator::*;
pub use order::*;
pub use repositories::*;
