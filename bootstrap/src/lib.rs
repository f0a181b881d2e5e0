//! oms-bootstrap - 统一服务启动骨架
//!
//! 网关和订单服务复用的启动逻辑

mod runtime;
mod starter;

pub use runtime::*;
pub use starter::*;
