//! orders - 订单服务
//!
//! 对外只暴露一个 gRPC 操作 `CreateOrder`。

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
