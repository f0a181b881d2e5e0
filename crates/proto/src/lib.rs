//! oms-proto - 订单服务的线上协议
//!
//! 网关（客户端）和订单服务（服务端）共用同一份定义。

pub mod v1 {
    /// 商品及数量
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct ItemWithQuantity {
        #[prost(string, tag = "1")]
        pub product_id: ::prost::alloc::string::String,
        #[prost(int32, tag = "2")]
        pub quantity: i32,
    }

    /// 订单
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Order {
        #[prost(string, tag = "1")]
        pub id: ::prost::alloc::string::String,
        #[prost(string, tag = "2")]
        pub customer_id: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "3")]
        pub items: ::prost::alloc::vec::Vec<ItemWithQuantity>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreateOrderRequest {
        #[prost(string, tag = "1")]
        pub customer_id: ::prost::alloc::string::String,
        #[prost(message, repeated, tag = "2")]
        pub items: ::prost::alloc::vec::Vec<ItemWithQuantity>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct CreateOrderResponse {
        #[prost(message, optional, tag = "1")]
        pub order: ::core::option::Option<Order>,
    }

    include!(concat!(env!("OUT_DIR"), "/oms.orders.v1.OrderService.rs"));
}

pub use v1::order_service_client::OrderServiceClient;
pub use v1::order_service_server::{OrderService, OrderServiceServer};
