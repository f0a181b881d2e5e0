//! 生成 oms.orders.v1.OrderService 的 gRPC 客户端和服务端代码
//!
//! 消息类型在 src/lib.rs 中用 prost 派生宏定义，这里只描述服务，
//! 因此构建时不需要 protoc。

fn main() {
    let order_service = tonic_build::manual::Service::builder()
        .name("OrderService")
        .package("oms.orders.v1")
        .method(
            tonic_build::manual::Method::builder()
                .name("create_order")
                .route_name("CreateOrder")
                .input_type("crate::v1::CreateOrderRequest")
                .output_type("crate::v1::CreateOrderResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[order_service]);

    println!("cargo:rerun-if-changed=build.rs");
}
