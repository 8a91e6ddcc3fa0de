//! Synchronous client core for the order-management service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and layers the page
//! workflows — order list, product maintenance, and the order/line-item
//! editor — on top of that through the [`Transport`] seam. The host executes
//! the actual HTTP round-trips, making the whole core deterministic and
//! testable with a scripted transport.
//!
//! # Design
//! - The resource clients ([`OrderClient`], [`ProductClient`]) are stateless;
//!   each operation is a `build_*`/`parse_*` pair so the I/O boundary is
//!   explicit.
//! - Each page workflow owns its own state and fetch lifecycle; there is no
//!   shared store. Dialog state is a single tagged union per page.
//! - The order editor never recomputes aggregates: after every successful
//!   item mutation it reloads the full order and displays the server's
//!   `num_products`/`final_price`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod error;
pub mod http;
pub mod order_editor;
pub mod order_form;
pub mod orders;
pub mod orders_page;
pub mod products;
pub mod products_page;
pub mod transport;
pub mod types;

pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use order_editor::{ItemDialog, OrderEditor};
pub use order_form::NewOrderForm;
pub use orders::OrderClient;
pub use orders_page::OrdersPage;
pub use products::ProductClient;
pub use products_page::{ProductDialog, ProductsPage};
pub use transport::{Transport, TransportError};
pub use types::{
    AddOrderItem, CreateOrder, CreateProduct, Order, OrderDetail, OrderItem, OrderStatus, Product,
    UpdateOrder, UpdateOrderItem, UpdateProduct,
};
