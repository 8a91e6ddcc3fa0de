//! In-memory mock of the order-management REST API.
//!
//! Collection routes keep their trailing slash (`/orders/`, `/products/`);
//! item routes do not. State is a plain [`Store`] behind `Arc<RwLock>`, which
//! is all the sharing axum handlers need — there is no persistence and no
//! cross-request coordination beyond the lock.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};

pub mod orders;
pub mod products;
pub mod store;

pub use orders::{OrderDetailResponse, OrderItemResponse, OrderResponse};
pub use products::ProductResponse;
pub use store::{OrderStatus, Store};

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::default())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/orders/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
        .route("/orders/{id}/items", post(orders::add_item))
        .route(
            "/orders/{id}/items/{item_id}",
            put(orders::update_item).delete(orders::delete_item),
        )
        .route(
            "/products/",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
