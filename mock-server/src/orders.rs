//! Handlers for `/orders/` and the item subresource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::{ItemRow, OrderRow, OrderStatus, Store};
use crate::Db;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i64,
    pub order_number: String,
    pub date: NaiveDate,
    pub num_products: i32,
    pub final_price: Decimal,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub id: i64,
    pub order_number: String,
    pub date: NaiveDate,
    pub num_products: i32,
    pub final_price: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Deserialize)]
pub struct CreateOrderBody {
    pub order_number: String,
}

/// Partial update. Aggregates are derived and deliberately absent here.
#[derive(Deserialize)]
pub struct UpdateOrderBody {
    pub order_number: Option<String>,
    pub status: Option<OrderStatus>,
}

#[derive(Deserialize)]
pub struct AddItemBody {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Deserialize)]
pub struct UpdateItemBody {
    pub quantity: Option<i32>,
}

fn order_response(row: &OrderRow) -> OrderResponse {
    OrderResponse {
        id: row.id,
        order_number: row.order_number.clone(),
        date: row.date,
        num_products: row.num_products,
        final_price: row.final_price,
        status: row.status,
    }
}

fn item_response(item: &ItemRow, product_name: Option<String>) -> OrderItemResponse {
    OrderItemResponse {
        id: item.id,
        product_id: item.product_id,
        product_name,
        quantity: item.quantity,
        unit_price: item.unit_price,
        total_price: item.total_price,
    }
}

fn detail_response(store: &Store, row: &OrderRow) -> OrderDetailResponse {
    OrderDetailResponse {
        id: row.id,
        order_number: row.order_number.clone(),
        date: row.date,
        num_products: row.num_products,
        final_price: row.final_price,
        status: row.status,
        items: row
            .items
            .iter()
            .map(|item| item_response(item, store.product_name(item.product_id)))
            .collect(),
    }
}

pub async fn list_orders(State(db): State<Db>) -> Json<Vec<OrderResponse>> {
    let store = db.read().await;
    Json(
        store
            .orders
            .values()
            .filter(|order| !order.is_deleted)
            .map(order_response)
            .collect(),
    )
}

pub async fn get_order(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<OrderDetailResponse>, StatusCode> {
    let store = db.read().await;
    let order = store
        .orders
        .get(&id)
        .filter(|order| !order.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(detail_response(&store, order)))
}

pub async fn create_order(
    State(db): State<Db>,
    Json(body): Json<CreateOrderBody>,
) -> (StatusCode, Json<OrderResponse>) {
    let mut store = db.write().await;
    let row = store.create_order(body.order_number);
    info!(order_id = row.id, "order created");
    (StatusCode::CREATED, Json(order_response(&row)))
}

pub async fn update_order(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateOrderBody>,
) -> Result<Json<OrderResponse>, StatusCode> {
    let mut store = db.write().await;
    let order = store
        .orders
        .get_mut(&id)
        .filter(|order| !order.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(order_number) = body.order_number {
        order.order_number = order_number;
    }
    if let Some(status) = body.status {
        order.status = status;
    }
    order.updated_at = Utc::now();
    info!(order_id = id, "order updated");
    Ok(Json(order_response(order)))
}

pub async fn delete_order(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let order = store
        .orders
        .get_mut(&id)
        .filter(|order| !order.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    order.is_deleted = true;
    order.updated_at = Utc::now();
    info!(order_id = id, "order soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_item(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(body): Json<AddItemBody>,
) -> Result<(StatusCode, Json<OrderItemResponse>), StatusCode> {
    let mut store = db.write().await;
    if !store.orders.get(&id).is_some_and(|order| !order.is_deleted) {
        return Err(StatusCode::NOT_FOUND);
    }
    if body.quantity < 1 {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let product = store
        .products
        .get(&body.product_id)
        .filter(|product| !product.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    let product_name = Some(product.name.clone());
    let unit_price = product.unit_price;

    let item_id = store.alloc_item_id();
    let now = Utc::now();
    let order = store.orders.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    let item = ItemRow {
        id: item_id,
        product_id: body.product_id,
        quantity: body.quantity,
        unit_price,
        total_price: unit_price * Decimal::from(body.quantity),
    };
    let response = item_response(&item, product_name);
    order.items.push(item);
    order.recompute_aggregates();
    order.updated_at = now;
    info!(order_id = id, item_id, "item added");
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_item(
    State(db): State<Db>,
    Path((order_id, item_id)): Path<(i64, i64)>,
    Json(body): Json<UpdateItemBody>,
) -> Result<Json<OrderItemResponse>, StatusCode> {
    let mut store = db.write().await;
    let now = Utc::now();
    let row = {
        let order = store
            .orders
            .get_mut(&order_id)
            .filter(|order| !order.is_deleted)
            .ok_or(StatusCode::NOT_FOUND)?;
        let item = order
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(StatusCode::NOT_FOUND)?;
        if let Some(quantity) = body.quantity {
            if quantity < 1 {
                return Err(StatusCode::UNPROCESSABLE_ENTITY);
            }
            item.quantity = quantity;
            item.total_price = item.unit_price * Decimal::from(quantity);
        }
        let row = item.clone();
        order.recompute_aggregates();
        order.updated_at = now;
        row
    };
    let product_name = store.product_name(row.product_id);
    info!(order_id, item_id, "item updated");
    Ok(Json(item_response(&row, product_name)))
}

pub async fn delete_item(
    State(db): State<Db>,
    Path((order_id, item_id)): Path<(i64, i64)>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let order = store
        .orders
        .get_mut(&order_id)
        .filter(|order| !order.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    let before = order.items.len();
    order.items.retain(|item| item.id != item_id);
    if order.items.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    order.recompute_aggregates();
    order.updated_at = Utc::now();
    info!(order_id, item_id, "item removed");
    Ok(StatusCode::NO_CONTENT)
}
