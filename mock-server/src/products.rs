//! Handlers for the `/products/` catalog. Deletes are soft: the row keeps
//! its name so existing order lines can still resolve it, but it disappears
//! from list/get and cannot back new items.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::ProductRow;
use crate::Db;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateProductBody {
    pub name: String,
    pub unit_price: Decimal,
}

#[derive(Deserialize)]
pub struct UpdateProductBody {
    pub name: Option<String>,
    pub unit_price: Option<Decimal>,
}

fn product_response(row: &ProductRow) -> ProductResponse {
    ProductResponse {
        id: row.id,
        name: row.name.clone(),
        unit_price: row.unit_price,
        is_deleted: row.is_deleted,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub async fn list_products(State(db): State<Db>) -> Json<Vec<ProductResponse>> {
    let store = db.read().await;
    Json(
        store
            .products
            .values()
            .filter(|product| !product.is_deleted)
            .map(product_response)
            .collect(),
    )
}

pub async fn get_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<ProductResponse>, StatusCode> {
    let store = db.read().await;
    store
        .products
        .get(&id)
        .filter(|product| !product.is_deleted)
        .map(|product| Json(product_response(product)))
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn create_product(
    State(db): State<Db>,
    Json(body): Json<CreateProductBody>,
) -> (StatusCode, Json<ProductResponse>) {
    let mut store = db.write().await;
    let row = store.create_product(body.name, body.unit_price);
    info!(product_id = row.id, "product created");
    (StatusCode::CREATED, Json(product_response(&row)))
}

pub async fn update_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProductBody>,
) -> Result<Json<ProductResponse>, StatusCode> {
    let mut store = db.write().await;
    let product = store
        .products
        .get_mut(&id)
        .filter(|product| !product.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = body.name {
        product.name = name;
    }
    if let Some(unit_price) = body.unit_price {
        product.unit_price = unit_price;
    }
    product.updated_at = Utc::now();
    info!(product_id = id, "product updated");
    Ok(Json(product_response(product)))
}

pub async fn delete_product(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    let product = store
        .products
        .get_mut(&id)
        .filter(|product| !product.is_deleted)
        .ok_or(StatusCode::NOT_FOUND)?;
    product.is_deleted = true;
    product.updated_at = Utc::now();
    info!(product_id = id, "product soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}
