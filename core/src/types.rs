//! Domain DTOs for the order-management API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Money
//! fields are `rust_decimal::Decimal` (string-serialized, exact arithmetic);
//! the order-level `num_products`/`final_price` are derived server-side from
//! the line items and never appear in any writable payload.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of an order. Transitions are free-form, but a Completed
/// order no longer accepts item mutations in the editing workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

impl OrderStatus {
    /// All statuses, in dropdown order.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Completed => "Completed",
        }
    }
}

/// An order as returned by the list and update endpoints.
///
/// `num_products` is the sum of item quantities and `final_price` the sum of
/// item totals, both recomputed by the server on every item mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub date: NaiveDate,
    pub num_products: i32,
    pub final_price: Decimal,
    pub status: OrderStatus,
}

/// A line item: one (product, quantity) pair attached to an order, with the
/// unit price snapshotted at add-time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    /// Denormalized for display; `None` when the product row is gone.
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// An order plus its line items, as returned by `GET /orders/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    pub order_number: String,
    pub date: NaiveDate,
    pub num_products: i32,
    pub final_price: Decimal,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

/// Request payload for creating an order. The server fills in the date,
/// status and zeroed aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    pub order_number: String,
}

/// Partial update for an order. Only the fields present in the JSON are
/// applied; aggregates are not writable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Request payload for attaching a line item to an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOrderItem {
    pub product_id: i64,
    pub quantity: i32,
}

/// Partial update for a line item. Quantity is the only mutable field; the
/// price snapshot never changes after add-time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub unit_price: Decimal,
}

/// Partial update for a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
}
