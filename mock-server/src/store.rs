//! In-memory rows behind the API, with integer autoincrement ids.
//!
//! Aggregates live on the order row and are recomputed from the items after
//! every item mutation: `num_products` is the sum of quantities,
//! `final_price` the sum of line totals. Handlers never write them directly.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: i64,
    pub order_number: String,
    pub date: NaiveDate,
    pub num_products: i32,
    pub final_price: Decimal,
    pub status: OrderStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<ItemRow>,
}

impl OrderRow {
    /// Rederive `num_products` and `final_price` from the item list.
    pub fn recompute_aggregates(&mut self) {
        self.num_products = self.items.iter().map(|item| item.quantity).sum();
        self.final_price = self.items.iter().map(|item| item.total_price).sum();
    }
}

#[derive(Debug, Clone)]
pub struct ItemRow {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Snapshot of the product's price at add-time.
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub orders: HashMap<i64, OrderRow>,
    pub products: HashMap<i64, ProductRow>,
    next_order_id: i64,
    next_product_id: i64,
    next_item_id: i64,
}

impl Store {
    pub fn create_order(&mut self, order_number: String) -> OrderRow {
        self.next_order_id += 1;
        let now = Utc::now();
        let row = OrderRow {
            id: self.next_order_id,
            order_number,
            date: now.date_naive(),
            num_products: 0,
            final_price: Decimal::ZERO,
            status: OrderStatus::Pending,
            is_deleted: false,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        };
        self.orders.insert(row.id, row.clone());
        row
    }

    pub fn create_product(&mut self, name: String, unit_price: Decimal) -> ProductRow {
        self.next_product_id += 1;
        let now = Utc::now();
        let row = ProductRow {
            id: self.next_product_id,
            name,
            unit_price,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(row.id, row.clone());
        row
    }

    pub(crate) fn alloc_item_id(&mut self) -> i64 {
        self.next_item_id += 1;
        self.next_item_id
    }

    /// Display name for an item's product; `None` once the row is gone.
    /// Soft-deleted products still resolve — existing lines keep their name.
    pub fn product_name(&self, product_id: i64) -> Option<String> {
        self.products.get(&product_id).map(|p| p.name.clone())
    }

    /// Populate a small demo catalog and a few orders with derived
    /// aggregates. Used by the binary behind `SEED_DEMO`.
    pub fn seed_demo(&mut self) {
        let laptop = self.create_product("Laptop".to_string(), Decimal::new(99999, 2)).id;
        let mouse = self.create_product("Mouse".to_string(), Decimal::new(1999, 2)).id;
        let keyboard = self.create_product("Keyboard".to_string(), Decimal::new(4999, 2)).id;
        self.create_product("Monitor".to_string(), Decimal::new(12900, 2));

        let ord1 = self.create_order("ORD-001".to_string()).id;
        self.seed_items(ord1, &[(laptop, 1), (keyboard, 2)]);

        let ord2 = self.create_order("ORD-002".to_string()).id;
        self.seed_items(ord2, &[(mouse, 5)]);
        if let Some(order) = self.orders.get_mut(&ord2) {
            order.status = OrderStatus::InProgress;
        }

        let ord3 = self.create_order("ORD-003".to_string()).id;
        self.seed_items(ord3, &[(keyboard, 1)]);
        if let Some(order) = self.orders.get_mut(&ord3) {
            order.status = OrderStatus::Completed;
        }
    }

    fn seed_items(&mut self, order_id: i64, items: &[(i64, i32)]) {
        for &(product_id, quantity) in items {
            let Some(unit_price) = self.products.get(&product_id).map(|p| p.unit_price) else {
                continue;
            };
            let item_id = self.alloc_item_id();
            let Some(order) = self.orders.get_mut(&order_id) else {
                return;
            };
            order.items.push(ItemRow {
                id: item_id,
                product_id,
                quantity,
                unit_price,
                total_price: unit_price * Decimal::from(quantity),
            });
            order.recompute_aggregates();
        }
    }
}
