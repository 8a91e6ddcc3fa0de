//! The order editing workflow.
//!
//! Keyed by one order id. Items are added, edited and removed against the
//! server, and after every successful mutation the **full order is reloaded**
//! so the displayed `num_products`/`final_price` are always the server's —
//! local state is never patched and aggregates are never recomputed here.
//!
//! Ephemeral dialog state is one tagged union: it is impossible to have the
//! add form and the remove confirmation open at once. Once an order is
//! Completed the dialogs can no longer be opened; the server is not asked to
//! enforce this.

use crate::error::ApiError;
use crate::orders::OrderClient;
use crate::products::ProductClient;
use crate::transport::Transport;
use crate::types::{AddOrderItem, OrderDetail, OrderStatus, Product, UpdateOrderItem};

/// Ephemeral dialog state for the item workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemDialog {
    None,
    Add {
        product_id: Option<i64>,
        quantity: i32,
    },
    Edit {
        item_id: i64,
        quantity: i32,
    },
    ConfirmRemove {
        item_id: i64,
    },
}

pub struct OrderEditor {
    orders: OrderClient,
    products: ProductClient,
    order_id: i64,
    order: Option<OrderDetail>,
    catalog: Vec<Product>,
    loading: bool,
    error: Option<&'static str>,
    dialog: ItemDialog,
    saving: bool,
}

impl OrderEditor {
    pub fn new(base_url: &str, order_id: i64) -> Self {
        Self {
            orders: OrderClient::new(base_url),
            products: ProductClient::new(base_url),
            order_id,
            order: None,
            catalog: Vec::new(),
            loading: true,
            error: None,
            dialog: ItemDialog::None,
            saving: false,
        }
    }

    pub fn order_id(&self) -> i64 {
        self.order_id
    }

    pub fn order(&self) -> Option<&OrderDetail> {
        self.order.as_ref()
    }

    /// Product catalog backing the add-item selector.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn dialog(&self) -> &ItemDialog {
        &self.dialog
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    /// False once the order is Completed (and before it has loaded); the
    /// add/edit/remove controls are hidden and their dialogs refuse to open.
    pub fn can_modify_items(&self) -> bool {
        self.order
            .as_ref()
            .is_some_and(|order| order.status != OrderStatus::Completed)
    }

    /// Fetch the order detail and the product catalog.
    pub fn load(&mut self, transport: &dyn Transport) {
        self.loading = true;
        match self.try_get_order(transport) {
            Ok(detail) => {
                self.order = Some(detail);
                self.error = None;
            }
            Err(_) => {
                self.error = Some("Order not found");
                self.loading = false;
                return;
            }
        }
        match self.try_list_products(transport) {
            Ok(products) => self.catalog = products,
            Err(_) => self.error = Some("Error loading products"),
        }
        self.loading = false;
    }

    pub fn open_add(&mut self) {
        if !self.can_modify_items() {
            return;
        }
        self.dialog = ItemDialog::Add {
            product_id: None,
            quantity: 1,
        };
    }

    /// Open the edit dialog prefilled with the item's current quantity.
    /// No-op for unknown item ids.
    pub fn open_edit(&mut self, item_id: i64) {
        if !self.can_modify_items() {
            return;
        }
        let Some(order) = &self.order else { return };
        if let Some(item) = order.items.iter().find(|item| item.id == item_id) {
            self.dialog = ItemDialog::Edit {
                item_id,
                quantity: item.quantity,
            };
        }
    }

    pub fn open_remove(&mut self, item_id: i64) {
        if !self.can_modify_items() {
            return;
        }
        self.dialog = ItemDialog::ConfirmRemove { item_id };
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = ItemDialog::None;
    }

    pub fn select_product(&mut self, id: i64) {
        if let ItemDialog::Add { product_id, .. } = &mut self.dialog {
            *product_id = Some(id);
        }
    }

    pub fn set_quantity(&mut self, value: i32) {
        match &mut self.dialog {
            ItemDialog::Add { quantity, .. } | ItemDialog::Edit { quantity, .. } => {
                *quantity = value;
            }
            _ => {}
        }
    }

    /// Submit whichever dialog is open. Validation failures stay local and
    /// send nothing; a successful mutation closes the dialog and reloads the
    /// full order.
    pub fn submit(&mut self, transport: &dyn Transport) {
        if self.saving {
            return;
        }
        match self.dialog.clone() {
            ItemDialog::None => {}
            ItemDialog::Add {
                product_id,
                quantity,
            } => {
                let Some(product_id) = product_id else {
                    self.error = Some("Product is required");
                    return;
                };
                if quantity < 1 {
                    self.error = Some("Quantity must be at least 1");
                    return;
                }
                self.saving = true;
                let result = self.try_add_item(transport, product_id, quantity);
                self.finish_mutation(transport, result, "Error adding item");
                self.saving = false;
            }
            ItemDialog::Edit { item_id, quantity } => {
                if quantity < 1 {
                    self.error = Some("Quantity must be at least 1");
                    return;
                }
                self.saving = true;
                let result = self.try_update_item(transport, item_id, quantity);
                self.finish_mutation(transport, result, "Error updating item");
                self.saving = false;
            }
            ItemDialog::ConfirmRemove { item_id } => {
                self.saving = true;
                let result = self.try_remove_item(transport, item_id);
                self.finish_mutation(transport, result, "Error removing item");
                self.saving = false;
            }
        }
    }

    /// Shared tail of every item mutation: on success close the dialog and
    /// reload; a reload failure leaves the stale list with the load banner.
    fn finish_mutation(
        &mut self,
        transport: &dyn Transport,
        result: Result<(), ApiError>,
        failure: &'static str,
    ) {
        match result {
            Ok(()) => {
                self.dialog = ItemDialog::None;
                self.error = None;
                match self.try_get_order(transport) {
                    Ok(detail) => self.order = Some(detail),
                    Err(_) => self.error = Some("Error loading order"),
                }
            }
            Err(_) => self.error = Some(failure),
        }
    }

    fn try_get_order(&self, transport: &dyn Transport) -> Result<OrderDetail, ApiError> {
        let request = self.orders.build_get_order(self.order_id);
        self.orders.parse_get_order(transport.execute(request)?)
    }

    fn try_list_products(&self, transport: &dyn Transport) -> Result<Vec<Product>, ApiError> {
        let request = self.products.build_list_products();
        self.products.parse_list_products(transport.execute(request)?)
    }

    fn try_add_item(
        &self,
        transport: &dyn Transport,
        product_id: i64,
        quantity: i32,
    ) -> Result<(), ApiError> {
        let input = AddOrderItem {
            product_id,
            quantity,
        };
        let request = self.orders.build_add_item(self.order_id, &input)?;
        self.orders.parse_add_item(transport.execute(request)?)?;
        Ok(())
    }

    fn try_update_item(
        &self,
        transport: &dyn Transport,
        item_id: i64,
        quantity: i32,
    ) -> Result<(), ApiError> {
        let input = UpdateOrderItem {
            quantity: Some(quantity),
        };
        let request = self.orders.build_update_item(self.order_id, item_id, &input)?;
        self.orders.parse_update_item(transport.execute(request)?)?;
        Ok(())
    }

    fn try_remove_item(&self, transport: &dyn Transport, item_id: i64) -> Result<(), ApiError> {
        let request = self.orders.build_remove_item(self.order_id, item_id);
        self.orders.parse_remove_item(transport.execute(request)?)
    }
}
