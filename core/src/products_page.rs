//! The product maintenance page.
//!
//! One tagged union holds the ephemeral dialog state, so the form and the
//! delete confirmation can never be open at the same time. Saving reloads the
//! whole list from the server; deleting only filters the local list.

use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::products::ProductClient;
use crate::transport::Transport;
use crate::types::{CreateProduct, Product, UpdateProduct};

/// Ephemeral dialog state. `Form` covers both create (`editing: None`) and
/// edit (`editing: Some(id)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductDialog {
    None,
    Form {
        editing: Option<i64>,
        name: String,
        unit_price: Decimal,
    },
    ConfirmDelete {
        id: i64,
    },
}

pub struct ProductsPage {
    client: ProductClient,
    products: Vec<Product>,
    loading: bool,
    error: Option<&'static str>,
    dialog: ProductDialog,
}

impl ProductsPage {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ProductClient::new(base_url),
            products: Vec::new(),
            loading: true,
            error: None,
            dialog: ProductDialog::None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn dialog(&self) -> &ProductDialog {
        &self.dialog
    }

    pub fn load(&mut self, transport: &dyn Transport) {
        self.loading = true;
        match self.try_load(transport) {
            Ok(products) => {
                self.products = products;
                self.error = None;
            }
            Err(_) => self.error = Some("Error loading products"),
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.dialog = ProductDialog::Form {
            editing: None,
            name: String::new(),
            unit_price: Decimal::ZERO,
        };
    }

    /// Open the form prefilled from the listed product. No-op if the id is
    /// not in the current list.
    pub fn open_edit(&mut self, id: i64) {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.dialog = ProductDialog::Form {
                editing: Some(id),
                name: product.name.clone(),
                unit_price: product.unit_price,
            };
        }
    }

    pub fn open_delete(&mut self, id: i64) {
        self.dialog = ProductDialog::ConfirmDelete { id };
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog = ProductDialog::None;
    }

    pub fn set_form_name(&mut self, value: impl Into<String>) {
        if let ProductDialog::Form { name, .. } = &mut self.dialog {
            *name = value.into();
        }
    }

    pub fn set_form_unit_price(&mut self, value: Decimal) {
        if let ProductDialog::Form { unit_price, .. } = &mut self.dialog {
            *unit_price = value;
        }
    }

    /// Save the open form. A blank name is rejected locally; a successful
    /// save closes the form and reloads the list so the rows are the
    /// server's.
    pub fn submit_form(&mut self, transport: &dyn Transport) {
        let ProductDialog::Form {
            editing,
            name,
            unit_price,
        } = &self.dialog
        else {
            return;
        };
        if name.trim().is_empty() {
            self.error = Some("Product name is required");
            return;
        }
        let (editing, name, unit_price) = (*editing, name.clone(), *unit_price);

        let saved = match editing {
            Some(id) => self
                .try_update(transport, id, &name, unit_price)
                .map_err(|_| "Error updating product"),
            None => self
                .try_create(transport, &name, unit_price)
                .map_err(|_| "Error creating product"),
        };
        match saved {
            Ok(()) => {
                self.error = None;
                match self.try_load(transport) {
                    Ok(products) => self.products = products,
                    Err(_) => self.error = Some("Error loading products"),
                }
                self.dialog = ProductDialog::None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Delete the product awaiting confirmation. The row is filtered from
    /// the local list on success; the dialog stays open on failure.
    pub fn confirm_delete(&mut self, transport: &dyn Transport) {
        let ProductDialog::ConfirmDelete { id } = self.dialog else {
            return;
        };
        match self.try_delete(transport, id) {
            Ok(()) => {
                self.products.retain(|product| product.id != id);
                self.dialog = ProductDialog::None;
                self.error = None;
            }
            Err(_) => self.error = Some("Error deleting product"),
        }
    }

    fn try_load(&self, transport: &dyn Transport) -> Result<Vec<Product>, ApiError> {
        let request = self.client.build_list_products();
        self.client.parse_list_products(transport.execute(request)?)
    }

    fn try_create(
        &self,
        transport: &dyn Transport,
        name: &str,
        unit_price: Decimal,
    ) -> Result<(), ApiError> {
        let input = CreateProduct {
            name: name.to_string(),
            unit_price,
        };
        let request = self.client.build_create_product(&input)?;
        self.client.parse_create_product(transport.execute(request)?)?;
        Ok(())
    }

    fn try_update(
        &self,
        transport: &dyn Transport,
        id: i64,
        name: &str,
        unit_price: Decimal,
    ) -> Result<(), ApiError> {
        let input = UpdateProduct {
            name: Some(name.to_string()),
            unit_price: Some(unit_price),
        };
        let request = self.client.build_update_product(id, &input)?;
        self.client.parse_update_product(transport.execute(request)?)?;
        Ok(())
    }

    fn try_delete(&self, transport: &dyn Transport, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_product(id);
        self.client.parse_delete_product(transport.execute(request)?)
    }
}
