//! The create-order form.
//!
//! Submitting a valid order number creates the order and hands it back so the
//! caller can enter the editing workflow keyed by the new id. A blank or
//! whitespace-only order number is rejected locally, before any request is
//! built.

use crate::error::ApiError;
use crate::orders::OrderClient;
use crate::transport::Transport;
use crate::types::{CreateOrder, Order};

pub struct NewOrderForm {
    client: OrderClient,
    order_number: String,
    error: Option<&'static str>,
    saving: bool,
}

impl NewOrderForm {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: OrderClient::new(base_url),
            order_number: String::new(),
            error: None,
            saving: false,
        }
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn set_order_number(&mut self, value: impl Into<String>) {
        self.order_number = value.into();
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn saving(&self) -> bool {
        self.saving
    }

    /// Submit the form. Returns the created order on success; `None` leaves
    /// the reason in [`error`](Self::error).
    pub fn submit(&mut self, transport: &dyn Transport) -> Option<Order> {
        if self.saving {
            return None;
        }
        if self.order_number.trim().is_empty() {
            self.error = Some("Order number is required");
            return None;
        }
        self.saving = true;
        let result = self.try_create(transport);
        self.saving = false;
        match result {
            Ok(order) => {
                self.error = None;
                Some(order)
            }
            Err(_) => {
                self.error = Some("Error creating order");
                None
            }
        }
    }

    fn try_create(&self, transport: &dyn Transport) -> Result<Order, ApiError> {
        // The input is sent as typed, untrimmed; only the emptiness check is local.
        let input = CreateOrder {
            order_number: self.order_number.clone(),
        };
        let request = self.client.build_create_order(&input)?;
        self.client.parse_create_order(transport.execute(request)?)
    }
}
