//! Stateless HTTP request builder and response parser for the orders
//! resource, line items included.
//!
//! # Design
//! `OrderClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! [`HttpRequest`] and a `parse_*` method that consumes an [`HttpResponse`].
//! The host executes the actual round-trip, keeping this layer deterministic
//! and free of I/O dependencies. No business logic lives here.

use crate::error::{check_status, ApiError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddOrderItem, CreateOrder, Order, OrderDetail, OrderItem, UpdateOrder, UpdateOrderItem};

/// Synchronous, stateless client for `/orders/` and its item subresource.
#[derive(Debug, Clone)]
pub struct OrderClient {
    base_url: String,
}

impl OrderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_orders(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/orders/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_orders(&self, response: HttpResponse) -> Result<Vec<Order>, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_get_order(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/orders/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_get_order(&self, response: HttpResponse) -> Result<OrderDetail, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_create_order(&self, input: &CreateOrder) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/orders/", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_create_order(&self, response: HttpResponse) -> Result<Order, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_update_order(&self, id: i64, input: &UpdateOrder) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/orders/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_update_order(&self, response: HttpResponse) -> Result<Order, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_delete_order(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/orders/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_delete_order(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }

    pub fn build_add_item(&self, order_id: i64, input: &AddOrderItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/orders/{order_id}/items", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_add_item(&self, response: HttpResponse) -> Result<OrderItem, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_update_item(
        &self,
        order_id: i64,
        item_id: i64,
        input: &UpdateOrderItem,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/orders/{order_id}/items/{item_id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<OrderItem, ApiError> {
        check_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn build_remove_item(&self, order_id: i64, item_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/orders/{order_id}/items/{item_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_remove_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}
