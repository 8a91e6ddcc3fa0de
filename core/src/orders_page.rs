//! The order list page.
//!
//! Owns its own fetch lifecycle: load on entry, then confirm-first delete and
//! the inline status dropdown. The status update merges the record the server
//! returned by identity — nothing is applied speculatively.

use crate::error::ApiError;
use crate::orders::OrderClient;
use crate::transport::Transport;
use crate::types::{Order, OrderStatus, UpdateOrder};

pub struct OrdersPage {
    client: OrderClient,
    orders: Vec<Order>,
    loading: bool,
    error: Option<&'static str>,
    pending_delete: Option<i64>,
}

impl OrdersPage {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: OrderClient::new(base_url),
            orders: Vec::new(),
            loading: true,
            error: None,
            pending_delete: None,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Id awaiting delete confirmation, if the dialog is open.
    pub fn pending_delete(&self) -> Option<i64> {
        self.pending_delete
    }

    pub fn load(&mut self, transport: &dyn Transport) {
        self.loading = true;
        match self.try_load(transport) {
            Ok(orders) => {
                self.orders = orders;
                self.error = None;
            }
            Err(_) => self.error = Some("Error loading orders"),
        }
        self.loading = false;
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the order awaiting confirmation. On success exactly that
    /// identity is removed from the local list; on failure the dialog stays
    /// open with the banner set.
    pub fn confirm_delete(&mut self, transport: &dyn Transport) {
        let Some(id) = self.pending_delete else {
            return;
        };
        match self.try_delete(transport, id) {
            Ok(()) => {
                self.orders.retain(|order| order.id != id);
                self.pending_delete = None;
                self.error = None;
            }
            Err(_) => self.error = Some("Error deleting order"),
        }
    }

    /// Inline status dropdown: update one order's status and merge the server
    /// response into the list by identity.
    pub fn set_status(&mut self, transport: &dyn Transport, id: i64, status: OrderStatus) {
        match self.try_update_status(transport, id, status) {
            Ok(updated) => {
                if let Some(slot) = self.orders.iter_mut().find(|order| order.id == updated.id) {
                    *slot = updated;
                }
                self.error = None;
            }
            Err(_) => self.error = Some("Error updating order"),
        }
    }

    fn try_load(&self, transport: &dyn Transport) -> Result<Vec<Order>, ApiError> {
        let request = self.client.build_list_orders();
        self.client.parse_list_orders(transport.execute(request)?)
    }

    fn try_delete(&self, transport: &dyn Transport, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_order(id);
        self.client.parse_delete_order(transport.execute(request)?)
    }

    fn try_update_status(
        &self,
        transport: &dyn Transport,
        id: i64,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let input = UpdateOrder {
            order_number: None,
            status: Some(status),
        };
        let request = self.client.build_update_order(id, &input)?;
        self.client.parse_update_order(transport.execute(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::transport::stub::StubTransport;

    fn two_orders_json() -> String {
        r#"[
            {"id":1,"order_number":"ORD-001","date":"2026-02-01","num_products":3,"final_price":"150.50","status":"Pending"},
            {"id":2,"order_number":"ORD-002","date":"2026-02-02","num_products":5,"final_price":"299.99","status":"InProgress"}
        ]"#
        .to_string()
    }

    fn loaded_page(transport: &StubTransport) -> OrdersPage {
        transport.push_response(200, &two_orders_json());
        let mut page = OrdersPage::new("http://localhost:3000");
        page.load(transport);
        page
    }

    #[test]
    fn load_populates_orders_and_clears_loading() {
        let transport = StubTransport::new();
        let page = loaded_page(&transport);
        assert!(!page.loading());
        assert!(page.error().is_none());
        assert_eq!(page.orders().len(), 2);
    }

    #[test]
    fn load_failure_sets_the_banner() {
        let transport = StubTransport::new();
        transport.push_response(500, "boom");
        let mut page = OrdersPage::new("http://localhost:3000");
        page.load(&transport);
        assert_eq!(page.error(), Some("Error loading orders"));
        assert!(page.orders().is_empty());
    }

    #[test]
    fn confirmed_delete_removes_exactly_that_identity() {
        let transport = StubTransport::new();
        let mut page = loaded_page(&transport);
        page.request_delete(1);
        transport.push_response(204, "");
        page.confirm_delete(&transport);
        assert!(page.pending_delete().is_none());
        assert_eq!(page.orders().len(), 1);
        assert_eq!(page.orders()[0].id, 2);
    }

    #[test]
    fn delete_failure_keeps_the_dialog_open() {
        let transport = StubTransport::new();
        let mut page = loaded_page(&transport);
        page.request_delete(1);
        transport.push_response(500, "boom");
        page.confirm_delete(&transport);
        assert_eq!(page.error(), Some("Error deleting order"));
        assert_eq!(page.pending_delete(), Some(1));
        assert_eq!(page.orders().len(), 2);
    }

    #[test]
    fn confirm_without_request_is_a_no_op() {
        let transport = StubTransport::new();
        let mut page = loaded_page(&transport);
        page.confirm_delete(&transport);
        assert_eq!(transport.request_count(), 1); // the initial load only
    }

    #[test]
    fn set_status_merges_only_that_row_from_the_server_response() {
        let transport = StubTransport::new();
        let mut page = loaded_page(&transport);
        transport.push_response(
            200,
            r#"{"id":2,"order_number":"ORD-002","date":"2026-02-02","num_products":5,"final_price":"299.99","status":"Completed"}"#,
        );
        page.set_status(&transport, 2, OrderStatus::Completed);
        assert_eq!(page.orders()[0].status, OrderStatus::Pending);
        assert_eq!(page.orders()[1].status, OrderStatus::Completed);

        let sent = transport.requests();
        let update = &sent[1];
        assert_eq!(update.method, HttpMethod::Put);
        assert_eq!(update.path, "http://localhost:3000/orders/2");
        let body: serde_json::Value = serde_json::from_str(update.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "Completed"}));
    }

    #[test]
    fn set_status_failure_leaves_the_row_untouched() {
        let transport = StubTransport::new();
        let mut page = loaded_page(&transport);
        transport.push_response(500, "boom");
        page.set_status(&transport, 2, OrderStatus::Completed);
        assert_eq!(page.error(), Some("Error updating order"));
        assert_eq!(page.orders()[1].status, OrderStatus::InProgress);
    }
}
