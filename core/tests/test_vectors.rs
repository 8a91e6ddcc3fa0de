//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use orders_core::{
    AddOrderItem, ApiError, CreateOrder, HttpMethod, HttpResponse, Order, OrderClient, OrderItem,
    UpdateOrder,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> OrderClient {
    OrderClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn expected_headers(expected_req: &serde_json::Value) -> Vec<(String, String)> {
    expected_req["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (
                arr[0].as_str().unwrap().to_string(),
                arr[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create order
// ---------------------------------------------------------------------------

#[test]
fn create_order_test_vectors() {
    let raw = include_str!("../../test-vectors/create_order.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: CreateOrder = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_create_order(&input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.headers, expected_headers(expected_req), "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let order = c.parse_create_order(simulated_response(case)).unwrap();
        let expected: Order = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(order, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// List orders
// ---------------------------------------------------------------------------

#[test]
fn list_orders_test_vectors() {
    let raw = include_str!("../../test-vectors/list_orders.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_orders();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let orders = c.parse_list_orders(simulated_response(case)).unwrap();
        let expected: Vec<Order> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(orders, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Add item
// ---------------------------------------------------------------------------

#[test]
fn add_item_test_vectors() {
    let raw = include_str!("../../test-vectors/add_item.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let order_id = case["input_order_id"].as_i64().unwrap();
        let input: AddOrderItem = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_add_item(order_id, &input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert_eq!(req.headers, expected_headers(expected_req), "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = c.parse_add_item(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let item = result.unwrap();
            let expected: OrderItem = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(item, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Update order
// ---------------------------------------------------------------------------

#[test]
fn update_order_test_vectors() {
    let raw = include_str!("../../test-vectors/update_order.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let input: UpdateOrder = serde_json::from_value(case["input"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_update_order(id, &input).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let order = c.parse_update_order(simulated_response(case)).unwrap();
        let expected: Order = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(order, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Delete order
// ---------------------------------------------------------------------------

#[test]
fn delete_order_test_vectors() {
    let raw = include_str!("../../test-vectors/delete_order.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_i64().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_delete_order(id);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_delete_order(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
