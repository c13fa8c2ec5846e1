//! Integration tests for the quote endpoint.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations and seed applied
//! - The API server running (cargo run -p customkeeps-api)
//!
//! Run with: cargo test -p customkeeps-integration-tests -- --ignored

use customkeeps_integration_tests::{api_base_url, client};
use reqwest::StatusCode;
use serde_json::{Value, json};

/// Fetch a seeded product id by SKU.
async fn product_id_by_sku(sku: &str) -> String {
    let products: Vec<Value> = client()
        .get(format!("{}/api/products", api_base_url()))
        .send()
        .await
        .expect("Failed to list products")
        .json()
        .await
        .expect("Failed to parse product list");

    products
        .iter()
        .find(|p| p["sku"] == sku)
        .and_then(|p| p["id"].as_str())
        .map(String::from)
        .unwrap_or_else(|| panic!("seed product {sku} not found"))
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_quote_single_tee() {
    let client = client();
    let base_url = api_base_url();
    let tee_id = product_id_by_sku("TEE-BASIC-001").await;

    let resp = client
        .post(format!("{base_url}/api/pricing/quote"))
        .json(&json!({"items": [{"productId": tee_id, "quantity": 1}]}))
        .send()
        .await
        .expect("Failed to request quote");

    assert_eq!(resp.status(), StatusCode::OK);
    let quote: Value = resp.json().await.expect("Failed to parse quote");

    assert_eq!(quote["summary"]["subtotal"], json!(399.0));
    assert_eq!(quote["summary"]["shipping"], json!(99.0));
    assert_eq!(quote["summary"]["tax"], json!(0.0));
    assert_eq!(quote["summary"]["total"], json!(498.0));
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_quote_bulk_discount_and_extended_shipping() {
    let client = client();
    let base_url = api_base_url();
    let tee_id = product_id_by_sku("TEE-BASIC-001").await;

    let resp = client
        .post(format!("{base_url}/api/pricing/quote"))
        .json(&json!({"items": [{"productId": tee_id, "quantity": 10}]}))
        .send()
        .await
        .expect("Failed to request quote");

    assert_eq!(resp.status(), StatusCode::OK);
    let quote: Value = resp.json().await.expect("Failed to parse quote");

    // 10% tier: 399 * 0.9 = 359.10 per unit
    assert_eq!(quote["lines"][0]["unitPrice"], json!(359.1));
    assert_eq!(quote["summary"]["shipping"], json!(149.0));
    assert_eq!(quote["summary"]["total"], json!(3740.0));
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_quote_empty_cart_is_rejected() {
    let client = client();
    let base_url = api_base_url();

    let resp = client
        .post(format!("{base_url}/api/pricing/quote"))
        .json(&json!({"items": []}))
        .send()
        .await
        .expect("Failed to request quote");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert_eq!(body["error"], "No items");
}

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_quote_unknown_product_is_rejected() {
    let client = client();
    let base_url = api_base_url();

    let resp = client
        .post(format!("{base_url}/api/pricing/quote"))
        .json(&json!({
            "items": [{"productId": uuid::Uuid::new_v4(), "quantity": 1}]
        }))
        .send()
        .await
        .expect("Failed to request quote");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error body");
    assert!(
        body["error"]
            .as_str()
            .expect("error message")
            .starts_with("Invalid product in cart")
    );
}

#[tokio::test]
#[ignore = "Requires running API server and seeded database"]
async fn test_quote_string_quantity_is_coerced() {
    let client = client();
    let base_url = api_base_url();
    let mug_id = product_id_by_sku("MUG-WHITE-001").await;

    let resp = client
        .post(format!("{base_url}/api/pricing/quote"))
        .json(&json!({"items": [{"productId": mug_id, "quantity": "2"}]}))
        .send()
        .await
        .expect("Failed to request quote");

    assert_eq!(resp.status(), StatusCode::OK);
    let quote: Value = resp.json().await.expect("Failed to parse quote");
    assert_eq!(quote["lines"][0]["qty"], json!(2));
}
