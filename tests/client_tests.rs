//! Integration tests for the shared client: headers, envelopes, and
//! cross-service reuse.

use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopify_rest::entities::{Customer, Product};
use shopify_rest::services::{CustomerService, ProductService};
use shopify_rest::{ApiClient, Error};

#[tokio::test]
async fn test_requests_carry_standard_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/count.json"))
        .and(header("Accept", "application/json"))
        .and(header("X-Shopify-Access-Token", "test-token"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 0 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let count = ProductService::with_client(client).count(None).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_services_share_one_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/632910392.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {"id": 632910392, "title": "IPod Nano - 8GB"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers/207119551.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": {"id": 207119551, "first_name": "Bob"}
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let products = ProductService::with_client(client.clone());
    let customers = CustomerService::with_client(client);

    let product = products.get(632910392).await.unwrap();
    let customer = customers.get(207119551).await.unwrap();

    assert_eq!(product.title.as_deref(), Some("IPod Nano - 8GB"));
    assert_eq!(customer.first_name.as_deref(), Some("Bob"));
}

#[tokio::test]
async fn test_product_create_envelope_excludes_unset_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/products.json"))
        .and(body_json(json!({
            "product": {
                "title": "Burton Custom Freestyle 151",
                "vendor": "Burton"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {"id": 1071559748, "title": "Burton Custom Freestyle 151"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let product = Product {
        title: Some("Burton Custom Freestyle 151".to_string()),
        vendor: Some("Burton".to_string()),
        ..Default::default()
    };

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let created = ProductService::with_client(client)
        .create(&product)
        .await
        .unwrap();
    assert_eq!(created.id, Some(1071559748));
}

#[tokio::test]
async fn test_customer_delete_with_orders_surfaces_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/customers/207119551.json"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": "Cannot delete customer with existing orders"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let result = CustomerService::with_client(client).delete(207119551).await;

    match result {
        Err(Error::Status { code, message, .. }) => {
            assert_eq!(code, 422);
            assert!(message.contains("existing orders"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_preserved_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1.json"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let result = ProductService::with_client(client).get(1).await;

    match result {
        Err(Error::Status { code, message, .. }) => {
            assert_eq!(code, 502);
            assert!(message.contains("Bad Gateway"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mismatched_payload_reports_deserialize_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": "not an object"
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let result: Result<Product, Error> = ProductService::with_client(client).get(1).await;

    assert!(matches!(result, Err(Error::Deserialize { key, .. }) if key == "product"));
}

#[tokio::test]
async fn test_customer_roundtrip_through_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customers": [
                {"id": 207119551, "email": "bob.norman@hostmail.com", "state": "enabled",
                 "orders_count": 2, "total_spent": "399.00"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(mock_server.uri(), "test-token");
    let customers: Vec<Customer> = CustomerService::with_client(client)
        .list(None)
        .await
        .unwrap();

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].state.as_deref(), Some("enabled"));
    assert_eq!(customers[0].total_spent.as_deref(), Some("399.00"));
}
