//! Integration tests for the stock catalog client against a wiremock
//! stand-in for the backend.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookstall_client::{ApiConfig, CatalogClient, ClientError};
use bookstall_core::Money;

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn fetch_stocks_converts_rupees_to_paise() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "code": "B1",
                "barcode": "8901234567890",
                "itemName": "Pen",
                "retailRate": 10.5,
                "quantity": 100,
                "minQuantity": 5
            },
            {
                "code": "N2",
                "itemName": "Notebook",
                "retailRate": 45.0
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = CatalogClient::new(config_for(&server)).unwrap();
    let stocks = client.fetch_stocks().await.unwrap();

    assert_eq!(stocks.len(), 2);

    assert_eq!(stocks[0].code, "B1");
    assert_eq!(stocks[0].barcode.as_deref(), Some("8901234567890"));
    assert_eq!(stocks[0].retail_rate, Money::from_paise(1050));
    assert_eq!(stocks[0].quantity, 100);
    assert_eq!(stocks[0].min_quantity, 5);

    // Missing barcode/quantity fields default rather than fail the fetch.
    assert_eq!(stocks[1].barcode, None);
    assert_eq!(stocks[1].retail_rate, Money::from_paise(4500));
    assert_eq!(stocks[1].quantity, 0);
    assert_eq!(stocks[1].min_quantity, 0);
}

#[tokio::test]
async fn fetch_stocks_surfaces_server_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "stock table unavailable"})),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(config_for(&server)).unwrap();
    let err = client.fetch_stocks().await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "stock table unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_stocks_reports_malformed_body_as_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/stocks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(config_for(&server)).unwrap();
    let err = client.fetch_stocks().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }));
}
