//! Integration tests for the billing submission client.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookstall_client::{
    ApiConfig, BillItem, BillRequest, BillingClient, BillingService, ClientError, Session,
};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout: Duration::from_secs(5),
    }
}

fn sample_request() -> BillRequest {
    BillRequest {
        buyer_name: "Anita".to_string(),
        items: vec![BillItem {
            code: "B1".to_string(),
            qty: 5,
            retail_rate: 10.0,
        }],
        payment: 50.0,
        discount: 5.0,
    }
}

#[tokio::test]
async fn submit_bill_sends_camel_case_contract_and_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bills"))
        .and(body_json(json!({
            "buyerName": "Anita",
            "items": [{"code": "B1", "qty": 5, "retailRate": 10.0}],
            "payment": 50.0,
            "discount": 5.0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "receiptNumber": "R-0042",
            "totalAmount": 45.0,
            "balance": 5.0,
            "date": "2025-04-01T10:30:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BillingClient::new(config_for(&server)).unwrap();
    let bill = client.submit_bill(&sample_request()).await.unwrap();

    assert_eq!(bill.receipt_number, "R-0042");
    assert_eq!(bill.total_amount, 45.0);
    assert_eq!(bill.balance, 5.0);
    assert!(bill.date.is_some());
}

#[tokio::test]
async fn submit_bill_tolerates_missing_date() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "receiptNumber": "R-0043",
            "totalAmount": 100.0,
            "balance": 0.0
        })))
        .mount(&server)
        .await;

    let client = BillingClient::new(config_for(&server)).unwrap();
    let bill = client.submit_bill(&sample_request()).await.unwrap();

    assert_eq!(bill.receipt_number, "R-0043");
    assert!(bill.date.is_none());
}

#[tokio::test]
async fn submit_bill_attaches_session_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bills"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "receiptNumber": "R-0044",
            "totalAmount": 45.0,
            "balance": 5.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = BillingClient::new(config_for(&server))
        .unwrap()
        .with_session(Session {
            token: "tok-123".to_string(),
            role: "biller".to_string(),
        });

    client.submit_bill(&sample_request()).await.unwrap();
}

#[tokio::test]
async fn submit_bill_surfaces_server_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/bills"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "unknown item code"})),
        )
        .mount(&server)
        .await;

    let client = BillingClient::new(config_for(&server)).unwrap();
    let err = client.submit_bill(&sample_request()).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "unknown item code");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn submit_bill_reports_transport_failure() {
    // Point at a server that is no longer there. A pooled server
    // (`MockServer::start`) outlives its handle, so build an unpooled one
    // that actually shuts down on drop.
    let server = MockServer::builder().start().await;
    let config = config_for(&server);
    drop(server);

    let client = BillingClient::new(config).unwrap();
    let err = client.submit_bill(&sample_request()).await.unwrap_err();

    assert!(matches!(err, ClientError::Transport { .. }));
}
