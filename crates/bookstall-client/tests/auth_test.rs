//! Integration tests for the auth client and session lifecycle.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bookstall_client::{ApiConfig, AuthClient, ClientError};

fn config_for(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn login_establishes_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "biller1", "password": "s3cret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "tok-123",
            "role": "biller"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = AuthClient::new(config_for(&server)).unwrap();
    let session = client.login("biller1", "s3cret").await.unwrap();

    assert_eq!(session.token, "tok-123");
    assert_eq!(session.role, "biller");
}

#[tokio::test]
async fn login_rejection_surfaces_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = AuthClient::new(config_for(&server)).unwrap();
    let err = client.login("biller1", "wrong").await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid credentials");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
