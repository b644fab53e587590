//! # Session & Auth
//!
//! Explicit session object for the operator's role token.
//!
//! The session has a defined lifecycle: established by
//! [`AuthClient::login`], carried by whoever needs to make authenticated
//! calls, and cleared at logout by dropping it. There is no ambient global
//! token store; components receive the session explicitly.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ApiConfig;
use crate::error::ClientError;

/// An authenticated operator session.
///
/// Immutable once issued; logout is simply dropping/clearing the value in
/// the holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Bearer token attached to authenticated requests.
    pub token: String,

    /// Role granted by the backend ("admin", "biller", ...).
    pub role: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    token: String,
    role: String,
}

/// Client for the auth endpoint.
pub struct AuthClient {
    client: Client,
    config: ApiConfig,
}

impl AuthClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(AuthClient { client, config })
    }

    /// Exchanges operator credentials for a [`Session`].
    ///
    /// `POST /auth/login` with `{username, password}` →
    /// `{token, role}`.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let url = self.config.endpoint("/auth/login");

        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let body: LoginResponse =
            response
                .json()
                .await
                .map_err(|source| ClientError::Decode { url, source })?;

        info!(role = %body.role, "operator session established");

        Ok(Session {
            token: body.token,
            role: body.role,
        })
    }
}
