//! # Client Error Types
//!
//! Transport and server errors for the REST clients.
//!
//! None of these is fatal: the terminal maps every variant to an
//! operator-visible alert and leaves the cart editable. A submission
//! failure in particular must preserve cart state so the operator can
//! retry the same submit manually.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by the catalog, billing and auth clients.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request never completed (connection refused, DNS, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

impl ClientError {
    /// Builds an [`ClientError::Api`] from a non-success response,
    /// preferring the server's own message when the body is decodable.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
