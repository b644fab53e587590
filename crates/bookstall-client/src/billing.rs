//! # Billing Submission Client
//!
//! Submits a finalized cart to the billing service and returns the
//! authoritative bill response.
//!
//! ## Submission Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/bills                                                        │
//! │                                                                         │
//! │  { "buyerName": "Anita",                                                │
//! │    "items": [{ "code": "B1", "qty": 5, "retailRate": 10.0 }],          │
//! │    "payment": 50.0, "discount": 5.0 }                                   │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  { "receiptNumber": "R-0042", "totalAmount": 45.0,                      │
//! │    "balance": 5.0, "date": "..." }                                      │
//! │                                                                         │
//! │  The response's number fields are AUTHORITATIVE; the terminal merges    │
//! │  them with its own line detail to build the receipt.                    │
//! │                                                                         │
//! │  Exactly one HTTP call per invocation. No implicit retry, no            │
//! │  idempotency key — the in-flight guard lives in the engine.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use chrono::{DateTime, Utc};

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::session::Session;

// =============================================================================
// Wire Types
// =============================================================================

/// Minimal per-line submission payload. The rate is included so the
/// backend need not re-resolve pricing against a catalog that may have
/// moved since the cart was built.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub code: String,
    pub qty: i64,
    /// Decimal rupees on the wire.
    pub retail_rate: f64,
}

/// The finalized order as submitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRequest {
    pub buyer_name: String,
    pub items: Vec<BillItem>,
    pub payment: f64,
    pub discount: f64,
}

/// The persisted bill as the server reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub receipt_number: String,
    /// Total after discount, as persisted server-side.
    pub total_amount: f64,
    pub balance: f64,
    /// Some backend versions omit the date; the terminal falls back to its
    /// own clock.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

// =============================================================================
// Billing Service Seam
// =============================================================================

/// The submission seam between the engine and the network.
///
/// The engine is generic over this trait so its workflow (validate →
/// submit → merge receipt → reset → print) can be tested without a server.
#[allow(async_fn_in_trait)]
pub trait BillingService {
    /// Submits one finalized order. Implementations make exactly one
    /// attempt; retrying is a deliberate operator action.
    async fn submit_bill(&self, request: &BillRequest) -> Result<BillResponse, ClientError>;
}

// =============================================================================
// HTTP Implementation
// =============================================================================

/// Client for the billing submission service.
pub struct BillingClient {
    client: Client,
    config: ApiConfig,
    session: Option<Session>,
}

impl BillingClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(BillingClient {
            client,
            config,
            session: None,
        })
    }

    /// Attaches an operator session; subsequent requests carry its bearer
    /// token.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }
}

impl BillingService for BillingClient {
    async fn submit_bill(&self, request: &BillRequest) -> Result<BillResponse, ClientError> {
        let url = self.config.endpoint("/bills");
        debug!(%url, buyer = %request.buyer_name, items = request.items.len(), "submitting bill");

        let mut http_request = self.client.post(&url).json(request);
        if let Some(session) = &self.session {
            http_request = http_request.bearer_auth(&session.token);
        }

        let response = http_request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let bill: BillResponse =
            response
                .json()
                .await
                .map_err(|source| ClientError::Decode { url, source })?;

        info!(receipt_number = %bill.receipt_number, total = bill.total_amount, "bill persisted");

        Ok(bill)
    }
}
