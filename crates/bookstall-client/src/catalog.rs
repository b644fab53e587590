//! # Stock Catalog Client
//!
//! Fetches the stock snapshot at billing session start.
//!
//! ## Wire Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /api/stocks                                                        │
//! │                                                                         │
//! │  [{ "code": "B1", "barcode": "890...", "itemName": "Pen",              │
//! │     "retailRate": 10.5, "quantity": 100, "minQuantity": 5 }, ...]      │
//! │          │                                                              │
//! │          ▼  decimal rupees → integer paise, HERE and only here          │
//! │                                                                         │
//! │  Vec<StockSnapshot> (read-only for the rest of the session)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use bookstall_core::{Money, StockSnapshot};

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::session::Session;

/// One raw catalog record as the backend sends it.
///
/// Rates come as decimal rupee numbers; `quantity`/`minQuantity` default to
/// zero because older stock rows may omit them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StockRecord {
    code: String,
    #[serde(default)]
    barcode: Option<String>,
    item_name: String,
    retail_rate: f64,
    #[serde(default)]
    quantity: i64,
    #[serde(default)]
    min_quantity: i64,
}

impl From<StockRecord> for StockSnapshot {
    fn from(record: StockRecord) -> Self {
        StockSnapshot {
            code: record.code,
            barcode: record.barcode,
            item_name: record.item_name,
            retail_rate: Money::from_rupees(record.retail_rate),
            quantity: record.quantity,
            min_quantity: record.min_quantity,
        }
    }
}

/// Client for the read-only stock catalog service.
pub struct CatalogClient {
    client: Client,
    config: ApiConfig,
    session: Option<Session>,
}

impl CatalogClient {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(CatalogClient {
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

    /// Fetches the full stock snapshot. Called once per billing session;
    /// the result is immutable for the session's duration.
    pub async fn fetch_stocks(&self) -> Result<Vec<StockSnapshot>, ClientError> {
        let url = self.config.endpoint("/stocks");
        debug!(%url, "fetching stock snapshot");

        let mut request = self.client.get(&url);
        if let Some(session) = &self.session {
            request = request.bearer_auth(&session.token);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(ClientError::from_response(response).await);
        }

        let records: Vec<StockRecord> =
            response
                .json()
                .await
                .map_err(|source| ClientError::Decode { url, source })?;

        info!(count = records.len(), "stock snapshot fetched");

        Ok(records.into_iter().map(StockSnapshot::from).collect())
    }
}
