//! # Domain Types
//!
//! Core domain types used throughout Bookstall POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  StockSnapshot  │   │    CartLine     │   │     Receipt     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │──►│  code           │──►│  receipt_number │       │
//! │  │  barcode?       │   │  item_name      │   │  date           │       │
//! │  │  item_name      │   │  quantity       │   │  lines          │       │
//! │  │  retail_rate    │   │  retail_rate    │   │  total, balance │       │
//! │  │  quantity       │   │  amount         │   │  (server-owned) │       │
//! │  │  min_quantity   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Snapshot pattern: the cart copies name and rate at add time, and the  │
//! │  receipt copies the cart lines at submit time. Later catalog changes   │
//! │  never rewrite history.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Stock Snapshot
// =============================================================================

/// One catalog record, fetched once per billing session and read-only for
/// its duration.
///
/// Staleness is a known limitation: another register selling the same item
/// concurrently is not detected, which is why the minimum-quantity check is
/// advisory only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StockSnapshot {
    /// Unique item code — the primary lookup key.
    pub code: String,

    /// Secondary scanner key, when the item carries one.
    pub barcode: Option<String>,

    /// Display name shown in the cart and on the receipt.
    pub item_name: String,

    /// Price per unit at snapshot time.
    pub retail_rate: Money,

    /// Available stock at snapshot time.
    pub quantity: i64,

    /// Reorder threshold for the low-stock advisory.
    pub min_quantity: i64,
}

// =============================================================================
// Receipt
// =============================================================================

/// The immutable record of a successful submission, held in memory for
/// reprint until the next submission overwrites it.
///
/// ## Merge Semantics
/// The server does not echo full line detail back, so the receipt is built
/// by merging:
/// - server response (authoritative): `receipt_number`, `total`, `balance`,
///   and the date when provided
/// - client state at submit time: `buyer_name`, `lines`, `discount`,
///   `payment`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Assigned by the billing service.
    pub receipt_number: String,

    /// Submission time; server-provided when present.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    pub buyer_name: String,

    /// Copy of the cart lines at submit time.
    pub lines: Vec<CartLine>,

    pub discount: Money,

    /// Persisted total as computed by the server (after discount).
    pub total: Money,

    pub payment: Money,

    /// Persisted balance as computed by the server.
    pub balance: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> StockSnapshot {
        StockSnapshot {
            code: "B1".to_string(),
            barcode: Some("8901234567890".to_string()),
            item_name: "Pen".to_string(),
            retail_rate: Money::from_paise(1000),
            quantity: 100,
            min_quantity: 5,
        }
    }

    #[test]
    fn test_stock_snapshot_wire_names_are_camel_case() {
        let json = serde_json::to_value(snapshot()).unwrap();
        assert!(json.get("itemName").is_some());
        assert!(json.get("retailRate").is_some());
        assert!(json.get("minQuantity").is_some());
    }

    #[test]
    fn test_receipt_serializes_lines() {
        let receipt = Receipt {
            receipt_number: "R-0042".to_string(),
            date: Utc::now(),
            buyer_name: "Anita".to_string(),
            lines: vec![CartLine::new(&snapshot(), 3)],
            discount: Money::zero(),
            total: Money::from_paise(3000),
            payment: Money::from_paise(3000),
            balance: Money::zero(),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["receiptNumber"], "R-0042");
        assert_eq!(json["lines"][0]["code"], "B1");
    }
}
