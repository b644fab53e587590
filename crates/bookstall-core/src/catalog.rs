//! # Catalog Resolution
//!
//! Maps a scanned or typed code to a [`StockSnapshot`].
//!
//! The catalog wraps the snapshot list fetched once at session start and is
//! read-only afterwards. Resolution trims the raw input and matches the
//! `code` OR the `barcode` field by exact, case-sensitive string equality —
//! a scanner emits the barcode verbatim, and operators type codes as
//! printed on the shelf label.

use crate::types::StockSnapshot;

/// Read-only catalog snapshot for one billing session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<StockSnapshot>,
}

impl Catalog {
    /// Creates a catalog from the snapshot records fetched at session start.
    pub fn new(items: Vec<StockSnapshot>) -> Self {
        Catalog { items }
    }

    /// Resolves a raw operator-entered string against the snapshot set.
    ///
    /// Trims surrounding whitespace, then matches `code` or `barcode`
    /// exactly. Returns `None` when nothing matches; the caller surfaces
    /// the "Item not found" message and leaves the cart unchanged.
    pub fn resolve(&self, raw: &str) -> Option<&StockSnapshot> {
        let code = raw.trim();
        if code.is_empty() {
            return None;
        }

        self.items
            .iter()
            .find(|item| item.code == code || item.barcode.as_deref() == Some(code))
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the session has no catalog data (fetch failed or empty
    /// stock table). Every resolution fails until the next session.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            StockSnapshot {
                code: "B1".to_string(),
                barcode: Some("8901234567890".to_string()),
                item_name: "Pen".to_string(),
                retail_rate: Money::from_paise(1000),
                quantity: 100,
                min_quantity: 5,
            },
            StockSnapshot {
                code: "N2".to_string(),
                barcode: None,
                item_name: "Notebook".to_string(),
                retail_rate: Money::from_paise(4500),
                quantity: 40,
                min_quantity: 10,
            },
        ])
    }

    #[test]
    fn test_resolve_by_code() {
        let catalog = catalog();
        let found = catalog.resolve("B1").unwrap();
        assert_eq!(found.item_name, "Pen");
    }

    #[test]
    fn test_resolve_by_barcode() {
        let catalog = catalog();
        let found = catalog.resolve("8901234567890").unwrap();
        assert_eq!(found.code, "B1");
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let catalog = catalog();
        assert!(catalog.resolve("  N2  ").is_some());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let catalog = catalog();
        assert!(catalog.resolve("b1").is_none());
    }

    #[test]
    fn test_resolve_unknown_and_empty() {
        let catalog = catalog();
        assert!(catalog.resolve("ZZ").is_none());
        assert!(catalog.resolve("   ").is_none());
    }
}
