//! # Print Trigger
//!
//! Printing is an opaque output sink: the engine fires a trigger against
//! the already-built receipt and does not care what happens next. The
//! trait seam keeps the engine testable — tests assert whether the trigger
//! fired without any printer hardware in the loop.

use bookstall_core::Receipt;

/// The seam between the engine and the actual print path.
pub trait PrintTrigger {
    /// Invoked once per print request with the receipt to render.
    fn trigger_print(&mut self, receipt: &Receipt);
}

/// Console-backed printer: renders the receipt to stdout, which is where a
/// real deployment points the spooler.
pub struct ConsolePrinter {
    store_name: String,
}

impl ConsolePrinter {
    pub fn new(store_name: impl Into<String>) -> Self {
        ConsolePrinter {
            store_name: store_name.into(),
        }
    }

    /// Renders the receipt layout: header, buyer block, itemized table,
    /// then discount/total/payment/balance in that order.
    pub fn render(&self, receipt: &Receipt) -> String {
        let mut out = String::new();

        out.push_str(&format!("========= {} =========\n", self.store_name));
        out.push_str(&format!(
            "Date: {}\n",
            receipt.date.format("%Y-%m-%d %H:%M:%S")
        ));
        out.push_str(&format!("Receipt #: {}\n", receipt.receipt_number));
        out.push_str(&format!("Buyer: {}\n", receipt.buyer_name));
        out.push_str("----------------------------------------\n");
        out.push_str(&format!(
            "{:<8} {:<16} {:>4} {:>8} {:>9}\n",
            "Code", "Item", "Qty", "Rate", "Amount"
        ));
        for line in &receipt.lines {
            out.push_str(&format!(
                "{:<8} {:<16} {:>4} {:>8} {:>9}\n",
                line.code,
                line.item_name,
                line.quantity,
                line.retail_rate.to_string(),
                line.amount.to_string()
            ));
        }
        out.push_str("----------------------------------------\n");
        out.push_str(&format!("Discount: {}\n", receipt.discount));
        out.push_str(&format!("Total (After Discount): {}\n", receipt.total));
        out.push_str(&format!("Payment: {}\n", receipt.payment));
        out.push_str(&format!("Balance: {}\n", receipt.balance));
        out.push_str("Thank you for shopping with us!\n");

        out
    }
}

impl PrintTrigger for ConsolePrinter {
    fn trigger_print(&mut self, receipt: &Receipt) {
        print!("{}", self.render(receipt));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::{CartLine, Money, StockSnapshot};
    use chrono::Utc;

    fn receipt() -> Receipt {
        let snapshot = StockSnapshot {
            code: "B1".to_string(),
            barcode: None,
            item_name: "Pen".to_string(),
            retail_rate: Money::from_paise(1000),
            quantity: 100,
            min_quantity: 5,
        };
        Receipt {
            receipt_number: "R-0042".to_string(),
            date: Utc::now(),
            buyer_name: "Anita".to_string(),
            lines: vec![CartLine::new(&snapshot, 5)],
            discount: Money::from_paise(500),
            total: Money::from_paise(4500),
            payment: Money::from_paise(5000),
            balance: Money::from_paise(500),
        }
    }

    #[test]
    fn test_render_contains_all_receipt_fields() {
        let printer = ConsolePrinter::new("Bookstall");
        let rendered = printer.render(&receipt());

        assert!(rendered.contains("Bookstall"));
        assert!(rendered.contains("Receipt #: R-0042"));
        assert!(rendered.contains("Buyer: Anita"));
        assert!(rendered.contains("B1"));
        assert!(rendered.contains("Pen"));
        assert!(rendered.contains("Discount: ₹5.00"));
        assert!(rendered.contains("Total (After Discount): ₹45.00"));
        assert!(rendered.contains("Payment: ₹50.00"));
        assert!(rendered.contains("Balance: ₹5.00"));
    }
}
