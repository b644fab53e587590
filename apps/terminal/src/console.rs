//! # Operator Console
//!
//! Line-oriented front end for the billing engine. Reads one command per
//! line, invokes the matching engine operation, and renders the resulting
//! alerts plus the current cart.
//!
//! ## Commands
//! ```text
//! buyer <name>        set the buyer name
//! add <code> [qty]    resolve a code/barcode and add to the cart (qty 1)
//! edit <row> <qty>    replace the quantity of a cart row (1-based)
//! rm <row>            remove a cart row (1-based)
//! discount <rupees>   set the discount
//! pay <rupees>        set the payment
//! cart                show the cart and totals
//! submit              validate, submit and print
//! reprint             print the last receipt again
//! clear               discard the cart and the last receipt
//! logout              drop the operator session
//! help                this text
//! quit                exit
//! ```

use std::io::{self, BufRead, Write};

use bookstall_client::BillingService;
use bookstall_core::{Cart, CartTotals, Money};
use tracing::debug;

use crate::alert::Alert;
use crate::engine::BillingEngine;
use crate::print::PrintTrigger;

const HELP: &str = "\
Commands:
  buyer <name>        set the buyer name
  add <code> [qty]    add an item by code or barcode (default qty 1)
  edit <row> <qty>    change the quantity of a cart row
  rm <row>            remove a cart row
  discount <rupees>   set the discount
  pay <rupees>        set the payment
  cart                show the cart and totals
  submit              submit the bill and print the receipt
  reprint             print the last receipt again
  clear               discard the cart and the last receipt
  logout              drop the operator session
  help                show this text
  quit                exit";

/// Runs the console loop until `quit` or end of input.
pub async fn run_loop<S, P>(engine: &mut BillingEngine<S, P>) -> io::Result<()>
where
    S: BillingService,
    P: PrintTrigger,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "pos> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // end of input
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        debug!(%input, "console command");

        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        let alerts = match command {
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "quit" | "exit" => break,
            "buyer" => {
                if args.is_empty() {
                    vec![Alert::warning("Usage: buyer <name>")]
                } else {
                    engine.set_buyer_name(&args.join(" "));
                    Vec::new()
                }
            }
            "add" => match args.first() {
                Some(code) => match parse_optional_quantity(&args) {
                    Some(quantity) => engine.add_line(code, quantity),
                    None => vec![Alert::warning("Please enter a valid quantity.")],
                },
                None => vec![Alert::warning("Usage: add <code> [qty]")],
            },
            "edit" => match parse_row_and_quantity(&args) {
                Some((index, quantity)) => engine.edit_line(index, quantity),
                None => vec![Alert::warning("Usage: edit <row> <qty>")],
            },
            "rm" => match parse_row(&args) {
                Some(index) => engine.remove_line(index),
                None => vec![Alert::warning("Usage: rm <row>")],
            },
            "discount" => match parse_rupees(&args) {
                Some(amount) => engine.set_discount(amount),
                None => vec![Alert::warning("Usage: discount <rupees>")],
            },
            "pay" => match parse_rupees(&args) {
                Some(amount) => engine.set_payment(amount),
                None => vec![Alert::warning("Usage: pay <rupees>")],
            },
            "cart" => {
                let (cart, totals) = engine.cart_view();
                println!("{}", render_cart(&cart, &totals));
                continue;
            }
            "submit" => engine.submit_and_print().await,
            "reprint" => engine.reprint().await,
            "clear" => engine.clear_form(),
            "logout" => {
                engine.session_mut().sign_out();
                vec![Alert::info("Signed out.")]
            }
            _ => vec![Alert::warning(format!(
                "Unknown command '{}'. Type 'help'.",
                command
            ))],
        };

        for alert in &alerts {
            println!("{}", alert);
        }
    }

    Ok(())
}

/// 1-based row → 0-based line index.
fn parse_row(args: &[&str]) -> Option<usize> {
    args.first()?
        .parse::<usize>()
        .ok()
        .filter(|row| *row >= 1)
        .map(|row| row - 1)
}

fn parse_row_and_quantity(args: &[&str]) -> Option<(usize, i64)> {
    let index = parse_row(args)?;
    let quantity = args.get(1)?.parse::<i64>().ok()?;
    Some((index, quantity))
}

/// The quantity argument of `add` is optional: absent means 1, but an
/// argument that is present and not a number is an operator mistake that
/// must be surfaced, never defaulted.
fn parse_optional_quantity(args: &[&str]) -> Option<i64> {
    match args.get(1) {
        None => Some(1),
        Some(raw) => raw.parse::<i64>().ok(),
    }
}

fn parse_rupees(args: &[&str]) -> Option<Money> {
    args.first()?
        .parse::<f64>()
        .ok()
        // "NaN" and "inf" parse as f64 but are not amounts.
        .filter(|value| value.is_finite())
        .map(Money::from_rupees)
}

/// Renders the cart rows and the derived totals.
fn render_cart(cart: &Cart, totals: &CartTotals) -> String {
    let mut out = String::new();

    out.push_str(&format!("Buyer: {}\n", cart.buyer_name));
    if cart.is_empty() {
        out.push_str("(cart is empty)\n");
    } else {
        out.push_str(&format!(
            "{:>3}  {:<8} {:<16} {:>4} {:>8} {:>9}\n",
            "#", "Code", "Item", "Qty", "Rate", "Amount"
        ));
        for (row, line) in cart.lines.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}  {:<8} {:<16} {:>4} {:>8} {:>9}\n",
                row + 1,
                line.code,
                line.item_name,
                line.quantity,
                line.retail_rate.to_string(),
                line.amount.to_string()
            ));
        }
    }
    out.push_str(&format!("Total: {}\n", totals.total_amount));
    out.push_str(&format!("Discount: {}\n", cart.discount));
    out.push_str(&format!("After Discount: {}\n", totals.discounted_total));
    out.push_str(&format!("Payment: {}\n", cart.payment));
    out.push_str(&format!("Balance: {}", totals.balance));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_core::{CartLine, StockSnapshot};

    #[test]
    fn test_parse_row_is_one_based() {
        assert_eq!(parse_row(&["1"]), Some(0));
        assert_eq!(parse_row(&["3"]), Some(2));
        assert_eq!(parse_row(&["0"]), None);
        assert_eq!(parse_row(&["x"]), None);
        assert_eq!(parse_row(&[]), None);
    }

    #[test]
    fn test_parse_optional_quantity_defaults_only_when_absent() {
        assert_eq!(parse_optional_quantity(&["B1"]), Some(1));
        assert_eq!(parse_optional_quantity(&["B1", "3"]), Some(3));

        // Present but unparseable must fail, not default to 1.
        assert_eq!(parse_optional_quantity(&["B1", "abc"]), None);
        assert_eq!(parse_optional_quantity(&["B1", "1O"]), None);
        assert_eq!(parse_optional_quantity(&["B1", "2.5"]), None);
    }

    #[test]
    fn test_parse_rupees() {
        assert_eq!(parse_rupees(&["10.50"]), Some(Money::from_paise(1050)));
        assert_eq!(parse_rupees(&["0"]), Some(Money::zero()));
        assert_eq!(parse_rupees(&["abc"]), None);
    }

    #[test]
    fn test_parse_rupees_rejects_non_finite() {
        assert_eq!(parse_rupees(&["NaN"]), None);
        assert_eq!(parse_rupees(&["inf"]), None);
        assert_eq!(parse_rupees(&["-inf"]), None);
    }

    #[test]
    fn test_render_cart_shows_rows_and_totals() {
        let snapshot = StockSnapshot {
            code: "B1".to_string(),
            barcode: None,
            item_name: "Pen".to_string(),
            retail_rate: Money::from_paise(1000),
            quantity: 100,
            min_quantity: 5,
        };
        let mut cart = Cart::new();
        cart.buyer_name = "Anita".to_string();
        cart.lines.push(CartLine::new(&snapshot, 5));
        cart.discount = Money::from_paise(500);
        cart.payment = Money::from_paise(5000);

        let rendered = render_cart(&cart, &cart.totals());
        assert!(rendered.contains("Buyer: Anita"));
        assert!(rendered.contains("Pen"));
        assert!(rendered.contains("Total: ₹50.00"));
        assert!(rendered.contains("After Discount: ₹45.00"));
        assert!(rendered.contains("Balance: ₹5.00"));
    }

    #[test]
    fn test_render_empty_cart() {
        let cart = Cart::new();
        let rendered = render_cart(&cart, &cart.totals());
        assert!(rendered.contains("(cart is empty)"));
        assert!(rendered.contains("Total: ₹0.00"));
    }
}
