//! # Receipt Printer
//!
//! Fixed-width plain-text rendering of a completed receipt, the kind a
//! thermal register printer produces.
//!
//! ## Layout (default 40 columns)
//! ```text
//! toothbrush                          1.98
//!   0.99 * 2
//! apples                              4.98
//!   1.99 * 2.500
//! 3 for 2 (toothbrush)               -0.99
//!
//! Total:                              5.97
//! ```
//!
//! The printer is a read-only receipt consumer: it never mutates the
//! receipt it renders.

use crate::offers::Discount;
use crate::receipt::{Receipt, ReceiptLine};
use crate::types::ProductUnit;

/// Default receipt width in characters.
pub const DEFAULT_COLUMNS: usize = 40;

/// Renders receipts as fixed-width text.
#[derive(Debug, Clone)]
pub struct ReceiptPrinter {
    columns: usize,
}

impl ReceiptPrinter {
    /// Creates a printer with the given column width.
    pub fn new(columns: usize) -> Self {
        ReceiptPrinter { columns }
    }

    /// Renders the whole receipt: items, discounts, blank line, total.
    pub fn print_receipt(&self, receipt: &Receipt) -> String {
        let mut out = String::new();

        for line in receipt.lines() {
            out.push_str(&self.print_line(line));
        }

        for discount in receipt.discounts() {
            out.push_str(&self.print_discount(discount));
        }

        out.push('\n');
        out.push_str(&self.two_columns("Total: ", &receipt.total().to_price_string()));
        out
    }

    /// One item: name against line total, plus a price×quantity detail
    /// line whenever the quantity isn't exactly one.
    fn print_line(&self, line: &ReceiptLine) -> String {
        let mut rendered =
            self.two_columns(&line.product.name, &line.total.to_price_string());
        if line.quantity != 1.0 {
            rendered.push_str(&format!(
                "  {} * {}\n",
                line.unit_price.to_price_string(),
                format_quantity(line)
            ));
        }
        rendered
    }

    /// One discount: "description (product)" against the negative amount.
    fn print_discount(&self, discount: &Discount) -> String {
        let name = format!("{} ({})", discount.description, discount.product.name);
        self.two_columns(&name, &discount.amount.to_price_string())
    }

    /// Left text, right-aligned value, newline. When the two sides don't
    /// fit the width they simply abut.
    fn two_columns(&self, name: &str, value: &str) -> String {
        let padding = self.columns.saturating_sub(name.len() + value.len());
        format!("{}{}{}\n", name, " ".repeat(padding), value)
    }
}

impl Default for ReceiptPrinter {
    fn default() -> Self {
        ReceiptPrinter::new(DEFAULT_COLUMNS)
    }
}

/// Counted goods print whole quantities bare; weighed goods always show
/// three decimals.
fn format_quantity(line: &ReceiptLine) -> String {
    match line.product.unit {
        ProductUnit::Each => {
            if line.quantity.fract() == 0.0 {
                format!("{}", line.quantity as i64)
            } else {
                format!("{}", line.quantity)
            }
        }
        ProductUnit::Kilo => format!("{:.3}", line.quantity),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;

    fn toothbrush() -> Product {
        Product::new("toothbrush", ProductUnit::Each)
    }

    fn apples() -> Product {
        Product::new("apples", ProductUnit::Kilo)
    }

    #[test]
    fn test_single_unit_line_has_no_detail() {
        let mut receipt = Receipt::new();
        receipt.add_line(toothbrush(), 1.0, Money::from_cents(99));

        let printed = ReceiptPrinter::default().print_receipt(&receipt);
        let expected = "\
toothbrush                          0.99

Total:                              0.99
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_counted_quantity_detail_line() {
        let mut receipt = Receipt::new();
        receipt.add_line(toothbrush(), 2.0, Money::from_cents(99));

        let printed = ReceiptPrinter::default().print_receipt(&receipt);
        let expected = "\
toothbrush                          1.98
  0.99 * 2

Total:                              1.98
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_weighed_quantity_three_decimals() {
        let mut receipt = Receipt::new();
        receipt.add_line(apples(), 2.5, Money::from_cents(199));

        let printed = ReceiptPrinter::default().print_receipt(&receipt);
        // 2.5 × 1.99 = 4.975, rounded to 4.98 on the line
        let expected = "\
apples                              4.98
  1.99 * 2.500

Total:                              4.98
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_discount_line_and_total() {
        let mut receipt = Receipt::new();
        receipt.add_line(toothbrush(), 3.0, Money::from_cents(99));
        receipt.add_discount(Discount::new(
            toothbrush(),
            "3 for 2".to_string(),
            Money::from_cents(-99),
        ));

        let printed = ReceiptPrinter::default().print_receipt(&receipt);
        let expected = "\
toothbrush                          2.97
  0.99 * 3
3 for 2 (toothbrush)               -0.99

Total:                              1.98
";
        assert_eq!(printed, expected);
    }

    #[test]
    fn test_narrow_printer_never_panics() {
        let mut receipt = Receipt::new();
        receipt.add_line(toothbrush(), 1.0, Money::from_cents(99));

        let printed = ReceiptPrinter::new(5).print_receipt(&receipt);
        assert!(printed.contains("toothbrush0.99"));
    }
}
