//! Numeric policy: line subtotals, tax, and totals.
//!
//! All rounding in the system happens in exactly one place: [`tax_on`]
//! rounds `subtotal * 0.10` to whole rupees with
//! [`RoundingStrategy::MidpointAwayFromZero`]. The grand total is the plain
//! sum of subtotal and tax and is never rounded again, so repeated
//! recomputation can never drift.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use mini_pos_core::Money;

use crate::models::Totals;

/// Sales tax rate: 10%.
fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Subtotal of a single line: `unit_price * quantity`.
#[must_use]
pub fn line_subtotal(unit_price: Money, quantity: u32) -> Money {
    unit_price * quantity
}

/// Tax on a subtotal, rounded half away from zero to whole rupees.
#[must_use]
pub fn tax_on(subtotal: Money) -> Money {
    let tax = (Decimal::from(subtotal.as_rupees()) * tax_rate())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // A tenth of an i64, rounded, always fits back in an i64.
    Money::new(tax.to_i64().unwrap_or_default())
}

/// Totals over `(unit_price, quantity)` pairs.
pub fn totals<I>(lines: I) -> Totals
where
    I: IntoIterator<Item = (Money, u32)>,
{
    let subtotal: Money = lines
        .into_iter()
        .map(|(price, quantity)| line_subtotal(price, quantity))
        .sum();
    let tax = tax_on(subtotal);

    Totals {
        subtotal,
        tax,
        grand_total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_table() {
        // Fixes the rounding rule: half away from zero.
        let cases = [
            (0, 0),
            (1, 0),    // 0.1 -> 0
            (4, 0),    // 0.4 -> 0
            (5, 1),    // 0.5 -> 1 (midpoint)
            (15, 2),   // 1.5 -> 2 (midpoint)
            (25, 3),   // 2.5 -> 3 (midpoint, not banker's 2)
            (1999, 200), // 199.9 -> 200
            (2500, 250),
            (4400, 440),
        ];
        for (subtotal, expected) in cases {
            assert_eq!(
                tax_on(Money::new(subtotal)),
                Money::new(expected),
                "tax on {subtotal}"
            );
        }
    }

    #[test]
    fn test_totals_sums_lines_then_taxes_once() {
        let totals = totals([(Money::new(2200), 2), (Money::new(1200), 1)]);
        assert_eq!(totals.subtotal, Money::new(5600));
        assert_eq!(totals.tax, Money::new(560));
        assert_eq!(totals.grand_total, Money::new(6160));
    }

    #[test]
    fn test_totals_of_nothing_are_zero() {
        let totals = totals(std::iter::empty::<(Money, u32)>());
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.tax, Money::ZERO);
        assert_eq!(totals.grand_total, Money::ZERO);
    }

    #[test]
    fn test_grand_total_is_not_rounded_independently() {
        // subtotal 5 -> tax 1 -> grand 6; a double-rounding bug would give 5.
        let totals = totals([(Money::new(5), 1)]);
        assert_eq!(totals.grand_total, Money::new(6));
    }
}
