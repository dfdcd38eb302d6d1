//! Whole-unit money amounts.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A money amount in whole rupees.
///
/// The catalog prices everything in PKR, which has no fractional subunit in
/// this system: amounts are plain integers. `Display` renders the amount with
/// thousands separators (`14,999`); currency labelling is a presentation
/// concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole number of rupees.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Returns the amount as a whole number of rupees.
    #[must_use]
    pub const fn as_rupees(&self) -> i64 {
        self.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}", group_thousands(self.0.unsigned_abs()))
    }
}

/// Format an unsigned amount with `,` separators every three digits.
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let price = Money::new(2200);
        assert_eq!(price * 2, Money::new(4400));
        assert_eq!(price + Money::new(300), Money::new(2500));

        let total: Money = [Money::new(1), Money::new(2), Money::new(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(6));
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(0).to_string(), "0");
        assert_eq!(Money::new(999).to_string(), "999");
        assert_eq!(Money::new(1000).to_string(), "1,000");
        assert_eq!(Money::new(14999).to_string(), "14,999");
        assert_eq!(Money::new(1_234_567).to_string(), "1,234,567");
        assert_eq!(Money::new(-2500).to_string(), "-2,500");
    }

    #[test]
    fn test_serde_transparent() {
        let price = Money::new(9800);
        assert_eq!(serde_json::to_string(&price).unwrap(), "9800");
        let parsed: Money = serde_json::from_str("9800").unwrap();
        assert_eq!(parsed, price);
    }
}
