//! Currency amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// An amount in US cents.
///
/// Ordering is numeric, which is what approval limits compare against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Money {
    cents: i64,
}

impl Money {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn from_dollars(dollars: i64) -> Self {
        Self::from_cents(dollars.saturating_mul(100))
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Price of `quantity` units at this unit price.
    pub fn multiply(&self, quantity: u32) -> Money {
        Self::from_cents(self.cents.saturating_mul(i64::from(quantity)))
    }
}

impl fmt::Display for Money {
    /// Renders as `$1,234.56`, with a leading `-` for negatives.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.cents.unsigned_abs();
        let digits = (abs / 100).to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.cents < 0 { "-" } else { "" };
        write!(f, "{sign}${grouped}.{:02}", abs % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Self::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
        assert_eq!(Money::from_dollars(500).to_string(), "$500.00");
        assert_eq!(Money::from_dollars(25_000).to_string(), "$25,000.00");
        assert_eq!(Money::from_dollars(1_500_000).to_string(), "$1,500,000.00");
    }

    #[test]
    fn test_line_arithmetic() {
        let unit = Money::from_cents(1_250);
        assert_eq!(unit.multiply(2).cents(), 2_500);
        assert_eq!((unit + Money::from_cents(50)).cents(), 1_300);

        let total: Money = [100, 250, 650].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_dollars(10));
    }

    #[test]
    fn test_limits_compare_numerically() {
        assert!(Money::from_dollars(500) <= Money::from_dollars(500));
        assert!(Money::from_cents(50_001) > Money::from_dollars(500));
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_serializes_cents() {
        let json = serde_json::to_value(Money::from_dollars(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "cents": 300 }));
    }
}
