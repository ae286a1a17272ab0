//! Rupee amount value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Non-negative amount in whole rupees.
///
/// Displays with a currency symbol and thousands separators, e.g. `₹60,000`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupees(u64);

impl Rupees {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Creates a new amount.
    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount as u64.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the amount as f64 for score arithmetic.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Subtraction that bottoms out at zero instead of underflowing.
    pub fn saturating_sub(&self, other: Rupees) -> Rupees {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        Rupees(self.0 + rhs.0)
    }
}

impl Sub for Rupees {
    type Output = Rupees;

    fn sub(self, rhs: Rupees) -> Rupees {
        Rupees(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for Rupees {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_displays_with_thousands_separators() {
        assert_eq!(format!("{}", Rupees::new(0)), "₹0");
        assert_eq!(format!("{}", Rupees::new(999)), "₹999");
        assert_eq!(format!("{}", Rupees::new(45_000)), "₹45,000");
        assert_eq!(format!("{}", Rupees::new(200_000)), "₹200,000");
        assert_eq!(format!("{}", Rupees::new(1_234_567)), "₹1,234,567");
    }

    #[test]
    fn rupees_saturating_sub_bottoms_at_zero() {
        let a = Rupees::new(100);
        let b = Rupees::new(150);
        assert_eq!(a.saturating_sub(b), Rupees::ZERO);
        assert_eq!(b.saturating_sub(a), Rupees::new(50));
    }

    #[test]
    fn rupees_add_works() {
        assert_eq!(Rupees::new(40_000) + Rupees::new(5_000), Rupees::new(45_000));
    }

    #[test]
    fn rupees_serializes_transparently() {
        let json = serde_json::to_string(&Rupees::new(60_000)).unwrap();
        assert_eq!(json, "60000");
    }

    #[test]
    fn rupees_ordering_works() {
        assert!(Rupees::new(45_000) < Rupees::new(60_000));
    }
}
