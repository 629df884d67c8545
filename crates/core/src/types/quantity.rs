//! Line item quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Number of units on a cart line.
///
/// A quantity is always at least one. Every constructor floor-clamps instead
/// of failing, so a decrement past one or an explicit zero leaves the line at
/// one unit rather than removing it.
///
/// ```
/// use khubsurat_core::Quantity;
///
/// assert_eq!(Quantity::new(0).get(), 1);
/// assert_eq!(Quantity::clamped(-4).get(), 1);
/// assert_eq!(Quantity::clamped(3).get(), 3);
/// assert_eq!(Quantity::ONE.decrement().get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(1);

    /// Create a quantity, raising zero to one.
    #[must_use]
    pub const fn new(n: u32) -> Self {
        if n == 0 { Self::ONE } else { Self(n) }
    }

    /// Create a quantity from a signed request, clamping into `1..=u32::MAX`.
    #[must_use]
    pub fn clamped(n: i64) -> Self {
        u32::try_from(n.max(1)).map_or(Self(u32::MAX), Self)
    }

    /// The number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more unit.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, never below one.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Quantity {
    fn from(n: i64) -> Self {
        Self::clamped(n)
    }
}

impl From<Quantity> for u32 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_clamp_to_one() {
        assert_eq!(Quantity::clamped(0), Quantity::ONE);
        assert_eq!(Quantity::clamped(-1), Quantity::ONE);
        assert_eq!(Quantity::clamped(i64::MIN), Quantity::ONE);
    }

    #[test]
    fn test_large_values_saturate() {
        assert_eq!(Quantity::clamped(i64::MAX).get(), u32::MAX);
        assert_eq!(Quantity::new(u32::MAX).increment().get(), u32::MAX);
    }

    #[test]
    fn test_increment_decrement() {
        let q = Quantity::new(2);
        assert_eq!(q.increment().get(), 3);
        assert_eq!(q.decrement().get(), 1);
        assert_eq!(q.decrement().decrement().get(), 1);
    }

    #[test]
    fn test_deserialize_clamps() {
        let q: Quantity = serde_json::from_str("0").unwrap();
        assert_eq!(q, Quantity::ONE);

        let q: Quantity = serde_json::from_str("-3").unwrap();
        assert_eq!(q, Quantity::ONE);

        let q: Quantity = serde_json::from_str("5").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "5");
    }
}
