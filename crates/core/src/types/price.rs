//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept at full precision for all arithmetic. Rounding to two
//! decimal places only happens in [`Price::display`], so cart totals never
//! accumulate rounding error from intermediate steps.

use core::fmt;
use core::iter::Sum;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::quantity::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The amount is above [`Price::MAX_AMOUNT`].
    #[error("price cannot exceed {max}: {0}", max = Price::MAX_AMOUNT)]
    TooLarge(Decimal),
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Largest unit price a catalog may carry: 1,000,000,000,000.
    ///
    /// At this price a line of `u32::MAX` units is still exact.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a unit price, rejecting amounts outside `0..=MAX_AMOUNT`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero, or
    /// [`PriceError::TooLarge`] if it is above [`Price::MAX_AMOUNT`].
    pub fn try_new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self::new(amount, currency_code))
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// The price of `quantity` units at this unit price.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity.get())),
            self.currency_code,
        )
    }

    /// Add two amounts, keeping this price's currency.
    ///
    /// Saturates at `Decimal::MAX` instead of overflowing.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::new(self.amount.saturating_add(other.amount), self.currency_code)
    }

    /// The amount rounded to two decimal places, midpoints away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        rounded
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}", self.currency_code.symbol(), self.rounded())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Sums amounts, taking the currency of the first price.
///
/// Callers are responsible for only summing prices of a single currency; the
/// cart enforces this on insertion.
impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut iter = iter.peekable();
        let currency_code = iter
            .peek()
            .map_or_else(CurrencyCode::default, |p| p.currency_code);
        iter.fold(Self::zero(currency_code), Self::saturating_add)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    INR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::INR => "INR",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn usd(s: &str) -> Price {
        Price::new(Decimal::from_str(s).unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(usd("46.5").display(), "$46.50");
        assert_eq!(usd("24").display(), "$24.00");
        assert_eq!(usd("0").display(), "$0.00");
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        assert_eq!(usd("0.125").display(), "$0.13");
        assert_eq!(usd("0.135").display(), "$0.14");
        assert_eq!(usd("19.994").display(), "$19.99");
    }

    #[test]
    fn test_times_keeps_full_precision() {
        let unit = usd("0.333");
        let total = unit.times(Quantity::new(3));
        assert_eq!(total.amount, Decimal::from_str("0.999").unwrap());
        assert_eq!(total.display(), "$1.00");
    }

    #[test]
    fn test_sum_of_line_totals() {
        let lines = [
            usd("15.5").times(Quantity::new(2)),
            usd("15.5").times(Quantity::new(1)),
        ];
        let total: Price = lines.into_iter().sum();
        assert_eq!(total.amount, Decimal::from_str("46.5").unwrap());
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let total: Price = core::iter::empty::<Price>().sum();
        assert_eq!(total, Price::zero(CurrencyCode::USD));
    }

    #[test]
    fn test_try_new_rejects_negative() {
        let result = Price::try_new(Decimal::from_str("-0.01").unwrap(), CurrencyCode::USD);
        assert!(matches!(result, Err(PriceError::Negative(_))));
        assert!(Price::try_new(Decimal::ZERO, CurrencyCode::USD).is_ok());
    }

    #[test]
    fn test_try_new_rejects_above_max() {
        assert_eq!(Price::MAX_AMOUNT, Decimal::from(1_000_000_000_000_u64));
        assert!(Price::try_new(Price::MAX_AMOUNT, CurrencyCode::USD).is_ok());

        let above = Price::MAX_AMOUNT + Decimal::from_str("0.01").unwrap();
        assert_eq!(
            Price::try_new(above, CurrencyCode::USD),
            Err(PriceError::TooLarge(above))
        );
    }

    #[test]
    fn test_max_price_times_max_quantity_is_exact() {
        let line = Price::new(Price::MAX_AMOUNT, CurrencyCode::USD).times(Quantity::new(u32::MAX));
        assert_eq!(
            line.amount,
            Decimal::from_str("4294967295000000000000").unwrap()
        );
    }

    #[test]
    fn test_times_and_sum_saturate() {
        let huge = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(huge.times(Quantity::new(u32::MAX)).amount, Decimal::MAX);

        let total: Price = [huge, huge, usd("1")].into_iter().sum();
        assert_eq!(total.amount, Decimal::MAX);
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::INR.code(), "INR");
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
    }
}
