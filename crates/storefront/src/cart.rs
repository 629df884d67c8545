//! Cart store.
//!
//! Lines are kept in insertion order and addressed by position. Adding the
//! same product with the same options twice produces two lines; nothing is
//! merged. Quantities are floor-clamped at one, so an update never removes a
//! line. Addressing a position outside the cart is reported as
//! [`StoreError::IndexOutOfRange`] for both updates and removals.

use std::cell::Cell;

use khubsurat_core::{CartItem, CurrencyCode, Price, Quantity, ValidationError};
use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};

/// Totals derived from the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of line quantities.
    pub item_count: u64,
    /// Sum of line totals, unrounded.
    pub total: Price,
}

/// Ordered list of cart lines with derived totals.
///
/// The summary is memoized against a version counter that every mutation
/// bumps, so a cached summary is only ever returned for the exact state it
/// was computed from.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    currency_code: CurrencyCode,
    version: u64,
    cached_summary: Cell<Option<(u64, CartSummary)>>,
}

impl CartStore {
    /// Create an empty cart priced in `currency_code`.
    #[must_use]
    pub const fn new(currency_code: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            currency_code,
            version: 0,
            cached_summary: Cell::new(None),
        }
    }

    /// Append a line to the end of the cart and return its position.
    ///
    /// A line without a color takes the product's first color, if it has any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the line's size or color does not
    /// match its product, or if it is priced in another currency. The cart is
    /// left unchanged.
    #[instrument(skip(self, item), fields(product_id = %item.product_id(), quantity = %item.quantity))]
    pub fn add(&mut self, mut item: CartItem) -> Result<usize> {
        if item.selected_color.is_none() {
            item.selected_color = item.product.default_color().map(str::to_owned);
        }
        item.validate()?;

        if item.product.currency_code != self.currency_code {
            return Err(ValidationError::CurrencyMismatch {
                product: item.product.name.clone(),
                item: item.product.currency_code,
                cart: self.currency_code,
            }
            .into());
        }

        self.items.push(item);
        self.touch();

        let index = self.items.len() - 1;
        debug!(index, lines = self.items.len(), "Line added");
        Ok(index)
    }

    /// Set the quantity of the line at `index`, clamping below one to one.
    ///
    /// Returns the quantity actually stored.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no line at `index`.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<Quantity> {
        let len = self.items.len();
        let Some(item) = self.items.get_mut(index) else {
            warn!(len, "Quantity update for missing line");
            return Err(StoreError::IndexOutOfRange { index, len });
        };

        let quantity = Quantity::clamped(quantity);
        item.quantity = quantity;
        self.touch();

        debug!(%quantity, "Quantity updated");
        Ok(quantity)
    }

    /// Remove the line at `index`. Later lines shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no line at `index`.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> Result<CartItem> {
        let len = self.items.len();
        if index >= len {
            warn!(len, "Removal of missing line");
            return Err(StoreError::IndexOutOfRange { index, len });
        }

        let removed = self.items.remove(index);
        self.touch();

        debug!(product_id = %removed.product_id(), lines = self.items.len(), "Line removed");
        Ok(removed)
    }

    /// Lines in cart order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CartItem> {
        self.items.get(index)
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Mutation counter. Changes on every successful add, update or remove.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.summary().item_count
    }

    /// Sum of `price * quantity` across all lines, unrounded.
    #[must_use]
    pub fn total(&self) -> Price {
        self.summary().total
    }

    /// Derived totals, served from the memo when the cart has not changed.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        if let Some((version, summary)) = self.cached_summary.get() {
            if version == self.version {
                return summary;
            }
        }

        let summary = self.compute_summary();
        self.cached_summary.set(Some((self.version, summary)));
        summary
    }

    /// Derived totals computed from scratch, bypassing the memo.
    #[must_use]
    pub fn compute_summary(&self) -> CartSummary {
        let item_count = self
            .items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum();
        let total = self
            .items
            .iter()
            .map(CartItem::line_total)
            .fold(Price::zero(self.currency_code), Price::saturating_add);

        CartSummary { item_count, total }
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use core::str::FromStr;

    use khubsurat_core::{Product, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: u32, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::from_str(price).unwrap(),
            currency_code: CurrencyCode::USD,
            image: format!("/assets/{id}.jpg"),
            category: "Decor".to_string(),
            description: None,
            sizes: None,
            colors: None,
            in_stock: None,
        }
    }

    fn line(id: u32, price: &str, quantity: u32) -> CartItem {
        CartItem::new(&product(id, price), Quantity::new(quantity))
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartStore::default();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total().display(), "$0.00");
    }

    #[test]
    fn test_duplicate_adds_are_separate_lines() {
        let mut cart = CartStore::default();
        assert_eq!(cart.add(line(2, "15.5", 2)).unwrap(), 0);
        assert_eq!(cart.add(line(2, "15.5", 1)).unwrap(), 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total().amount, Decimal::from_str("46.5").unwrap());
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = CartStore::default();
        cart.add(line(1, "10", 3)).unwrap();

        assert_eq!(cart.update_quantity(0, 0).unwrap(), Quantity::ONE);
        assert_eq!(cart.get(0).unwrap().quantity, Quantity::ONE);

        assert_eq!(cart.update_quantity(0, -5).unwrap(), Quantity::ONE);
        assert_eq!(cart.len(), 1);

        assert_eq!(cart.update_quantity(0, 4).unwrap().get(), 4);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_update_out_of_range() {
        let mut cart = CartStore::default();
        cart.add(line(1, "10", 1)).unwrap();
        let version = cart.version();

        assert_eq!(
            cart.update_quantity(1, 2),
            Err(StoreError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(cart.version(), version);
    }

    #[test]
    fn test_remove_shifts_later_lines() {
        let mut cart = CartStore::default();
        cart.add(line(1, "10", 1)).unwrap();
        cart.add(line(2, "20", 1)).unwrap();

        let removed = cart.remove(0).unwrap();
        assert_eq!(removed.product_id(), ProductId::new(1));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(0).unwrap().product_id(), ProductId::new(2));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = CartStore::default();
        assert_eq!(
            cart.remove(0).unwrap_err(),
            StoreError::IndexOutOfRange { index: 0, len: 0 }
        );
    }

    #[test]
    fn test_invalid_line_leaves_cart_unchanged() {
        let mut sized = product(4, "49.99");
        sized.sizes = Some(vec!["S".to_string(), "M".to_string()]);

        let mut cart = CartStore::default();
        let err = cart.add(CartItem::new(&sized, Quantity::ONE)).unwrap_err();
        assert!(err.is_validation());
        assert!(cart.is_empty());
        assert_eq!(cart.version(), 0);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut euro = product(1, "10");
        euro.currency_code = CurrencyCode::EUR;

        let mut cart = CartStore::new(CurrencyCode::USD);
        assert!(matches!(
            cart.add(CartItem::new(&euro, Quantity::ONE)),
            Err(StoreError::Validation(ValidationError::CurrencyMismatch { .. }))
        ));
    }

    #[test]
    fn test_memoized_summary_matches_recomputation() {
        let mut cart = CartStore::default();
        let check = |cart: &CartStore| {
            // Read twice so the second read is served from the memo.
            assert_eq!(cart.summary(), cart.compute_summary());
            assert_eq!(cart.summary(), cart.compute_summary());
        };

        check(&cart);
        cart.add(line(1, "0.1", 3)).unwrap();
        check(&cart);
        cart.add(line(2, "0.2", 7)).unwrap();
        check(&cart);
        cart.update_quantity(0, 0).unwrap();
        check(&cart);
        cart.update_quantity(1, 11).unwrap();
        check(&cart);
        cart.remove(0).unwrap();
        check(&cart);
        let _ = cart.remove(5);
        check(&cart);

        assert_eq!(cart.item_count(), 11);
        assert_eq!(cart.total().display(), "$2.20");
    }

    #[test]
    fn test_missing_color_defaults_to_first_color() {
        let mut scarf = product(2, "15.5");
        scarf.colors = Some(vec!["Crimson".to_string(), "Saffron".to_string()]);

        let mut cart = CartStore::default();
        let bare = CartItem {
            product: scarf.clone(),
            quantity: Quantity::ONE,
            selected_size: None,
            selected_color: None,
        };
        cart.add(bare).unwrap();
        cart.add(CartItem::new(&scarf, Quantity::ONE).with_color("Saffron"))
            .unwrap();
        cart.add(line(3, "1", 1)).unwrap();

        let colors: Vec<Option<&str>> = cart
            .items()
            .iter()
            .map(|item| item.selected_color.as_deref())
            .collect();
        assert_eq!(colors, vec![Some("Crimson"), Some("Saffron"), None]);
    }

    #[test]
    fn test_max_price_at_max_quantity_totals_exactly() {
        let mut cart = CartStore::default();
        let item = CartItem::new(&product(1, "1000000000000"), Quantity::ONE);
        cart.add(item).unwrap();
        cart.update_quantity(0, i64::MAX).unwrap();

        assert_eq!(cart.item_count(), u64::from(u32::MAX));
        assert_eq!(
            cart.total().amount,
            Decimal::from_str("4294967295000000000000").unwrap()
        );
    }

    #[test]
    fn test_oversized_lines_saturate_instead_of_panicking() {
        let mut cart = CartStore::default();
        let mut yacht = product(1, "1");
        yacht.price = Decimal::MAX;
        cart.add(CartItem::new(&yacht, Quantity::new(u32::MAX))).unwrap();
        cart.add(CartItem::new(&yacht, Quantity::ONE)).unwrap();

        assert_eq!(cart.total().amount, Decimal::MAX);
        assert_eq!(cart.summary(), cart.compute_summary());
    }

    #[test]
    fn test_total_does_not_round_intermediate_lines() {
        let mut cart = CartStore::default();
        cart.add(line(1, "0.005", 1)).unwrap();
        cart.add(line(2, "0.005", 1)).unwrap();
        // Rounding each line first would give $0.02.
        assert_eq!(cart.total().amount, Decimal::from_str("0.010").unwrap());
        assert_eq!(cart.total().display(), "$0.01");
    }
}
