//! Option selection before a product goes into the cart.
//!
//! Mirrors the two entry points a shopper has: the product detail view,
//! where size, color and quantity are chosen explicitly, and the quick-add
//! button on a product card, which only works for products without sizes.

use khubsurat_core::{CartItem, Product, Quantity, ValidationError};

/// Outcome of a quick-add from a product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAdd {
    /// A single-unit line with the default color, ready for the cart.
    Ready(CartItem),
    /// The product needs a size; open the detail view instead.
    NeedsDetails,
}

/// Quick-add `product`: one unit in its first color, unless it is sized.
#[must_use]
pub fn quick_add(product: &Product) -> QuickAdd {
    if product.requires_size() {
        QuickAdd::NeedsDetails
    } else {
        QuickAdd::Ready(CartItem::new(product, Quantity::ONE))
    }
}

/// Choices made in the product detail view.
#[derive(Debug, Clone)]
pub struct ProductSelection<'a> {
    product: &'a Product,
    size: Option<String>,
    color: Option<String>,
    quantity: Quantity,
}

impl<'a> ProductSelection<'a> {
    /// Start with no size, no explicit color and a quantity of one.
    #[must_use]
    pub const fn new(product: &'a Product) -> Self {
        Self {
            product,
            size: None,
            color: None,
            quantity: Quantity::ONE,
        }
    }

    /// Choose a size.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownSize` if the product does not offer it.
    pub fn select_size(&mut self, size: &str) -> Result<(), ValidationError> {
        if !self.product.offers_size(size) {
            return Err(ValidationError::UnknownSize {
                product: self.product.name.clone(),
                size: size.to_owned(),
            });
        }
        self.size = Some(size.to_owned());
        Ok(())
    }

    /// Choose a color.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownColor` if the product does not offer it.
    pub fn select_color(&mut self, color: &str) -> Result<(), ValidationError> {
        if !self.product.offers_color(color) {
            return Err(ValidationError::UnknownColor {
                product: self.product.name.clone(),
                color: color.to_owned(),
            });
        }
        self.color = Some(color.to_owned());
        Ok(())
    }

    pub const fn increment(&mut self) {
        self.quantity = self.quantity.increment();
    }

    /// One fewer unit, stopping at one.
    pub const fn decrement(&mut self) {
        self.quantity = self.quantity.decrement();
    }

    pub const fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// The color that will be used: the explicit choice or the product's first color.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref().or_else(|| self.product.default_color())
    }

    /// Build the cart line.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::SizeRequired` if the product is sized and no
    /// size was chosen.
    pub fn into_cart_item(self) -> Result<CartItem, ValidationError> {
        if self.product.requires_size() && self.size.is_none() {
            return Err(ValidationError::SizeRequired {
                product: self.product.name.clone(),
            });
        }

        let mut item = CartItem::new(self.product, self.quantity);
        item.selected_size = self.size;
        if let Some(color) = self.color {
            item.selected_color = Some(color);
        }
        Ok(item)
    }
}
