//! Cart line item.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Price};
use super::product::Product;
use super::quantity::Quantity;

/// Errors raised when a cart line is inconsistent with its product.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The product is sized but no size was chosen.
    #[error("please select a size for {product}")]
    SizeRequired {
        /// Name of the product.
        product: String,
    },
    /// The chosen size is not one of the product's sizes.
    #[error("size {size:?} is not available for {product}")]
    UnknownSize {
        /// Name of the product.
        product: String,
        /// The rejected size label.
        size: String,
    },
    /// The chosen color is not one of the product's colors.
    #[error("color {color:?} is not available for {product}")]
    UnknownColor {
        /// Name of the product.
        product: String,
        /// The rejected color label.
        color: String,
    },
    /// The line is priced in a different currency than the cart.
    #[error("{product} is priced in {item}, but the cart uses {cart}")]
    CurrencyMismatch {
        /// Name of the product.
        product: String,
        /// Currency of the line.
        item: CurrencyCode,
        /// Currency of the cart.
        cart: CurrencyCode,
    },
}

/// One cart line: a snapshot of a product plus the chosen options.
///
/// The product is copied at construction time. Later catalog changes never
/// reach lines that are already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: Quantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_color: Option<String>,
}

impl CartItem {
    /// Create a line for `product`, defaulting the color to the product's first color.
    #[must_use]
    pub fn new(product: &Product, quantity: Quantity) -> Self {
        Self {
            selected_color: product.default_color().map(str::to_owned),
            product: product.clone(),
            quantity,
            selected_size: None,
        }
    }

    /// Set the chosen size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.selected_size = Some(size.into());
        self
    }

    /// Set the chosen color, replacing the default.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.selected_color = Some(color.into());
        self
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price().times(self.quantity)
    }

    /// Check the chosen options against the product snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The product has sizes and none is selected
    /// - The selected size or color is not offered by the product
    pub fn validate(&self) -> Result<(), ValidationError> {
        let product = &self.product;

        match self.selected_size.as_deref() {
            None if product.requires_size() => {
                return Err(ValidationError::SizeRequired {
                    product: product.name.clone(),
                });
            }
            Some(size) if !product.offers_size(size) => {
                return Err(ValidationError::UnknownSize {
                    product: product.name.clone(),
                    size: size.to_owned(),
                });
            }
            _ => {}
        }

        if let Some(color) = self.selected_color.as_deref() {
            if !product.offers_color(color) {
                return Err(ValidationError::UnknownColor {
                    product: product.name.clone(),
                    color: color.to_owned(),
                });
            }
        }

        Ok(())
    }
}
