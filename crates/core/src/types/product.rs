//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Price};

/// A purchasable product.
///
/// Products are owned by the catalog and never mutated after loading. Field
/// names serialize in camelCase to match the catalog file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within a catalog.
    pub id: ProductId,
    pub name: String,
    /// Unit price amount; see [`Product::unit_price`].
    pub price: Decimal,
    #[serde(default)]
    pub currency_code: CurrencyCode,
    /// Image URI reference. Relative paths are allowed.
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Size labels. When non-empty, a size must be chosen before adding to cart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    /// Display-only stock flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl Product {
    /// The price of a single unit.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::new(self.price, self.currency_code)
    }

    /// The description, or an empty string when absent.
    #[must_use]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Size labels in catalog order (empty when the product is not sized).
    #[must_use]
    pub fn sizes(&self) -> &[String] {
        self.sizes.as_deref().unwrap_or_default()
    }

    /// Color labels in catalog order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        self.colors.as_deref().unwrap_or_default()
    }

    /// Whether a size must be selected before the product can be carted.
    #[must_use]
    pub fn requires_size(&self) -> bool {
        !self.sizes().is_empty()
    }

    /// The color used when none is chosen explicitly.
    #[must_use]
    pub fn default_color(&self) -> Option<&str> {
        self.colors().first().map(String::as_str)
    }

    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes().iter().any(|s| s == size)
    }

    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors().iter().any(|c| c == color)
    }

    /// Whether the stock flag is explicitly set.
    #[must_use]
    pub fn is_in_stock(&self) -> bool {
        self.in_stock.unwrap_or(false)
    }
}
