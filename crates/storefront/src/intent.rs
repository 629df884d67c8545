//! Intents dispatched by the view layer, and the notices they produce.

use std::fmt;

use khubsurat_core::{ProductId, Quantity};
use serde::{Deserialize, Serialize};

/// A single user action against the store.
///
/// Intents deserialize from a tagged map, so a session can be scripted:
///
/// ```yaml
/// - intent: add_to_cart
///   product: 4
///   size: M
///   quantity: 2
/// - intent: toggle_wishlist
///   product: 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Add a product from the detail view with explicit options.
    AddToCart {
        product: ProductId,
        #[serde(default)]
        quantity: Option<i64>,
        #[serde(default)]
        size: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    /// Add one unit from a product card.
    QuickAdd { product: ProductId },
    UpdateQuantity { index: usize, quantity: i64 },
    RemoveFromCart { index: usize },
    ToggleWishlist { product: ProductId },
    SetSearchQuery { query: String },
}

/// User-facing feedback for a completed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    AddedToCart { name: String },
    /// Quick-add was refused because the product needs a size.
    SelectOptions { name: String },
    QuantityUpdated { name: String, quantity: Quantity },
    RemovedFromCart { name: String },
    AddedToWishlist { name: String },
    RemovedFromWishlist { name: String },
    SearchUpdated { query: String, hits: usize },
}

impl Notice {
    /// Short headline for a toast.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AddedToCart { .. } => "Added to cart",
            Self::SelectOptions { .. } => "Please select a size",
            Self::QuantityUpdated { .. } => "Quantity updated",
            Self::RemovedFromCart { .. } => "Removed from cart",
            Self::AddedToWishlist { .. } => "Added to wishlist",
            Self::RemovedFromWishlist { .. } => "Removed from wishlist",
            Self::SearchUpdated { .. } => "Search",
        }
    }

    /// Longer body text for a toast.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::AddedToCart { name } => format!("{name} has been added to your cart."),
            Self::SelectOptions { name } => format!("Choose a size for {name} before adding it."),
            Self::QuantityUpdated { name, quantity } => {
                format!("{name} quantity is now {quantity}.")
            }
            Self::RemovedFromCart { name } => format!("{name} has been removed from your cart."),
            Self::AddedToWishlist { name } => format!("{name} has been added to your wishlist."),
            Self::RemovedFromWishlist { name } => {
                format!("{name} has been removed from your wishlist.")
            }
            Self::SearchUpdated { query, hits: 0 } => {
                format!("No products found matching \"{query}\"")
            }
            Self::SearchUpdated { query, hits } => format!("{hits} results for \"{query}\""),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}
