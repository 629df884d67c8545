//! Wishlist store.
//!
//! A set of product snapshots keyed by id. The only mutation is
//! [`WishlistStore::toggle`], so a product can never appear twice.

use khubsurat_core::{Product, ProductId};
use tracing::{debug, instrument};

/// Membership of a product after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Added,
    Removed,
}

impl Membership {
    /// Whether the product is in the wishlist after the toggle.
    #[must_use]
    pub const fn is_member(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Liked products in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct WishlistStore {
    items: Vec<Product>,
}

impl WishlistStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Remove the product if present, otherwise append it.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn toggle(&mut self, product: &Product) -> Membership {
        let membership = if let Some(pos) = self.position(product.id) {
            self.items.remove(pos);
            Membership::Removed
        } else {
            self.items.push(product.clone());
            Membership::Added
        };

        debug!(?membership, count = self.items.len(), "Wishlist toggled");
        membership
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|p| p.id == id)
    }
}
