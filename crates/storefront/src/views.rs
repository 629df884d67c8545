//! Display data for the storefront panels.
//!
//! These are plain, pre-formatted values a renderer can print directly.
//! Prices are rounded to two decimal places here and nowhere earlier.

use khubsurat_core::{CartItem, Product, ProductId};
use serde::Serialize;

use crate::cart::CartStore;
use crate::state::StoreState;
use crate::wishlist::WishlistStore;

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub index: usize,
    pub product_id: ProductId,
    pub name: String,
    pub image: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart panel display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u64,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text for the cart icon badge; hidden when the cart is empty.
    #[must_use]
    pub fn badge(&self) -> Option<String> {
        (self.item_count > 0).then(|| self.item_count.to_string())
    }
}

impl CartLineView {
    fn new(index: usize, item: &CartItem) -> Self {
        Self {
            index,
            product_id: item.product_id(),
            name: item.product.name.clone(),
            image: item.product.image.clone(),
            size: item.selected_size.clone(),
            color: item.selected_color.clone(),
            quantity: item.quantity.get(),
            price: item.product.unit_price().display(),
            line_price: item.line_total().display(),
        }
    }
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        let summary = cart.summary();
        Self {
            lines: cart
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| CartLineView::new(index, item))
                .collect(),
            total: summary.total.display(),
            item_count: summary.item_count,
        }
    }
}

/// Product card display data, used by the grid, search results and wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: String,
    pub in_stock: bool,
    pub in_wishlist: bool,
    /// Quick-add opens the detail view instead of adding directly.
    pub needs_options: bool,
}

impl ProductCardView {
    /// Card for `product`, with wishlist state taken from `state`.
    #[must_use]
    pub fn new(product: &Product, state: &StoreState) -> Self {
        Self::with_wishlist_flag(product, state.is_in_wishlist(product.id))
    }

    fn with_wishlist_flag(product: &Product, in_wishlist: bool) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
            price: product.unit_price().display(),
            in_stock: product.is_in_stock(),
            in_wishlist,
            needs_options: product.requires_size(),
        }
    }
}

/// Cards for a list of products.
#[must_use]
pub fn product_cards(products: &[&Product], state: &StoreState) -> Vec<ProductCardView> {
    products
        .iter()
        .map(|product| ProductCardView::new(product, state))
        .collect()
}

/// Wishlist panel display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistView {
    pub items: Vec<ProductCardView>,
    pub count: usize,
}

impl WishlistView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&WishlistStore> for WishlistView {
    fn from(wishlist: &WishlistStore) -> Self {
        Self {
            items: wishlist
                .items()
                .iter()
                .map(|p| ProductCardView::with_wishlist_flag(p, true))
                .collect(),
            count: wishlist.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::Catalog;
    use crate::intent::Intent;

    fn state() -> StoreState {
        StoreState::with_catalog(Arc::new(Catalog::bundled().unwrap()))
    }

    #[test]
    fn test_empty_cart_view() {
        let state = state();
        let view = CartView::from(state.cart());
        assert!(view.is_empty());
        assert_eq!(view.total, "$0.00");
        assert_eq!(view.badge(), None);
    }

    #[test]
    fn test_cart_view_lines() {
        let mut state = state();
        state
            .dispatch(Intent::AddToCart {
                product: ProductId::new(2),
                quantity: Some(2),
                size: None,
                color: Some("Saffron".to_string()),
            })
            .unwrap();
        state
            .dispatch(Intent::QuickAdd {
                product: ProductId::new(2),
            })
            .unwrap();

        let view = CartView::from(state.cart());
        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "$46.50");
        assert_eq!(view.badge().as_deref(), Some("3"));

        let first = view.lines.first().unwrap();
        assert_eq!(
            first,
            &CartLineView {
                index: 0,
                product_id: ProductId::new(2),
                name: "Silk Dupatta".to_string(),
                image: "/assets/products/silk-dupatta.jpg".to_string(),
                size: None,
                color: Some("Saffron".to_string()),
                quantity: 2,
                price: "$15.50".to_string(),
                line_price: "$31.00".to_string(),
            }
        );
        assert_eq!(view.lines.get(1).unwrap().color.as_deref(), Some("Crimson"));
    }

    #[test]
    fn test_product_cards_reflect_wishlist() {
        let mut state = state();
        state
            .dispatch(Intent::ToggleWishlist {
                product: ProductId::new(4),
            })
            .unwrap();

        let products = state.collection(Some("Fashion"), Some(2));
        let cards = product_cards(&products, &state);
        let kurta = cards.iter().find(|c| c.id == ProductId::new(4)).unwrap();
        assert!(kurta.in_wishlist);
        assert!(kurta.needs_options);
        assert_eq!(kurta.price, "$49.99");

        let dupatta = cards.iter().find(|c| c.id == ProductId::new(2)).unwrap();
        assert!(!dupatta.in_wishlist);
        assert!(!dupatta.needs_options);
    }

    #[test]
    fn test_wishlist_view() {
        let mut state = state();
        for id in [1, 6] {
            state
                .dispatch(Intent::ToggleWishlist {
                    product: ProductId::new(id),
                })
                .unwrap();
        }

        let view = WishlistView::from(state.wishlist());
        assert_eq!(view.count, 2);
        assert!(view.items.iter().all(|c| c.in_wishlist));
        assert!(!view.items.get(1).unwrap().in_stock);
    }

    #[test]
    fn test_cart_view_serializes_for_renderers() {
        let mut state = state();
        state
            .dispatch(Intent::QuickAdd {
                product: ProductId::new(10),
            })
            .unwrap();

        let json = serde_json::to_value(CartView::from(state.cart())).unwrap();
        assert_eq!(json["total"], "$12.49");
        assert_eq!(json["item_count"], 1);
        assert_eq!(json["lines"][0]["product_id"], 10);
    }
}
