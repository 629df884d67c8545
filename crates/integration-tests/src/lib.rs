//! Integration tests for the Khubsurat storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p khubsurat-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart lines, quantities and totals through `StoreState`
//! - `wishlist` - Toggle semantics and membership
//! - `search_and_browse` - Search properties and catalog projections
//!
//! This library only holds shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use khubsurat_core::{CartItem, Product, ProductId, Quantity};
use khubsurat_storefront::{Catalog, StoreState};

/// The two-product catalog used by the reference scenarios.
pub const SCENARIO_CATALOG: &str = r#"[
    {"id": 1, "name": "Blue Vase", "category": "Decor", "price": 24.0, "image": "/assets/blue-vase.jpg"},
    {"id": 2, "name": "Red Scarf", "category": "Fashion", "price": 15.5, "image": "/assets/red-scarf.jpg"}
]"#;

/// Parse [`SCENARIO_CATALOG`].
///
/// # Panics
///
/// Panics if the fixture is invalid, which would be a bug in the fixture.
#[must_use]
#[allow(clippy::expect_used)]
pub fn scenario_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_json(SCENARIO_CATALOG).expect("scenario catalog is valid"))
}

/// The catalog shipped with the storefront.
///
/// # Panics
///
/// Panics if the bundled catalog is invalid.
#[must_use]
#[allow(clippy::expect_used)]
pub fn bundled_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::bundled().expect("bundled catalog is valid"))
}

/// A fresh session over `catalog` with default configuration.
#[must_use]
pub fn session(catalog: Arc<Catalog>) -> StoreState {
    StoreState::with_catalog(catalog)
}

/// A cart line for `id` with `quantity`, taken from `catalog`.
///
/// # Panics
///
/// Panics if `id` is not in the catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn line(catalog: &Catalog, id: u32, quantity: u32) -> CartItem {
    let product: &Product = catalog
        .get(ProductId::new(id))
        .expect("fixture product exists");
    CartItem::new(product, Quantity::new(quantity))
}

/// Deterministic pseudo-random sequence for generated test cases.
#[derive(Debug, Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Next value in `0..bound`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) % bound.max(1)
    }
}
