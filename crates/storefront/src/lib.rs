//! Khubsurat Storefront library.
//!
//! The client-side state behind the storefront: a static catalog, a cart, a
//! wishlist and catalog search. Renderers own a [`StoreState`], dispatch
//! [`Intent`]s into it and read derived values and [`views`] back out.
//!
//! Everything here is synchronous and in memory. Nothing is persisted.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod intent;
pub mod search;
pub mod selection;
pub mod state;
pub mod views;
pub mod wishlist;

pub use cart::{CartStore, CartSummary};
pub use catalog::{Catalog, CatalogError, filter_by_category, limit};
pub use config::{ConfigError, StorefrontConfig};
pub use error::StoreError;
pub use intent::{Intent, Notice};
pub use search::{SearchEngine, search};
pub use selection::{ProductSelection, QuickAdd, quick_add};
pub use state::StoreState;
pub use wishlist::{Membership, WishlistStore};
