//! Storefront state owned by one shopping session.
//!
//! `StoreState` is an explicit value handed to whatever renders the
//! storefront. There is no global store: two sessions are two values, and
//! tests construct their own.

use std::sync::Arc;

use khubsurat_core::{CartItem, Price, Product, ProductId, Quantity};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::cart::{CartStore, CartSummary};
use crate::catalog::{Catalog, filter_by_category};
use crate::config::StorefrontConfig;
use crate::error::{Result, StoreError};
use crate::intent::{Intent, Notice};
use crate::search::SearchEngine;
use crate::selection::{ProductSelection, QuickAdd, quick_add};
use crate::wishlist::{Membership, WishlistStore};

/// Cart, wishlist and search state for one session.
#[derive(Debug)]
pub struct StoreState {
    session_id: Uuid,
    catalog: Arc<Catalog>,
    cart: CartStore,
    wishlist: WishlistStore,
    search: SearchEngine,
    query: String,
    featured_limit: Option<usize>,
}

impl StoreState {
    /// Start an empty session over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: &StorefrontConfig) -> Self {
        let session_id = Uuid::new_v4();
        info!(%session_id, products = catalog.len(), "Session started");

        Self {
            session_id,
            cart: CartStore::new(catalog.currency_code()),
            wishlist: WishlistStore::new(),
            search: SearchEngine::new(Arc::clone(&catalog), config.search_cache_capacity),
            catalog,
            query: String::new(),
            featured_limit: config.featured_limit,
        }
    }

    /// Start an empty session with default configuration.
    #[must_use]
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, &StorefrontConfig::default())
    }

    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up a catalog product.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownProduct` if the id is not in the catalog.
    pub fn product(&self, id: ProductId) -> Result<&Product> {
        self.catalog.get(id).ok_or(StoreError::UnknownProduct(id))
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Append a line to the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` if the line's options do not match
    /// its product.
    pub fn add_to_cart(&mut self, item: CartItem) -> Result<usize> {
        self.cart.add(item)
    }

    /// Set a line's quantity, clamping below one to one.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no line at `index`.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> Result<Quantity> {
        self.cart.update_quantity(index, quantity)
    }

    /// Remove a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no line at `index`.
    pub fn remove_from_cart(&mut self, index: usize) -> Result<CartItem> {
        self.cart.remove(index)
    }

    #[must_use]
    pub fn cart_items(&self) -> &[CartItem] {
        self.cart.items()
    }

    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    #[must_use]
    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary()
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    pub fn toggle_wishlist(&mut self, product: &Product) -> Membership {
        self.wishlist.toggle(product)
    }

    #[must_use]
    pub fn wishlist_items(&self) -> &[Product] {
        self.wishlist.items()
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.contains(id)
    }

    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    #[must_use]
    pub const fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    // =========================================================================
    // Search & Browse
    // =========================================================================

    /// Products matching `query`, in catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        self.search.search(query)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Results for the current search query.
    #[must_use]
    pub fn search_results(&self) -> Vec<&Product> {
        self.search.search(&self.query)
    }

    #[must_use]
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<&Product> {
        filter_by_category(self.catalog.products(), category)
    }

    /// Products for a grid: optionally one category, optionally the first `n`.
    #[must_use]
    pub fn collection(&self, category: Option<&str>, limit: Option<usize>) -> Vec<&Product> {
        self.catalog.collection(category, limit)
    }

    /// The home page grid, limited by configuration.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.catalog.collection(None, self.featured_limit)
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Apply one intent as a single transition.
    ///
    /// On error the state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The intent names a product that is not in the catalog
    /// - A size or color is missing or not offered
    /// - A cart position does not exist
    #[instrument(skip(self), fields(session_id = %self.session_id))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<Notice> {
        let result = self.apply(intent);
        if let Err(e) = &result {
            warn!(error = %e, "Intent rejected");
        }
        result
    }

    fn apply(&mut self, intent: Intent) -> Result<Notice> {
        // Separate handle so products can be borrowed while the stores mutate.
        let catalog = Arc::clone(&self.catalog);

        match intent {
            Intent::AddToCart {
                product,
                quantity,
                size,
                color,
            } => {
                let product = catalog
                    .get(product)
                    .ok_or(StoreError::UnknownProduct(product))?;

                let mut selection = ProductSelection::new(product);
                if let Some(size) = size.as_deref() {
                    selection.select_size(size)?;
                }
                if let Some(color) = color.as_deref() {
                    selection.select_color(color)?;
                }
                if let Some(quantity) = quantity {
                    selection.set_quantity(Quantity::clamped(quantity));
                }

                self.cart.add(selection.into_cart_item()?)?;
                Ok(Notice::AddedToCart {
                    name: product.name.clone(),
                })
            }
            Intent::QuickAdd { product } => {
                let product = catalog
                    .get(product)
                    .ok_or(StoreError::UnknownProduct(product))?;

                match quick_add(product) {
                    QuickAdd::Ready(item) => {
                        self.cart.add(item)?;
                        Ok(Notice::AddedToCart {
                            name: product.name.clone(),
                        })
                    }
                    QuickAdd::NeedsDetails => Ok(Notice::SelectOptions {
                        name: product.name.clone(),
                    }),
                }
            }
            Intent::UpdateQuantity { index, quantity } => {
                let quantity = self.cart.update_quantity(index, quantity)?;
                let name = self
                    .cart
                    .get(index)
                    .map(|item| item.product.name.clone())
                    .unwrap_or_default();
                Ok(Notice::QuantityUpdated { name, quantity })
            }
            Intent::RemoveFromCart { index } => {
                let removed = self.cart.remove(index)?;
                Ok(Notice::RemovedFromCart {
                    name: removed.product.name,
                })
            }
            Intent::ToggleWishlist { product } => {
                let product = catalog
                    .get(product)
                    .ok_or(StoreError::UnknownProduct(product))?;

                let name = product.name.clone();
                Ok(match self.wishlist.toggle(product) {
                    Membership::Added => Notice::AddedToWishlist { name },
                    Membership::Removed => Notice::RemovedFromWishlist { name },
                })
            }
            Intent::SetSearchQuery { query } => {
                let hits = self.search.search(&query).len();
                self.query = query;
                Ok(Notice::SearchUpdated {
                    query: self.query.clone(),
                    hits,
                })
            }
        }
    }
}
