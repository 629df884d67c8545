//! Static product catalog and its projections.
//!
//! The catalog is loaded once at startup and never mutated. Everything that
//! reads it (product grid, search, intents) shares one `Arc<Catalog>`.

use std::collections::HashSet;

use khubsurat_core::{CurrencyCode, Price, Product, ProductId};
use thiserror::Error;
use tracing::{debug, instrument};

/// Catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../content/catalog.json");

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("Product {0} has an empty name")]
    EmptyName(ProductId),
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("Product {0} is priced above {max}", max = Price::MAX_AMOUNT)]
    PriceTooLarge(ProductId),
    #[error("Product {id} is priced in {found}, but the catalog uses {expected}")]
    MixedCurrency {
        id: ProductId,
        found: CurrencyCode,
        expected: CurrencyCode,
    },
}

/// An immutable, validated list of products in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
    currency_code: CurrencyCode,
}

impl Catalog {
    /// Build a catalog from products, validating them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two products share an id
    /// - A product name is blank
    /// - A price is negative or above `Price::MAX_AMOUNT`
    /// - Products are priced in more than one currency
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let currency_code = products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.currency_code);

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id));
            }
            if product.price.is_sign_negative() && !product.price.is_zero() {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if product.price > Price::MAX_AMOUNT {
                return Err(CatalogError::PriceTooLarge(product.id));
            }
            if product.currency_code != currency_code {
                return Err(CatalogError::MixedCurrency {
                    id: product.id,
                    found: product.currency_code,
                    expected: currency_code,
                });
            }
        }

        Ok(Self {
            products,
            currency_code,
        })
    }

    /// Parse and validate a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        let catalog = Self::new(products)?;
        debug!(products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// The catalog shipped with the storefront.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is invalid.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Currency shared by every product.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Products for a grid: optionally one category, optionally the first `n`.
    #[must_use]
    pub fn collection(&self, category: Option<&str>, n: Option<usize>) -> Vec<&Product> {
        limit(filter_by_category(&self.products, category), n)
    }
}

/// Keep products whose category equals `category` exactly (case-sensitive).
///
/// With no category, every product is kept.
#[must_use]
pub fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    match category {
        Some(category) => products.iter().filter(|p| p.category == category).collect(),
        None => products.iter().collect(),
    }
}

/// Keep the first `n` items, preserving order. With no limit, keep everything.
#[must_use]
pub fn limit<T>(mut items: Vec<T>, n: Option<usize>) -> Vec<T> {
    if let Some(n) = n {
        items.truncate(n);
    }
    items
}
