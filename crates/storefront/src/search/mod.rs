//! Catalog search.
//!
//! Matching is a case-insensitive substring test against a product's name,
//! category and description. A product matches if any of the three contains
//! the query. Results keep catalog order; there is no scoring.
//!
//! A blank query (empty or whitespace only) returns nothing, so the search
//! panel stays empty until the user types. Non-blank queries are matched as
//! typed, surrounding whitespace included.

mod engine;

use khubsurat_core::Product;

pub use engine::SearchEngine;

/// Whether a query should produce results at all.
#[must_use]
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Search `products` for `query`, preserving their order.
#[must_use]
pub fn search<'a>(query: &str, products: &'a [Product]) -> Vec<&'a Product> {
    if is_blank(query) {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    products.iter().filter(|p| matches(p, &needle)).collect()
}

/// Positions in `products` of every match for an already-lowercased needle.
fn matching_positions(needle: &str, products: &[Product]) -> Vec<usize> {
    products
        .iter()
        .enumerate()
        .filter(|(_, p)| matches(p, needle))
        .map(|(i, _)| i)
        .collect()
}

fn matches(product: &Product, needle: &str) -> bool {
    [
        product.name.as_str(),
        product.category.as_str(),
        product.description_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
