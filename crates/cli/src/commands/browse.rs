//! Read-only catalog commands.

use std::io::{self, Write};

use khubsurat_storefront::StoreState;
use khubsurat_storefront::views::product_cards;

use crate::render;

/// Print the product grid for a category, or the featured grid.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn catalog(
    state: &StoreState,
    category: Option<&str>,
    limit: Option<usize>,
    out: &mut impl Write,
) -> io::Result<()> {
    let products = match (category, limit) {
        (None, None) => state.featured(),
        _ => state.collection(category, limit),
    };

    let title = category.map_or_else(
        || "Featured Products".to_string(),
        |c| format!("{c} Collection"),
    );
    render::product_grid(out, &title, &product_cards(&products, state))
}

/// Print the category navigation.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn categories(state: &StoreState, out: &mut impl Write) -> io::Result<()> {
    for category in state.catalog().categories() {
        let count = state.filter_by_category(Some(category)).len();
        writeln!(out, "{category} ({count})")?;
    }
    Ok(())
}

/// Print search results for `query`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn search(state: &StoreState, query: &str, out: &mut impl Write) -> io::Result<()> {
    let hits = state.search(query);
    render::search_results(out, query, &product_cards(&hits, state))
}
