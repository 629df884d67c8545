//! Scripted shopping sessions.
//!
//! A script is a YAML list of intents. Each one is dispatched in order; a
//! rejected intent is reported and the replay continues, the same way a
//! shopper sees an error toast and carries on.
//!
//! ```yaml
//! - intent: quick_add
//!   product: 2
//! - intent: add_to_cart
//!   product: 4
//!   size: M
//! - intent: update_quantity
//!   index: 0
//!   quantity: 3
//! - intent: toggle_wishlist
//!   product: 11
//! - intent: set_search_query
//!   query: blue
//! ```

use std::io::Write;
use std::path::Path;

use khubsurat_storefront::views::{CartView, WishlistView, product_cards};
use khubsurat_storefront::{Intent, StoreState};
use tracing::info;

use crate::render;

/// Counts from a replayed script.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Load a script from `path`, replay it and print the final panels.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, or if writing
/// to `out` fails. Rejected intents are not errors.
pub async fn run(
    state: &mut StoreState,
    path: &Path,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Loading session script");
    let content = tokio::fs::read_to_string(path).await?;
    let intents: Vec<Intent> = serde_yaml::from_str(&content)?;

    info!(intents = intents.len(), "Parsed script");
    let summary = replay(state, intents, out)?;
    info!(
        applied = summary.applied,
        rejected = summary.rejected,
        "Session replay complete"
    );
    Ok(())
}

/// Dispatch `intents` in order, then print search results, cart and wishlist.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn replay(
    state: &mut StoreState,
    intents: Vec<Intent>,
    out: &mut impl Write,
) -> std::io::Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for intent in intents {
        match state.dispatch(intent) {
            Ok(notice) => {
                summary.applied += 1;
                writeln!(out, "{notice}")?;
            }
            Err(e) => {
                summary.rejected += 1;
                writeln!(out, "Error: {e}")?;
            }
        }
    }

    writeln!(out)?;
    let query = state.search_query().to_owned();
    if !query.trim().is_empty() {
        writeln!(out, "Search: {query}")?;
        render::search_results(out, &query, &product_cards(&state.search_results(), state))?;
        writeln!(out)?;
    }
    render::cart(out, &CartView::from(state.cart()))?;
    writeln!(out)?;
    render::wishlist(out, &WishlistView::from(state.wishlist()))?;

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use khubsurat_storefront::Catalog;

    use super::*;

    const SCRIPT: &str = r"
- intent: quick_add
  product: 2
- intent: add_to_cart
  product: 4
- intent: add_to_cart
  product: 4
  size: M
  color: Indigo
- intent: update_quantity
  index: 1
  quantity: 0
- intent: remove_from_cart
  index: 7
- intent: toggle_wishlist
  product: 11
- intent: set_search_query
  query: brass
";

    #[test]
    fn test_replay_script() {
        let mut state = StoreState::with_catalog(Arc::new(Catalog::bundled().unwrap()));
        let intents: Vec<Intent> = serde_yaml::from_str(SCRIPT).unwrap();

        let mut buf = Vec::new();
        let summary = replay(&mut state, intents, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                applied: 5,
                rejected: 2
            }
        );
        assert!(text.contains("Error: please select a size for Linen Kurta"));
        assert!(text.contains("Error: cart line 7 does not exist (cart has 2 lines)"));
        assert!(text.contains("Brass Diya Set"));
        assert!(text.contains("Shopping Cart (2)"));
        assert!(text.contains("Total: $65.49"));
        assert!(text.contains("Wishlist (1)"));
        assert!(text.contains("Dhurrie Rug"));
    }
}
