//! Cached search over a shared catalog.

use std::sync::Arc;

use khubsurat_core::Product;
use moka::sync::Cache;
use tracing::{debug, instrument};

use super::{is_blank, matching_positions};
use crate::catalog::Catalog;

/// Search over one catalog with a bounded result cache.
///
/// Cache entries are keyed by the lowercased query and hold catalog
/// positions. The catalog never changes after loading, so entries never go
/// stale and a cached answer is always identical to a fresh scan.
#[derive(Clone)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    cache: Cache<String, Arc<[usize]>>,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("products", &self.catalog.len())
            .field("cached_queries", &self.cache.entry_count())
            .finish()
    }
}

impl SearchEngine {
    /// Create an engine caching at most `capacity` distinct queries.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(capacity).build();
        Self { catalog, cache }
    }

    /// Products matching `query`, in catalog order.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        if is_blank(query) {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let positions = self.cache.get_with(needle.clone(), || {
            debug!("Search cache miss");
            Arc::from(matching_positions(&needle, self.catalog.products()))
        });

        positions
            .iter()
            .filter_map(|&i| self.catalog.products().get(i))
            .collect()
    }

    /// The catalog being searched.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
