//! Command implementations.

pub mod browse;
pub mod session;

use std::sync::Arc;

use khubsurat_storefront::{Catalog, StoreState, StorefrontConfig};
use tracing::info;

/// Load configuration and the catalog, and start a fresh session.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the catalog cannot be
/// read or validated.
pub async fn load_state() -> Result<StoreState, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "Loading catalog from file");
            let json = tokio::fs::read_to_string(path).await?;
            Catalog::from_json(&json)?
        }
        None => Catalog::bundled()?,
    };

    Ok(StoreState::new(Arc::new(catalog), &config))
}
