//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `KHUBSURAT_CATALOG_PATH` - JSON catalog file (default: the bundled catalog)
//! - `KHUBSURAT_SEARCH_CACHE_CAPACITY` - Maximum cached search queries (default: 256)
//! - `KHUBSURAT_FEATURED_LIMIT` - Number of products on the home grid (default: all)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_SEARCH_CACHE_CAPACITY: u64 = 256;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog file to load instead of the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Upper bound on distinct search queries kept in the result cache
    pub search_cache_capacity: u64,
    /// Number of products shown on the home grid
    pub featured_limit: Option<usize>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            search_cache_capacity: DEFAULT_SEARCH_CACHE_CAPACITY,
            featured_limit: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = non_empty(lookup("KHUBSURAT_CATALOG_PATH")).map(PathBuf::from);

        let search_cache_capacity = parse_optional::<u64>(
            "KHUBSURAT_SEARCH_CACHE_CAPACITY",
            lookup("KHUBSURAT_SEARCH_CACHE_CAPACITY"),
        )?
        .unwrap_or(DEFAULT_SEARCH_CACHE_CAPACITY);

        let featured_limit = parse_optional::<usize>(
            "KHUBSURAT_FEATURED_LIMIT",
            lookup("KHUBSURAT_FEATURED_LIMIT"),
        )?;

        Ok(Self {
            catalog_path,
            search_cache_capacity,
            featured_limit,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat blank values the same as unset ones.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an optional variable, reporting the variable name on failure.
fn parse_optional<T>(key: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    non_empty(value)
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}
