//! Unified error handling for store operations.
//!
//! Provides a `StoreError` type returned by every fallible cart, wishlist and
//! intent operation. Quantity underflow is never an error: it is clamped.

use khubsurat_core::{ProductId, ValidationError};
use thiserror::Error;

/// Error returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A cart position outside `0..len` was addressed.
    #[error("cart line {index} does not exist (cart has {len} lines)")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of lines in the cart at the time of the request.
        len: usize,
    },

    /// A cart line did not match its product's options.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An intent referenced a product that is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

impl StoreError {
    /// Whether the error is a rejected user selection rather than a stale reference.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
