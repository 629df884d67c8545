//! Core types for Khubsurat.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart_item;
pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use cart_item::{CartItem, ValidationError};
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use product::Product;
pub use quantity::Quantity;
