//! Khubsurat Core - Shared domain types.
//!
//! This crate provides the value types used across all Khubsurat components:
//! - `storefront` - In-memory cart, wishlist, search and catalog projections
//! - `cli` - Terminal front-end that drives the storefront state
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no state
//! containers, no logging. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and quantities, plus
//!   the [`Product`] and [`CartItem`] records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
