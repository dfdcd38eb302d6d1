//! Mini POS Core - Shared types library.
//!
//! This crate provides common types used across all Mini POS components:
//! - `engine` - Catalog, cart, order, and history engines
//! - `storefront` - Web storefront driving the engines
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, money amounts, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
