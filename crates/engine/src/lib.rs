//! Mini POS Engine - the cart, pricing, and order lifecycle core.
//!
//! This crate owns the only stateful part of the system: the rules for
//! mutating a per-user cart, computing totals, and committing a cart into an
//! immutable order appended to that user's history.
//!
//! # Architecture
//!
//! - [`store`] - the persistent key-value collaborator ([`KvStore`]) with
//!   in-memory and JSON-file implementations
//! - [`catalog`] - product lookups and catalog edits
//! - [`cart`] - per-user cart mutations and totals
//! - [`pricing`] - the numeric policy (line subtotals, 10% tax, rounding)
//! - [`order`] - the checkout transition
//! - [`history`] - the append-only per-user order log
//!
//! Every operation takes the user identity ([`mini_pos_core::Email`])
//! explicitly - there is no ambient current-user state in the engine. All
//! operations are synchronous and re-read the store on every call; nothing
//! is cached between calls.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod error;
pub mod history;
pub mod models;
pub mod order;
pub mod pricing;
pub mod store;

pub use cart::CartEngine;
pub use catalog::Catalog;
pub use error::{CartError, CatalogError, CheckoutError};
pub use history::History;
pub use models::{CartLine, Order, OrderLine, Product, ResolvedLine, Totals};
pub use order::OrderEngine;
pub use store::{JsonFileStore, KvStore, MemoryStore, StoreError};
