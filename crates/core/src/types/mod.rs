//! Core types for Mini POS.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;

pub use email::{Email, EmailError};
pub use id::{OrderId, ProductId};
pub use money::Money;
