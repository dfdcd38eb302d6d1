//! Engine error types.
//!
//! Every condition here is local and recoverable: it is surfaced to the
//! caller as a structured result, never swallowed, and never leaves partial
//! state behind. Store I/O failures are carried through unchanged.

use thiserror::Error;

use mini_pos_core::ProductId;

use crate::store::StoreError;

/// Errors from cart reads and mutations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The operation referenced a product the catalog cannot resolve.
    /// The cart is left unchanged; the caller should drop or repair the line.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The caller passed a line index that is not a valid position in the
    /// current cart (typically a stale index from an outdated view).
    #[error("line index {index} out of range for cart with {len} lines")]
    IndexOutOfRange {
        /// The index that was passed.
        index: usize,
        /// Number of lines currently in the cart.
        len: usize,
    },

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from catalog edits.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The product name was empty or all whitespace.
    #[error("product name cannot be empty")]
    EmptyName,

    /// The product price was below one rupee.
    #[error("product price must be at least 1")]
    InvalidPrice,

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from committing a cart into an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted while the cart had no lines.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// A cart line failed to resolve while building the order snapshot.
    /// Neither the cart nor the history is mutated when this is returned.
    #[error("cart is corrupt: {source}")]
    CorruptCart {
        /// The resolution failure that aborted the commit.
        #[source]
        source: CartError,
    },

    /// Underlying store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}
