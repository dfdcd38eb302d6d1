//! Persistent key-value store collaborator.
//!
//! The engine persists everything through the [`KvStore`] contract: a flat
//! namespace of JSON values with no expiry, read fresh on every operation.
//! [`MemoryStore`] backs tests; [`JsonFileStore`] is the durable document
//! store the storefront and CLI share.
//!
//! # Key layout
//!
//! One logical partition per concern, user-scoped where needed (see [`keys`]):
//!
//! - `products` - the catalog, an ordered product list
//! - `users` - registered user records (owned by the storefront)
//! - `cart:<email>` - a user's cart lines
//! - `history:<email>` - a user's committed orders

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors from the key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded for storage.
    #[error("failed to encode value: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted data did not match the expected shape. Rejected at the read
    /// boundary rather than propagated into arithmetic.
    #[error("corrupt record in store: {0}")]
    Corrupt(String),
}

/// A durable string-keyed JSON document store.
///
/// Implementations must not cache across calls: every `get` observes the
/// latest `set`, including writes made by another handle to the same backing
/// storage.
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Well-known store keys.
pub mod keys {
    use mini_pos_core::Email;

    /// The product catalog.
    pub const PRODUCTS: &str = "products";

    /// Registered user records.
    pub const USERS: &str = "users";

    /// A user's cart.
    #[must_use]
    pub fn cart(user: &Email) -> String {
        format!("cart:{user}")
    }

    /// A user's order history.
    #[must_use]
    pub fn history(user: &Email) -> String {
        format!("history:{user}")
    }
}

/// Read and decode a typed record, mapping decode failures to
/// [`StoreError::Corrupt`] tagged with `what` for the error message.
pub fn get_typed<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &str,
    what: &str,
) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(format!("invalid {what} record: {e}"))),
        None => Ok(None),
    }
}

/// Encode and store a typed record.
pub fn set_typed<T: Serialize + ?Sized>(
    store: &dyn KvStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    store.set(key, serde_json::to_value(value)?)
}
