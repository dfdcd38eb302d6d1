//! Application state shared across handlers.

use std::sync::Arc;

use mini_pos_engine::KvStore;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the persistent
/// key-value store every engine operation reads through.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: Box<dyn KvStore>,
}

impl AppState {
    /// Create a new application state over the given store.
    #[must_use]
    pub fn new(config: StorefrontConfig, store: Box<dyn KvStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the persistent key-value store.
    #[must_use]
    pub fn store(&self) -> &dyn KvStore {
        self.inner.store.as_ref()
    }
}
