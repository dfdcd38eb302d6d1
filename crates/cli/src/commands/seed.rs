//! Seed the store with the default catalog.

use tracing::info;

use mini_pos_engine::store::{self, KvStore, keys};
use mini_pos_engine::{Catalog, JsonFileStore};

/// Persist the default catalog into the store file.
///
/// A no-op when the catalog is already seeded, unless `force` is set, in
/// which case the persisted catalog is replaced with the defaults.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn run(store: &JsonFileStore, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let already_seeded = store.get(keys::PRODUCTS)?.is_some();

    if already_seeded {
        if !force {
            info!("Catalog already seeded; pass --force to reset it to the defaults");
            return Ok(());
        }
        store.delete(keys::PRODUCTS)?;
    }

    // With the key absent, the catalog serves its built-in defaults.
    let products = Catalog::new(store).list_products()?;
    store::set_typed(store, keys::PRODUCTS, &products)?;

    info!(count = products.len(), "Catalog seeded");
    Ok(())
}
