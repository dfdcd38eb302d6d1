//! List the product catalog.

use tracing::info;

use mini_pos_engine::{Catalog, JsonFileStore};

/// Log every product in the catalog, in insertion order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read.
pub fn run(store: &JsonFileStore) -> Result<(), Box<dyn std::error::Error>> {
    let products = Catalog::new(store).list_products()?;

    for product in &products {
        info!(id = %product.id, price = %product.price, "{}", product.name);
    }
    info!(count = products.len(), "Catalog listed");

    Ok(())
}
