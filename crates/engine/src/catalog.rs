//! Catalog store: product lookups and catalog edits.

use mini_pos_core::{Money, ProductId};

use crate::error::CatalogError;
use crate::models::Product;
use crate::store::{self, KvStore, StoreError, keys};

/// The products every fresh store starts with.
///
/// Served as long as no catalog has been persisted; the first catalog edit
/// writes these out together with the new product.
fn default_products() -> Vec<Product> {
    [
        ("p1", "Wireless Mouse", 2200),
        ("p2", "Mechanical Keyboard", 9800),
        ("p3", "USB-C Charger 45W", 3500),
        ("p4", "Noise-Cancel Headphones", 14999),
        ("p5", "1080p Webcam", 6500),
        ("p6", "32GB Flash Drive", 1200),
    ]
    .into_iter()
    .map(|(id, name, price)| Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Money::new(price),
    })
    .collect()
}

/// Read-mostly repository over the product catalog.
pub struct Catalog<'a> {
    store: &'a dyn KvStore,
}

impl<'a> Catalog<'a> {
    /// Create a catalog over the given store.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// List the catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the persisted catalog does not
    /// decode or contains a product priced below one rupee.
    pub fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let products = store::get_typed::<Vec<Product>>(self.store, keys::PRODUCTS, "catalog")?
            .unwrap_or_else(default_products);

        if let Some(bad) = products.iter().find(|p| p.price.as_rupees() < 1) {
            return Err(StoreError::Corrupt(format!(
                "product {} has non-positive price",
                bad.id
            )));
        }

        Ok(products)
    }

    /// Look up a single product by id.
    ///
    /// A `None` result for an id held by a cart line is a consistency
    /// violation; callers surface it as an unknown-product condition rather
    /// than crashing.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the catalog cannot be read.
    pub fn get_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.list_products()?.into_iter().find(|p| &p.id == id))
    }

    /// Add a product to the catalog with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyName`] if the trimmed name is empty and
    /// [`CatalogError::InvalidPrice`] if the price is below one rupee; the
    /// catalog is unchanged in both cases.
    pub fn add_product(&self, name: &str, price: Money) -> Result<Product, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if price.as_rupees() < 1 {
            return Err(CatalogError::InvalidPrice);
        }

        let mut products = self.list_products()?;
        let product = Product {
            id: ProductId::generate(),
            name: name.to_owned(),
            price,
        };
        products.push(product.clone());
        store::set_typed(self.store, keys::PRODUCTS, &products)?;

        Ok(product)
    }
}
