//! Cart engine: per-user cart mutations and totals.
//!
//! A cart is an ordered list of lines, at most one per product. All state
//! lives in the store under the user's cart key; the engine holds nothing
//! between calls.

use mini_pos_core::{Email, ProductId};

use crate::catalog::Catalog;
use crate::error::CartError;
use crate::models::{CartLine, ResolvedLine, Totals};
use crate::pricing;
use crate::store::{self, KvStore, StoreError, keys};

/// Mutation and read operations on a user's cart.
pub struct CartEngine<'a> {
    store: &'a dyn KvStore,
}

impl<'a> CartEngine<'a> {
    /// Create a cart engine over the given store.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// Current cart lines for a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the persisted cart does not decode
    /// or holds a zero-quantity line.
    pub fn lines(&self, user: &Email) -> Result<Vec<CartLine>, StoreError> {
        let lines = store::get_typed::<Vec<CartLine>>(self.store, &keys::cart(user), "cart")?
            .unwrap_or_default();

        if lines.iter().any(|line| line.quantity == 0) {
            return Err(StoreError::Corrupt(format!(
                "cart for {user} contains a zero-quantity line"
            )));
        }

        Ok(lines)
    }

    fn write_lines(&self, user: &Email, lines: &[CartLine]) -> Result<(), StoreError> {
        store::set_typed(self.store, &keys::cart(user), lines)
    }

    /// Add one unit of a product to the cart.
    ///
    /// Merges into an existing line when the product is already carted, so a
    /// cart never holds two lines for the same product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if the id does not resolve in
    /// the catalog; the cart is left unchanged.
    pub fn add_item(&self, user: &Email, product_id: &ProductId) -> Result<(), CartError> {
        if Catalog::new(self.store).get_product(product_id)?.is_none() {
            return Err(CartError::UnknownProduct(product_id.clone()));
        }

        let mut lines = self.lines(user)?;
        match lines.iter_mut().find(|line| &line.product_id == product_id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine {
                product_id: product_id.clone(),
                quantity: 1,
            }),
        }
        self.write_lines(user, &lines)?;
        Ok(())
    }

    /// Replace the quantity of the line at `index`.
    ///
    /// Values below 1 are clamped up to 1, matching the tolerance of the
    /// quantity input in the UI; they are never rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if `index` is not a valid
    /// position in the current cart.
    pub fn set_quantity(&self, user: &Email, index: usize, quantity: u32) -> Result<(), CartError> {
        let mut lines = self.lines(user)?;
        let len = lines.len();
        let line = lines
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        line.quantity = quantity.max(1);
        self.write_lines(user, &lines)?;
        Ok(())
    }

    /// Delete the line at `index`, shifting later lines down.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::IndexOutOfRange`] if `index` is not a valid
    /// position in the current cart.
    pub fn remove_line(&self, user: &Email, index: usize) -> Result<(), CartError> {
        let mut lines = self.lines(user)?;
        if index >= lines.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: lines.len(),
            });
        }
        lines.remove(index);
        self.write_lines(user, &lines)?;
        Ok(())
    }

    /// Whether the cart currently has no lines.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be read.
    pub fn is_empty(&self, user: &Email) -> Result<bool, StoreError> {
        Ok(self.lines(user)?.is_empty())
    }

    /// Drop every line from the cart. Called by checkout once the order has
    /// been committed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store rejects the delete.
    pub fn clear(&self, user: &Email) -> Result<(), StoreError> {
        self.store.delete(&keys::cart(user))
    }

    /// Each cart line joined with its catalog product, in cart order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] for the first line whose id no
    /// longer resolves in the catalog.
    pub fn resolved_lines(&self, user: &Email) -> Result<Vec<ResolvedLine>, CartError> {
        let products = Catalog::new(self.store).list_products()?;

        self.lines(user)?
            .into_iter()
            .map(|line| {
                let product = products
                    .iter()
                    .find(|p| p.id == line.product_id)
                    .cloned()
                    .ok_or_else(|| CartError::UnknownProduct(line.product_id.clone()))?;
                Ok(ResolvedLine {
                    product,
                    quantity: line.quantity,
                })
            })
            .collect()
    }

    /// Compute subtotal, tax, and grand total for the current cart.
    ///
    /// Pure: the cart and catalog are re-read on every call and nothing is
    /// mutated or cached, so two calls without an intervening mutation always
    /// agree.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownProduct`] if a line no longer resolves.
    pub fn compute_totals(&self, user: &Email) -> Result<Totals, CartError> {
        let resolved = self.resolved_lines(user)?;
        Ok(pricing::totals(
            resolved.iter().map(|line| (line.product.price, line.quantity)),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use mini_pos_core::Money;

    fn user() -> Email {
        Email::parse("shopper@example.com").unwrap()
    }

    #[test]
    fn test_add_item_merges_into_one_line() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);
        let p1 = ProductId::new("p1");

        for _ in 0..3 {
            cart.add_item(&user(), &p1).unwrap();
        }

        let lines = cart.lines(&user()).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().quantity, 3);
    }

    #[test]
    fn test_add_item_rejects_unknown_product_without_mutation() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);

        let err = cart.add_item(&user(), &ProductId::new("ghost")).unwrap_err();
        assert!(matches!(err, CartError::UnknownProduct(_)));
        assert!(cart.is_empty(&user()).unwrap());
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);
        cart.add_item(&user(), &ProductId::new("p2")).unwrap();

        cart.set_quantity(&user(), 0, 0).unwrap();
        assert_eq!(cart.lines(&user()).unwrap().first().unwrap().quantity, 1);

        cart.set_quantity(&user(), 0, 7).unwrap();
        assert_eq!(cart.lines(&user()).unwrap().first().unwrap().quantity, 7);
    }

    #[test]
    fn test_stale_indexes_are_rejected() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);
        cart.add_item(&user(), &ProductId::new("p1")).unwrap();

        assert!(matches!(
            cart.set_quantity(&user(), 1, 2),
            Err(CartError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            cart.remove_line(&user(), 5),
            Err(CartError::IndexOutOfRange { index: 5, len: 1 })
        ));
    }

    #[test]
    fn test_remove_line_shifts_later_lines() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);
        cart.add_item(&user(), &ProductId::new("p1")).unwrap();
        cart.add_item(&user(), &ProductId::new("p2")).unwrap();
        cart.add_item(&user(), &ProductId::new("p3")).unwrap();

        cart.remove_line(&user(), 1).unwrap();

        let ids: Vec<_> = cart
            .lines(&user())
            .unwrap()
            .into_iter()
            .map(|l| l.product_id)
            .collect();
        assert_eq!(ids, vec![ProductId::new("p1"), ProductId::new("p3")]);
    }

    #[test]
    fn test_carts_are_scoped_per_user() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);
        let other = Email::parse("other@example.com").unwrap();

        cart.add_item(&user(), &ProductId::new("p1")).unwrap();

        assert!(cart.is_empty(&other).unwrap());
        assert!(!cart.is_empty(&user()).unwrap());
    }

    #[test]
    fn test_compute_totals_is_pure() {
        let store = MemoryStore::new();
        let cart = CartEngine::new(&store);
        cart.add_item(&user(), &ProductId::new("p1")).unwrap();
        cart.add_item(&user(), &ProductId::new("p1")).unwrap();

        let first = cart.compute_totals(&user()).unwrap();
        let second = cart.compute_totals(&user()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.subtotal, Money::new(4400));
        assert_eq!(first.tax, Money::new(440));
        assert_eq!(first.grand_total, Money::new(4840));
    }

    #[test]
    fn test_corrupt_persisted_quantity_is_rejected() {
        let store = MemoryStore::new();
        store
            .set(
                &keys::cart(&user()),
                serde_json::json!([{"product_id": "p1", "quantity": 0}]),
            )
            .unwrap();

        let cart = CartEngine::new(&store);
        assert!(matches!(
            cart.lines(&user()),
            Err(StoreError::Corrupt(_))
        ));
    }
}
