//! Append-only per-user order history.

use mini_pos_core::{Email, OrderId};

use crate::models::Order;
use crate::store::{self, KvStore, StoreError, keys};

/// Read access to a user's committed orders.
///
/// Storage order is insertion order, which is chronological; presentation
/// layers that want newest-first reverse at display time.
pub struct History<'a> {
    store: &'a dyn KvStore,
}

impl<'a> History<'a> {
    /// Create a history view over the given store.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// All orders for a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the history cannot be read or decoded.
    pub fn for_user(&self, user: &Email) -> Result<Vec<Order>, StoreError> {
        Ok(
            store::get_typed::<Vec<Order>>(self.store, &keys::history(user), "order history")?
                .unwrap_or_default(),
        )
    }

    /// Find one of the user's orders by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the history cannot be read or decoded.
    pub fn find(&self, user: &Email, id: OrderId) -> Result<Option<Order>, StoreError> {
        Ok(self.for_user(user)?.into_iter().find(|order| order.id == id))
    }

    /// Append a committed order. Only checkout calls this; existing entries
    /// are never rewritten or reordered.
    pub(crate) fn append(&self, user: &Email, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.for_user(user)?;
        orders.push(order.clone());
        store::set_typed(self.store, &keys::history(user), &orders)
    }
}
