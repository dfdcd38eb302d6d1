//! Order engine: committing a cart into an immutable order.

use chrono::Utc;

use mini_pos_core::{Email, OrderId};

use crate::cart::CartEngine;
use crate::error::{CartError, CheckoutError};
use crate::history::History;
use crate::models::{Order, OrderLine, Totals};
use crate::pricing;

/// The checkout transition.
pub struct OrderEngine<'a> {
    store: &'a dyn crate::store::KvStore,
}

impl<'a> OrderEngine<'a> {
    /// Create an order engine over the given store.
    #[must_use]
    pub const fn new(store: &'a dyn crate::store::KvStore) -> Self {
        Self { store }
    }

    /// Commit the user's cart into an order.
    ///
    /// The five steps - resolve the snapshot, compute totals over it, stamp
    /// a timestamp, append to history, clear the cart - read as one atomic
    /// transition from the caller's side: every failure that can be detected
    /// is raised before the first write, so a failed checkout leaves both
    /// the cart and the history exactly as they were.
    ///
    /// Totals are computed over the snapshot rather than a re-read of the
    /// cart, so the committed order always matches what `compute_totals`
    /// reported just before the call.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when the cart has no lines.
    /// - [`CheckoutError::CorruptCart`] when a line no longer resolves in
    ///   the catalog.
    /// - [`CheckoutError::Store`] for storage failures, propagated unchanged.
    pub fn checkout(&self, user: &Email) -> Result<Order, CheckoutError> {
        let cart = CartEngine::new(self.store);

        let resolved = match cart.resolved_lines(user) {
            Ok(lines) => lines,
            Err(CartError::Store(e)) => return Err(CheckoutError::Store(e)),
            Err(source) => return Err(CheckoutError::CorruptCart { source }),
        };

        if resolved.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let items: Vec<OrderLine> = resolved
            .iter()
            .map(|line| OrderLine {
                name: line.product.name.clone(),
                quantity: line.quantity,
                unit_price: line.product.price,
                line_subtotal: pricing::line_subtotal(line.product.price, line.quantity),
            })
            .collect();

        let Totals {
            subtotal,
            tax,
            grand_total,
        } = pricing::totals(items.iter().map(|item| (item.unit_price, item.quantity)));

        let order = Order {
            id: OrderId::generate(),
            placed_at: Utc::now(),
            items,
            subtotal,
            tax,
            grand_total,
        };

        History::new(self.store).append(user, &order)?;
        cart.clear(user)?;

        Ok(order)
    }
}
