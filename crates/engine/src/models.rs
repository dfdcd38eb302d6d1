//! Domain records for the cart and order lifecycle.
//!
//! Everything persisted here is an explicit typed struct; malformed stored
//! data is rejected at the read boundary (see [`crate::store`]) instead of
//! flowing into price arithmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mini_pos_core::{Money, OrderId, ProductId};

/// A purchasable catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in whole rupees.
    pub price: Money,
}

/// One product selection within a cart.
///
/// A cart holds at most one line per product id: adding an already-carted
/// product increments its quantity instead of appending a duplicate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The selected product.
    pub product_id: ProductId,
    /// How many units, always at least 1.
    pub quantity: u32,
}

/// A cart line joined with its catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLine {
    /// The catalog product the line points at.
    pub product: Product,
    /// How many units.
    pub quantity: u32,
}

/// Subtotal, tax, and grand total for a cart or an order snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all line subtotals.
    pub subtotal: Money,
    /// 10% of the subtotal, rounded half away from zero. The only rounded
    /// figure in the system.
    pub tax: Money,
    /// `subtotal + tax`, never rounded again.
    pub grand_total: Money,
}

/// A denormalized snapshot of one purchased line.
///
/// Name and price are copied out of the catalog at checkout time, so later
/// catalog edits never retroactively alter a committed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product name at purchase time.
    pub name: String,
    /// Units purchased.
    pub quantity: u32,
    /// Unit price at purchase time.
    pub unit_price: Money,
    /// `unit_price * quantity`.
    pub line_subtotal: Money,
}

/// An immutable, committed purchase.
///
/// Appended to the owning user's history by checkout; never mutated or
/// deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order id.
    pub id: OrderId,
    /// When the order was committed.
    pub placed_at: DateTime<Utc>,
    /// Purchased lines in cart order.
    pub items: Vec<OrderLine>,
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Tax as computed at checkout time.
    pub tax: Money,
    /// `subtotal + tax`.
    pub grand_total: Money,
}
