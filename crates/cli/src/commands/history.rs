//! Dump a user's order history.

use tracing::info;

use mini_pos_core::Email;
use mini_pos_engine::{History, JsonFileStore};

/// Log every order a user has placed, oldest first.
///
/// # Errors
///
/// Returns an error if the email is invalid or the history cannot be read.
pub fn run(store: &JsonFileStore, email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user = Email::parse(email)?;
    let orders = History::new(store).for_user(&user)?;

    if orders.is_empty() {
        info!(user = %user, "No orders");
        return Ok(());
    }

    for order in &orders {
        info!(
            order_id = %order.id,
            placed_at = %order.placed_at,
            items = order.items.len(),
            subtotal = %order.subtotal,
            tax = %order.tax,
            grand_total = %order.grand_total,
            "order"
        );
    }
    info!(user = %user, count = orders.len(), "History listed");

    Ok(())
}
