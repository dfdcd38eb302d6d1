//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Login page (redirects to /dashboard when logged in)
//! GET  /health                - Health check
//!
//! # Auth
//! GET  /auth/register         - Registration page
//! POST /auth/register         - Register and log in
//! POST /auth/login            - Login action
//! POST /auth/logout           - Logout action
//!
//! # Dashboard (requires auth)
//! GET  /dashboard             - Product grid, search, cart, totals
//! POST /products/add          - Add a product to the catalog
//!
//! # Cart (requires auth)
//! POST /cart/add              - Add one unit of a product
//! POST /cart/update           - Set a line's quantity
//! POST /cart/remove           - Remove a line
//!
//! # Checkout (requires auth)
//! POST /checkout              - Commit the cart into an order
//! GET  /orders/{id}/receipt   - Printable receipt for a committed order
//! GET  /history               - Past orders, newest first
//! ```
//!
//! Mutations all redirect back to a GET page; errors travel as short query
//! codes the target page translates into banner messages.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod history;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};

use mini_pos_core::Money;

use crate::state::AppState;

/// Create the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::index))
        .route(
            "/auth/register",
            get(auth::register_page).post(auth::register),
        )
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/dashboard", get(dashboard::show))
        .route("/products/add", post(dashboard::add_product))
        .route("/cart/add", post(cart::add))
        .route("/cart/update", post(cart::update))
        .route("/cart/remove", post(cart::remove))
        .route("/checkout", post(checkout::checkout))
        .route("/orders/{id}/receipt", get(checkout::receipt))
        .route("/history", get(history::show))
}

/// Format a money amount for display, e.g. `PKR 14,999`.
pub(crate) fn pkr(amount: Money) -> String {
    format!("PKR {amount}")
}

/// Format an order timestamp for display.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%d %b %Y, %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pkr_formatting() {
        assert_eq!(pkr(Money::new(14999)), "PKR 14,999");
        assert_eq!(pkr(Money::ZERO), "PKR 0");
    }
}
