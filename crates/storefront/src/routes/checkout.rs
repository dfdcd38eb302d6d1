//! Checkout and receipt route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};

use mini_pos_core::OrderId;
use mini_pos_engine::{CheckoutError, History, OrderEngine};

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::{format_timestamp, pkr};

/// Receipt line display data for templates.
pub struct ReceiptLineView {
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_subtotal: String,
}

/// Printable receipt template.
#[derive(Template, WebTemplate)]
#[template(path = "receipt.html")]
pub struct ReceiptTemplate {
    pub placed_at: String,
    pub items: Vec<ReceiptLineView>,
    pub subtotal: String,
    pub tax: String,
    pub grand_total: String,
}

/// Commit the cart into an order and send the shopper to its receipt.
pub async fn checkout(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Redirect> {
    match OrderEngine::new(state.store()).checkout(&user.email) {
        Ok(order) => {
            tracing::info!(
                order_id = %order.id,
                grand_total = order.grand_total.as_rupees(),
                "Order committed"
            );
            Ok(Redirect::to(&format!("/orders/{}/receipt", order.id)))
        }
        Err(CheckoutError::EmptyCart) => Ok(Redirect::to("/dashboard?error=empty_cart")),
        Err(CheckoutError::CorruptCart { source }) => {
            tracing::warn!(error = %source, "Checkout aborted on corrupt cart");
            Ok(Redirect::to("/dashboard?error=corrupt_cart"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Display the printable receipt for one of the user's committed orders.
pub async fn receipt(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<ReceiptTemplate> {
    let order_id = OrderId::parse(&id).map_err(|_| AppError::NotFound(format!("order {id}")))?;

    let order = History::new(state.store())
        .find(&user.email, order_id)?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(ReceiptTemplate {
        placed_at: format_timestamp(&order.placed_at),
        items: order
            .items
            .iter()
            .map(|item| ReceiptLineView {
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: pkr(item.unit_price),
                line_subtotal: pkr(item.line_subtotal),
            })
            .collect(),
        subtotal: pkr(order.subtotal),
        tax: pkr(order.tax),
        grand_total: pkr(order.grand_total),
    })
}
