//! Order history route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use mini_pos_engine::{History, Order};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::{format_timestamp, pkr};

/// One purchased line within an order card.
pub struct OrderItemView {
    pub name: String,
    pub quantity: u32,
    pub line_subtotal: String,
}

/// Order display data for templates.
pub struct OrderView {
    pub id: String,
    pub placed_at: String,
    pub subtotal: String,
    pub tax: String,
    pub grand_total: String,
    pub items: Vec<OrderItemView>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            placed_at: format_timestamp(&order.placed_at),
            subtotal: pkr(order.subtotal),
            tax: pkr(order.tax),
            grand_total: pkr(order.grand_total),
            items: order
                .items
                .iter()
                .map(|item| OrderItemView {
                    name: item.name.clone(),
                    quantity: item.quantity,
                    line_subtotal: pkr(item.line_subtotal),
                })
                .collect(),
        }
    }
}

/// History page template.
#[derive(Template, WebTemplate)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub first_name: String,
    pub orders: Vec<OrderView>,
}

/// Display the user's past orders, newest first.
///
/// Storage is chronological; the reversal here is purely presentational.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<HistoryTemplate> {
    let mut orders = History::new(state.store()).for_user(&user.email)?;
    orders.reverse();

    Ok(HistoryTemplate {
        first_name: user.first_name().to_string(),
        orders: orders.iter().map(OrderView::from).collect(),
    })
}
