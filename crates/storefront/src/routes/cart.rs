//! Cart route handlers.
//!
//! Every mutation redirects back to the dashboard, which re-renders the cart
//! from the store. Recoverable engine errors become banner codes; anything
//! else bubbles up as an [`crate::error::AppError`].

use axum::{Form, extract::State, response::Redirect};
use serde::Deserialize;

use mini_pos_core::ProductId;
use mini_pos_engine::{CartEngine, CartError};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update quantity form data. The quantity arrives as raw text because the
/// input tolerates junk: anything that is not a positive number counts as 1.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub quantity: String,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Add one unit of a product to the cart.
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);

    match CartEngine::new(state.store()).add_item(&user.email, &product_id) {
        Ok(()) => Ok(Redirect::to("/dashboard")),
        Err(CartError::UnknownProduct(id)) => {
            tracing::warn!(product_id = %id, "Add to cart for unknown product");
            Ok(Redirect::to("/dashboard?error=unknown_product"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Set the quantity of a cart line.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect> {
    let quantity = form.quantity.trim().parse::<u32>().unwrap_or(1);

    match CartEngine::new(state.store()).set_quantity(&user.email, form.index, quantity) {
        Ok(()) => Ok(Redirect::to("/dashboard")),
        Err(CartError::IndexOutOfRange { index, len }) => {
            tracing::warn!(index, len, "Stale cart index on quantity update");
            Ok(Redirect::to("/dashboard?error=stale_cart"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Remove a cart line.
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Redirect> {
    match CartEngine::new(state.store()).remove_line(&user.email, form.index) {
        Ok(()) => Ok(Redirect::to("/dashboard")),
        Err(CartError::IndexOutOfRange { index, len }) => {
            tracing::warn!(index, len, "Stale cart index on remove");
            Ok(Redirect::to("/dashboard?error=stale_cart"))
        }
        Err(err) => Err(err.into()),
    }
}
