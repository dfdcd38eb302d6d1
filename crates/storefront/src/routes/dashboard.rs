//! Dashboard route handlers: product grid, search, cart, and catalog edits.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use mini_pos_core::{Email, Money};
use mini_pos_engine::{CartEngine, Catalog, CatalogError};

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

use super::pkr;

// =============================================================================
// View Types
// =============================================================================

/// Product display data for templates.
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
}

/// Cart line display data for templates.
pub struct CartLineView {
    pub index: usize,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_subtotal: String,
    /// True when the line's product no longer resolves in the catalog.
    pub missing: bool,
}

/// Totals display data for templates.
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub grand_total: String,
}

/// Cart display data for templates.
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Hidden while any line is unresolvable; checkout would refuse anyway.
    pub totals: Option<TotalsView>,
    pub has_missing: bool,
}

impl CartView {
    /// Whether the cart has no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Form and Query Types
// =============================================================================

/// Dashboard query parameters: search plus redirect messages.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub q: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

/// Add-product form data.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    pub name: String,
    pub price: String,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub first_name: String,
    pub query: String,
    pub products: Vec<ProductView>,
    pub cart: CartView,
    pub error: Option<String>,
    pub notice: Option<String>,
}

fn error_message(code: &str) -> String {
    match code {
        "unknown_product" => "That product is no longer in the catalog.",
        "empty_cart" => "Your cart is empty - add something before checking out.",
        "corrupt_cart" => {
            "A product in your cart is no longer available. Remove it and try again."
        }
        "stale_cart" => "The cart changed underneath that action. Please retry.",
        "product_name" => "Please enter a valid product name.",
        "product_price" => "Please enter a price of at least PKR 1.",
        _ => "Something went wrong. Please try again.",
    }
    .to_string()
}

fn notice_message(code: &str) -> String {
    match code {
        "product_added" => "Product added successfully!",
        _ => "Done.",
    }
    .to_string()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the dashboard: searchable product grid plus the live cart.
pub async fn show(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<DashboardQuery>,
) -> Result<Response> {
    let store = state.store();
    let catalog = Catalog::new(store);
    let cart_engine = CartEngine::new(store);

    let q = query.q.unwrap_or_default();
    let needle = q.to_lowercase();
    let products: Vec<ProductView> = catalog
        .list_products()?
        .into_iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .map(|p| ProductView {
            id: p.id.to_string(),
            name: p.name,
            price: pkr(p.price),
        })
        .collect();

    let cart = build_cart_view(&catalog, &cart_engine, &user.email)?;

    Ok(DashboardTemplate {
        first_name: user.first_name().to_string(),
        query: q,
        products,
        cart,
        error: query.error.as_deref().map(error_message),
        notice: query.notice.as_deref().map(notice_message),
    }
    .into_response())
}

/// Handle the add-product form.
pub async fn add_product(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Form(form): Form<AddProductForm>,
) -> Result<Redirect> {
    let Ok(price) = form.price.trim().parse::<i64>() else {
        return Ok(Redirect::to("/dashboard?error=product_price"));
    };

    match Catalog::new(state.store()).add_product(&form.name, Money::new(price)) {
        Ok(product) => {
            tracing::info!(product_id = %product.id, "Product added to catalog");
            Ok(Redirect::to("/dashboard?notice=product_added"))
        }
        Err(CatalogError::EmptyName) => Ok(Redirect::to("/dashboard?error=product_name")),
        Err(CatalogError::InvalidPrice) => Ok(Redirect::to("/dashboard?error=product_price")),
        Err(err @ CatalogError::Store(_)) => Err(err.into()),
    }
}

/// Join cart lines with the catalog for display.
///
/// A line whose product no longer resolves is shown flagged rather than
/// dropped, so the shopper can remove it; totals are withheld until the cart
/// is consistent again.
fn build_cart_view(
    catalog: &Catalog<'_>,
    cart: &CartEngine<'_>,
    user: &Email,
) -> Result<CartView> {
    let products = catalog.list_products()?;
    let lines = cart.lines(user)?;

    let mut views = Vec::with_capacity(lines.len());
    let mut has_missing = false;

    for (index, line) in lines.iter().enumerate() {
        match products.iter().find(|p| p.id == line.product_id) {
            Some(product) => views.push(CartLineView {
                index,
                name: product.name.clone(),
                quantity: line.quantity,
                unit_price: pkr(product.price),
                line_subtotal: pkr(product.price * line.quantity),
                missing: false,
            }),
            None => {
                has_missing = true;
                views.push(CartLineView {
                    index,
                    name: format!("Unavailable product ({})", line.product_id),
                    quantity: line.quantity,
                    unit_price: "-".to_string(),
                    line_subtotal: "-".to_string(),
                    missing: true,
                });
            }
        }
    }

    let totals = if has_missing {
        None
    } else {
        let totals = cart.compute_totals(user)?;
        Some(TotalsView {
            subtotal: pkr(totals.subtotal),
            tax: pkr(totals.tax),
            grand_total: pkr(totals.grand_total),
        })
    };

    Ok(CartView {
        lines: views,
        totals,
        has_missing,
    })
}
