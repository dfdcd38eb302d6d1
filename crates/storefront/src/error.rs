//! Unified error handling for route handlers.
//!
//! Provides a unified `AppError` type that logs server-side failures before
//! responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use mini_pos_engine::{CartError, CatalogError, CheckoutError, StoreError};

use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Key-value store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Cart operation failed.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Catalog edit failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Store(_)
            | Self::Cart(CartError::Store(_))
            | Self::Catalog(CatalogError::Store(_))
            | Self::Checkout(CheckoutError::Store(_))
            | Self::Auth(AuthError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Cart(CartError::UnknownProduct(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Cart(CartError::IndexOutOfRange { .. })
            | Self::Catalog(_)
            | Self::Auth(AuthError::MissingFields | AuthError::InvalidEmail(_))
            | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Checkout(_) | Self::Auth(AuthError::UserAlreadyExists) => StatusCode::CONFLICT,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request error");
        }

        // Don't expose store internals to clients
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
