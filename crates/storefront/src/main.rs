//! Mini POS Storefront - single-session point-of-sale demo.
//!
//! # Architecture
//!
//! - Axum web framework with server-rendered Askama templates
//! - All durable state (catalog, users, carts, order history) lives in one
//!   JSON document store shared with the CLI
//! - Sessions are in-memory and hold only the logged-in user identity

#![cfg_attr(not(test), forbid(unsafe_code))]

use mini_pos_engine::JsonFileStore;
use mini_pos_storefront::config::StorefrontConfig;
use mini_pos_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mini_pos_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // All durable state goes through the JSON document store
    let store = JsonFileStore::new(config.data_path.clone());
    tracing::info!(path = %config.data_path.display(), "Using JSON store");

    let state = AppState::new(config.clone(), Box::new(store));
    let app = mini_pos_storefront::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
