//! Mini POS CLI - seed and inspect the JSON document store.
//!
//! # Usage
//!
//! ```bash
//! # Seed the catalog with the default products
//! minipos-cli seed
//!
//! # List the product catalog
//! minipos-cli products
//!
//! # Dump a user's order history
//! minipos-cli history shopper@example.com
//! ```
//!
//! The store file is resolved from `--data`, then the `MINIPOS_DATA`
//! environment variable, then `minipos.json` - the same file the storefront
//! serves from.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mini_pos_engine::JsonFileStore;

mod commands;

#[derive(Parser)]
#[command(name = "minipos-cli")]
#[command(version, about = "Mini POS CLI tools")]
struct Cli {
    /// Path of the JSON store file
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the catalog with the default products
    Seed {
        /// Overwrite an already-seeded catalog
        #[arg(long)]
        force: bool,
    },
    /// List the product catalog
    Products,
    /// Dump a user's order history, oldest first
    History {
        /// The user's email
        email: String,
    },
}

fn main() {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let data_path = cli.data.unwrap_or_else(|| {
        std::env::var("MINIPOS_DATA").map_or_else(|_| PathBuf::from("minipos.json"), PathBuf::from)
    });
    let store = JsonFileStore::new(data_path);

    let result: Result<(), Box<dyn std::error::Error>> = match cli.command {
        Commands::Seed { force } => commands::seed::run(&store, force),
        Commands::Products => commands::products::run(&store),
        Commands::History { email } => commands::history::run(&store, &email),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
