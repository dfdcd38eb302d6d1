//! CLI subcommands.

pub mod history;
pub mod products;
pub mod seed;
