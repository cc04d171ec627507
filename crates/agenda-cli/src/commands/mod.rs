//! CLI subcommand implementations.

pub mod days;
pub mod export;
pub mod list;
pub mod types;
