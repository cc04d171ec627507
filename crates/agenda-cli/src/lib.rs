//! Conference schedule viewer CLI library.
//!
//! This crate provides the command-line presentation of a loaded schedule.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
