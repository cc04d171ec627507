//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::export::ExportArgs;
use crate::commands::list::ListArgs;

/// Conference schedule viewer.
///
/// Reads the schedule workbook, folds sessions under their blocks and
/// prints the agenda grouped by day.
#[derive(Debug, Parser)]
#[command(name = "agenda", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Workbook path or http(s) URL; overrides the configured one.
    #[arg(short, long, global = true)]
    pub workbook: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the agenda grouped by day.
    List(ListArgs),

    /// List the day labels in chronological order.
    Days {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the event types that can be used with `list --type`.
    Types {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Produce the printable layout of the full schedule.
    Export(ExportArgs),
}
