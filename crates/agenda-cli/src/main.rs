use std::io;

use agenda_core::Schedule;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use agenda_cli::commands::{days, export, list, types};
use agenda_cli::{Cli, Commands, Config};

/// Load config and the schedule it points at.
async fn open_schedule(cli: &Cli) -> Result<(Schedule, Config)> {
    let mut config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(workbook) = &cli.workbook {
        config.workbook.clone_from(workbook);
    }
    tracing::debug!(?config, "loaded configuration");

    let source = config.source();
    let schedule = agenda_xlsx::load_schedule(&source, &config.context())
        .await
        .with_context(|| format!("failed to load schedule from {source}"))?;
    Ok((schedule, config))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::List(args)) => {
            let (schedule, _config) = open_schedule(&cli).await?;
            list::run(&mut stdout, &schedule, args)?;
        }
        Some(Commands::Days { json }) => {
            let (schedule, _config) = open_schedule(&cli).await?;
            days::run(&mut stdout, &schedule, *json)?;
        }
        Some(Commands::Types { json }) => {
            let (schedule, _config) = open_schedule(&cli).await?;
            types::run(&mut stdout, &schedule, *json)?;
        }
        Some(Commands::Export(args)) => {
            let (schedule, config) = open_schedule(&cli).await?;
            export::run(&mut stdout, &schedule, args, &config)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
