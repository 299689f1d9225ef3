use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use daylane_core::SystemClock;
use tracing_subscriber::EnvFilter;

use daylane_cli::commands::{check, days, layout};
use daylane_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
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
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let clock = SystemClock;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Layout(args)) => layout::run(&mut out, args, &config, &clock)?,
        Some(Commands::Days(args)) => days::run(&mut out, args)?,
        Some(Commands::Check(args)) => check::run(&mut out, args, &config, &clock)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    out.flush()?;
    Ok(())
}
