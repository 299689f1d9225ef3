//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::check::CheckArgs;
use crate::commands::days::DaysArgs;
use crate::commands::layout::LayoutArgs;

/// Day timeline layout for calendar events.
///
/// Reads a day-keyed JSON file of events and works out where each event is
/// drawn on the day's timeline.
#[derive(Debug, Parser)]
#[command(name = "daylane", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lay out one day's events into lanes.
    Layout(LayoutArgs),

    /// List the days that have events.
    Days(DaysArgs),

    /// Check a new event against the add-event rules.
    Check(CheckArgs),
}
