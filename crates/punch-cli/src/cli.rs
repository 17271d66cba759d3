//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{age, delete, list, log, punch, status, summary, total};

/// Punch clock.
///
/// Records when you start and stop working on a project and reports how
/// the time was spent. Sub-projects are named `parent/child`.
#[derive(Debug, Parser)]
#[command(name = "punch", version, about, long_about = None)]
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
    /// Show whether projects are punched in.
    Status(status::StatusArgs),

    /// Punch in to a project.
    In(punch::InArgs),

    /// Punch out of a project, or of everything.
    Out(punch::OutArgs),

    /// Record a finished interval.
    #[command(alias = "clock")]
    Entry(punch::EntryArgs),

    /// Log a message against the active entry.
    Log(log::LogArgs),

    /// Delete a project and its history.
    Delete(delete::DeleteArgs),

    /// List entries.
    List(list::ListArgs),

    /// Show time spent.
    Total(total::TotalArgs),

    /// Break a project's time down by logged message.
    Summary(summary::SummaryArgs),

    /// Move old history into an archive slot.
    Age(age::AgeArgs),
}
