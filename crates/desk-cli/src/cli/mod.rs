use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, WatchArgs};

/// Top-level CLI parser for the `desk` binary.
#[derive(Debug, Parser)]
#[command(name = "desk", version, about = "Frontdesk - reconciled hotel dashboard views")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to print per view
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hotel to scope every fetch to (overrides `session.hotel_id`)
    #[arg(long, global = true)]
    pub hotel: Option<String>,

    /// Read `<collection>.json` files from this directory instead of the API
    #[arg(long, global = true)]
    pub source_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            hotel: self.hotel.clone(),
            source_dir: self.source_dir.clone(),
        }
    }
}
