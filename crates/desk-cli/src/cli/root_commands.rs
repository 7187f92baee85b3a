use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Room status board: mode, guest and last action per room.
    Rooms,
    /// Guest roster with resolved room numbers.
    Guests,
    /// Guest, reservation and room triples.
    Reservations,
    /// Unified activity feed, newest first.
    Feed,
    /// Deduplicated hotel list.
    Hotels,
    /// Headline counts.
    Summary,
    /// Every view from one reconciliation cycle.
    Views,
    /// Poll continuously and print the summary after every cycle.
    Watch(WatchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    /// Seconds between cycles (defaults to `refresh.interval_secs`)
    #[arg(long)]
    pub interval: Option<u64>,

    /// Stop after this many cycles instead of waiting for Ctrl-C
    #[arg(long)]
    pub cycles: Option<u32>,
}
