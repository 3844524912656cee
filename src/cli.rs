use clap::Parser;

use crate::cmd::Commands;

/// Terminal task dashboard over an in-memory, fixture-seeded store.
#[derive(Parser)]
#[command(name = "td", version, about = "Task-management dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
