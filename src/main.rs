//! # td - Terminal Task Dashboard
//!
//! A task-management dashboard for the terminal: task lists with composable
//! search and filters, due-today and overdue views, per-project rollups, and
//! aggregate statistics, over an in-memory store seeded with fixture data.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the interactive dashboard
//! td ui
//!
//! # List tasks, filtered and searched
//! td list --status in-progress --priority high
//! td list --search checkout --kind bug
//!
//! # Due-today and overdue views
//! td today
//! td overdue
//!
//! # Aggregate statistics, optionally as JSON
//! td stats
//! td stats --json
//!
//! # Add a task for this session
//! td add "Fix login redirect" --kind bug --priority high --due tomorrow
//! ```
//!
//! There is no backend and no persistence: every run starts from the same
//! fixture set, and `td add` lives only until the process exits. Filter
//! fields accept "all" as a no-constraint sentinel, matching the dashboard's
//! filter specification.

use chrono::Local;
use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod dates;
pub mod derive;
pub mod fields;
pub mod filter;
pub mod fixtures;
pub mod project;
pub mod stats;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod run;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    let today = Local::now().date_naive();
    let mut store = fixtures::seed(today);

    match cli.command {
        Commands::Ui => cmd_ui(store, today),

        Commands::List {
            search,
            status,
            priority,
            kind,
            project,
            sort,
            limit,
            json,
        } => cmd_list(
            &store, today, search, status, priority, kind, project, sort, limit, json,
        ),

        Commands::Today => cmd_today(&store, today),

        Commands::Overdue => cmd_overdue(&store, today),

        Commands::View { id } => cmd_view(&store, today, id),

        Commands::Add {
            title,
            desc,
            status,
            priority,
            kind,
            project,
            tags,
            due,
            estimate,
            parent,
        } => cmd_add(
            &mut store, today, title, desc, status, priority, kind, project, tags, due, estimate,
            parent,
        ),

        Commands::Stats { json } => cmd_stats(&store, today, json),

        Commands::Projects => cmd_projects(&store),

        Commands::Tags => cmd_tags(&store),

        Commands::Completions { shell } => cmd_completions(shell),
    }
}
