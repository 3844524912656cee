//! Command implementations for the CLI interface.
//!
//! Each subcommand reads the session store, runs the filter/derivation/stats
//! core, and renders tables (or JSON with `--json`). Nothing is written to
//! disk; `add` only changes the store for the lifetime of the process.

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use chrono::{NaiveDate, Utc};

use crate::cli::Cli;
use crate::dates::{format_due_relative, parse_due_input, split_and_normalise_tags, truncate};
use crate::derive::{effective_progress, is_due_soon, is_due_today, is_overdue, subtask_ratio};
use crate::fields::*;
use crate::filter::TaskFilter;
use crate::stats::{project_summaries, tag_counts, DashboardStats};
use crate::store::Store;
use crate::task::Task;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard.
    Ui,

    /// List tasks with search and filters.
    List {
        /// Case-insensitive text search over title, description, and tags.
        #[arg(long, short, default_value = "")]
        search: String,
        /// Status filter: todo | in-progress | review | testing | done | blocked | cancelled | all.
        #[arg(long, default_value = FILTER_ALL)]
        status: String,
        /// Priority filter: low | medium | high | critical | all.
        #[arg(long, default_value = FILTER_ALL)]
        priority: String,
        /// Kind filter: task | bug | feature | epic | story | improvement | all.
        #[arg(long, default_value = FILTER_ALL)]
        kind: String,
        /// Project name or id.
        #[arg(long)]
        project: Option<String>,
        /// Sort key.
        #[arg(long, value_enum, default_value_t = SortKey::Due)]
        sort: SortKey,
        /// Limit number of rows printed.
        #[arg(long)]
        limit: Option<usize>,
        /// Print matching tasks as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show tasks due today.
    Today,

    /// Show overdue tasks.
    Overdue,

    /// View a single task by id or title.
    View {
        /// Task id or exact title.
        id: String,
    },

    /// Add a task to the session store.
    Add {
        /// Short title for the task.
        title: String,
        /// Optional longer description.
        #[arg(long)]
        desc: Option<String>,
        /// Status: todo | in-progress | review | testing | done | blocked | cancelled.
        #[arg(long, value_enum, default_value_t = Status::Todo)]
        status: Status,
        /// Priority: low | medium | high | critical.
        #[arg(long, value_enum, default_value_t = Priority::Medium)]
        priority: Priority,
        /// Kind: task | bug | feature | epic | story | improvement.
        #[arg(long, value_enum, default_value_t = Kind::Task)]
        kind: Kind,
        /// Project name or id.
        #[arg(long)]
        project: Option<String>,
        /// Comma-separated tags. May be repeated.
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", "in 3d", or a weekday.
        #[arg(long)]
        due: Option<String>,
        /// Estimated hours.
        #[arg(long)]
        estimate: Option<f32>,
        /// Parent task id or title.
        #[arg(long)]
        parent: Option<String>,
    },

    /// Aggregate statistics for the task collection.
    Stats {
        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List projects with task rollups.
    Projects,

    /// List distinct tags and counts.
    Tags,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal dashboard.
pub fn cmd_ui(store: Store, today: NaiveDate) {
    if let Err(e) = run_tui(store, today) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// List tasks matching the filter specification.
#[allow(clippy::too_many_arguments)]
pub fn cmd_list(
    store: &Store,
    today: NaiveDate,
    search: String,
    status: String,
    priority: String,
    kind: String,
    project: Option<String>,
    sort: SortKey,
    limit: Option<usize>,
    json: bool,
) {
    let project_id = match project {
        Some(ref p) => match store.resolve_project(p) {
            Ok(id) => Some(id),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let filter = TaskFilter::parse(&search, &status, &priority, &kind, project_id);
    let mut tasks = filter.apply(&store.tasks);

    match sort {
        // Undated tasks sink to the bottom.
        SortKey::Due => tasks.sort_by_key(|t| (t.due.is_none(), t.due)),
        SortKey::Priority => tasks.sort_by(|a, b| b.priority.cmp(&a.priority).then(a.id.cmp(&b.id))),
        SortKey::Id => tasks.sort_by_key(|t| t.id),
    }
    if let Some(n) = limit {
        tasks.truncate(n);
    }

    if json {
        print_json(&tasks);
    } else {
        print_task_table(store, &tasks, today);
    }
}

/// Show tasks whose due date is today, in collection order.
pub fn cmd_today(store: &Store, today: NaiveDate) {
    let tasks: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| is_due_today(t, today))
        .collect();
    if tasks.is_empty() {
        println!("Nothing due today.");
        return;
    }
    print_task_table(store, &tasks, today);
}

/// Show overdue tasks, most late first.
pub fn cmd_overdue(store: &Store, today: NaiveDate) {
    let mut tasks: Vec<&Task> = store
        .tasks
        .iter()
        .filter(|t| is_overdue(t, today))
        .collect();
    tasks.sort_by_key(|t| t.due);
    if tasks.is_empty() {
        println!("Nothing overdue.");
        return;
    }
    print_task_table(store, &tasks, today);
}

/// View one task with its derived facts.
pub fn cmd_view(store: &Store, today: NaiveDate, identifier: String) {
    let id = match store.resolve_task(&identifier) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let Some(task) = store.task(id) else {
        eprintln!("Task with id {id} not found");
        std::process::exit(1);
    };

    println!("#{} {}", task.id, task.title);
    if let Some(desc) = &task.description {
        println!("  {desc}");
    }
    println!("  Kind:      {}", format_kind(task.kind));
    println!("  Status:    {}", format_status(task.status));
    println!("  Priority:  {}", format_priority(task.priority));
    println!("  Project:   {}", store.project_name(task.project));
    println!("  Assignee:  {}", store.member_name(task.assignee));
    println!("  Reporter:  {}", store.member_name(task.reporter));
    println!("  Due:       {}", format_due_relative(task.due, today));
    println!("  Progress:  {}%", effective_progress(task));
    if is_overdue(task, today) {
        println!("  Overdue");
    } else if is_due_today(task, today) {
        println!("  Due today");
    } else if is_due_soon(task, today, 7) {
        println!("  Due within a week");
    }
    if let Some((done, total)) = subtask_ratio(task, &store.tasks) {
        println!("  Subtasks:  {done}/{total} done");
    }
    if let (Some(est), act) = (task.estimated_hours, task.actual_hours) {
        match act {
            Some(act) => println!("  Hours:     {act:.1} of {est:.1} estimated"),
            None => println!("  Hours:     {est:.1} estimated"),
        }
    }
    if !task.tags.is_empty() {
        println!("  Tags:      {}", task.tags.join(", "));
    }
    for (key, value) in &task.custom_fields {
        println!("  {key}: {value}");
    }
}

/// Add a task to the session store and print the assigned id.
#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    store: &mut Store,
    today: NaiveDate,
    title: String,
    desc: Option<String>,
    status: Status,
    priority: Priority,
    kind: Kind,
    project: Option<String>,
    tags: Vec<String>,
    due: Option<String>,
    estimate: Option<f32>,
    parent: Option<String>,
) {
    let project_id = match project {
        Some(ref p) => match store.resolve_project(p) {
            Ok(id) => Some(id),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        None => None,
    };
    let parent_id = match parent {
        Some(ref p) => match store.resolve_task(p) {
            Ok(id) => Some(id),
            Err(e) => {
                eprintln!("Error resolving parent: {e}");
                std::process::exit(1);
            }
        },
        None => None,
    };
    let due = match due {
        Some(ref s) => match parse_due_input(s, today) {
            Some(d) => Some(d),
            None => {
                eprintln!("Unrecognised due date '{s}'");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let now_utc = Utc::now().timestamp();
    let mut task = Task::new(store.next_task_id(), &title);
    task.description = desc;
    task.status = status;
    task.priority = priority;
    task.kind = kind;
    task.project = project_id;
    task.parent = parent_id;
    task.tags = split_and_normalise_tags(&tags);
    task.due = due;
    task.estimated_hours = estimate;
    task.created_at_utc = now_utc;
    task.updated_at_utc = now_utc;

    let id = store.add_task(task);
    if let Some(added) = store.task(id) {
        print_task_table(store, &[added], today);
    }
    println!("Added task {id} (session only, not persisted)");
}

/// Print the aggregate statistics summary.
pub fn cmd_stats(store: &Store, today: NaiveDate, json: bool) {
    let stats = DashboardStats::compute(&store.tasks, today);
    if json {
        print_json(&stats);
        return;
    }

    println!(
        "{} tasks, {} open, {}% complete",
        stats.total, stats.open, stats.completion_rate
    );
    println!("{} overdue, {} due today", stats.overdue, stats.due_today);

    println!("\nBy status:");
    for (status, count) in &stats.by_status {
        println!(
            "  {:<12} {:>3}  ({}%)",
            format_status(*status),
            count,
            crate::stats::percentage_of(*count, stats.total)
        );
    }
    println!("By priority:");
    for (priority, count) in &stats.by_priority {
        println!(
            "  {:<12} {:>3}  ({}%)",
            format_priority(*priority),
            count,
            crate::stats::percentage_of(*count, stats.total)
        );
    }
    println!("By kind:");
    for (kind, count) in &stats.by_kind {
        println!(
            "  {:<12} {:>3}  ({}%)",
            format_kind(*kind),
            count,
            crate::stats::percentage_of(*count, stats.total)
        );
    }
}

/// List projects with their task rollups.
pub fn cmd_projects(store: &Store) {
    let summaries = project_summaries(&store.projects, &store.tasks);
    if summaries.is_empty() {
        println!("No projects.");
        return;
    }
    println!(
        "{:<4} {:<20} {:<10} {:>6} {:>6} {:>6}",
        "ID", "Name", "Status", "Tasks", "Done", "Prog"
    );
    for s in summaries {
        println!(
            "{:<4} {:<20} {:<10} {:>6} {:>6} {:>5}%",
            s.id,
            truncate(&s.name, 20),
            format_project_status(s.status),
            s.total_tasks,
            s.completed_tasks,
            s.progress
        );
    }
}

/// List distinct tags and their counts.
pub fn cmd_tags(store: &Store) {
    let counts = tag_counts(&store.tasks);
    if counts.is_empty() {
        println!("No tags.");
        return;
    }
    for (tag, count) in counts {
        println!("{tag} ({count})");
    }
}

/// Generate shell completion scripts to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Print tasks in a formatted table.
pub fn print_task_table(store: &Store, tasks: &[&Task], today: NaiveDate) {
    println!(
        "{:<4} {:<2} {:<12} {:<12} {:<9} {:<10} {:>5} {:<16} {}",
        "ID", "", "Kind", "Status", "Pri", "Due", "Prog", "Project", "Title [tags]"
    );
    for t in tasks {
        // "!" marks overdue, "*" marks due today.
        let flag = if is_overdue(t, today) {
            "!"
        } else if is_due_today(t, today) {
            "*"
        } else {
            ""
        };
        let tags = if t.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", t.tags.join(","))
        };
        println!(
            "{:<4} {:<2} {:<12} {:<12} {:<9} {:<10} {:>4}% {:<16} {}{}",
            t.id,
            flag,
            format_kind(t.kind),
            format_status(t.status),
            format_priority(t.priority),
            format_due_relative(t.due, today),
            effective_progress(t),
            truncate(store.project_name(t.project), 16),
            t.title,
            tags
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}
