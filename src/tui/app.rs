//! Main application logic for the terminal dashboard.
//!
//! The `App` struct owns the session store and the active filter
//! specification, handles input, and renders the dashboard (task table plus
//! summary header), the task detail view, and the help screen.

use std::io;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::dates::format_due_relative;
use crate::derive::{effective_progress, is_due_today, is_overdue, subtask_ratio};
use crate::fields::*;
use crate::filter::TaskFilter;
use crate::stats::DashboardStats;
use crate::store::Store;
use crate::task::Task;
use crate::tui::colors::{tone_color, AMBER};
use crate::tui::enums::{AppState, InputMode};

/// Terminal dashboard state.
pub struct App {
    store: Store,
    today: NaiveDate,
    state: AppState,
    input_mode: InputMode,
    filter: TaskFilter,
    filtered: Vec<u64>,
    table_state: TableState,
}

impl App {
    /// Create the app over a seeded store.
    pub fn new(store: Store, today: NaiveDate) -> Self {
        let mut app = App {
            store,
            today,
            state: AppState::Dashboard,
            input_mode: InputMode::None,
            filter: TaskFilter::default(),
            filtered: Vec::new(),
            table_state: TableState::default(),
        };
        app.update_filtered();
        app
    }

    /// Main event loop: render until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;
            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }

    /// Re-apply the filter, keeping the current selection where possible.
    fn update_filtered(&mut self) {
        let old_selected = self
            .table_state
            .selected()
            .and_then(|idx| self.filtered.get(idx))
            .copied();

        self.filtered = self.filter.apply(&self.store.tasks).iter().map(|t| t.id).collect();

        let restored = old_selected.and_then(|id| self.filtered.iter().position(|&x| x == id));
        match restored {
            Some(idx) => self.table_state.select(Some(idx)),
            None if self.filtered.is_empty() => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
        }
    }

    fn selected_task(&self) -> Option<&Task> {
        self.table_state
            .selected()
            .and_then(|idx| self.filtered.get(idx))
            .and_then(|&id| self.store.task(id))
    }

    fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < self.filtered.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let prev = match self.table_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.table_state.select(Some(prev));
    }

    fn cycle_status(&mut self) {
        self.filter.status = match self.filter.status {
            None => Some(Status::ALL[0]),
            Some(s) => {
                let i = Status::ALL.iter().position(|&v| v == s).unwrap_or(0);
                Status::ALL.get(i + 1).copied()
            }
        };
        self.update_filtered();
    }

    fn cycle_priority(&mut self) {
        self.filter.priority = match self.filter.priority {
            None => Some(Priority::ALL[0]),
            Some(p) => {
                let i = Priority::ALL.iter().position(|&v| v == p).unwrap_or(0);
                Priority::ALL.get(i + 1).copied()
            }
        };
        self.update_filtered();
    }

    fn cycle_kind(&mut self) {
        self.filter.kind = match self.filter.kind {
            None => Some(Kind::ALL[0]),
            Some(k) => {
                let i = Kind::ALL.iter().position(|&v| v == k).unwrap_or(0);
                Kind::ALL.get(i + 1).copied()
            }
        };
        self.update_filtered();
    }

    fn cycle_project(&mut self) {
        let ids: Vec<u64> = self.store.projects.iter().map(|p| p.id).collect();
        self.filter.project = match self.filter.project {
            None => ids.first().copied(),
            Some(id) => {
                let i = ids.iter().position(|&v| v == id).unwrap_or(0);
                ids.get(i + 1).copied()
            }
        };
        self.update_filtered();
    }

    fn clear_filters(&mut self) {
        self.filter = TaskFilter::default();
        self.update_filtered();
    }

    /// Process one input event; returns true when the user wants to quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }

            if self.input_mode == InputMode::Search {
                match key.code {
                    KeyCode::Esc => {
                        self.filter.search.clear();
                        self.input_mode = InputMode::None;
                        self.update_filtered();
                    }
                    KeyCode::Enter => self.input_mode = InputMode::None,
                    KeyCode::Backspace => {
                        self.filter.search.pop();
                        self.update_filtered();
                    }
                    KeyCode::Char(c) => {
                        self.filter.search.push(c);
                        self.update_filtered();
                    }
                    _ => {}
                }
                return Ok(false);
            }

            match self.state {
                AppState::Dashboard => match key.code {
                    KeyCode::Char('q') => return Ok(true),
                    KeyCode::Char('/') => self.input_mode = InputMode::Search,
                    KeyCode::Char('s') => self.cycle_status(),
                    KeyCode::Char('p') => self.cycle_priority(),
                    KeyCode::Char('k') => self.cycle_kind(),
                    KeyCode::Char('o') => self.cycle_project(),
                    KeyCode::Char('c') => self.clear_filters(),
                    KeyCode::Char('h') => self.state = AppState::Help,
                    KeyCode::Up => self.select_prev(),
                    KeyCode::Down => self.select_next(),
                    KeyCode::Enter => {
                        if self.selected_task().is_some() {
                            self.state = AppState::TaskDetail;
                        }
                    }
                    _ => {}
                },
                AppState::TaskDetail | AppState::Help => match key.code {
                    KeyCode::Char('q') => return Ok(true),
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('h') => {
                        self.state = AppState::Dashboard
                    }
                    _ => {}
                },
            }
        }
        Ok(false)
    }

    fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        match self.state {
            AppState::Dashboard => self.render_dashboard(f, area),
            AppState::TaskDetail => self.render_detail(f, area),
            AppState::Help => self.render_help(f, area),
        }
    }

    fn render_dashboard(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // summary header
                Constraint::Length(3), // search and filter bar
                Constraint::Min(0),    // task table
                Constraint::Length(1), // key hints
            ])
            .split(area);

        self.render_summary(f, chunks[0]);
        self.render_filter_bar(f, chunks[1]);
        self.render_table(f, chunks[2]);

        let hints = Paragraph::new(
            " / search  s status  p priority  k kind  o project  c clear  Enter detail  h help  q quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hints, chunks[3]);
    }

    fn render_summary(&self, f: &mut Frame, area: Rect) {
        let stats = DashboardStats::compute(&self.store.tasks, self.today);
        let overdue_style = if stats.overdue > 0 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let line = Line::from(vec![
            Span::styled("TASKDASH", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(
                "  {} tasks · {} open · {}% complete · ",
                stats.total, stats.open, stats.completion_rate
            )),
            Span::styled(format!("{} overdue", stats.overdue), overdue_style),
            Span::raw(" · "),
            Span::styled(
                format!("{} due today", stats.due_today),
                Style::default().fg(AMBER),
            ),
        ]);
        let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(header, area);
    }

    fn render_filter_bar(&self, f: &mut Frame, area: Rect) {
        let search = if self.input_mode == InputMode::Search {
            format!("{}█", self.filter.search)
        } else if self.filter.search.is_empty() {
            "-".to_string()
        } else {
            self.filter.search.clone()
        };
        let status = self.filter.status.map(format_status).unwrap_or("All");
        let priority = self.filter.priority.map(format_priority).unwrap_or("All");
        let kind = self.filter.kind.map(format_kind).unwrap_or("All");
        let project = self
            .filter
            .project
            .and_then(|id| self.store.project(id))
            .map(|p| p.name.as_str())
            .unwrap_or("All");

        let text = format!(
            "Search: {search}   Status: {status}   Priority: {priority}   Kind: {kind}   Project: {project}"
        );
        let style = if self.filter.is_unconstrained() && self.input_mode == InputMode::None {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let bar = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Filters"));
        f.render_widget(bar, area);
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let header_cells = ["ID", "Kind", "Status", "Pri", "Due", "Prog", "Project", "Title"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1);

        let rows: Vec<Row> = self
            .filtered
            .iter()
            .filter_map(|&id| self.store.task(id))
            .map(|task| {
                let overdue = is_overdue(task, self.today);
                let due_style = if overdue {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else if is_due_today(task, self.today) {
                    Style::default().fg(AMBER)
                } else {
                    Style::default()
                };
                let dimmed = task.status.is_terminal();
                let title_style = if dimmed {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default()
                };
                let tags = if task.tags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", task.tags.join(","))
                };

                Row::new(vec![
                    Cell::from(task.id.to_string()),
                    Cell::from(format_kind(task.kind))
                        .style(Style::default().fg(tone_color(task.kind.tone()))),
                    Cell::from(format_status(task.status))
                        .style(Style::default().fg(tone_color(task.status.tone()))),
                    Cell::from(format_priority(task.priority))
                        .style(Style::default().fg(tone_color(task.priority.tone()))),
                    Cell::from(format_due_relative(task.due, self.today)).style(due_style),
                    Cell::from(format!("{}%", effective_progress(task))),
                    Cell::from(self.store.project_name(task.project).to_string()),
                    Cell::from(format!("{}{}", task.title, tags)).style(title_style),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(4),  // ID
            Constraint::Length(12), // Kind
            Constraint::Length(12), // Status
            Constraint::Length(9),  // Pri
            Constraint::Length(10), // Due
            Constraint::Length(5),  // Prog
            Constraint::Length(16), // Project
            Constraint::Min(25),    // Title
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Tasks ({}/{})",
                self.filtered.len(),
                self.store.tasks.len()
            )))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_detail(&mut self, f: &mut Frame, area: Rect) {
        let Some(task) = self.selected_task() else {
            self.state = AppState::Dashboard;
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("#{} ", task.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    task.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::raw(""),
        ];
        if let Some(desc) = &task.description {
            lines.push(Line::raw(desc.clone()));
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(vec![
            Span::raw("Kind: "),
            Span::styled(
                format_kind(task.kind),
                Style::default().fg(tone_color(task.kind.tone())),
            ),
            Span::raw("   Status: "),
            Span::styled(
                format_status(task.status),
                Style::default().fg(tone_color(task.status.tone())),
            ),
            Span::raw("   Priority: "),
            Span::styled(
                format_priority(task.priority),
                Style::default().fg(tone_color(task.priority.tone())),
            ),
        ]));
        lines.push(Line::raw(format!(
            "Project: {}   Assignee: {}   Reporter: {}",
            self.store.project_name(task.project),
            self.store.member_name(task.assignee),
            self.store.member_name(task.reporter),
        )));

        let mut due_line = format!(
            "Due: {}   Progress: {}%",
            format_due_relative(task.due, self.today),
            effective_progress(task)
        );
        if is_overdue(task, self.today) {
            due_line.push_str("   OVERDUE");
        } else if is_due_today(task, self.today) {
            due_line.push_str("   DUE TODAY");
        }
        lines.push(Line::raw(due_line));

        if let Some((done, total)) = subtask_ratio(task, &self.store.tasks) {
            lines.push(Line::raw(format!("Subtasks: {done}/{total} done")));
        }
        if let Some(est) = task.estimated_hours {
            match task.actual_hours {
                Some(act) => lines.push(Line::raw(format!("Hours: {act:.1} of {est:.1} estimated"))),
                None => lines.push(Line::raw(format!("Hours: {est:.1} estimated"))),
            }
        }
        if !task.tags.is_empty() {
            lines.push(Line::raw(format!("Tags: {}", task.tags.join(", "))));
        }
        for (key, value) in &task.custom_fields {
            lines.push(Line::raw(format!("{key}: {value}")));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Esc to go back",
            Style::default().fg(Color::DarkGray),
        ));

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Task"));
        f.render_widget(detail, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled("Keys", Style::default().add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::raw("/        edit search text (Enter keep, Esc clear)"),
            Line::raw("s        cycle status filter"),
            Line::raw("p        cycle priority filter"),
            Line::raw("k        cycle kind filter"),
            Line::raw("o        cycle project filter"),
            Line::raw("c        clear all filters"),
            Line::raw("Up/Down  move selection"),
            Line::raw("Enter    task detail"),
            Line::raw("h        toggle this help"),
            Line::raw("q        quit"),
        ];
        let help = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"));
        f.render_widget(help, area);
    }
}
