//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    Dashboard,
    TaskDetail,
    Help,
}

/// Input mode for the search field.
#[derive(Clone, Copy, PartialEq)]
pub enum InputMode {
    None,
    Search,
}
