//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    /// Browsing the task list.
    List,
    /// Typing a new task into the input box.
    Input,
    /// Revising the text of one existing task.
    Edit,
    /// Viewing the key reference.
    Help,
}
