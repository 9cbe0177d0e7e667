//! Field types for task views.
//!
//! This module defines the status filter used to select which tasks a view
//! displays.

use crate::task::Task;

/// Status filter for task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task in the store, in current order.
    #[default]
    All,
    /// Tasks not yet completed.
    Pending,
    /// Completed tasks.
    Completed,
}

impl Filter {
    /// Whether a task belongs to the view this filter selects.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Display label for the filter controls.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    /// The next filter in the All -> Pending -> Completed -> All cycle.
    pub fn cycle(self) -> Filter {
        match self {
            Filter::All => Filter::Pending,
            Filter::Pending => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_all_filters() {
        let start = Filter::All;
        assert_eq!(start.cycle(), Filter::Pending);
        assert_eq!(start.cycle().cycle(), Filter::Completed);
        assert_eq!(start.cycle().cycle().cycle(), Filter::All);
    }
}
