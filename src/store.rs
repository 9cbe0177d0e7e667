//! In-memory task store and its transition operations.
//!
//! This module provides the `TodoStore` struct holding the authoritative
//! task list for the session, along with the validation error raised when
//! task text is empty and the aggregate counts derived from the list.
//!
//! The store is session-scoped: it starts empty, lives in memory, and is
//! discarded when the process exits. Every operation is synchronous and
//! atomic with respect to the list; the store is owned and mutated by
//! exactly one actor (the UI event loop).

use chrono::Local;
use thiserror::Error;

use crate::fields::Filter;
use crate::task::Task;

/// Raised when `add` or `edit` receive empty or whitespace-only text.
///
/// The failing operation leaves the store untouched; recovery is entirely
/// the caller's concern (surfacing a notice to the user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task text cannot be empty")]
    EmptyText,
}

/// Aggregate counts over the current task list.
///
/// `total == pending + completed` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

/// The authoritative in-memory collection of tasks.
///
/// Tasks are ordered newest-first: `add` prepends. Ids come from a
/// monotonic session counter and are never reused, even after a delete.
#[derive(Debug)]
pub struct TodoStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TodoStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new task with the given text, returning its id.
    ///
    /// The text is trimmed before storing; empty or whitespace-only input
    /// is rejected with [`ValidationError::EmptyText`] and the list is left
    /// unchanged. The new task is pending and is prepended to the list.
    pub fn add(&mut self, text: &str) -> Result<u64, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.insert(
            0,
            Task {
                id,
                text: text.to_string(),
                completed: false,
                created_at: Local::now().date_naive(),
            },
        );
        Ok(id)
    }

    /// Remove the task with the given id. Silent no-op if absent.
    pub fn delete(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Flip the completion flag on the task with the given id.
    /// Silent no-op if absent.
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.get_mut(id) {
            task.completed = !task.completed;
        }
    }

    /// Replace the text of the task with the given id.
    ///
    /// The text is trimmed before storing; empty or whitespace-only input is
    /// rejected with [`ValidationError::EmptyText`] without touching the
    /// task. `completed` and `created_at` are preserved. An absent id is a
    /// silent no-op (validation still applies first).
    pub fn edit(&mut self, id: u64, new_text: &str) -> Result<(), ValidationError> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if let Some(task) = self.get_mut(id) {
            task.text = new_text.to_string();
        }
        Ok(())
    }

    /// Remove every completed task, preserving the order of the rest.
    /// Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// A lazy, restartable view of the tasks selected by `filter`,
    /// in the store's current order. Does not mutate the list.
    pub fn filtered_view(&self, filter: Filter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Aggregate counts computed from the current list.
    pub fn counts(&self) -> Counts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Counts {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks in current order, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
