//! Task data structure.
//!
//! This module defines the core `Task` struct that represents a single
//! to-do entry with its text, completion flag, and creation date.

use chrono::NaiveDate;

/// A single to-do entry.
///
/// Tasks are created by [`TodoStore::add`](crate::store::TodoStore::add) and
/// owned exclusively by the store. The `id` is unique for the whole session,
/// including tasks that have since been deleted, and `created_at` is fixed at
/// creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub created_at: NaiveDate,
}
