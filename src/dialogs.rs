//! Blocking user prompts as a capability interface.
//!
//! The store stays free of UI concerns: validation failures and destructive
//! actions are surfaced to the user through this trait, supplied by the
//! presentation layer. The TUI implements it with modal boxes; tests
//! implement it with a scripted recorder.

use std::io;

/// Blocking dialogs supplied by the presentation layer.
pub trait Dialogs {
    /// Show a blocking notice the user must acknowledge.
    fn notify(&mut self, message: &str) -> io::Result<()>;

    /// Ask the user to confirm a destructive action.
    /// Returns true only on explicit confirmation.
    fn confirm(&mut self, message: &str) -> io::Result<bool>;
}
