//! # Todo - Terminal To-Do List
//!
//! A single-session, in-memory to-do list manager with a terminal user
//! interface.
//!
//! ## Key Features
//!
//! - **Quick Capture**: Type a task and press Enter; new tasks appear at the
//!   top of the list
//! - **Inline Editing**: Revise any task's text in place, save with Enter or
//!   cancel with Esc
//! - **Status Filters**: Switch between all, pending, and completed views
//!   with live counts
//! - **Safe Cleanup**: Clearing completed tasks always asks for confirmation
//!
//! ## Quick Start
//!
//! ```bash
//! todo
//! ```
//!
//! Inside the UI: `a` to add, `Space` to toggle, `e` to edit, `d` to delete,
//! `x` to clear completed, `1`/`2`/`3` to filter, `h` for help, `q` to quit.
//!
//! All state lives in memory for the duration of the session; nothing is
//! written to disk.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub mod dialogs;
pub mod fields;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod dialogs;
    pub mod enums;
    pub mod input;
    pub mod utils;
}

use tui::app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("UI error: {err}");
        std::process::exit(1);
    }
    Ok(())
}
