//! Color constants for the terminal user interface.

use ratatui::style::Color;

// Accent colors for the main views; Color::DarkGray is used
// for completed tasks directly where they render.

/// Border and highlight color for the active input box.
pub const ACCENT: Color = Color::Cyan;
/// Background for the notice modal.
pub const NOTICE_BG: Color = Color::Rgb(0, 60, 90);
/// Background for the confirm modal.
pub const CONFIRM_BG: Color = Color::Rgb(114, 0, 0);
/// Pending-count highlight in the stats line.
pub const PENDING: Color = Color::Rgb(255, 215, 0);
/// Completed-count highlight in the stats line.
pub const COMPLETED: Color = Color::Rgb(0, 160, 60);
