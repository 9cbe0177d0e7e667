//! Blocking modal dialogs for the terminal user interface.
//!
//! Implements the [`Dialogs`] capability over a ratatui terminal: each
//! prompt draws a centered box and blocks on keyboard input until the
//! user responds, matching the event-at-a-time model of the main loop.

use std::io;

use crossterm::event::{self, Event, KeyCode};
use ratatui::{
    backend::Backend,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};

use crate::dialogs::Dialogs;
use crate::tui::colors::{CONFIRM_BG, NOTICE_BG};
use crate::tui::utils::centered_rect;

/// Terminal-backed implementation of [`Dialogs`].
///
/// Borrows the terminal from the event loop for the duration of one prompt.
pub struct TermDialogs<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<'a, B: Backend> TermDialogs<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>) -> Self {
        TermDialogs { terminal }
    }

    fn draw_modal(&mut self, title: &str, message: &str, footer: &str, bg: Color) -> io::Result<()> {
        self.terminal.draw(|f| {
            let area = centered_rect(50, 25, f.area());
            f.render_widget(Clear, area);

            let text = vec![
                Line::from(""),
                Line::from(message.to_string()),
                Line::from(""),
                Line::from(footer.to_string()),
            ];
            let paragraph = Paragraph::new(text)
                .block(
                    Block::default()
                        .title(title.to_string())
                        .borders(Borders::ALL)
                        .style(Style::default().bg(bg).add_modifier(Modifier::BOLD)),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        })?;
        Ok(())
    }
}

impl<B: Backend> Dialogs for TermDialogs<'_, B> {
    fn notify(&mut self, message: &str) -> io::Result<()> {
        self.draw_modal("Notice", message, "Press any key to continue", NOTICE_BG)?;
        // Block until the user acknowledges.
        loop {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }

    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        self.draw_modal(
            "Confirm Action",
            message,
            "Press 'y' to confirm, 'n' to cancel",
            CONFIRM_BG,
        )?;
        loop {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
                    _ => {}
                }
            }
        }
    }
}
