//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which owns the task store and all
//! per-session UI state, handles keyboard input, and renders the interface.
//! Every transition runs through `handle_key`, dispatched from the single
//! event loop in `run`; there is no UI state outside the struct's fields.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};

use crate::dialogs::Dialogs;
use crate::fields::Filter;
use crate::store::TodoStore;
use crate::tui::{
    colors::{ACCENT, COMPLETED, PENDING},
    dialogs::TermDialogs,
    enums::AppState,
    input::InputField,
    utils::centered_rect,
};

/// The task currently being revised: its id and the working text buffer.
///
/// Held as an `Option` on [`App`] so at most one task is ever in edit mode.
struct EditState {
    id: u64,
    input: InputField,
}

/// Main application state for the terminal user interface.
///
/// Owns the authoritative [`TodoStore`] and every piece of transient UI
/// state: the active filter, the new-task input buffer, the edit-mode pair,
/// the table selection, and the status message.
pub struct App {
    state: AppState,
    store: TodoStore,
    filter: Filter,
    list_state: TableState,
    visible: Vec<u64>,
    input: InputField,
    editing: Option<EditState>,
    status_message: String,
}

impl App {
    /// Create a new App with an empty task store.
    pub fn new() -> Self {
        App {
            state: AppState::List,
            store: TodoStore::new(),
            filter: Filter::All,
            list_state: TableState::default(),
            visible: Vec::new(),
            input: InputField::new(),
            editing: None,
            status_message: String::new(),
        }
    }

    /// The task store, exposed for assertions in tests.
    #[cfg(test)]
    fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Rebuild the visible id list from the store and the active filter.
    ///
    /// Attempts to preserve the current selection; falls back to the first
    /// row when the selected task left the view.
    fn update_visible(&mut self) {
        let old_selected_id = self
            .list_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .copied();

        self.visible = self.store.filtered_view(self.filter).map(|t| t.id).collect();

        if let Some(old_id) = old_selected_id {
            if let Some(new_idx) = self.visible.iter().position(|&id| id == old_id) {
                self.list_state.select(Some(new_idx));
                return;
            }
        }
        self.list_state.select(if self.visible.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    /// The id of the task under the selection cursor, if any.
    fn selected_id(&self) -> Option<u64> {
        self.list_state
            .selected()
            .and_then(|idx| self.visible.get(idx))
            .copied()
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Switch the active filter and refresh the view.
    fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.update_visible();
        self.set_status_message(format!(
            "Showing {} tasks ({})",
            filter.label().to_lowercase(),
            self.visible.len()
        ));
    }

    /// Handle one key event, dispatched on the current application state.
    ///
    /// Returns true if the application should quit.
    fn handle_key(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
        dialogs: &mut dyn Dialogs,
    ) -> io::Result<bool> {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            return Ok(true);
        }
        match self.state {
            AppState::List => self.handle_list_key(key, dialogs),
            AppState::Input => self.handle_input_key(key, dialogs),
            AppState::Edit => self.handle_edit_key(key, dialogs),
            AppState::Help => {
                if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h')) {
                    self.state = AppState::List;
                }
                Ok(false)
            }
        }
    }

    /// Handle keyboard input when browsing the task list.
    fn handle_list_key(&mut self, key: KeyCode, dialogs: &mut dyn Dialogs) -> io::Result<bool> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Up => {
                if let Some(selected) = self.list_state.selected() {
                    if selected > 0 {
                        self.list_state.select(Some(selected - 1));
                    }
                } else if !self.visible.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.list_state.selected() {
                    if selected + 1 < self.visible.len() {
                        self.list_state.select(Some(selected + 1));
                    }
                } else if !self.visible.is_empty() {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('a') => {
                self.input.clear();
                self.state = AppState::Input;
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.store.toggle(id);
                    let done = self.store.get(id).map(|t| t.completed).unwrap_or(false);
                    self.update_visible();
                    self.set_status_message(if done {
                        format!("Task #{id} completed")
                    } else {
                        format!("Task #{id} reopened")
                    });
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    if let Some(task) = self.store.get(id) {
                        self.editing = Some(EditState {
                            id,
                            input: InputField::with_value(&task.text),
                        });
                        self.state = AppState::Edit;
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.store.delete(id);
                    self.update_visible();
                    self.set_status_message(format!("Task #{id} deleted"));
                }
            }
            KeyCode::Char('x') => {
                let completed = self.store.counts().completed;
                if completed == 0 {
                    self.set_status_message("No completed tasks to clear".to_string());
                } else if dialogs.confirm(&format!(
                    "Clear {completed} completed task(s)? This cannot be undone."
                ))? {
                    let removed = self.store.clear_completed();
                    self.update_visible();
                    self.set_status_message(format!("Cleared {removed} completed task(s)"));
                }
            }
            KeyCode::Char('1') => self.set_filter(Filter::All),
            KeyCode::Char('2') => self.set_filter(Filter::Pending),
            KeyCode::Char('3') => self.set_filter(Filter::Completed),
            KeyCode::Char('f') => self.set_filter(self.filter.cycle()),
            KeyCode::Char('h') => {
                self.state = AppState::Help;
            }
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input while typing a new task.
    fn handle_input_key(&mut self, key: KeyCode, dialogs: &mut dyn Dialogs) -> io::Result<bool> {
        match key {
            KeyCode::Enter => match self.store.add(&self.input.value) {
                Ok(id) => {
                    self.input.clear();
                    self.state = AppState::List;
                    self.update_visible();
                    if let Some(pos) = self.visible.iter().position(|&v| v == id) {
                        self.list_state.select(Some(pos));
                    }
                    self.set_status_message(format!("Task #{id} added"));
                }
                Err(_) => dialogs.notify("Please enter a task")?,
            },
            KeyCode::Esc => {
                self.input.clear();
                self.state = AppState::List;
            }
            KeyCode::Char(c) => self.input.handle_char(c),
            KeyCode::Backspace => self.input.handle_backspace(),
            KeyCode::Delete => self.input.handle_delete(),
            KeyCode::Left => self.input.move_cursor_left(),
            KeyCode::Right => self.input.move_cursor_right(),
            KeyCode::Home => self.input.move_cursor_home(),
            KeyCode::End => self.input.move_cursor_end(),
            _ => {}
        }
        Ok(false)
    }

    /// Handle keyboard input while revising an existing task.
    ///
    /// Enter saves and leaves edit mode; Esc cancels without mutation.
    fn handle_edit_key(&mut self, key: KeyCode, dialogs: &mut dyn Dialogs) -> io::Result<bool> {
        let Some(edit) = self.editing.as_mut() else {
            self.state = AppState::List;
            return Ok(false);
        };
        match key {
            KeyCode::Enter => {
                let id = edit.id;
                let text = edit.input.value.clone();
                match self.store.edit(id, &text) {
                    Ok(()) => {
                        self.editing = None;
                        self.state = AppState::List;
                        self.update_visible();
                        self.set_status_message(format!("Task #{id} updated"));
                    }
                    Err(_) => dialogs.notify("Task cannot be empty")?,
                }
            }
            KeyCode::Esc => {
                self.editing = None;
                self.state = AppState::List;
            }
            KeyCode::Char(c) => edit.input.handle_char(c),
            KeyCode::Backspace => edit.input.handle_backspace(),
            KeyCode::Delete => edit.input.handle_delete(),
            KeyCode::Left => edit.input.move_cursor_left(),
            KeyCode::Right => edit.input.move_cursor_right(),
            KeyCode::Home => edit.input.move_cursor_home(),
            KeyCode::End => edit.input.move_cursor_end(),
            _ => {}
        }
        Ok(false)
    }

    /// Render the title header.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled("MY TODO LIST", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                "Stay organized and productive",
                Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render the always-visible new-task input box.
    fn render_input(&self, f: &mut Frame, area: Rect) {
        let active = self.state == AppState::Input;
        let border = if active {
            Style::default().fg(ACCENT)
        } else {
            Style::default()
        };
        let title = if active {
            "New Task (Enter to add, Esc to cancel)"
        } else {
            "New Task (press 'a' to type)"
        };
        let input = Paragraph::new(self.input.value.as_str())
            .block(Block::default().borders(Borders::ALL).title(title).border_style(border));
        f.render_widget(input, area);

        if active {
            f.set_cursor_position((area.x + self.input.cursor as u16 + 1, area.y + 1));
        }
    }

    /// Render the counts and the filter controls on one line.
    fn render_stats(&self, f: &mut Frame, area: Rect) {
        let counts = self.store.counts();
        let mut spans = vec![
            Span::raw(format!(" Total: {}", counts.total)),
            Span::raw("  "),
            Span::styled(
                format!("Pending: {}", counts.pending),
                Style::default().fg(PENDING),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Completed: {}", counts.completed),
                Style::default().fg(COMPLETED),
            ),
            Span::raw("  |  "),
        ];
        for (key, filter) in [
            ('1', Filter::All),
            ('2', Filter::Pending),
            ('3', Filter::Completed),
        ] {
            let style = if filter == self.filter {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!("[{key}] {}", filter.label()), style));
            spans.push(Span::raw("  "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Render the task table, or the empty-state message when there is
    /// nothing to show.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(format!(
            "Tasks ({}/{}) - Press 'h' for help",
            self.visible.len(),
            self.store.len()
        ));

        if self.visible.is_empty() {
            let message = if self.store.is_empty() {
                "No tasks yet. Add one to get started!".to_string()
            } else {
                format!("No {} tasks", self.filter.label().to_lowercase())
            };
            let empty = Paragraph::new(vec![Line::from(""), Line::from(message)])
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let header = Row::new(
            ["", "Task", "Created"]
                .iter()
                .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))),
        )
        .height(1);

        let rows: Vec<Row> = self
            .visible
            .iter()
            .filter_map(|&id| self.store.get(id))
            .map(|task| {
                let mark = if task.completed { "[x]" } else { "[ ]" };
                let style = if task.completed {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                Row::new(vec![
                    Cell::from(mark),
                    Cell::from(task.text.clone()),
                    Cell::from(task.created_at.format("%Y-%m-%d").to_string()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(3),  // Checkbox
            Constraint::Min(20),    // Text
            Constraint::Length(10), // Created
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.list_state);
    }

    /// Render the edit dialog over the task list.
    fn render_edit(&self, f: &mut Frame, area: Rect) {
        let Some(edit) = self.editing.as_ref() else {
            return;
        };
        let area = centered_rect(60, 20, area);
        f.render_widget(Clear, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let input = Paragraph::new(edit.input.value.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Edit Task #{} (Enter to save, Esc to cancel)", edit.id))
                .border_style(Style::default().fg(ACCENT)),
        );
        f.render_widget(input, chunks[0]);
        f.set_cursor_position((chunks[0].x + edit.input.cursor as u16 + 1, chunks[0].y + 1));
    }

    /// Render the key reference screen.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Key Reference",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("a          Type a new task (Enter adds it)"),
            Line::from("Space      Toggle the selected task"),
            Line::from("e          Edit the selected task"),
            Line::from("d          Delete the selected task"),
            Line::from("x          Clear all completed tasks (asks first)"),
            Line::from("1 / 2 / 3  Show all / pending / completed tasks"),
            Line::from("f          Cycle through the filters"),
            Line::from("Up / Down  Move the selection"),
            Line::from("h          Toggle this screen"),
            Line::from("q / Esc    Quit"),
        ];
        let help = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .alignment(Alignment::Center);
        f.render_widget(help, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::List => {
                    format!("Tasks: {} | Press 'h' for help", self.visible.len())
                }
                AppState::Input => "Add New Task".to_string(),
                AppState::Edit => "Edit Task".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };
        let status = Paragraph::new(status_text)
            .style(Style::default().bg(ACCENT).fg(Color::Black))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // New-task input
                Constraint::Length(1), // Counts and filters
                Constraint::Min(0),    // Task list
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_input(f, chunks[1]);
        self.render_stats(f, chunks[2]);

        match self.state {
            AppState::Help => self.render_help(f, chunks[3]),
            AppState::Edit => {
                self.render_task_list(f, chunks[3]);
                self.render_edit(f, chunks[3]);
            }
            _ => self.render_task_list(f, chunks[3]),
        }

        self.render_status_bar(f, chunks[4]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.status_message.clear();
                    let mut dialogs = TermDialogs::new(terminal);
                    if self.handle_key(key.code, key.modifiers, &mut dialogs)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted stand-in for the blocking terminal dialogs.
    struct ScriptedDialogs {
        notices: Vec<String>,
        confirms: Vec<String>,
        answer: bool,
    }

    impl ScriptedDialogs {
        fn new(answer: bool) -> Self {
            ScriptedDialogs {
                notices: Vec::new(),
                confirms: Vec::new(),
                answer,
            }
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn notify(&mut self, message: &str) -> io::Result<()> {
            self.notices.push(message.to_string());
            Ok(())
        }

        fn confirm(&mut self, message: &str) -> io::Result<bool> {
            self.confirms.push(message.to_string());
            Ok(self.answer)
        }
    }

    fn press(app: &mut App, dialogs: &mut ScriptedDialogs, key: KeyCode) {
        app.handle_key(key, KeyModifiers::empty(), dialogs).unwrap();
    }

    fn type_text(app: &mut App, dialogs: &mut ScriptedDialogs, text: &str) {
        for c in text.chars() {
            press(app, dialogs, KeyCode::Char(c));
        }
    }

    fn add_task(app: &mut App, dialogs: &mut ScriptedDialogs, text: &str) {
        press(app, dialogs, KeyCode::Char('a'));
        type_text(app, dialogs, text);
        press(app, dialogs, KeyCode::Enter);
    }

    fn visible_texts(app: &App) -> Vec<String> {
        app.visible
            .iter()
            .filter_map(|&id| app.store().get(id))
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn typing_and_enter_adds_a_task() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);

        add_task(&mut app, &mut dialogs, "buy milk");

        assert_eq!(app.store().len(), 1);
        assert!(app.state == AppState::List);
        assert_eq!(visible_texts(&app), vec!["buy milk"]);
        assert!(dialogs.notices.is_empty());
    }

    #[test]
    fn empty_submit_raises_blocking_notice() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);

        press(&mut app, &mut dialogs, KeyCode::Char('a'));
        type_text(&mut app, &mut dialogs, "   ");
        press(&mut app, &mut dialogs, KeyCode::Enter);

        assert!(app.store().is_empty());
        assert_eq!(dialogs.notices, vec!["Please enter a task"]);
        // Still in the input box so the user can fix the text.
        assert!(app.state == AppState::Input);
    }

    #[test]
    fn escape_abandons_the_input() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);

        press(&mut app, &mut dialogs, KeyCode::Char('a'));
        type_text(&mut app, &mut dialogs, "half typed");
        press(&mut app, &mut dialogs, KeyCode::Esc);

        assert!(app.store().is_empty());
        assert!(app.state == AppState::List);
        assert!(app.input.value.is_empty());
    }

    #[test]
    fn space_toggles_the_selected_task() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "a");

        press(&mut app, &mut dialogs, KeyCode::Char(' '));
        assert!(app.store().tasks()[0].completed);
        press(&mut app, &mut dialogs, KeyCode::Char(' '));
        assert!(!app.store().tasks()[0].completed);
    }

    #[test]
    fn edit_flow_saves_on_enter() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "old");

        press(&mut app, &mut dialogs, KeyCode::Char('e'));
        assert!(app.state == AppState::Edit);
        // Clear the prefilled buffer and retype.
        for _ in 0..3 {
            press(&mut app, &mut dialogs, KeyCode::Backspace);
        }
        type_text(&mut app, &mut dialogs, "new text");
        press(&mut app, &mut dialogs, KeyCode::Enter);

        assert!(app.state == AppState::List);
        assert!(app.editing.is_none());
        assert_eq!(app.store().tasks()[0].text, "new text");
    }

    #[test]
    fn edit_to_empty_raises_notice_and_stays_in_edit_mode() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "abc");

        press(&mut app, &mut dialogs, KeyCode::Char('e'));
        for _ in 0..3 {
            press(&mut app, &mut dialogs, KeyCode::Backspace);
        }
        press(&mut app, &mut dialogs, KeyCode::Enter);

        assert_eq!(dialogs.notices, vec!["Task cannot be empty"]);
        assert!(app.state == AppState::Edit);
        assert_eq!(app.store().tasks()[0].text, "abc");
    }

    #[test]
    fn escape_cancels_edit_without_mutation() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "keep");

        press(&mut app, &mut dialogs, KeyCode::Char('e'));
        type_text(&mut app, &mut dialogs, " discarded");
        press(&mut app, &mut dialogs, KeyCode::Esc);

        assert!(app.editing.is_none());
        assert_eq!(app.store().tasks()[0].text, "keep");
    }

    #[test]
    fn delete_removes_the_selected_task() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "a");
        add_task(&mut app, &mut dialogs, "b");

        // The newest task is prepended and selected after add.
        press(&mut app, &mut dialogs, KeyCode::Char('d'));
        assert_eq!(visible_texts(&app), vec!["a"]);
    }

    #[test]
    fn clear_completed_asks_for_confirmation() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(false);
        add_task(&mut app, &mut dialogs, "a");
        press(&mut app, &mut dialogs, KeyCode::Char(' '));

        // Declined: nothing happens.
        press(&mut app, &mut dialogs, KeyCode::Char('x'));
        assert_eq!(dialogs.confirms.len(), 1);
        assert_eq!(app.store().len(), 1);

        // Confirmed: completed tasks go.
        let mut dialogs = ScriptedDialogs::new(true);
        press(&mut app, &mut dialogs, KeyCode::Char('x'));
        assert!(app.store().is_empty());
    }

    #[test]
    fn clear_completed_with_none_skips_the_prompt() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "pending");

        press(&mut app, &mut dialogs, KeyCode::Char('x'));
        assert!(dialogs.confirms.is_empty());
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn filter_keys_select_the_matching_view() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        add_task(&mut app, &mut dialogs, "a");
        add_task(&mut app, &mut dialogs, "b");
        // Complete "b" (the selected, newest task).
        press(&mut app, &mut dialogs, KeyCode::Char(' '));

        press(&mut app, &mut dialogs, KeyCode::Char('2'));
        assert_eq!(visible_texts(&app), vec!["a"]);
        press(&mut app, &mut dialogs, KeyCode::Char('3'));
        assert_eq!(visible_texts(&app), vec!["b"]);
        press(&mut app, &mut dialogs, KeyCode::Char('1'));
        assert_eq!(visible_texts(&app), vec!["b", "a"]);
    }

    #[test]
    fn filter_cycles_with_f() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);

        press(&mut app, &mut dialogs, KeyCode::Char('f'));
        assert_eq!(app.filter, Filter::Pending);
        press(&mut app, &mut dialogs, KeyCode::Char('f'));
        assert_eq!(app.filter, Filter::Completed);
        press(&mut app, &mut dialogs, KeyCode::Char('f'));
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn help_opens_and_closes() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);

        press(&mut app, &mut dialogs, KeyCode::Char('h'));
        assert!(app.state == AppState::Help);
        press(&mut app, &mut dialogs, KeyCode::Esc);
        assert!(app.state == AppState::List);
    }

    #[test]
    fn quit_keys_return_true() {
        let mut app = App::new();
        let mut dialogs = ScriptedDialogs::new(true);
        assert!(app
            .handle_key(KeyCode::Char('q'), KeyModifiers::empty(), &mut dialogs)
            .unwrap());
        assert!(app
            .handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL, &mut dialogs)
            .unwrap());
    }
}
