//! Single-line text input with cursor handling.

/// A text input buffer with a cursor, used for the new-task box and for
/// inline task editing.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        InputField {
            value: String::new(),
            cursor: 0,
        }
    }

    /// Create an input field pre-filled with text, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        InputField {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_cursor();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Move the cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start of the line.
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the line.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Reset the field to empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    // The cursor counts characters; String indexing wants bytes.
    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_the_cursor() {
        let mut input = InputField::with_value("ab");
        input.move_cursor_left();
        input.handle_char('x');
        assert_eq!(input.value, "axb");
        input.handle_backspace();
        assert_eq!(input.value, "ab");
        input.handle_delete();
        assert_eq!(input.value, "a");
    }

    #[test]
    fn cursor_moves_are_clamped() {
        let mut input = InputField::with_value("hi");
        input.move_cursor_end();
        input.move_cursor_right();
        assert_eq!(input.cursor, 2);
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn handles_multibyte_text() {
        let mut input = InputField::with_value("héllo");
        input.move_cursor_home();
        input.move_cursor_right();
        input.move_cursor_right();
        input.handle_backspace();
        assert_eq!(input.value, "hllo");
    }
}
