/// Single-line text buffer with a cursor, used by the form dialogs.
///
/// The cursor is tracked as a character index so it doubles as the
/// on-screen column when rendering.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.chars().count();
        Self { buffer, cursor }
    }

    fn byte_offset(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(offset, _)| offset)
            .unwrap_or(self.buffer.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset();
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset();
            self.buffer.remove(at);
        }
    }

    pub fn delete(&mut self) {
        let at = self.byte_offset();
        if at < self.buffer.len() {
            self.buffer.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.buffer = text;
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters (the render column).
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_read() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('b');
        input.insert_char('c');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut input = InputState::with_text("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut input = InputState::with_text("ab");
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor(), 1);

        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete() {
        let mut input = InputState::with_text("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "bc");
        assert_eq!(input.cursor(), 0);

        input.move_end();
        input.delete();
        assert_eq!(input.as_str(), "bc");
    }

    #[test]
    fn test_cursor_movement_bounds() {
        let mut input = InputState::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_set_and_clear() {
        let mut input = InputState::new();
        input.set("hello".to_string());
        assert_eq!(input.as_str(), "hello");
        assert_eq!(input.cursor(), 5);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_multibyte_cursor_is_char_based() {
        let mut input = InputState::new();
        input.insert_char('\u{00e9}');
        input.insert_char('\u{4e16}');
        assert_eq!(input.cursor(), 2);

        input.move_left();
        input.insert_char('x');
        assert_eq!(input.as_str(), "\u{00e9}x\u{4e16}");
        assert_eq!(input.cursor(), 2);

        input.move_end();
        input.backspace();
        assert_eq!(input.as_str(), "\u{00e9}x");
    }
}
