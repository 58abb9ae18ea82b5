use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Submit,
    Cancel,
}

/// Single-line numeric field: digits plus an optional leading sign, capped at
/// a fixed capacity. Owns its cursor; rendering happens in the widgets via
/// `render_parts`.
pub struct NumInput {
    text: String,
    /// Cursor position as a char index (0 = before first char).
    cursor: usize,
    capacity: usize,
}

const DEFAULT_CAPACITY: usize = 6;

impl NumInput {
    pub fn new(text: &str) -> Self {
        let cursor = text.chars().count();
        Self {
            text: text.to_string(),
            cursor,
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Returns (before_cursor, cursor_char, after_cursor) for styled rendering.
    /// When cursor is at end of text, cursor_char is None.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let byte_offset = self.char_to_byte(self.cursor);
        if self.cursor >= self.text.chars().count() {
            (&self.text, None, "")
        } else {
            let ch = self.text[byte_offset..].chars().next().unwrap();
            let next_byte = byte_offset + ch.len_utf8();
            (&self.text[..byte_offset], Some(ch), &self.text[next_byte..])
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Esc => return InputResult::Cancel,
            KeyCode::Enter => return InputResult::Submit,

            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    let byte_offset = self.char_to_byte(self.cursor - 1);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                    self.cursor -= 1;
                }
            }
            KeyCode::Delete => {
                let len = self.text.chars().count();
                if self.cursor < len {
                    let byte_offset = self.char_to_byte(self.cursor);
                    let ch = self.text[byte_offset..].chars().next().unwrap();
                    self.text
                        .replace_range(byte_offset..byte_offset + ch.len_utf8(), "");
                }
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.text.chars().count();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.accepts(ch) {
                    let byte_offset = self.char_to_byte(self.cursor);
                    self.text.insert(byte_offset, ch);
                    self.cursor += 1;
                }
            }
            _ => {}
        }
        InputResult::Continue
    }

    /// Digits anywhere; a single sign only in front.
    fn accepts(&self, ch: char) -> bool {
        if self.text.chars().count() >= self.capacity {
            return false;
        }
        if ch.is_ascii_digit() {
            return true;
        }
        (ch == '-' || ch == '+')
            && self.cursor == 0
            && !self.text.starts_with(['-', '+'])
    }

    /// Convert char index to byte offset.
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn insert_at_start_middle_end() {
        let mut input = NumInput::new("13");
        // Cursor at end (2), insert '5' -> "135"
        input.handle(key(KeyCode::Char('5')));
        assert_eq!(input.value(), "135");

        // Move to start, insert '9' -> "9135"; the cursor sits after the '9'
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('9')));
        assert_eq!(input.value(), "9135");

        // Move right past the '1', insert '0' -> "91035"
        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('0')));
        assert_eq!(input.value(), "91035");
    }

    #[test]
    fn rejects_non_numeric_chars() {
        let mut input = NumInput::new("");
        input.handle(key(KeyCode::Char('a')));
        input.handle(key(KeyCode::Char(' ')));
        input.handle(key(KeyCode::Char('.')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn sign_only_allowed_in_front() {
        let mut input = NumInput::new("");
        input.handle(key(KeyCode::Char('-')));
        input.handle(key(KeyCode::Char('4')));
        assert_eq!(input.value(), "-4");

        // Second sign, anywhere, is rejected.
        input.handle(key(KeyCode::Char('-')));
        assert_eq!(input.value(), "-4");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Char('+')));
        assert_eq!(input.value(), "-4");
    }

    #[test]
    fn capacity_caps_length() {
        let mut input = NumInput::new("");
        for _ in 0..10 {
            input.handle(key(KeyCode::Char('7')));
        }
        assert_eq!(input.value(), "777777");
    }

    #[test]
    fn backspace_at_boundaries() {
        let mut input = NumInput::new("42");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "4");
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
        // Backspace on empty -> no panic
        input.handle(key(KeyCode::Backspace));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn delete_at_boundaries() {
        let mut input = NumInput::new("42");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "2");

        // Delete at end -> no change
        input.handle(key(KeyCode::End));
        input.handle(key(KeyCode::Delete));
        assert_eq!(input.value(), "2");
    }

    #[test]
    fn ctrl_a_e_u() {
        let mut input = NumInput::new("123");
        input.handle(ctrl('a'));
        let (before, ch, _) = input.render_parts();
        assert_eq!(before, "");
        assert_eq!(ch, Some('1'));

        input.handle(ctrl('e'));
        let (before, ch, _) = input.render_parts();
        assert_eq!(before, "123");
        assert_eq!(ch, None);

        input.handle(ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn cursor_stops_at_edges() {
        let mut input = NumInput::new("5");
        input.handle(key(KeyCode::Right));
        input.handle(key(KeyCode::Char('6')));
        assert_eq!(input.value(), "56");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Left));
        input.handle(key(KeyCode::Char('4')));
        assert_eq!(input.value(), "456");
    }

    #[test]
    fn render_parts_at_middle() {
        let mut input = NumInput::new("357");
        input.handle(key(KeyCode::Home));
        input.handle(key(KeyCode::Right));
        let (before, ch, after) = input.render_parts();
        assert_eq!(before, "3");
        assert_eq!(ch, Some('5'));
        assert_eq!(after, "7");
    }

    #[test]
    fn submit_and_cancel() {
        let mut input = NumInput::new("8");
        assert_eq!(input.handle(key(KeyCode::Enter)), InputResult::Submit);
        assert_eq!(input.handle(key(KeyCode::Esc)), InputResult::Cancel);
        assert_eq!(input.value(), "8");
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut input = NumInput::new("99");
        input.clear();
        assert_eq!(input.value(), "");
        input.handle(key(KeyCode::Char('1')));
        assert_eq!(input.value(), "1");
    }
}
