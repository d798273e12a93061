//! # Input Field
//!
//! The editable region of the editor. It holds the value the user is
//! typing plus a caret, and turns every edit into a new full value.
//!
//! The field never talks to the reactive editor directly: callers take
//! the new value after a successful edit and publish it as a change.
//! Full-value replacement ([`InputField::fill`]) and key edits are
//! therefore indistinguishable downstream.

/// Editable single value with a caret measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    caret: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.fill(value);
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position as a character index into the value
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Replace the whole value and park the caret at the end.
    pub fn fill(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let changed = value != self.value;
        self.value = value;
        self.caret = self.char_count();
        changed
    }

    /// Adopt a value that was set from outside the field. Like assigning
    /// the value of a browser input, the caret lands at the end; an
    /// unchanged value leaves the caret alone.
    pub fn sync_value(&mut self, value: &str) {
        if self.value != value {
            self.fill(value);
        }
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let at = self.byte_index(self.caret);
        self.value.insert(at, ch);
        self.caret += 1;
        true
    }

    pub fn insert_str(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let at = self.byte_index(self.caret);
        self.value.insert_str(at, text);
        self.caret += text.chars().count();
        true
    }

    /// Delete the character before the caret
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        let at = self.byte_index(self.caret);
        self.value.remove(at);
        true
    }

    /// Delete the character under the caret
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.caret);
        self.value.remove(at);
        true
    }

    pub fn clear(&mut self) -> bool {
        self.fill(String::new())
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.char_count();
    }

    /// First visible character when the field is `width` cells wide, keeping
    /// the caret on screen.
    pub fn scroll_offset(&self, width: usize) -> usize {
        if width == 0 {
            return self.caret;
        }
        self.caret.saturating_sub(width - 1)
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
