//! # Editor State
//!
//! The single piece of mutable state behind the reactive editor: the
//! current text of the input field.
//!
//! ## What it does
//!
//! - Stores the text exactly as last reported by a change event
//! - Starts out empty
//! - Keeps no history; only the current value is observable
//!
//! Everything the editor displays is derived from this value, see
//! [`crate::views`].

/// Current content of the input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    text: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, returning whether it differs from the previous value.
    pub fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    /// Number of characters (Unicode scalar values) in the text
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
