//! # Reactive Editor
//!
//! Keeps the displayed views consistent with the editor text. Every call
//! to [`ReactiveEditor::on_change_event`] stores the new text and then
//! re-renders both views in full before returning:
//!
//! - the word-count region gets the zero-padded token count
//! - the display region gets one span per character, replacing whatever
//!   was there before
//!
//! The editor does not care where a change came from. Keystrokes,
//! pastes and programmatic dispatches all end up in the same call.

use tracing::debug;

use crate::buffer::EditorState;
use crate::surface::{RenderSurface, Surface};
use crate::views::{CharacterSpanList, WordCountView};

#[derive(Debug, Clone)]
pub struct ReactiveEditor<S = Surface> {
    state: EditorState,
    surface: S,
    word_count_width: usize,
}

impl Default for ReactiveEditor<Surface> {
    fn default() -> Self {
        Self::new()
    }
}

impl ReactiveEditor<Surface> {
    pub fn new() -> Self {
        Self::with_surface(Surface::new())
    }
}

impl<S: RenderSurface> ReactiveEditor<S> {
    /// Create an editor rendering into `surface`. The empty initial text
    /// is rendered immediately.
    pub fn with_surface(surface: S) -> Self {
        let mut editor = Self {
            state: EditorState::new(),
            surface,
            word_count_width: WordCountView::DEFAULT_WIDTH,
        };
        editor.render();
        editor
    }

    /// Set the minimum width of the rendered word count and re-render.
    pub fn with_word_count_width(mut self, width: usize) -> Self {
        self.word_count_width = width;
        self.render();
        self
    }

    /// Handle a change of the input text.
    pub fn on_change_event(&mut self, new_text: impl Into<String>) {
        let changed = self.state.set_text(new_text.into());
        debug!(changed, chars = self.state.char_count(), "input changed");
        self.render();
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn word_count(&self) -> WordCountView {
        WordCountView::from_text(self.state.text(), self.word_count_width)
    }

    pub fn char_spans(&self) -> CharacterSpanList {
        CharacterSpanList::from_text(self.state.text())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn render(&mut self) {
        let word_count = self.word_count();
        let spans = self.char_spans();
        self.surface.write_word_count(&word_count.render());
        self.surface.replace_char_spans(&spans);
        debug!(words = word_count.count(), spans = spans.len(), "rendered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that records every write it receives
    #[derive(Default)]
    struct RecordingSurface {
        writes: Vec<String>,
        span_batches: Vec<usize>,
    }

    impl RenderSurface for RecordingSurface {
        fn write_word_count(&mut self, rendered: &str) {
            self.writes.push(rendered.to_string());
        }

        fn replace_char_spans(&mut self, spans: &CharacterSpanList) {
            self.span_batches.push(spans.len());
        }
    }

    #[test]
    fn test_initial_render_of_empty_text() {
        let editor = ReactiveEditor::new();
        assert_eq!(editor.surface().word_count_text(), "00");
        assert!(editor.surface().char_spans().is_empty());
        assert_eq!(editor.surface().render_count(), 1);
    }

    #[test]
    fn test_every_change_renders_both_views() {
        let mut editor = ReactiveEditor::with_surface(RecordingSurface::default());
        editor.on_change_event("Hello World");
        editor.on_change_event("Hello World");

        let surface = editor.into_surface();
        assert_eq!(surface.writes, vec!["00", "02", "02"]);
        assert_eq!(surface.span_batches, vec![0, 11, 11]);
    }

    #[test]
    fn test_custom_word_count_width() {
        let mut editor = ReactiveEditor::new().with_word_count_width(4);
        assert_eq!(editor.surface().word_count_text(), "0000");
        editor.on_change_event("one two three");
        assert_eq!(editor.surface().word_count_text(), "0003");
    }
}
