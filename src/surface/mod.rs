//! Output surface of the reactive editor.
//!
//! The surface is what an observer of the editor can see: a word-count
//! region holding the rendered count, and a display container whose
//! children are span elements tagged with a class marker.

use crate::views::CharacterSpanList;

/// Class marker carried by character span elements unless configured otherwise
pub const CHAR_SPAN_CLASS: &str = "char";

/// Sink for the editor's render output.
pub trait RenderSurface {
    /// Overwrite the word-count region with the rendered count
    fn write_word_count(&mut self, rendered: &str);

    /// Replace every child of the display region with the given spans
    fn replace_char_spans(&mut self, spans: &CharacterSpanList);
}

/// A child element of the display region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanElement {
    pub class: String,
    pub text: String,
}

impl SpanElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}

/// In-memory surface that the terminal widgets draw from.
#[derive(Debug, Clone)]
pub struct Surface {
    word_count: String,
    display: Vec<SpanElement>,
    marker: String,
    renders: u64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self::with_marker(CHAR_SPAN_CLASS)
    }

    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            word_count: String::new(),
            display: Vec::new(),
            marker: marker.into(),
            renders: 0,
        }
    }

    /// Rendered text of the word-count region
    pub fn word_count_text(&self) -> &str {
        &self.word_count
    }

    /// All children of the display region
    pub fn children(&self) -> &[SpanElement] {
        &self.display
    }

    /// Children of the display region carrying `class`
    pub fn query<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a SpanElement> + 'a {
        self.display.iter().filter(move |el| el.has_class(class))
    }

    /// Children carrying this surface's character-span marker
    pub fn char_spans(&self) -> Vec<&SpanElement> {
        self.query(&self.marker).collect()
    }

    /// Concatenated text of the display region
    pub fn display_text(&self) -> String {
        self.display.iter().map(|el| el.text.as_str()).collect()
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Number of completed renders
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl RenderSurface for Surface {
    fn write_word_count(&mut self, rendered: &str) {
        self.word_count.clear();
        self.word_count.push_str(rendered);
    }

    fn replace_char_spans(&mut self, spans: &CharacterSpanList) {
        self.display = spans
            .iter()
            .map(|span| SpanElement {
                class: self.marker.clone(),
                text: span.text(),
            })
            .collect();
        self.renders += 1;
    }
}
