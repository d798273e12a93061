//! Derived views of the editor text.
//!
//! Both views are pure projections: they are rebuilt from scratch from
//! the current text on every change and never patched incrementally.

use std::fmt;

/// Count whitespace-delimited, non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word count plus the minimum width it is rendered with.
///
/// Counts wider than `width` are rendered at their natural width, so
/// `100` with width 2 renders as `"100"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCountView {
    count: usize,
    width: usize,
}

impl WordCountView {
    pub const DEFAULT_WIDTH: usize = 2;

    pub fn from_text(text: &str, width: usize) -> Self {
        Self {
            count: count_words(text),
            width,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Zero-padded decimal rendering
    pub fn render(&self) -> String {
        format!("{:0width$}", self.count, width = self.width)
    }
}

impl fmt::Display for WordCountView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.count, width = self.width)
    }
}

/// One character of the text at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharSpan {
    pub index: usize,
    pub ch: char,
}

impl CharSpan {
    /// Text content of the span: exactly one character.
    pub fn text(&self) -> String {
        self.ch.to_string()
    }
}

/// Ordered list of single-character spans, one per character of the text,
/// whitespace and duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSpanList {
    spans: Vec<CharSpan>,
}

impl CharacterSpanList {
    pub fn from_text(text: &str) -> Self {
        let spans = text
            .chars()
            .enumerate()
            .map(|(index, ch)| CharSpan { index, ch })
            .collect();
        Self { spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CharSpan> {
        self.spans.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharSpan> {
        self.spans.iter()
    }

    /// Text of every span, in order
    pub fn texts(&self) -> Vec<String> {
        self.spans.iter().map(CharSpan::text).collect()
    }
}

impl<'a> IntoIterator for &'a CharacterSpanList {
    type Item = &'a CharSpan;
    type IntoIter = std::slice::Iter<'a, CharSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}
