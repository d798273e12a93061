use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::input::InputField;

/// Bordered, single-row view of the input field, scrolled to keep the caret visible
pub struct InputBox<'a> {
    pub field: &'a InputField,
    pub title: &'a str,
}

impl<'a> InputBox<'a> {
    pub fn new(field: &'a InputField) -> Self {
        Self {
            field,
            title: " editor ",
        }
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .title(self.title)
            .border_style(Style::default().fg(Color::Cyan))
    }

    /// Terminal position of the caret when rendered into `area`
    pub fn caret_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let offset = self.field.scroll_offset(inner.width as usize);
        let col = (self.field.caret() - offset) as u16;
        Position::new(inner.x + col.min(inner.width.saturating_sub(1)), inner.y)
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let offset = self.field.scroll_offset(inner.width as usize);
        // Newlines would break the single row, show them as a marker
        let visible: String = self
            .field
            .value()
            .chars()
            .skip(offset)
            .take(inner.width as usize)
            .map(|c| if c == '\n' { '⏎' } else { c })
            .collect();

        Paragraph::new(visible)
            .style(Style::default().fg(Color::White))
            .render(inner, buf);
    }
}
