use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::surface::Surface;

/// Draws the display region of a [`Surface`]: one terminal span per
/// character span element.
pub struct CharDisplay<'a> {
    pub surface: &'a Surface,
    pub wrap: bool,
}

impl<'a> CharDisplay<'a> {
    pub fn new(surface: &'a Surface) -> Self {
        Self {
            surface,
            wrap: true,
        }
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Lines to draw. A newline span ends the current line.
    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        let mut current: Vec<Span<'a>> = Vec::new();

        for element in self.surface.char_spans() {
            if element.text == "\n" {
                lines.push(Line::from(std::mem::take(&mut current)));
            } else {
                current.push(Span::raw(element.text.as_str()));
            }
        }
        lines.push(Line::from(current));
        lines
    }
}

impl Widget for CharDisplay<'_> {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" display ")
            .border_style(Style::default().fg(Color::DarkGray));

        let mut paragraph = Paragraph::new(self.lines()).block(block);
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(area, buf);
    }
}
