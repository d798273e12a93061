use ratatui::{
    buffer::Buffer as TuiBuffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::collections::HashMap;

/// Which end of the status bar a slot sticks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAlignment {
    Left,
    Right,
}

/// A single named slot in the status bar
#[derive(Debug, Clone)]
pub struct StatusSlot {
    pub id: String,
    pub content: String,
    pub alignment: SlotAlignment,
    pub priority: u8, // Higher priority = closer to its edge
    pub style: Style,
    pub visible: bool,
}

impl StatusSlot {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            alignment: SlotAlignment::Left,
            priority: 50,
            style: Style::default().fg(Color::White).bg(Color::DarkGray),
            visible: true,
        }
    }

    pub fn with_alignment(mut self, alignment: SlotAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// One-line status bar made of named slots
#[derive(Debug, Clone)]
pub struct StatusBar {
    slots: HashMap<String, StatusSlot>,
    background_style: Style,
    separator: String,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            background_style: Style::default().bg(Color::DarkGray).fg(Color::White),
            separator: " | ".to_string(),
        }
    }

    /// Add or replace a slot
    pub fn set_slot(&mut self, slot: StatusSlot) {
        self.slots.insert(slot.id.clone(), slot);
    }

    pub fn remove_slot(&mut self, id: &str) {
        self.slots.remove(id);
    }

    pub fn get_slot(&self, id: &str) -> Option<&StatusSlot> {
        self.slots.get(id)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn hide_slot(&mut self, id: &str) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.visible = false;
        }
    }

    pub fn show_slot(&mut self, id: &str) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.visible = true;
        }
    }

    /// Update the content of a slot; unknown ids are ignored
    pub fn update_slot_content(&mut self, id: &str, content: impl Into<String>) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.content = content.into();
        }
    }

    /// Visible slots split by alignment, highest priority first. Right slots
    /// are ordered from the right edge inwards.
    pub fn organized_slots(&self) -> (Vec<&StatusSlot>, Vec<&StatusSlot>) {
        let (mut left, mut right): (Vec<&StatusSlot>, Vec<&StatusSlot>) = self
            .slots
            .values()
            .filter(|s| s.visible)
            .partition(|s| s.alignment == SlotAlignment::Left);

        // Ties broken by id so the layout is stable across frames
        left.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));
        right.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id)));

        (left, right)
    }

    /// Spans for a group of slots in display order, dropping slots that do
    /// not fit in `budget` columns
    fn group_spans<'a>(
        &'a self,
        slots: &[&'a StatusSlot],
        budget: usize,
    ) -> (Vec<Span<'a>>, usize) {
        let mut spans = Vec::new();
        let mut used = 0;

        for slot in slots {
            let sep = if spans.is_empty() {
                0
            } else {
                self.separator.chars().count()
            };
            let width = slot.content.chars().count() + 2;
            if used + sep + width > budget {
                break;
            }
            if sep > 0 {
                spans.push(Span::styled(self.separator.as_str(), self.background_style));
            }
            spans.push(Span::styled(format!(" {} ", slot.content), slot.style));
            used += sep + width;
        }

        (spans, used)
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut TuiBuffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let (left, right) = self.organized_slots();

        // Left content wins when there is not enough room for both
        let (left_spans, left_width) = self.group_spans(&left, width);
        let (mut right_spans, right_width) = self.group_spans(&right, width - left_width);
        right_spans.reverse();

        let mut spans = left_spans;
        let padding = width - left_width - right_width;
        if padding > 0 {
            spans.push(Span::styled(" ".repeat(padding), self.background_style));
        }
        spans.extend(right_spans);

        Paragraph::new(Line::from(spans))
            .style(self.background_style)
            .render(area, buf);
    }
}
