//! Integration tests for the status bar widget
//!
//! Tests the slot-based status bar system functionality

use ratatui::{backend::TestBackend, layout::Rect, style::{Color, Style}, Terminal};
use tally::widgets::{SlotAlignment, StatusBar, StatusSlot};

fn rendered_line(status_bar: &StatusBar, width: u16) -> String {
    let backend = TestBackend::new(width, 1);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| f.render_widget(status_bar, Rect::new(0, 0, width, 1)))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_status_bar_creation() {
    let status_bar = StatusBar::new();
    assert_eq!(status_bar.slot_count(), 0);
}

#[test]
fn test_status_slot_creation() {
    let slot = StatusSlot::new("test", "Test Content")
        .with_alignment(SlotAlignment::Right)
        .with_priority(90)
        .with_style(Style::default().fg(Color::Red))
        .with_visibility(false);

    assert_eq!(slot.id, "test");
    assert_eq!(slot.content, "Test Content");
    assert_eq!(slot.alignment, SlotAlignment::Right);
    assert_eq!(slot.priority, 90);
    assert_eq!(slot.style, Style::default().fg(Color::Red));
    assert!(!slot.visible);
}

#[test]
fn test_status_bar_slot_priorities() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("low", "Low").with_priority(50));
    status_bar.set_slot(StatusSlot::new("high", "High").with_priority(100));
    status_bar.set_slot(StatusSlot::new("medium", "Medium").with_priority(75));
    status_bar.set_slot(
        StatusSlot::new("right", "Right").with_alignment(SlotAlignment::Right),
    );

    let (left, right) = status_bar.organized_slots();
    let ids: Vec<&str> = left.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["high", "medium", "low"]);
    assert_eq!(right.len(), 1);
}

#[test]
fn test_hidden_slots_are_skipped() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("visible", "Visible"));
    status_bar.set_slot(StatusSlot::new("hidden", "Hidden").with_visibility(false));

    let (left, _) = status_bar.organized_slots();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].id, "visible");
}

#[test]
fn test_status_bar_rendering() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("words-count", "words 02").with_priority(100));
    status_bar.set_slot(StatusSlot::new("chars", "chars 11").with_priority(90));
    status_bar.set_slot(StatusSlot::new("hint", "quit").with_alignment(SlotAlignment::Right));

    let line = rendered_line(&status_bar, 40);
    assert_eq!(line.chars().count(), 40);
    assert!(line.starts_with(" words 02  |  chars 11 "));
    assert!(line.ends_with(" quit "));
}

#[test]
fn test_content_update_of_unknown_slot_is_ignored() {
    let mut status_bar = StatusBar::new();
    status_bar.set_slot(StatusSlot::new("counter", "0"));

    status_bar.update_slot_content("counter", "42");
    status_bar.update_slot_content("nonexistent", "value");

    assert_eq!(status_bar.get_slot("counter").unwrap().content, "42");
    assert_eq!(status_bar.slot_count(), 1);
}
