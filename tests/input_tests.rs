//! Integration tests for the input field and the input system
//!
//! Covers caret editing and how raw input is turned into events

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally::events::{AppEvent, ChangeOrigin, EventBus};
use tally::input::InputField;
use tally::input_system::InputSystem;

#[test]
fn test_fill_replaces_value_and_moves_caret() {
    let mut field = InputField::with_value("old");
    assert!(field.fill("Hello World"));
    assert_eq!(field.value(), "Hello World");
    assert_eq!(field.caret(), 11);

    assert!(!field.fill("Hello World"));
}

#[test]
fn test_typing_and_deleting() {
    let mut field = InputField::new();
    for ch in "Tst".chars() {
        field.insert_char(ch);
    }
    field.move_left();
    field.move_left();
    field.insert_char('e');
    assert_eq!(field.value(), "Test");
    assert_eq!(field.caret(), 2);

    assert!(field.backspace());
    assert_eq!(field.value(), "Tst");

    field.move_home();
    assert!(!field.backspace());
    assert!(field.delete());
    assert_eq!(field.value(), "st");

    field.move_end();
    assert!(!field.delete());
}

#[test]
fn test_multibyte_editing() {
    let mut field = InputField::with_value("café");
    assert_eq!(field.caret(), 4);

    assert!(field.backspace());
    assert_eq!(field.value(), "caf");

    field.move_home();
    field.insert_str("🦀 ");
    assert_eq!(field.value(), "🦀 caf");
    assert_eq!(field.caret(), 2);
}

#[test]
fn test_clear_and_empty_paste() {
    let mut field = InputField::with_value("abc");
    assert!(!field.insert_str(""));
    assert!(field.clear());
    assert_eq!(field.value(), "");
    assert_eq!(field.caret(), 0);
    assert!(!field.clear());
}

#[test]
fn test_sync_value_moves_caret_only_on_change() {
    let mut field = InputField::with_value("a long value");
    field.sync_value("ab");
    assert_eq!(field.value(), "ab");
    assert_eq!(field.caret(), 2);

    field.move_home();
    field.sync_value("ab");
    assert_eq!(field.caret(), 0);

    field.sync_value("abcdef");
    assert_eq!(field.caret(), 6);
}

#[test]
fn test_scroll_offset_keeps_caret_visible() {
    let field = InputField::with_value("0123456789");
    assert_eq!(field.scroll_offset(20), 0);
    assert_eq!(field.scroll_offset(5), 6);
}

#[tokio::test]
async fn test_dispatch_input_publishes_programmatic_change() {
    let event_bus = EventBus::new();
    let input_system = InputSystem::new(event_bus.clone());
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));

    event_bus
        .subscribe("input_changed", {
            let seen = seen.clone();
            move |event| {
                if let AppEvent::InputChanged { text, origin } = event {
                    seen.lock().unwrap().push((text.to_string(), *origin));
                }
                Ok(())
            }
        })
        .await;

    input_system.dispatch_input("Direct Input").unwrap();
    event_bus.drain().await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        &[("Direct Input".to_string(), ChangeOrigin::Programmatic)]
    );
}

#[tokio::test]
async fn test_key_input_is_published() {
    let event_bus = EventBus::new();
    let input_system = InputSystem::new(event_bus.clone());

    let keys = [
        KeyCode::Char('a'),
        KeyCode::Enter,
        KeyCode::Backspace,
        KeyCode::Delete,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Home,
        KeyCode::End,
    ];
    for code in keys {
        let result = input_system.handle_key_input(KeyEvent::new(code, KeyModifiers::NONE));
        assert!(result.is_ok(), "Failed to handle key code: {:?}", code);
    }

    assert_eq!(event_bus.drain().await.unwrap(), keys.len());
}
