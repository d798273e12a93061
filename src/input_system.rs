use crate::events::{AppEvent, ChangeOrigin, EventBus};
use anyhow::{Context, Result};
use ratatui::crossterm::event::KeyEvent;
use tokio::sync::mpsc;

/// Input system that turns raw input into published events
pub struct InputSystem {
    event_bus: EventBus,
}

impl InputSystem {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }

    /// Handle keyboard input by publishing a key event
    pub fn handle_key_input(&self, key: KeyEvent) -> Result<()> {
        self.event_bus
            .publish(AppEvent::KeyInput(key))
            .context("Failed to publish key input event")
    }

    /// Set the input text from code. Handled exactly like a user edit.
    pub fn dispatch_input(&self, text: impl Into<String>) -> Result<()> {
        let text: String = text.into();
        self.event_bus
            .publish(AppEvent::InputChanged {
                text: text.into(),
                origin: ChangeOrigin::Programmatic,
            })
            .context("Failed to publish input change event")
    }

    /// Get the event bus sender for direct event publishing
    pub fn event_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_bus.sender()
    }
}
