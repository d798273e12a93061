use crate::events::{AppEvent, ChangeOrigin, EventBus};
use crate::App;
use anyhow::{anyhow, Result};
use clipboard::{ClipboardContext, ClipboardProvider};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Keyboard handler that edits the input field and applies the new value
#[derive(Clone)]
pub struct KeyboardHandler {
    app_state: Arc<RwLock<App>>,
    event_sender: mpsc::UnboundedSender<AppEvent>,
}

impl KeyboardHandler {
    pub fn new(app_state: Arc<RwLock<App>>, event_sender: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            app_state,
            event_sender,
        }
    }

    /// Subscribe to keyboard events
    pub async fn subscribe(&self, event_bus: &EventBus) -> Result<()> {
        let handler = self.clone();

        event_bus
            .subscribe_async("key_input", move |event| {
                let handler = handler.clone();
                async move {
                    match event {
                        AppEvent::KeyInput(key) => handler.handle_key(key).await,
                        _ => Ok(()),
                    }
                }
            })
            .await;

        Ok(())
    }

    /// Apply a single key press
    pub async fn handle_key(&self, key: KeyEvent) -> Result<()> {
        // Release events arrive on some platforms; only presses edit
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                self.event_sender.send(AppEvent::Quit)?;
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.edit(|input| input.clear()).await?;
            }
            (KeyCode::Char('v'), KeyModifiers::CONTROL) => {
                match read_clipboard() {
                    Ok(text) => self.paste(&text).await?,
                    Err(e) => warn!("Paste failed: {:#}", e),
                }
            }
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                self.edit(|input| input.insert_char(c)).await?;
            }
            (KeyCode::Enter, _) => {
                self.edit(|input| input.insert_char('\n')).await?;
            }
            (KeyCode::Backspace, _) => {
                self.edit(|input| input.backspace()).await?;
            }
            (KeyCode::Delete, _) => {
                self.edit(|input| input.delete()).await?;
            }
            (KeyCode::Left, _) => self.app_state.write().await.input.move_left(),
            (KeyCode::Right, _) => self.app_state.write().await.input.move_right(),
            (KeyCode::Home, _) => self.app_state.write().await.input.move_home(),
            (KeyCode::End, _) => self.app_state.write().await.input.move_end(),
            _ => {}
        }

        Ok(())
    }

    /// Insert `text` at the caret, as a clipboard paste does
    pub async fn paste(&self, text: &str) -> Result<()> {
        self.edit(|input| input.insert_str(text)).await
    }

    /// Run an edit on the input field and apply the new value while the
    /// state lock is still held, so no queued change can land in between
    async fn edit<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut crate::input::InputField) -> bool,
    {
        let mut app = self.app_state.write().await;
        if !apply(&mut app.input) {
            return Ok(());
        }

        let text = app.input.value().to_string();
        debug!(chars = text.chars().count(), "input edited");
        app.dispatch(text, ChangeOrigin::User);
        Ok(())
    }
}

fn read_clipboard() -> Result<String> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| anyhow!("Clipboard unavailable: {}", e))?;
    ctx.get_contents()
        .map_err(|e| anyhow!("Could not read clipboard: {}", e))
}
