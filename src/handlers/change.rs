//! Applies input changes to the app, whatever their origin
use crate::events::{AppEvent, EventBus};
use crate::App;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone)]
pub struct ChangeHandler {
    app_state: Arc<RwLock<App>>,
}

impl ChangeHandler {
    pub fn new(app_state: Arc<RwLock<App>>) -> Self {
        Self { app_state }
    }

    /// Subscribe to input changes and quit requests
    pub async fn subscribe(&self, event_bus: &EventBus) -> Result<()> {
        event_bus
            .subscribe_async("input_changed", {
                let handler = self.clone();
                move |event| {
                    let handler = handler.clone();
                    async move { handler.handle_input_changed(event).await }
                }
            })
            .await;

        event_bus
            .subscribe_async("quit", {
                let handler = self.clone();
                move |event| {
                    let handler = handler.clone();
                    async move { handler.handle_quit(event).await }
                }
            })
            .await;

        Ok(())
    }

    async fn handle_input_changed(&self, event: AppEvent) -> Result<()> {
        if let AppEvent::InputChanged { text, origin } = event {
            let mut app = self.app_state.write().await;
            app.dispatch(&*text, origin);
        }

        Ok(())
    }

    async fn handle_quit(&self, event: AppEvent) -> Result<()> {
        if let AppEvent::Quit = event {
            info!("quit requested");
            self.app_state.write().await.running = false;
        }

        Ok(())
    }
}
