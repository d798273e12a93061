use anyhow::Result;
use ratatui::crossterm::event::KeyEvent;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// Where a change of the input text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// Typed or pasted by the user
    User,

    /// Set from code, e.g. `--text` or [`crate::input_system::InputSystem::dispatch_input`]
    Programmatic,
}

/// All possible events in the application
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input events
    KeyInput(KeyEvent),

    /// The input field now holds `text`
    InputChanged {
        text: Arc<str>,
        origin: ChangeOrigin,
    },

    /// Stop the application
    Quit,
}

impl AppEvent {
    /// Name used for routing to subscribers
    pub fn event_type(&self) -> &'static str {
        match self {
            AppEvent::KeyInput(_) => "key_input",
            AppEvent::InputChanged { .. } => "input_changed",
            AppEvent::Quit => "quit",
        }
    }
}

/// Event handler function type
pub type EventHandler = Arc<dyn Fn(&AppEvent) -> Result<()> + Send + Sync>;

/// Async event handler function type
pub type AsyncEventHandler = Arc<
    dyn Fn(AppEvent) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<()>> + Send>>
        + Send
        + Sync,
>;

/// Event bus for publishing and subscribing to events
#[derive(Clone)]
pub struct EventBus {
    handlers: Arc<RwLock<HashMap<&'static str, Vec<EventHandler>>>>,
    async_handlers: Arc<RwLock<HashMap<&'static str, Vec<AsyncEventHandler>>>>,
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: Arc<RwLock<Option<mpsc::UnboundedReceiver<AppEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();

        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            async_handlers: Arc::new(RwLock::new(HashMap::new())),
            sender,
            receiver: Arc::new(RwLock::new(Some(receiver))),
        }
    }

    /// Get a sender for publishing events
    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.sender.clone()
    }

    /// Subscribe to events with a sync handler
    pub async fn subscribe<F>(&self, event_type: &'static str, handler: F)
    where
        F: Fn(&AppEvent) -> Result<()> + Send + Sync + 'static,
    {
        let mut handlers = self.handlers.write().await;
        handlers
            .entry(event_type)
            .or_default()
            .push(Arc::new(handler));
    }

    /// Subscribe to events with an async handler
    pub async fn subscribe_async<F, Fut>(&self, event_type: &'static str, handler: F)
    where
        F: Fn(AppEvent) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<()>> + Send + 'static,
    {
        let mut async_handlers = self.async_handlers.write().await;
        async_handlers
            .entry(event_type)
            .or_default()
            .push(Arc::new(move |event| Box::pin(handler(event))));
    }

    /// Publish an event
    pub fn publish(&self, event: AppEvent) -> Result<()> {
        self.sender.send(event)?;
        Ok(())
    }

    /// Process events until `cancel` fires or every sender is gone.
    /// Must only be started once.
    pub async fn start_processing(&self, cancel: CancellationToken) -> Result<()> {
        let mut receiver = {
            let mut receiver_guard = self.receiver.write().await;
            receiver_guard
                .take()
                .ok_or_else(|| anyhow::anyhow!("Event processor already started"))?
        };

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                event = receiver.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => break,
                },
            }
        }

        debug!("event processing stopped");
        Ok(())
    }

    /// Handle every queued event, including ones queued by handlers while
    /// draining, without waiting for new ones. Returns how many were handled.
    pub async fn drain(&self) -> Result<usize> {
        let mut receiver_guard = self.receiver.write().await;
        let receiver = receiver_guard
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Event processor already started"))?;

        let mut handled = 0;
        while let Ok(event) = receiver.try_recv() {
            self.handle_event(event).await;
            handled += 1;
        }

        Ok(handled)
    }

    /// Handle a single event by calling all registered handlers
    async fn handle_event(&self, event: AppEvent) {
        let event_type = event.event_type();

        {
            let handlers = self.handlers.read().await;
            if let Some(event_handlers) = handlers.get(event_type) {
                for handler in event_handlers {
                    if let Err(e) = handler(&event) {
                        error!(event_type, "sync event handler failed: {:#}", e);
                    }
                }
            }
        }

        {
            let async_handlers = self.async_handlers.read().await;
            if let Some(event_handlers) = async_handlers.get(event_type) {
                for handler in event_handlers {
                    if let Err(e) = handler(event.clone()).await {
                        error!(event_type, "async event handler failed: {:#}", e);
                    }
                }
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
