use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::event::{self, Event},
    Terminal,
};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::{Config, ConfigManager};
use crate::events::{ChangeOrigin, EventBus};
use crate::handlers::{ChangeHandler, KeyboardHandler};
use crate::input::InputField;
use crate::input_system::InputSystem;
use crate::reactive::ReactiveEditor;
use crate::surface::Surface;
use crate::widgets::{SlotAlignment, StatusBar, StatusSlot};

/// Application state shared between the render loop and the event handlers
#[derive(Clone)]
pub struct App {
    /// Whether the application is running
    pub running: bool,

    /// The editable region
    pub input: InputField,

    /// Word count and character display, kept in sync with `input`
    pub editor: ReactiveEditor,

    /// Status bar with slot-based system
    pub status_bar: StatusBar,

    pub config: Config,

    /// Directory holding config and logs
    pub user_dir: PathBuf,
}

impl App {
    /// Create the app from `config.json` in `user_dir`, creating the
    /// directory if needed. A missing file means defaults.
    pub async fn load(user_dir: PathBuf) -> Result<Self> {
        if !user_dir.exists() {
            tokio::fs::create_dir_all(&user_dir)
                .await
                .with_context(|| format!("Failed to create {}", user_dir.display()))?;
        }

        let mut manager = ConfigManager::new(&user_dir);
        manager
            .load()
            .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;

        Ok(Self::with_config(manager.into_config(), user_dir))
    }

    /// Create the app with an explicit config; the configured initial text
    /// is applied as a programmatic change.
    pub fn with_config(config: Config, user_dir: PathBuf) -> Self {
        let editor = ReactiveEditor::with_surface(Surface::with_marker(
            config.ui.span_marker.clone(),
        ))
        .with_word_count_width(config.editor.word_count_width);

        let initial_text = config.editor.initial_text.clone();

        let mut app = Self {
            running: true,
            input: InputField::new(),
            editor,
            status_bar: StatusBar::new(),
            config,
            user_dir,
        };

        app.init_status_bar();
        if !initial_text.is_empty() {
            app.dispatch(initial_text, ChangeOrigin::Programmatic);
        }
        app
    }

    /// Replace the whole input value, as a user filling the field would
    pub fn fill(&mut self, text: &str) {
        self.input.fill(text);
        let value = self.input.value().to_string();
        self.dispatch(value, ChangeOrigin::User);
    }

    /// Apply a change of the input text regardless of where it came from
    pub fn dispatch(&mut self, text: impl Into<String>, origin: ChangeOrigin) {
        let text = text.into();
        if origin == ChangeOrigin::Programmatic {
            self.input.sync_value(&text);
        }
        debug!(?origin, "dispatching input change");
        self.editor.on_change_event(text);
        self.update_status_bar();
    }

    /// Plain-text report of the rendered views, one `name: value` per line
    pub fn summary(&self) -> String {
        let surface = self.editor.surface();
        format!(
            "words: {}\nchars: {}",
            surface.word_count_text(),
            surface.char_spans().len()
        )
    }

    /// Run the application until it quits
    pub async fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let frame_duration = Duration::from_millis(self.config.ui.tick_rate_ms.max(1));
        let app_state = Arc::new(RwLock::new(std::mem::take(self)));

        let event_bus = EventBus::new();
        let input_system = InputSystem::new(event_bus.clone());

        KeyboardHandler::new(app_state.clone(), input_system.event_sender())
            .subscribe(&event_bus)
            .await?;
        ChangeHandler::new(app_state.clone())
            .subscribe(&event_bus)
            .await?;

        let cancel = CancellationToken::new();
        let processor = tokio::spawn({
            let event_bus = event_bus.clone();
            let cancel = cancel.clone();
            async move { event_bus.start_processing(cancel).await }
        });

        info!("event loop started");
        let result = Self::event_loop(&app_state, &input_system, terminal, frame_duration).await;

        cancel.cancel();
        match processor.await {
            Ok(Err(e)) => warn!("Event processing error: {:#}", e),
            Err(e) => warn!("Event processing task failed: {}", e),
            Ok(Ok(())) => {}
        }
        // Handlers hold clones of the shared state through the bus
        drop(input_system);
        drop(event_bus);

        match Arc::try_unwrap(app_state) {
            Ok(lock) => *self = lock.into_inner(),
            Err(shared) => {
                warn!("App state still shared after shutdown, cloning it back");
                *self = shared.read().await.clone();
            }
        }

        info!("event loop stopped");
        result
    }

    async fn event_loop(
        app_state: &Arc<RwLock<App>>,
        input_system: &InputSystem,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        frame_duration: Duration,
    ) -> Result<()> {
        let mut last_frame: Option<Instant> = None;

        loop {
            let frame_start = Instant::now();

            if !app_state.read().await.running {
                return Ok(());
            }

            let due = last_frame
                .map_or(true, |last| frame_start.duration_since(last) >= frame_duration);
            if due {
                let mut app = app_state.write().await;
                terminal
                    .draw(|f| app.render(f))
                    .context("Failed to draw frame")?;
                drop(app);
                last_frame = Some(frame_start);
            }

            if event::poll(Duration::from_millis(1))? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Err(e) = input_system.handle_key_input(key) {
                            warn!("Error handling key input: {:#}", e);
                        }
                    }
                    // Redraw on the next pass instead of waiting for the frame timer
                    Event::Resize(_, _) => last_frame = None,
                    _ => {}
                }
            } else {
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        }
    }

    /// Initialize the status bar with default slots
    pub fn init_status_bar(&mut self) {
        self.status_bar.set_slot(
            StatusSlot::new("words-count", "")
                .with_alignment(SlotAlignment::Left)
                .with_priority(100),
        );
        self.status_bar.set_slot(
            StatusSlot::new("chars", "")
                .with_alignment(SlotAlignment::Left)
                .with_priority(90),
        );
        self.status_bar.set_slot(
            StatusSlot::new("hint", "Ctrl+U clear  Ctrl+V paste  Ctrl+Q quit")
                .with_alignment(SlotAlignment::Right)
                .with_priority(10),
        );
        self.update_status_bar();
    }

    /// Update status bar slots from the rendered surface
    pub fn update_status_bar(&mut self) {
        let surface = self.editor.surface();
        let words = format!("words {}", surface.word_count_text());
        let chars = format!("chars {}", surface.char_spans().len());

        self.status_bar.update_slot_content("words-count", words);
        self.status_bar.update_slot_content("chars", chars);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), PathBuf::from("."))
    }
}

/// `<config dir>/tally`, falling back to the working directory
pub fn default_user_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally")
}
