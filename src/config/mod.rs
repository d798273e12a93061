use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::surface::CHAR_SPAN_CLASS;
use crate::views::WordCountView;

/// Editor configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// Counting and initial content
    #[serde(default)]
    pub editor: EditorConfig,

    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Editor settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Minimum width of the rendered word count
    #[serde(default = "default_word_count_width")]
    pub word_count_width: usize,

    /// Text placed in the input field at startup
    #[serde(default)]
    pub initial_text: String,
}

/// UI settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Show status bar
    #[serde(default = "default_show_status_bar")]
    pub show_status_bar: bool,

    /// Wrap the character display instead of clipping it
    #[serde(default = "default_wrap_display")]
    pub wrap_display: bool,

    /// Class marker given to character span elements
    #[serde(default = "default_span_marker")]
    pub span_marker: String,

    /// Frame interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

// Default values
fn default_word_count_width() -> usize {
    WordCountView::DEFAULT_WIDTH
}
fn default_show_status_bar() -> bool {
    true
}
fn default_wrap_display() -> bool {
    true
}
fn default_span_marker() -> String {
    CHAR_SPAN_CLASS.to_string()
}
fn default_tick_rate_ms() -> u64 {
    16
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_count_width: default_word_count_width(),
            initial_text: String::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_status_bar: default_show_status_bar(),
            wrap_display: default_wrap_display(),
            span_marker: default_span_marker(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: Config,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a manager for `config.json` inside `config_dir`
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config: Config::default(),
            config_path: config_dir.join("config.json"),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config. A missing file leaves the defaults in place.
    pub fn load(&mut self) -> Result<()> {
        if !self.config_path.exists() {
            return Ok(());
        }

        let config_str = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read {}", self.config_path.display()))?;
        self.config = serde_json::from_str(&config_str)
            .map_err(|e| anyhow!("Failed to parse config: {}", e))?;

        Ok(())
    }

    /// Save the config, creating its directory if needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let config_str = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, config_str)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;
        Ok(())
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Update a setting by its dotted path
    pub fn update_setting(&mut self, path: &str, value: serde_json::Value) -> Result<()> {
        match path {
            "editor.wordCountWidth" => {
                self.config.editor.word_count_width =
                    value.as_u64().ok_or_else(|| anyhow!("Expected number"))? as usize;
            }
            "editor.initialText" => {
                self.config.editor.initial_text = value
                    .as_str()
                    .ok_or_else(|| anyhow!("Expected string"))?
                    .to_string();
            }
            "ui.showStatusBar" => {
                self.config.ui.show_status_bar =
                    value.as_bool().ok_or_else(|| anyhow!("Expected boolean"))?;
            }
            "ui.wrapDisplay" => {
                self.config.ui.wrap_display =
                    value.as_bool().ok_or_else(|| anyhow!("Expected boolean"))?;
            }
            "ui.spanMarker" => {
                let marker = value.as_str().ok_or_else(|| anyhow!("Expected string"))?;
                if marker.trim().is_empty() {
                    return Err(anyhow!("Span marker must not be empty"));
                }
                self.config.ui.span_marker = marker.to_string();
            }
            "ui.tickRateMs" => {
                self.config.ui.tick_rate_ms =
                    value.as_u64().ok_or_else(|| anyhow!("Expected number"))?;
            }
            _ => return Err(anyhow!("Unsupported setting path: {}", path)),
        }

        Ok(())
    }

    /// Get a setting by its dotted path
    pub fn get_setting(&self, path: &str) -> Result<serde_json::Value> {
        match path {
            "editor.wordCountWidth" => Ok(serde_json::json!(self.config.editor.word_count_width)),
            "editor.initialText" => Ok(serde_json::json!(self.config.editor.initial_text)),
            "ui.showStatusBar" => Ok(serde_json::json!(self.config.ui.show_status_bar)),
            "ui.wrapDisplay" => Ok(serde_json::json!(self.config.ui.wrap_display)),
            "ui.spanMarker" => Ok(serde_json::json!(self.config.ui.span_marker)),
            "ui.tickRateMs" => Ok(serde_json::json!(self.config.ui.tick_rate_ms)),
            _ => Err(anyhow!("Unsupported setting path: {}", path)),
        }
    }
}
