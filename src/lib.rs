//! A terminal text field that live-counts words and renders every
//! character of its text as a separate span.

pub mod app;
pub mod buffer;
pub mod config;
pub mod events;
pub mod handlers;
pub mod input;
pub mod input_system;
pub mod logging;
pub mod reactive;
pub mod surface;
pub mod ui;
pub mod views;
pub mod widgets;

// Re-export main types for convenience
pub use app::App;
pub use reactive::ReactiveEditor;
pub use surface::{RenderSurface, Surface};
