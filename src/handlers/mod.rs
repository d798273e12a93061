//! Event handlers for the application
pub mod change;
pub mod keyboard;

pub use change::ChangeHandler;
pub use keyboard::KeyboardHandler;
