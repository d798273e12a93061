pub mod display;
pub mod input;
pub mod status_bar;

pub use display::CharDisplay;
pub use input::InputBox;
pub use status_bar::{SlotAlignment, StatusBar, StatusSlot};
