//! Widget components for the TUI

mod key_hints;
mod toggle_switch;

pub use key_hints::KeyHints;
pub use toggle_switch::ToggleSwitch;
