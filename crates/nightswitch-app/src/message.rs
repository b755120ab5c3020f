//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::signals::ShutdownSignal;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// The night-mode switch was clicked
    ToggleActivated,

    /// Re-create the screen: reload the flag from the store
    Reinitialize,

    /// Quit key binding
    Quit,

    /// The process was asked to stop
    Shutdown(ShutdownSignal),
}
