//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Map a key press to a follow-up message
pub fn handle_key(_state: &AppState, key: InputKey) -> UpdateResult {
    match key {
        // Activate the switch
        InputKey::Char(' ') | InputKey::Char('t') | InputKey::Enter => {
            UpdateResult::message(Message::ToggleActivated)
        }

        // Re-create the screen from the store
        InputKey::Char('r') => UpdateResult::message(Message::Reinitialize),

        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => {
            UpdateResult::message(Message::Quit)
        }

        _ => UpdateResult::none(),
    }
}
