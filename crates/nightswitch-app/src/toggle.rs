//! Two-state switch control

/// A widget with a settable checked state.
///
/// Activation is not part of the trait: the front end turns it into
/// [`Message::ToggleActivated`](crate::message::Message::ToggleActivated).
pub trait ToggleControl {
    fn set_checked(&mut self, checked: bool);

    fn is_checked(&self) -> bool;
}

/// Render-agnostic state of the night-mode switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchState {
    checked: bool,
    label: String,
}

impl SwitchState {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            checked: false,
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for SwitchState {
    fn default() -> Self {
        Self::new("Night mode")
    }
}

impl ToggleControl for SwitchState {
    fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    fn is_checked(&self) -> bool {
        self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_starts_unchecked() {
        let switch = SwitchState::default();
        assert!(!switch.is_checked());
        assert_eq!(switch.label(), "Night mode");
    }

    #[test]
    fn test_set_checked() {
        let mut switch = SwitchState::new("Dark theme");
        switch.set_checked(true);
        assert!(switch.is_checked());
        switch.set_checked(false);
        assert!(!switch.is_checked());
    }
}
