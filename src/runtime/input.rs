//! Keyboard handling for the demo window

use winit::keyboard::KeyCode;

/// What a key press asks the demo to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Append another placeholder panel
    AddPanel,
    /// Remove the right-most panel
    RemoveLastPanel,
    Quit,
}

/// Map a physical key to a demo action
pub fn key_action(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::KeyN => Some(KeyAction::AddPanel),
        KeyCode::Backspace | KeyCode::Delete => Some(KeyAction::RemoveLastPanel),
        KeyCode::Escape => Some(KeyAction::Quit),
        _ => None,
    }
}
