//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

use winit::window::CursorIcon;

/// Side effect requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Request a full redraw of the container
    Redraw,
    /// Change the window cursor (hover affordance)
    SetCursor(CursorIcon),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Whether this command (or any command in a batch) requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::SetCursor(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
        }
    }

    /// Combine two optional commands, batching when both are present
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        match (a, b) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(Cmd::Batch(mut cmds)), Some(other)) => {
                cmds.push(other);
                Some(Cmd::Batch(cmds))
            }
            (Some(first), Some(second)) => Some(Cmd::Batch(vec![first, second])),
        }
    }
}
