//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Messages handled by the split container itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerMsg {
    /// The host resized the container
    Resized { width: i32, height: i32 },
    /// A divider was dragged; `x` is the proposed boundary in container coordinates
    DividerDragged { index: usize, x: i32 },
    /// The drag on a divider ended
    DividerReleased { index: usize },
    /// Pointer hovered at a container-local position with no button held
    PointerMoved { x: i32, y: i32 },
}

/// Pointer input routed to a specific divider, in divider-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerMsg {
    Pressed { index: usize, x: i32 },
    Dragged { index: usize, x: i32 },
    Released { index: usize },
}

impl DividerMsg {
    /// Container index of the divider this message targets
    pub fn index(&self) -> usize {
        match *self {
            DividerMsg::Pressed { index, .. }
            | DividerMsg::Dragged { index, .. }
            | DividerMsg::Released { index } => index,
        }
    }
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Container(ContainerMsg),
    Divider(DividerMsg),
}
