//! View module - drawing, pointer routing and hit-testing
//!
//! Everything that appears on screen implements [`Surface`]: the split
//! container, its dividers, and whatever panels the embedding application
//! supplies. Composition over a trait replaces subclassing a framework widget.

pub mod frame;

pub use frame::Frame;
pub use hit_test::{hit_test, HitTarget};

use winit::window::CursorIcon;

use crate::messages::Msg;
use crate::model::Rect;

/// Pointer input delivered to a surface, in that surface's local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button went down
    Pressed { x: i32, y: i32 },
    /// Pointer moved while the primary button is held
    Dragged { x: i32, y: i32 },
    /// Primary button went up
    Released { x: i32, y: i32 },
    /// Pointer moved with no button held (hover)
    Moved { x: i32, y: i32 },
}

impl PointerEvent {
    /// Same event shifted into a child's coordinate space
    pub fn relative_to(self, origin_x: i32, origin_y: i32) -> Self {
        match self {
            PointerEvent::Pressed { x, y } => PointerEvent::Pressed {
                x: x - origin_x,
                y: y - origin_y,
            },
            PointerEvent::Dragged { x, y } => PointerEvent::Dragged {
                x: x - origin_x,
                y: y - origin_y,
            },
            PointerEvent::Released { x, y } => PointerEvent::Released {
                x: x - origin_x,
                y: y - origin_y,
            },
            PointerEvent::Moved { x, y } => PointerEvent::Moved {
                x: x - origin_x,
                y: y - origin_y,
            },
        }
    }
}

/// A renderable, interactive rectangle of screen.
///
/// Bounds are expressed in the parent's coordinate space. `render` draws
/// relative to the frame's current origin, which the parent moves to its own
/// top-left corner before rendering children.
pub trait Surface {
    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);

    fn render(&self, frame: &mut Frame<'_>);

    /// Cursor to show while hovering this surface
    fn cursor(&self) -> CursorIcon {
        CursorIcon::Default
    }

    /// Handle pointer input; a returned message is fed back through `update`
    fn on_pointer(&mut self, _event: PointerEvent) -> Option<Msg> {
        None
    }
}
