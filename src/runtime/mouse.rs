//! Translation of winit pointer events into container pointer events

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use splitview::view::hit_test::Point;
use splitview::view::PointerEvent;

/// Last known pointer position and primary button state
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker {
    position: Option<Point>,
    left_down: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last position in window pixels, snapped to the pixel grid
    pub fn position(&self) -> Option<(i32, i32)> {
        self.position.map(|p| p.to_local(0, 0))
    }

    /// Record a cursor move and produce a drag or hover event
    pub fn moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        let point = Point::new(position.x, position.y);
        self.position = Some(point);

        let (x, y) = point.to_local(0, 0);
        if self.left_down {
            PointerEvent::Dragged { x, y }
        } else {
            PointerEvent::Moved { x, y }
        }
    }

    /// Produce a press or release event for the primary button.
    ///
    /// Other buttons and clicks before the first cursor move are ignored.
    pub fn button(&mut self, state: ElementState, button: MouseButton) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        let (x, y) = self.position()?;
        match state {
            ElementState::Pressed => {
                self.left_down = true;
                Some(PointerEvent::Pressed { x, y })
            }
            ElementState::Released => {
                // A release without a tracked press still ends any capture
                self.left_down = false;
                Some(PointerEvent::Released { x, y })
            }
        }
    }

    /// Forget the pointer when it leaves the window
    pub fn left_window(&mut self) {
        self.position = None;
    }
}
