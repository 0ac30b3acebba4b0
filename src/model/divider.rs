//! Divider handle - the draggable strip between two adjacent panels
//!
//! A divider never talks to its container directly. Pointer events come in
//! through [`Surface::on_pointer`], and drags go back out as a
//! [`ContainerMsg::DividerDragged`] message carrying the candidate boundary
//! position. All acceptance logic lives in the container.

use winit::window::CursorIcon;

use super::geometry::Rect;
use crate::messages::{ContainerMsg, Msg};
use crate::view::{Frame, PointerEvent, Surface};

/// Draggable strip sitting on the boundary between two panels
#[derive(Debug, Clone)]
pub struct DividerHandle {
    /// Index of the panel to the right of this divider (always >= 1)
    index: usize,
    /// Position in container coordinates
    bounds: Rect,
    /// Horizontal offset within the handle where the last press landed
    press_offset: i32,
    /// Solid fill color (ARGB)
    color: u32,
}

impl DividerHandle {
    pub fn new(index: usize, color: u32) -> Self {
        Self {
            index,
            bounds: Rect::default(),
            press_offset: 0,
            color,
        }
    }

    /// Container index this divider reports when dragged
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    #[inline]
    pub fn press_offset(&self) -> i32 {
        self.press_offset
    }

    /// Record where inside the handle the press happened
    pub fn press(&mut self, local_x: i32) {
        self.press_offset = local_x;
    }

    /// Candidate boundary x for a drag whose pointer is at `local_x` inside the handle
    pub fn candidate_x(&self, local_x: i32) -> i32 {
        self.bounds.x + local_x - self.press_offset
    }

    /// Translate a drag into a resize request for the owning container
    pub fn drag(&self, local_x: i32) -> Msg {
        Msg::Container(ContainerMsg::DividerDragged {
            index: self.index,
            x: self.candidate_x(local_x),
        })
    }
}

impl Surface for DividerHandle {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn render(&self, frame: &mut Frame<'_>) {
        frame.fill_rect(self.bounds, self.color);
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::EwResize
    }

    fn on_pointer(&mut self, event: PointerEvent) -> Option<Msg> {
        match event {
            PointerEvent::Pressed { x, .. } => {
                self.press(x);
                None
            }
            PointerEvent::Dragged { x, .. } => Some(self.drag(x)),
            PointerEvent::Released { .. } => Some(Msg::Container(ContainerMsg::DividerReleased {
                index: self.index,
            })),
            PointerEvent::Moved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider_at(x: i32) -> DividerHandle {
        let mut divider = DividerHandle::new(1, 0xFF000000);
        divider.set_bounds(Rect::new(x, 0, 10, 500));
        divider
    }

    #[test]
    fn test_drag_subtracts_press_offset() {
        let mut divider = divider_at(495);
        divider.press(3);

        // Pointer moved 20px right while keeping the same grip point
        assert_eq!(divider.candidate_x(23), 515);
    }

    #[test]
    fn test_new_press_overwrites_offset() {
        let mut divider = divider_at(495);
        divider.press(8);
        divider.press(2);
        assert_eq!(divider.press_offset(), 2);
        assert_eq!(divider.candidate_x(2), 495);
    }

    #[test]
    fn test_pointer_events_map_to_messages() {
        let mut divider = divider_at(495);

        assert!(divider
            .on_pointer(PointerEvent::Pressed { x: 5, y: 100 })
            .is_none());

        match divider.on_pointer(PointerEvent::Dragged { x: 15, y: 100 }) {
            Some(Msg::Container(ContainerMsg::DividerDragged { index, x })) => {
                assert_eq!(index, 1);
                assert_eq!(x, 505);
            }
            other => panic!("Expected DividerDragged, got {:?}", other),
        }

        assert!(matches!(
            divider.on_pointer(PointerEvent::Released { x: 15, y: 100 }),
            Some(Msg::Container(ContainerMsg::DividerReleased { index: 1 }))
        ));
    }

    #[test]
    fn test_hover_cursor_is_horizontal_resize() {
        assert_eq!(divider_at(0).cursor(), CursorIcon::EwResize);
    }
}
