//! Divider message handlers (press, drag, release)
//!
//! The divider turns pointer input into a container message, which is then
//! fed straight back through the container handler.

use crate::commands::Cmd;
use crate::messages::{DividerMsg, Msg};
use crate::model::SplitContainer;
use crate::view::{PointerEvent, Surface};

use super::container::update_container;

/// Handle pointer input addressed to one divider
pub fn update_divider<P: Surface>(
    container: &mut SplitContainer<P>,
    msg: DividerMsg,
) -> Option<Cmd> {
    let index = msg.index();
    let Some(divider) = container.divider_mut(index) else {
        tracing::trace!(index, "Pointer input for missing divider");
        return None;
    };

    let event = match msg {
        DividerMsg::Pressed { x, .. } => PointerEvent::Pressed { x, y: 0 },
        DividerMsg::Dragged { x, .. } => PointerEvent::Dragged { x, y: 0 },
        DividerMsg::Released { .. } => PointerEvent::Released { x: 0, y: 0 },
    };

    match divider.on_pointer(event)? {
        Msg::Container(m) => update_container(container, m),
        Msg::Divider(m) => {
            tracing::warn!(?m, "Divider produced a divider message, dropping");
            None
        }
    }
}
