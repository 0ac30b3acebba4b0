//! Container message handlers (resize, drag requests, hover)

use crate::commands::Cmd;
use crate::messages::ContainerMsg;
use crate::model::{Rect, SplitContainer};
use crate::view::Surface;

/// Handle messages addressed to the split container
pub fn update_container<P: Surface>(
    container: &mut SplitContainer<P>,
    msg: ContainerMsg,
) -> Option<Cmd> {
    match msg {
        ContainerMsg::Resized { width, height } => {
            let bounds = container.bounds();
            container.set_bounds(Rect::new(bounds.x, bounds.y, width.max(0), height.max(0)));
            Some(Cmd::Redraw)
        }

        ContainerMsg::DividerDragged { index, x } => container
            .handle_divider_drag(index, x)
            .then_some(Cmd::Redraw),

        ContainerMsg::DividerReleased { index } => {
            if container.config().sync_proportions_on_release && container.commit_pixel_widths()
            {
                tracing::debug!(index, "Drag released, proportions synced to pixel widths");
                // Widths now come from the committed proportions
                container.recompute_layout();
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        ContainerMsg::PointerMoved { x, y } => container.update_hover(x, y).map(Cmd::SetCursor),
    }
}
