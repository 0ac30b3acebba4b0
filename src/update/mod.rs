//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod container;
mod divider;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SplitContainer;
use crate::view::Surface;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use container::update_container;
pub use divider::update_divider;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<P: Surface>(container: &mut SplitContainer<P>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(container, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(container, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<P: Surface>(container: &mut SplitContainer<P>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Container(m) => container::update_container(container, m),
        Msg::Divider(m) => divider::update_divider(container, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Hover messages are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced<P: Surface>(container: &mut SplitContainer<P>, msg: Msg) -> Option<Cmd> {
    use crate::messages::ContainerMsg;

    let is_noisy = matches!(msg, Msg::Container(ContainerMsg::PointerMoved { .. }));

    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = ?msg).entered())
    };

    let before = (!is_noisy).then(|| LayoutSnapshot::from_container(container));

    let result = update_inner(container, msg);

    if let Some(before) = before {
        let after = LayoutSnapshot::from_container(container);
        if let Some(diff) = before.diff(&after) {
            debug!(target: "layout", %diff, "state changed");
        }
    }

    container.assert_invariants();

    result
}
