//! Widget model - the complete state of a split container
//!
//! This module contains the state types following the Elm Architecture
//! pattern: `update` mutates them, the view renders them.

pub mod container;
pub mod divider;
pub mod geometry;

pub use container::{LayoutState, PanelEntry, PanelId, SplitContainer};
pub use divider::DividerHandle;
pub use geometry::Rect;
