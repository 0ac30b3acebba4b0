//! Placeholder panel for prototyping
//!
//! A solid-colored panel with a thin border. Its name is carried for logs
//! and lookups only; nothing is drawn for it. Used by the demo binary and in
//! tests wherever real content would go.

use crate::model::Rect;
use crate::view::{Frame, Surface};

/// Placeholder panel state
#[derive(Debug, Clone)]
pub struct PlaceholderPanel {
    pub label: String,
    /// Fill color (ARGB)
    pub color: u32,
    bounds: Rect,
}

impl PlaceholderPanel {
    pub fn new(label: impl Into<String>, color: u32) -> Self {
        Self {
            label: label.into(),
            color,
            bounds: Rect::default(),
        }
    }

    /// Border color: the fill darkened to half intensity
    pub fn border_color(&self) -> u32 {
        0xFF000000 | ((self.color >> 1) & 0x007F7F7F)
    }
}

impl Surface for PlaceholderPanel {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn render(&self, frame: &mut Frame<'_>) {
        frame.fill_rect(self.bounds, self.color);
        frame.stroke_rect(self.bounds, self.border_color());
    }
}
