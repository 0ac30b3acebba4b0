//! Panel implementations for the split container
//!
//! Any type implementing [`Surface`](crate::view::Surface) can be placed in a
//! container; this module holds the stock ones.
//!
//! ## Available Panels
//!
//! - **PlaceholderPanel**: named solid-color panel for prototyping

mod placeholder;

pub use placeholder::PlaceholderPanel;

/// Fill colors cycled through by [`placeholder_for`]
pub const PLACEHOLDER_COLORS: [u32; 6] = [
    0xFF2E3440, 0xFF3B4252, 0xFF434C5E, 0xFF4C566A, 0xFF5E81AC, 0xFF81A1C1,
];

/// The `n`-th placeholder panel (0-based), named and colored by position
pub fn placeholder_for(n: usize) -> PlaceholderPanel {
    PlaceholderPanel::new(
        format!("Panel {}", n + 1),
        PLACEHOLDER_COLORS[n % PLACEHOLDER_COLORS.len()],
    )
}
