//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use splitview::config::SplitConfig;
use splitview::model::{PanelId, Rect, SplitContainer};
use splitview::panels::{placeholder_for, PlaceholderPanel};
use splitview::view::Surface;

/// Tolerance for comparing proportions
pub const EPS: f64 = 1e-9;

/// Container of `panels` placeholders laid out in a `width` x `height` area
pub fn test_container(width: i32, height: i32, panels: usize) -> SplitContainer<PlaceholderPanel> {
    test_container_with_config(width, height, panels, SplitConfig::default())
}

/// Same as [`test_container`] with custom tunables
pub fn test_container_with_config(
    width: i32,
    height: i32,
    panels: usize,
    config: SplitConfig,
) -> SplitContainer<PlaceholderPanel> {
    let mut container = SplitContainer::with_config(config);
    container.set_bounds(Rect::new(0, 0, width, height));
    for n in 0..panels {
        container.add(placeholder_for(n));
    }
    container
}

/// The usual 1000x500 container
pub fn standard_container(panels: usize) -> SplitContainer<PlaceholderPanel> {
    test_container(1000, 500, panels)
}

/// (x, width) of every panel, left to right
pub fn panel_spans(container: &SplitContainer<PlaceholderPanel>) -> Vec<(i32, i32)> {
    container
        .entries()
        .map(|entry| (entry.rect.x, entry.rect.width))
        .collect()
}

/// x of every divider, left to right
pub fn divider_xs(container: &SplitContainer<PlaceholderPanel>) -> Vec<i32> {
    container.dividers().iter().map(|d| d.bounds().x).collect()
}

/// Id of the panel at `position`
pub fn id_at(container: &SplitContainer<PlaceholderPanel>, position: usize) -> PanelId {
    container.panel_ids()[position]
}

pub fn assert_proportions(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "proportion count: {:?} vs {:?}",
        actual,
        expected
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < EPS,
            "proportion #{}: expected {}, got {} (all: {:?})",
            i,
            e,
            a,
            actual
        );
    }
}

pub fn assert_sums_to_one(proportions: &[f64]) {
    let sum: f64 = proportions.iter().sum();
    assert!((sum - 1.0).abs() < EPS, "proportions sum to {}: {:?}", sum, proportions);
}
