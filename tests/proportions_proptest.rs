//! Property-based invariant tests for the split container.
//!
//! These tests drive random sequences of operations and check structural
//! invariants after every step:
//!
//! 1. Proportions sum to 1 whenever at least one panel is present.
//! 2. There is exactly one divider per boundary, numbered 1..n.
//! 3. Panels are laid out contiguously from x = 0 and never overflow.
//! 4. Accepted drags never leave a neighbour at or below the minimum width.
//! 5. Adding or removing a panel preserves the ratios of the others.

mod common;

use common::{panel_spans, test_container, EPS};
use proptest::prelude::*;
use splitview::model::{Rect, SplitContainer};
use splitview::panels::{placeholder_for, PlaceholderPanel};
use splitview::view::Surface;

#[derive(Debug, Clone)]
enum Op {
    Add,
    /// Remove the panel at this position (modulo the panel count)
    Remove(usize),
    /// Drag the divider at this index (modulo the divider count) to x
    Drag(usize, i32),
    Resize(i32),
    Commit,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Add),
        2 => (0usize..16).prop_map(Op::Remove),
        3 => (0usize..16, -100i32..2100).prop_map(|(i, x)| Op::Drag(i, x)),
        1 => (0i32..2000).prop_map(Op::Resize),
        1 => Just(Op::Commit),
    ]
}

fn apply(container: &mut SplitContainer<PlaceholderPanel>, op: &Op, added: &mut usize) {
    match *op {
        Op::Add => {
            container.add(placeholder_for(*added));
            *added += 1;
        }
        Op::Remove(pos) => {
            if !container.is_empty() {
                let id = container.panel_ids()[pos % container.len()];
                container.remove(id);
            }
        }
        Op::Drag(i, x) => {
            if container.len() > 1 {
                let index = i % (container.len() - 1) + 1;
                container.handle_divider_drag(index, x);
            }
        }
        Op::Resize(width) => {
            container.set_bounds(Rect::new(0, 0, width, 500));
        }
        Op::Commit => {
            container.commit_pixel_widths();
        }
    }
}

fn check_invariants(container: &SplitContainer<PlaceholderPanel>) -> Result<(), TestCaseError> {
    let proportions = container.proportions();
    if !proportions.is_empty() {
        let sum: f64 = proportions.iter().sum();
        prop_assert!((sum - 1.0).abs() < EPS, "sum {} for {:?}", sum, proportions);
    }

    prop_assert_eq!(container.dividers().len(), container.len().saturating_sub(1));
    for (i, divider) in container.dividers().iter().enumerate() {
        prop_assert_eq!(divider.index(), i + 1);
    }

    let spans = panel_spans(container);
    if let Some(first) = spans.first() {
        prop_assert_eq!(first.0, 0);
    }
    for pair in spans.windows(2) {
        prop_assert_eq!(pair[0].0 + pair[0].1, pair[1].0);
    }
    let used: i32 = spans.iter().map(|(_, w)| w).sum();
    prop_assert!(used <= container.bounds().width, "{} > {}", used, container.bounds().width);
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(ops in proptest::collection::vec(op_strategy(), 1..60)) {
        let mut container = test_container(1000, 500, 0);
        let mut added = 0;

        for op in &ops {
            apply(&mut container, op, &mut added);
            check_invariants(&container)?;
        }
    }
}

proptest! {
    #[test]
    fn accepted_drag_respects_minimum(panels in 2usize..8, index in 1usize..8, x in 0i32..1000) {
        let mut container = test_container(1000, 500, panels);
        let index = (index - 1) % (panels - 1) + 1;
        let min = container.config().min_panel_width;

        if container.handle_divider_drag(index, x) {
            let spans = panel_spans(&container);
            prop_assert!(spans[index - 1].1 > min);
            prop_assert!(spans[index].1 > min);
            prop_assert_eq!(spans[index].0, x);
        }
    }
}

proptest! {
    #[test]
    fn add_preserves_ratios(panels in 1usize..10) {
        let mut container = test_container(1000, 500, panels);
        let before = container.proportions();

        container.add(placeholder_for(panels));

        let after = container.proportions();
        for i in 1..before.len() {
            let ratio_before = before[0] / before[i];
            let ratio_after = after[0] / after[i];
            prop_assert!((ratio_before - ratio_after).abs() < 1e-6);
        }
        prop_assert!((after[panels] - 1.0 / (panels + 1) as f64).abs() < EPS);
    }
}

proptest! {
    #[test]
    fn remove_preserves_ratios(panels in 3usize..10, victim in 0usize..10) {
        let mut container = test_container(1000, 500, panels);
        let victim = victim % panels;
        let mut expected = container.proportions();
        expected.remove(victim);

        let id = container.panel_ids()[victim];
        prop_assert!(container.remove(id).is_some());

        let after = container.proportions();
        for i in 1..after.len() {
            prop_assert!((after[0] / after[i] - expected[0] / expected[i]).abs() < 1e-6);
        }
    }
}
