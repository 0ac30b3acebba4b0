//! Benchmarks for split container layout and drag handling
//!
//! Run with: cargo bench layout

use splitview::model::{Rect, SplitContainer};
use splitview::panels::{placeholder_for, PlaceholderPanel};
use splitview::view::{Frame, PointerEvent, Surface};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_container(panels: usize) -> SplitContainer<PlaceholderPanel> {
    let mut container = SplitContainer::new();
    container.set_bounds(Rect::new(0, 0, 1920, 1080));
    for n in 0..panels {
        container.add(placeholder_for(n));
    }
    container
}

// ============================================================================
// Layout
// ============================================================================

#[divan::bench(args = [2, 8, 32, 128])]
fn recompute_layout(bencher: divan::Bencher, panels: usize) {
    let mut container = make_container(panels);
    bencher.bench_local(|| {
        container.recompute_layout();
        divan::black_box(&container);
    });
}

#[divan::bench(args = [2, 8, 32])]
fn resize_sweep(bencher: divan::Bencher, panels: usize) {
    let mut container = make_container(panels);
    bencher.bench_local(|| {
        for width in (800..1920).step_by(16) {
            container.set_bounds(Rect::new(0, 0, width, 1080));
        }
        divan::black_box(&container);
    });
}

#[divan::bench(args = [8, 32, 128])]
fn add_panels(panels: usize) {
    divan::black_box(make_container(panels));
}

#[divan::bench(args = [8, 32, 128])]
fn remove_all_panels(bencher: divan::Bencher, panels: usize) {
    bencher
        .with_inputs(|| make_container(panels))
        .bench_local_values(|mut container| {
            while let Some(id) = container.panel_ids().first().copied() {
                container.remove(id);
            }
            container
        });
}

// ============================================================================
// Interaction
// ============================================================================

#[divan::bench(args = [2, 8, 32])]
fn drag_divider(bencher: divan::Bencher, panels: usize) {
    let mut container = make_container(panels);
    let left = container.entries().next().map_or(0, |e| e.rect.x);
    let right = container.entries().nth(1).map_or(0, |e| e.rect.right());

    bencher.bench_local(|| {
        for x in left..right {
            divan::black_box(container.handle_divider_drag(1, x));
        }
    });
}

#[divan::bench(args = [8, 32])]
fn hover_sweep(bencher: divan::Bencher, panels: usize) {
    let mut container = make_container(panels);
    bencher.bench_local(|| {
        for x in (0..1920).step_by(4) {
            divan::black_box(container.on_pointer(PointerEvent::Moved { x, y: 540 }));
            divan::black_box(container.update_hover(x, 540));
        }
    });
}

// ============================================================================
// Rendering
// ============================================================================

#[divan::bench(args = [2, 8, 32])]
fn render_frame(bencher: divan::Bencher, panels: usize) {
    let container = make_container(panels);
    let mut buffer = vec![0u32; 1920 * 1080];

    bencher.bench_local(|| {
        let mut frame = Frame::new(&mut buffer, 1920, 1080);
        frame.clear(0xFF1E1E1E);
        container.render(&mut frame);
    });
}
