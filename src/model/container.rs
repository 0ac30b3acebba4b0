//! Split container - resizable side-by-side panels with draggable dividers
//!
//! Panels are kept in a single ordered list of entries, each holding the
//! panel, its share of the container width and its current pixel rectangle.
//! Dividers are kept in lockstep with that list: there is always exactly one
//! divider per boundary between consecutive panels.

use winit::window::CursorIcon;

use super::divider::DividerHandle;
use super::geometry::Rect;
use crate::config::SplitConfig;
use crate::messages::{ContainerMsg, DividerMsg, Msg};
use crate::view::{hit_test, Frame, HitTarget, PointerEvent, Surface};

/// Unique identifier for a panel, handed out by [`SplitContainer::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(pub u64);

/// A panel attached to the container
#[derive(Debug, Clone)]
pub struct PanelEntry<P> {
    pub id: PanelId,
    pub panel: P,
    /// Fraction of the container width (0 < p <= 1, all entries sum to 1)
    pub proportion: f64,
    /// Current rectangle in container coordinates
    pub rect: Rect,
}

/// Whether a layout pass is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutState {
    #[default]
    Idle,
    /// Size-change notifications arriving in this state are ignored
    LayingOut,
}

/// Container dividing its width between panels by proportion
#[derive(Debug, Clone)]
pub struct SplitContainer<P> {
    entries: Vec<PanelEntry<P>>,
    dividers: Vec<DividerHandle>,
    /// Bounds in the parent's coordinate space
    bounds: Rect,
    state: LayoutState,
    config: SplitConfig,
    next_panel_id: u64,
    /// Divider holding the pointer between press and release
    captured_divider: Option<usize>,
    /// Cursor last reported for hover
    hover_cursor: CursorIcon,
}

impl<P: Surface> Default for SplitContainer<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Surface> SplitContainer<P> {
    /// Create an empty container with default configuration
    pub fn new() -> Self {
        Self::with_config(SplitConfig::default())
    }

    pub fn with_config(config: SplitConfig) -> Self {
        Self {
            entries: Vec::new(),
            dividers: Vec::new(),
            bounds: Rect::default(),
            state: LayoutState::Idle,
            config: config.sanitized(),
            next_panel_id: 1,
            captured_divider: None,
            hover_cursor: CursorIcon::Default,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn layout_state(&self) -> LayoutState {
        self.state
    }

    /// Panel entries in left-to-right order
    pub fn entries(&self) -> impl Iterator<Item = &PanelEntry<P>> {
        self.entries.iter()
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Proportions in left-to-right order
    pub fn proportions(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.proportion).collect()
    }

    /// Position of a panel in the left-to-right order
    pub fn position_of(&self, id: PanelId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn panel(&self, id: PanelId) -> Option<&P> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.panel)
    }

    pub fn panel_mut(&mut self, id: PanelId) -> Option<&mut P> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.panel)
    }

    /// Current rectangle of a panel in container coordinates
    pub fn panel_rect(&self, id: PanelId) -> Option<Rect> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.rect)
    }

    /// Dividers in left-to-right order
    pub fn dividers(&self) -> &[DividerHandle] {
        &self.dividers
    }

    /// Divider by the container index it reports (1-based, see [`DividerHandle::index`])
    pub fn divider(&self, index: usize) -> Option<&DividerHandle> {
        index.checked_sub(1).and_then(|i| self.dividers.get(i))
    }

    pub fn divider_mut(&mut self, index: usize) -> Option<&mut DividerHandle> {
        index.checked_sub(1).and_then(|i| self.dividers.get_mut(i))
    }

    // =========================================================================
    // Structural operations
    // =========================================================================

    /// Append a panel on the right, giving it `1/n` of the width.
    ///
    /// Existing proportions are scaled by `1 - 1/n` so their ratios are kept
    /// and the total stays 1.
    pub fn add(&mut self, panel: P) -> PanelId {
        let id = PanelId(self.next_panel_id);
        self.next_panel_id += 1;

        let count = self.entries.len() + 1;
        let proportion = if count == 1 {
            1.0
        } else {
            let share = 1.0 / count as f64;
            for entry in &mut self.entries {
                entry.proportion *= 1.0 - share;
            }
            share
        };

        self.entries.push(PanelEntry {
            id,
            panel,
            proportion,
            rect: Rect::default(),
        });
        self.sync_dividers();

        tracing::debug!(
            panel = id.0,
            count,
            proportion,
            "Added panel to split container"
        );

        self.recompute_layout();
        id
    }

    /// Detach a panel and hand it back to the caller.
    ///
    /// Returns `None` (and changes nothing) if the panel is not in this
    /// container. Remaining proportions are renormalized to sum to 1.
    pub fn remove(&mut self, id: PanelId) -> Option<P> {
        let position = self.position_of(id)?;
        let entry = self.entries.remove(position);

        if position < self.dividers.len() {
            self.dividers.remove(position);
        }
        self.sync_dividers();
        self.captured_divider = None;

        let total: f64 = self.entries.iter().map(|e| e.proportion).sum();
        if total > 0.0 {
            for entry in &mut self.entries {
                entry.proportion /= total;
            }
        }

        tracing::debug!(
            panel = id.0,
            position,
            remaining = self.entries.len(),
            "Removed panel from split container"
        );

        self.recompute_layout();
        Some(entry.panel)
    }

    /// Keep one divider per boundary and renumber them left to right
    fn sync_dividers(&mut self) {
        let wanted = self.entries.len().saturating_sub(1);
        self.dividers.truncate(wanted);
        while self.dividers.len() < wanted {
            let index = self.dividers.len() + 1;
            self.dividers
                .push(DividerHandle::new(index, self.config.divider_color));
        }
        for (i, divider) in self.dividers.iter_mut().enumerate() {
            divider.set_index(i + 1);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Lay the panels out left to right from their proportions.
    ///
    /// Each width is `floor(W * p)`; the truncation is not redistributed, so
    /// the panels may fall a few pixels short of the right edge. Each divider
    /// is centered on the boundary after its left panel.
    pub fn recompute_layout(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        self.state = LayoutState::LayingOut;

        let width = self.bounds.width;
        let height = self.bounds.height;
        let half = self.config.divider_half_width();
        let divider_width = self.config.divider_width;
        let mut offset = 0;

        for (i, entry) in self.entries.iter_mut().enumerate() {
            let panel_width = (f64::from(width) * entry.proportion) as i32;
            entry.rect = Rect::new(offset, 0, panel_width, height);
            entry.panel.set_bounds(entry.rect);
            offset += panel_width;

            if let Some(divider) = self.dividers.get_mut(i) {
                divider.set_bounds(Rect::new(offset - half, 0, divider_width, height));
            }
        }

        tracing::trace!(width, height, panels = self.entries.len(), "Laid out split container");

        self.state = LayoutState::Idle;
    }

    /// Size-change notification.
    ///
    /// Ignored while a layout pass is running or when there is nothing to lay out.
    pub fn handle_resize(&mut self) {
        if self.state == LayoutState::Idle && !self.entries.is_empty() {
            self.recompute_layout();
        }
    }

    /// Move the boundary at `index` to `proposed_x`.
    ///
    /// `index` names the panel right of the boundary, so valid values are
    /// `1..len()`. The move is rejected outright (returns `false`) when
    /// either neighbour would end up `min_panel_width` pixels wide or less.
    /// Only pixel bounds change; proportions are left alone.
    pub fn handle_divider_drag(&mut self, index: usize, proposed_x: i32) -> bool {
        if index == 0 || index >= self.entries.len() {
            tracing::trace!(index, "Ignoring drag on invalid divider index");
            return false;
        }

        let left_edge = self.entries[index - 1].rect.x;
        let right_edge = self.entries[index].rect.right();
        let min = self.config.min_panel_width;

        if proposed_x <= left_edge.saturating_add(min)
            || proposed_x >= right_edge.saturating_sub(min)
        {
            tracing::trace!(
                index,
                proposed_x,
                left_edge,
                right_edge,
                "Rejected divider drag below minimum panel width"
            );
            return false;
        }

        let height = self.bounds.height;

        let left = &mut self.entries[index - 1];
        left.rect = Rect::new(left_edge, 0, proposed_x - left_edge, height);
        left.panel.set_bounds(left.rect);

        let right = &mut self.entries[index];
        right.rect = Rect::new(proposed_x, 0, right_edge - proposed_x, height);
        right.panel.set_bounds(right.rect);

        let half = self.config.divider_half_width();
        let divider_width = self.config.divider_width;
        self.dividers[index - 1].set_bounds(Rect::new(proposed_x - half, 0, divider_width, height));

        tracing::trace!(index, proposed_x, "Accepted divider drag");
        true
    }

    /// Re-derive proportions from the current pixel widths.
    ///
    /// Each panel gets `width / sum(widths)`, so the result always sums to 1.
    /// Returns `false` (leaving proportions alone) when any panel has
    /// collapsed to zero width, since every proportion must stay positive.
    pub fn commit_pixel_widths(&mut self) -> bool {
        if self.entries.is_empty() || self.entries.iter().any(|e| e.rect.width <= 0) {
            return false;
        }
        let total: i64 = self.entries.iter().map(|e| i64::from(e.rect.width)).sum();

        for entry in &mut self.entries {
            entry.proportion = entry.rect.width as f64 / total as f64;
        }

        tracing::debug!(proportions = ?self.proportions(), "Committed dragged widths");
        true
    }

    // =========================================================================
    // Hover
    // =========================================================================

    /// Cursor for a container-local point
    pub fn cursor_at(&self, x: i32, y: i32) -> CursorIcon {
        match hit_test(self, x, y) {
            Some(HitTarget::Divider { index }) => self
                .divider(index)
                .map_or(CursorIcon::Default, |d| d.cursor()),
            Some(HitTarget::Panel { id }) => self
                .panel(id)
                .map_or(CursorIcon::Default, |p| p.cursor()),
            None => CursorIcon::Default,
        }
    }

    /// Record the hover cursor, returning it only when it changed
    pub fn update_hover(&mut self, x: i32, y: i32) -> Option<CursorIcon> {
        // Keep the resize cursor for the whole drag, even if the pointer outruns the handle
        let cursor = if self.captured_divider.is_some() {
            CursorIcon::EwResize
        } else {
            self.cursor_at(x, y)
        };

        if cursor == self.hover_cursor {
            None
        } else {
            self.hover_cursor = cursor;
            Some(cursor)
        }
    }

    /// Divider currently capturing the pointer, if a drag is in progress
    pub fn captured_divider(&self) -> Option<usize> {
        self.captured_divider
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

/// Tolerance for the proportions-sum-to-one check
pub const PROPORTION_EPSILON: f64 = 1e-9;

impl<P> SplitContainer<P> {
    /// Validate internal invariants in debug builds.
    ///
    /// This function checks that:
    /// - proportions sum to 1 whenever a panel is present
    /// - there is exactly one divider per panel boundary
    /// - divider `i` reports container index `i + 1`
    ///
    /// Panics in debug builds if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        if !self.entries.is_empty() {
            let sum: f64 = self.entries.iter().map(|e| e.proportion).sum();
            assert!(
                (sum - 1.0).abs() < PROPORTION_EPSILON,
                "proportions sum to {} instead of 1",
                sum
            );
        }

        assert_eq!(
            self.dividers.len(),
            self.entries.len().saturating_sub(1),
            "divider count out of step with {} panels",
            self.entries.len()
        );

        for (i, divider) in self.dividers.iter().enumerate() {
            assert_eq!(
                divider.index(),
                i + 1,
                "divider at position {} reports index {}",
                i,
                divider.index()
            );
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

impl<P: Surface> Surface for SplitContainer<P> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moving the container is free; changing its size fires the resize notification
    fn set_bounds(&mut self, bounds: Rect) {
        let resized = !self.bounds.same_size(&bounds);
        self.bounds = bounds;
        if resized {
            self.handle_resize();
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let saved = frame.origin();
        frame.set_origin((saved.0 + self.bounds.x, saved.1 + self.bounds.y));

        for entry in &self.entries {
            entry.panel.render(frame);
        }
        for divider in &self.dividers {
            divider.render(frame);
        }

        frame.set_origin(saved);
    }

    fn cursor(&self) -> CursorIcon {
        self.hover_cursor
    }

    /// Route pointer input to dividers, capturing the pressed one until release.
    ///
    /// `event` is in the parent's coordinates; the returned message carries
    /// divider-local coordinates.
    fn on_pointer(&mut self, event: PointerEvent) -> Option<Msg> {
        let local = event.relative_to(self.bounds.x, self.bounds.y);

        match local {
            PointerEvent::Pressed { x, y } => {
                let Some(HitTarget::Divider { index }) = hit_test(self, x, y) else {
                    return None;
                };
                let origin = self.divider(index)?.bounds();
                self.captured_divider = Some(index);
                Some(Msg::Divider(DividerMsg::Pressed {
                    index,
                    x: x - origin.x,
                }))
            }
            PointerEvent::Dragged { x, .. } => {
                let index = self.captured_divider?;
                let origin = self.divider(index)?.bounds();
                Some(Msg::Divider(DividerMsg::Dragged {
                    index,
                    x: x - origin.x,
                }))
            }
            PointerEvent::Released { .. } => {
                let index = self.captured_divider.take()?;
                Some(Msg::Divider(DividerMsg::Released { index }))
            }
            PointerEvent::Moved { x, y } => Some(Msg::Container(
                ContainerMsg::PointerMoved { x, y },
            )),
        }
    }
}
