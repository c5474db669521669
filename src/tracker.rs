use alloc::sync::Arc;

use crate::{
    ItemLayout, LayoutSource, StickyDirection, StickyEvent, StickyFrame, StickyOptions,
    TrackerState,
};

/// Result of one neighbour check during a scroll pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Check {
    /// The neighbour does not exist.
    Skipped,
    /// Some geometry the check needs is not available yet.
    Unresolved,
    /// Evaluated, no hand-off in progress.
    Idle,
    /// The check moved the pointer and/or the offset.
    Transition,
}

/// Tracks which sticky item is pinned to one edge of a virtualized list.
///
/// The tracker is headless:
/// - It does not hold any UI objects or layout data.
/// - Your adapter feeds it scroll offsets (with a [`LayoutSource`]) and visible-index changes.
/// - It answers with a [`StickyFrame`]: which index to paint, whether to paint it, and the
///   translation to apply at the pinning edge.
///
/// A list typically owns two trackers, one per [`StickyDirection`]; see
/// [`crate::StickyContainer`].
#[derive(Clone, Debug)]
pub struct StickyTracker {
    options: StickyOptions,
    state: TrackerState,
}

impl StickyTracker {
    pub fn new(options: StickyOptions) -> Self {
        check_ascending(&options);
        sdebug!(
            direction = ?options.direction,
            sticky_count = options.sticky_indices.len(),
            "StickyTracker::new"
        );
        Self {
            state: TrackerState::initial(options.direction),
            options,
        }
    }

    /// Creates a tracker from a raw direction value handed down by the host (`0` = header,
    /// `1` = footer).
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not a valid [`StickyDirection`]. An unknown direction is a wiring bug
    /// in the owner, not something to recover from at runtime.
    pub fn from_context(raw: u8, sticky_indices: impl Into<Arc<[usize]>>) -> Self {
        let direction = StickyDirection::try_from(raw)
            .unwrap_or_else(|err| panic!("StickyTracker::from_context: {err}"));
        Self::new(StickyOptions::new(direction, sticky_indices))
    }

    pub fn options(&self) -> &StickyOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Changing the direction or the index sequence invalidates the pointer, so the state is
    /// reset; a zero-policy change keeps it.
    pub fn set_options(&mut self, options: StickyOptions) {
        let reset = options.direction != self.options.direction
            || options.sticky_indices != self.options.sticky_indices;
        check_ascending(&options);
        self.options = options;
        if reset {
            sdebug!(
                direction = ?self.options.direction,
                sticky_count = self.options.sticky_indices.len(),
                "StickyTracker::set_options: reset"
            );
            self.reset();
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut StickyOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_sticky_indices(&mut self, sticky_indices: impl Into<Arc<[usize]>>) {
        self.update_options(|o| o.sticky_indices = sticky_indices.into());
    }

    pub fn direction(&self) -> StickyDirection {
        self.options.direction
    }

    pub fn multiplier(&self) -> isize {
        self.options.direction.multiplier()
    }

    pub fn sticky_indices(&self) -> &[usize] {
        &self.options.sticky_indices
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    /// Restores a previously captured state, clamping the pointer into the current sequence.
    pub fn restore_state(&mut self, mut state: TrackerState) {
        let last = self.options.sticky_indices.len().saturating_sub(1);
        if state.current_pointer > last {
            swarn!(
                pointer = state.current_pointer,
                last,
                "StickyTracker::restore_state: pointer out of range"
            );
            state.current_pointer = last;
            state.offset = 0.0;
            state.tentative_sliding = false;
        }
        self.state = state;
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::initial(self.options.direction);
    }

    pub fn current_pointer(&self) -> usize {
        self.state.current_pointer
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_tentative_sliding(&self) -> bool {
        self.state.tentative_sliding
    }

    pub fn offset(&self) -> f32 {
        self.state.offset
    }

    /// The list index of the active sticky item.
    pub fn active_index(&self) -> Option<usize> {
        self.options
            .sticky_indices
            .get(self.state.current_pointer)
            .copied()
    }

    pub fn frame(&self) -> StickyFrame {
        StickyFrame {
            visible: self.state.visible,
            offset: self.state.offset,
            active_index: self.active_index(),
            edge: self.options.direction.edge(),
        }
    }

    /// Calls `row_renderer` with the active index, but only if the pinned view is visible.
    pub fn render<R>(&self, row_renderer: impl FnOnce(usize) -> R) -> Option<R> {
        self.frame().painted_index().map(row_renderer)
    }

    /// Call this on every scroll tick.
    ///
    /// `offset` is the scroll offset along the primary axis; it grows as the content scrolls
    /// away from its origin.
    pub fn on_scroll<L: LayoutSource + ?Sized>(&mut self, offset: f32, layouts: &L) {
        self.state = self.scroll_pass(self.state, offset, layouts);
    }

    /// Call this whenever the virtualization engine's realized window changes.
    ///
    /// Only `all` is consulted; the newly shown/hidden deltas are accepted for engines that
    /// report them but do not affect the result.
    pub fn on_visible_indices_changed(
        &mut self,
        all: &[usize],
        _now: &[usize],
        _not_now: &[usize],
    ) {
        self.state = self.visibility_pass(self.state, all);
    }

    /// Applies `event` to the tracker's own state.
    pub fn apply<L: LayoutSource + ?Sized>(&mut self, event: &StickyEvent<'_>, layouts: &L) {
        self.state = self.transition(self.state, event, layouts);
    }

    /// Computes the state that follows `state` after `event`, without touching the tracker.
    ///
    /// `state` does not have to be the tracker's own; this is what makes the engine testable
    /// (and replayable) without a host.
    pub fn transition<L: LayoutSource + ?Sized>(
        &self,
        state: TrackerState,
        event: &StickyEvent<'_>,
        layouts: &L,
    ) -> TrackerState {
        match *event {
            StickyEvent::Scroll { offset } => self.scroll_pass(state, offset, layouts),
            StickyEvent::VisibleIndicesChanged { all, .. } => self.visibility_pass(state, all),
        }
    }

    /// Returns `(pointer, list index)` of the sticky item `delta` steps away from `pointer`.
    fn neighbour(&self, pointer: usize, delta: isize) -> Option<(usize, usize)> {
        let pointer = pointer.checked_add_signed(delta)?;
        let index = *self.options.sticky_indices.get(pointer)?;
        Some((pointer, index))
    }

    /// The scroll position in the direction-normalized axis.
    fn effective_scroll<L: LayoutSource + ?Sized>(&self, offset: f32, layouts: &L) -> Option<f32> {
        let zero = self.options.zero_policy;
        match self.options.direction {
            StickyDirection::Header => zero.value(offset),
            StickyDirection::Footer => {
                let viewport = layouts.scrollable_height().and_then(|h| zero.value(h))?;
                zero.value(-(offset + viewport))
            }
        }
    }

    /// Where `layout` pins, in the direction-normalized axis.
    fn edge(&self, layout: ItemLayout) -> f32 {
        match self.options.direction {
            StickyDirection::Header => layout.y,
            StickyDirection::Footer => -layout.end(),
        }
    }

    fn visibility_pass(&self, mut state: TrackerState, all: &[usize]) -> TrackerState {
        let Some(sticky) = self.options.sticky_indices.get(state.current_pointer).copied() else {
            return state;
        };
        let m = self.multiplier();
        let realized = all.contains(&sticky);
        let neighbour_realized = sticky
            .checked_add_signed(-m)
            .is_some_and(|n| all.contains(&n));

        let visible = match (realized, neighbour_realized) {
            (true, false) => true,
            (true, true) => false,
            _ => state.visible,
        };
        if visible != state.visible {
            sdebug!(sticky, visible, "StickyTracker: visibility changed");
        }
        state.set_visible(visible, false);
        state
    }

    fn scroll_pass<L: LayoutSource + ?Sized>(
        &self,
        mut state: TrackerState,
        offset: f32,
        layouts: &L,
    ) -> TrackerState {
        if !layouts.is_ready() {
            return state;
        }
        let m = self.multiplier();
        let Some((_, current)) = self.neighbour(state.current_pointer, 0) else {
            return state;
        };
        // Both checks read the neighbours as they were when the event arrived.
        let previous = self.neighbour(state.current_pointer, -m).map(|(_, i)| i);
        let next = self.neighbour(state.current_pointer, m).map(|(_, i)| i);
        let scroll = self.effective_scroll(offset, layouts);

        let backward = self.backward_check(&mut state, current, previous, scroll, layouts);
        let forward = self.forward_check(&mut state, current, next, scroll, layouts);

        let settled = !matches!(backward, Check::Transition | Check::Unresolved)
            && !matches!(forward, Check::Transition | Check::Unresolved);
        if settled {
            if state.offset != 0.0 || state.tentative_sliding {
                strace!(offset = state.offset, "StickyTracker: settled");
            }
            state.offset = 0.0;
            state.tentative_sliding = false;
        }
        strace!(
            scroll_offset = offset,
            pointer = state.current_pointer,
            offset = state.offset,
            ?backward,
            ?forward,
            "StickyTracker::on_scroll"
        );
        state
    }

    /// Hands the pin back to the previous sticky item while it slides in over the current one.
    fn backward_check<L: LayoutSource + ?Sized>(
        &self,
        state: &mut TrackerState,
        current: usize,
        previous: Option<usize>,
        scroll: Option<f32>,
        layouts: &L,
    ) -> Check {
        let zero = self.options.zero_policy;
        let Some(previous) = previous else {
            return Check::Skipped;
        };
        if zero.index(previous).is_none() && !state.tentative_sliding {
            return Check::Skipped;
        }
        let (Some(previous_layout), Some(current_layout)) =
            (layouts.layout(previous), layouts.layout(current))
        else {
            return Check::Unresolved;
        };
        let (Some(previous_height), Some(_), Some(_), Some(scroll)) = (
            zero.value(previous_layout.height),
            zero.value(current_layout.y),
            zero.value(current_layout.height),
            scroll,
        ) else {
            return Check::Unresolved;
        };

        let edge = self.edge(current_layout);
        if !(scroll < edge && scroll > edge - previous_height) {
            return Check::Idle;
        }
        let m = self.multiplier();
        let Some(pointer) = state.current_pointer.checked_add_signed(-m) else {
            return Check::Idle;
        };
        state.current_pointer = pointer;
        state.offset = (scroll - edge + previous_height) * -self.options.direction.multiplier_f32();
        state.set_visible(true, true);
        sdebug!(
            pointer,
            sticky = previous,
            offset = state.offset,
            "StickyTracker: sliding previous item in"
        );
        Check::Transition
    }

    /// Pushes the current item out as the next sticky item reaches the pinning edge.
    fn forward_check<L: LayoutSource + ?Sized>(
        &self,
        state: &mut TrackerState,
        current: usize,
        next: Option<usize>,
        scroll: Option<f32>,
        layouts: &L,
    ) -> Check {
        let zero = self.options.zero_policy;
        let Some(next) = next.and_then(|i| zero.index(i)) else {
            return Check::Skipped;
        };
        let Some(next_layout) = layouts.layout(next) else {
            return Check::Unresolved;
        };
        let (Some(_), Some(_), Some(edge), Some(current_height), Some(scroll)) = (
            zero.value(next_layout.y),
            zero.value(next_layout.height),
            zero.value(self.edge(next_layout)),
            layouts
                .layout(current)
                .and_then(|it| zero.value(it.height)),
            scroll,
        ) else {
            return Check::Unresolved;
        };

        if scroll + current_height <= edge {
            return Check::Idle;
        }
        if scroll <= edge {
            state.offset =
                (scroll - edge + current_height) * -self.options.direction.multiplier_f32();
            return Check::Transition;
        }

        let last = self.options.sticky_indices.len().saturating_sub(1);
        let Some(pointer) = state
            .current_pointer
            .checked_add_signed(self.multiplier())
            .filter(|&p| p <= last)
        else {
            return Check::Idle;
        };
        state.current_pointer = pointer;
        state.offset = 0.0;
        state.set_visible(true, false);
        sdebug!(pointer, sticky = next, "StickyTracker: pinned next item");
        Check::Transition
    }
}

fn check_ascending(options: &StickyOptions) {
    if !options.is_ascending() {
        swarn!(
            sticky_count = options.sticky_indices.len(),
            "StickyOptions: sticky indices must be strictly ascending"
        );
        debug_assert!(
            options.is_ascending(),
            "StickyOptions: sticky indices must be strictly ascending"
        );
    }
}
