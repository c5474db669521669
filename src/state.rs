use crate::StickyDirection;

/// Mutable state of a [`crate::StickyTracker`].
///
/// This is a plain `Copy` value so adapters can snapshot it between frames and so the pure
/// [`crate::StickyTracker::transition`] can be tested without a rendering harness.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerState {
    /// Position in the sticky index sequence of the item being displayed.
    pub current_pointer: usize,
    pub visible: bool,
    /// Set while the pinned view slides to reveal a neighbour, cleared once it settles.
    pub tentative_sliding: bool,
    pub offset: f32,
}

impl TrackerState {
    pub fn initial(direction: StickyDirection) -> Self {
        Self {
            current_pointer: 0,
            visible: direction.initially_visible(),
            tentative_sliding: false,
            offset: 0.0,
        }
    }

    /// Shows or hides the pinned view. Anything but an explicit slide clears `tentative_sliding`.
    pub(crate) fn set_visible(&mut self, visible: bool, tentative_sliding: bool) {
        self.visible = visible;
        self.tentative_sliding = tentative_sliding;
    }
}

/// Inputs that drive a tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StickyEvent<'a> {
    /// The scroll offset along the primary axis changed.
    Scroll { offset: f32 },
    /// The virtualization engine's realized window changed.
    ///
    /// Only `all` is consulted; `now`/`not_now` are carried for parity with engines that
    /// report deltas.
    VisibleIndicesChanged {
        all: &'a [usize],
        now: &'a [usize],
        not_now: &'a [usize],
    },
}
