//! Headless sticky header/footer tracking for virtualized lists.
//!
//! A virtualized list only realizes the rows near the viewport, so a "sticky" section header
//! cannot simply be positioned by layout. This crate decides which sticky item is pinned to the
//! top (header) or bottom (footer) edge while the user scrolls, and computes the translation that
//! lets the next pinned item push the current one out smoothly.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the ordered list of sticky indices
//! - item rectangles along the scroll axis (via [`LayoutSource`])
//! - scroll offsets and, for footers, the viewport extent
//! - the set of realized indices whenever it changes
//!
//! and paints the returned [`StickyFrame`] itself.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod container;
mod layout;
mod options;
mod state;
mod tracker;
mod types;


pub use container::StickyContainer;
pub use layout::{LayoutSource, Layouts};
pub use options::{RowRenderer, StickyOptions};
pub use state::{StickyEvent, TrackerState};
pub use tracker::StickyTracker;
pub use types::{
    InvalidStickyDirection, ItemLayout, PinEdge, StickyDirection, StickyFrame, StickyView,
    ZeroPolicy,
};
