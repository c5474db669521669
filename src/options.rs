use alloc::sync::Arc;

use crate::{StickyDirection, ZeroPolicy};

/// A host callback that produces the content of a pinned item from its list index.
pub type RowRenderer<R> = Arc<dyn Fn(usize) -> R + Send + Sync>;

/// Configuration for [`crate::StickyTracker`].
///
/// Cheap to clone: the index sequence is stored in an `Arc` so header and footer trackers (or a
/// rebuilt tracker after a data change) can share it.
#[derive(Clone, PartialEq)]
pub struct StickyOptions {
    pub direction: StickyDirection,
    /// List indices eligible for pinning, in ascending order.
    ///
    /// The tracker never mutates this. Out-of-order sequences are reported (and debug-asserted)
    /// but otherwise used as given.
    pub sticky_indices: Arc<[usize]>,
    pub zero_policy: ZeroPolicy,
}

impl StickyOptions {
    pub fn new(direction: StickyDirection, sticky_indices: impl Into<Arc<[usize]>>) -> Self {
        Self {
            direction,
            sticky_indices: sticky_indices.into(),
            zero_policy: ZeroPolicy::default(),
        }
    }

    pub fn header(sticky_indices: impl Into<Arc<[usize]>>) -> Self {
        Self::new(StickyDirection::Header, sticky_indices)
    }

    pub fn footer(sticky_indices: impl Into<Arc<[usize]>>) -> Self {
        Self::new(StickyDirection::Footer, sticky_indices)
    }

    pub fn with_sticky_indices(mut self, sticky_indices: impl Into<Arc<[usize]>>) -> Self {
        self.sticky_indices = sticky_indices.into();
        self
    }

    pub fn with_zero_policy(mut self, zero_policy: ZeroPolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    pub(crate) fn is_ascending(&self) -> bool {
        self.sticky_indices.windows(2).all(|w| w[0] < w[1])
    }
}

impl core::fmt::Debug for StickyOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyOptions")
            .field("direction", &self.direction)
            .field("sticky_indices_len", &self.sticky_indices.len())
            .field("zero_policy", &self.zero_policy)
            .finish()
    }
}
