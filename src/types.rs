use core::fmt;

/// Which edge of the viewport a tracker pins to.
///
/// Both variants run the same algorithm; a footer is a header evaluated in mirrored
/// coordinates. The discriminants double as the raw context values accepted by
/// [`StickyDirection::try_from`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StickyDirection {
    Header = 0,
    Footer = 1,
}

impl StickyDirection {
    /// `+1` for headers, `-1` for footers.
    pub fn multiplier(self) -> isize {
        match self {
            Self::Header => 1,
            Self::Footer => -1,
        }
    }

    pub fn edge(self) -> PinEdge {
        match self {
            Self::Header => PinEdge::Top,
            Self::Footer => PinEdge::Bottom,
        }
    }

    /// Whether a freshly constructed tracker starts out visible.
    ///
    /// Content starts scrolled to the top, so a footer is relevant immediately while a header
    /// is not needed yet.
    pub fn initially_visible(self) -> bool {
        matches!(self, Self::Footer)
    }

    pub(crate) fn multiplier_f32(self) -> f32 {
        self.multiplier() as f32
    }
}

impl TryFrom<u8> for StickyDirection {
    type Error = InvalidStickyDirection;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Header),
            1 => Ok(Self::Footer),
            other => Err(InvalidStickyDirection(other)),
        }
    }
}

/// Returned when a raw context value does not name a [`StickyDirection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidStickyDirection(pub u8);

impl fmt::Display for InvalidStickyDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid sticky direction value: {}", self.0)
    }
}

impl core::error::Error for InvalidStickyDirection {}

/// The viewport boundary a pinned view is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinEdge {
    Top,
    Bottom,
}

/// Rectangle of a list item along the scroll axis, in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub y: f32,
    pub height: f32,
}

impl ItemLayout {
    pub fn new(y: f32, height: f32) -> Self {
        Self { y, height }
    }

    pub fn end(&self) -> f32 {
        self.y + self.height
    }
}

/// Controls how zero-valued geometry is interpreted by the scroll guards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroPolicy {
    /// Every resolved value is used as-is; only a missing layout counts as absent.
    #[default]
    Present,
    /// Zero scroll offsets, edges, heights and a zero neighbour index are treated as absent and
    /// skip the check that needs them.
    ///
    /// This reproduces the behavior of hosts that used numeric zero as "not measured yet". An
    /// item sitting exactly at the scroll origin never pins its successor in this mode.
    Absent,
}

impl ZeroPolicy {
    pub(crate) fn value(self, v: f32) -> Option<f32> {
        match self {
            Self::Absent if v == 0.0 => None,
            _ => Some(v),
        }
    }

    pub(crate) fn index(self, i: usize) -> Option<usize> {
        match self {
            Self::Absent if i == 0 => None,
            _ => Some(i),
        }
    }
}

/// What the host should paint for one tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StickyFrame {
    pub visible: bool,
    /// Translation along the scroll axis, applied on top of the pinning edge.
    pub offset: f32,
    /// The list index currently pinned (`None` when there are no sticky indices).
    pub active_index: Option<usize>,
    pub edge: PinEdge,
}

impl StickyFrame {
    /// Returns the active index only when the pinned view should be painted.
    pub fn painted_index(&self) -> Option<usize> {
        if self.visible { self.active_index } else { None }
    }
}

/// A rendered pinned view: the host's content plus where to put it.
#[derive(Clone, Debug, PartialEq)]
pub struct StickyView<R> {
    pub index: usize,
    pub content: R,
    pub offset: f32,
    pub edge: PinEdge,
}
