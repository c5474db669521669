use alloc::vec::Vec;

use crate::ItemLayout;

/// Read-only access to the geometry owned by the virtualization engine.
///
/// The tracker may query this any number of times per event; implementations must return a
/// consistent answer for the duration of one event.
pub trait LayoutSource {
    /// Rectangle of the item at `index`, or `None` if it has not been laid out.
    fn layout(&self, index: usize) -> Option<ItemLayout>;

    /// Viewport extent along the scroll axis. Only footers need it.
    fn scrollable_height(&self) -> Option<f32>;

    /// Whether the source is attached at all. Scroll events are ignored while this is `false`.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<T: LayoutSource + ?Sized> LayoutSource for &T {
    fn layout(&self, index: usize) -> Option<ItemLayout> {
        (**self).layout(index)
    }

    fn scrollable_height(&self) -> Option<f32> {
        (**self).scrollable_height()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

impl<T: LayoutSource> LayoutSource for Option<T> {
    fn layout(&self, index: usize) -> Option<ItemLayout> {
        self.as_ref()?.layout(index)
    }

    fn scrollable_height(&self) -> Option<f32> {
        self.as_ref()?.scrollable_height()
    }

    fn is_ready(&self) -> bool {
        self.as_ref().is_some_and(|source| source.is_ready())
    }
}

/// A snapshot layout source backed by a `Vec`.
///
/// Useful when the adapter already has every item rectangle at hand (fixed-size rows, or a
/// fully measured list), and in tests.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layouts {
    items: Vec<Option<ItemLayout>>,
    scrollable_height: Option<f32>,
}

impl Layouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stacks items of the given sizes from `y = 0` with no gaps.
    pub fn from_sizes(sizes: impl IntoIterator<Item = f32>) -> Self {
        let mut y = 0.0f32;
        let items = sizes
            .into_iter()
            .map(|height| {
                let item = ItemLayout::new(y, height);
                y += height;
                Some(item)
            })
            .collect();
        Self {
            items,
            scrollable_height: None,
        }
    }

    pub fn with_scrollable_height(mut self, height: f32) -> Self {
        self.scrollable_height = Some(height);
        self
    }

    pub fn set_scrollable_height(&mut self, height: Option<f32>) {
        self.scrollable_height = height;
    }

    /// Sets the rectangle of `index`, growing the snapshot with unresolved slots as needed.
    pub fn set(&mut self, index: usize, layout: ItemLayout) {
        if index >= self.items.len() {
            self.items.resize(index + 1, None);
        }
        self.items[index] = Some(layout);
    }

    /// Forgets the rectangle of `index` (e.g. the item was recycled).
    pub fn clear(&mut self, index: usize) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = None;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total content extent: the furthest item end, or `0` for an empty snapshot.
    pub fn content_height(&self) -> f32 {
        self.items
            .iter()
            .flatten()
            .map(ItemLayout::end)
            .fold(0.0, f32::max)
    }

    /// Returns the same content flipped end-to-start: item `i` becomes item `len - 1 - i`
    /// and keeps its height.
    pub fn mirrored(&self) -> Self {
        let total = self.content_height();
        let items = self
            .items
            .iter()
            .rev()
            .map(|slot| slot.map(|it| ItemLayout::new(total - it.end(), it.height)))
            .collect();
        Self {
            items,
            scrollable_height: self.scrollable_height,
        }
    }
}

impl LayoutSource for Layouts {
    fn layout(&self, index: usize) -> Option<ItemLayout> {
        self.items.get(index).copied().flatten()
    }

    fn scrollable_height(&self) -> Option<f32> {
        self.scrollable_height
    }
}

impl FromIterator<ItemLayout> for Layouts {
    fn from_iter<I: IntoIterator<Item = ItemLayout>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Some).collect(),
            scrollable_height: None,
        }
    }
}
