use alloc::sync::Arc;

use crate::{
    LayoutSource, RowRenderer, StickyDirection, StickyEvent, StickyFrame, StickyOptions,
    StickyTracker, StickyView, ZeroPolicy,
};

/// Owns the header and footer trackers of one list and fans events out to both.
///
/// An edge with no sticky indices has no tracker. The optional row renderer turns the active
/// index of each edge into host content, see [`StickyContainer::render_header`].
pub struct StickyContainer<R = ()> {
    header: Option<StickyTracker>,
    footer: Option<StickyTracker>,
    zero_policy: ZeroPolicy,
    row_renderer: Option<RowRenderer<R>>,
}

impl<R> Clone for StickyContainer<R> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            footer: self.footer.clone(),
            zero_policy: self.zero_policy,
            row_renderer: self.row_renderer.clone(),
        }
    }
}

impl<R> StickyContainer<R> {
    pub fn new(
        header_indices: impl Into<Arc<[usize]>>,
        footer_indices: impl Into<Arc<[usize]>>,
    ) -> Self {
        let zero_policy = ZeroPolicy::default();
        Self {
            header: tracker_for(StickyDirection::Header, header_indices.into(), zero_policy),
            footer: tracker_for(StickyDirection::Footer, footer_indices.into(), zero_policy),
            zero_policy,
            row_renderer: None,
        }
    }

    pub fn with_row_renderer(
        mut self,
        row_renderer: impl Fn(usize) -> R + Send + Sync + 'static,
    ) -> Self {
        self.row_renderer = Some(Arc::new(row_renderer));
        self
    }

    pub fn set_row_renderer(
        &mut self,
        row_renderer: Option<impl Fn(usize) -> R + Send + Sync + 'static>,
    ) {
        self.row_renderer = row_renderer.map(|f| Arc::new(f) as _);
    }

    pub fn with_zero_policy(mut self, zero_policy: ZeroPolicy) -> Self {
        self.set_zero_policy(zero_policy);
        self
    }

    pub fn set_zero_policy(&mut self, zero_policy: ZeroPolicy) {
        self.zero_policy = zero_policy;
        for tracker in self.trackers_mut() {
            tracker.update_options(|o| o.zero_policy = zero_policy);
        }
    }

    /// Replaces the header indices. An empty sequence removes the header tracker.
    pub fn set_header_indices(&mut self, indices: impl Into<Arc<[usize]>>) {
        let indices = indices.into();
        self.header = match self.header.take() {
            Some(mut tracker) if !indices.is_empty() => {
                tracker.set_sticky_indices(indices);
                Some(tracker)
            }
            _ => tracker_for(StickyDirection::Header, indices, self.zero_policy),
        };
    }

    /// Replaces the footer indices. An empty sequence removes the footer tracker.
    pub fn set_footer_indices(&mut self, indices: impl Into<Arc<[usize]>>) {
        let indices = indices.into();
        self.footer = match self.footer.take() {
            Some(mut tracker) if !indices.is_empty() => {
                tracker.set_sticky_indices(indices);
                Some(tracker)
            }
            _ => tracker_for(StickyDirection::Footer, indices, self.zero_policy),
        };
    }

    pub fn header(&self) -> Option<&StickyTracker> {
        self.header.as_ref()
    }

    pub fn header_mut(&mut self) -> Option<&mut StickyTracker> {
        self.header.as_mut()
    }

    pub fn footer(&self) -> Option<&StickyTracker> {
        self.footer.as_ref()
    }

    pub fn footer_mut(&mut self) -> Option<&mut StickyTracker> {
        self.footer.as_mut()
    }

    fn trackers_mut(&mut self) -> impl Iterator<Item = &mut StickyTracker> {
        self.header.iter_mut().chain(self.footer.iter_mut())
    }

    pub fn on_scroll<L: LayoutSource + ?Sized>(&mut self, offset: f32, layouts: &L) {
        for tracker in self.trackers_mut() {
            tracker.on_scroll(offset, layouts);
        }
    }

    pub fn on_visible_indices_changed(&mut self, all: &[usize], now: &[usize], not_now: &[usize]) {
        for tracker in self.trackers_mut() {
            tracker.on_visible_indices_changed(all, now, not_now);
        }
    }

    pub fn apply<L: LayoutSource + ?Sized>(&mut self, event: &StickyEvent<'_>, layouts: &L) {
        for tracker in self.trackers_mut() {
            tracker.apply(event, layouts);
        }
    }

    pub fn header_frame(&self) -> Option<StickyFrame> {
        self.header.as_ref().map(StickyTracker::frame)
    }

    pub fn footer_frame(&self) -> Option<StickyFrame> {
        self.footer.as_ref().map(StickyTracker::frame)
    }

    /// Renders the pinned header, if there is one to paint and a row renderer is set.
    pub fn render_header(&self) -> Option<StickyView<R>> {
        self.render(self.header.as_ref()?)
    }

    /// Renders the pinned footer, if there is one to paint and a row renderer is set.
    pub fn render_footer(&self) -> Option<StickyView<R>> {
        self.render(self.footer.as_ref()?)
    }

    fn render(&self, tracker: &StickyTracker) -> Option<StickyView<R>> {
        let row_renderer = self.row_renderer.as_ref()?;
        let frame = tracker.frame();
        let index = frame.painted_index()?;
        Some(StickyView {
            index,
            content: row_renderer(index),
            offset: frame.offset,
            edge: frame.edge,
        })
    }
}

impl<R> core::fmt::Debug for StickyContainer<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickyContainer")
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("zero_policy", &self.zero_policy)
            .field("has_row_renderer", &self.row_renderer.is_some())
            .finish()
    }
}

fn tracker_for(
    direction: StickyDirection,
    indices: Arc<[usize]>,
    zero_policy: ZeroPolicy,
) -> Option<StickyTracker> {
    if indices.is_empty() {
        return None;
    }
    Some(StickyTracker::new(
        StickyOptions::new(direction, indices).with_zero_policy(zero_policy),
    ))
}
