use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{
    CarouselOptions, ConfigError, EdgeInsets, ItemAttributes, LayoutParameters, Pager,
    PagingState, PeekLayout, Rect, Resolution, Size,
};

/// A callback fired with the new active index after every corrected release.
pub type OnActiveIndexChange = Arc<dyn Fn(usize) + Send + Sync>;

/// The live inputs a carousel needs from its host.
///
/// Both values are queried on every call and never cached, so the layout always reflects the
/// current data set and viewport (for example after a rotation).
pub trait CarouselDataSource {
    /// Number of items currently displayed.
    fn item_count(&self) -> usize;

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;
}

/// A fixed data source, useful for tests and for hosts that already hold both values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSource {
    pub item_count: usize,
    pub viewport: Size,
}

impl FixedSource {
    pub fn new(item_count: usize, viewport: Size) -> Self {
        Self {
            item_count,
            viewport,
        }
    }
}

impl CarouselDataSource for FixedSource {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

impl<T: CarouselDataSource + ?Sized> CarouselDataSource for &T {
    fn item_count(&self) -> usize {
        (**self).item_count()
    }

    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }
}

/// A programmatic scroll the host should perform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    /// Main-axis offset to scroll to. Indexes past the end map to the one-past-last offset.
    pub offset: f32,
    /// Requested item index, clamped to the last item.
    pub index: usize,
    pub animated: bool,
}

/// A peeking carousel: the layout and the pager bound to one configuration.
///
/// This type holds no UI objects. The host forwards drag lifecycle events and supplies a
/// [`CarouselDataSource`]; the behavior answers with corrected offsets, frames and the active
/// index.
///
/// ```
/// use peek_carousel::{CarouselOptions, FixedSource, PeekingBehavior, Size};
///
/// let mut carousel = PeekingBehavior::new(CarouselOptions::default()).unwrap();
/// let source = FixedSource::new(4, Size::new(320.0, 200.0));
///
/// carousel.on_drag_begin(0.0);
/// let corrected = carousel.on_drag_will_end(&source, 1.5, 120.0);
/// assert_eq!(corrected, 260.0);
/// assert_eq!(carousel.current_index(&source), 1);
/// ```
#[derive(Clone)]
pub struct PeekingBehavior {
    options: CarouselOptions,
    params: LayoutParameters,
    pager: Pager,
    on_active_index_change: Option<OnActiveIndexChange>,
}

impl PeekingBehavior {
    /// Validates `options` and creates an idle behavior positioned at offset 0.
    pub fn new(options: CarouselOptions) -> Result<Self, ConfigError> {
        let (params, policy) = options.split()?;
        pdebug!(
            peek = params.peek_length(),
            spacing = params.spacing_length(),
            items_to_show = params.items_to_show(),
            "PeekingBehavior::new"
        );
        Ok(Self {
            options,
            params,
            pager: Pager::new(policy),
            on_active_index_change: None,
        })
    }

    pub fn with_on_active_index_change(
        mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.set_on_active_index_change(f);
        self
    }

    pub fn set_on_active_index_change(
        &mut self,
        f: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.on_active_index_change = f.map(|f| Arc::new(f) as _);
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// The layout for the source's current item count and viewport.
    pub fn layout(&self, source: &impl CarouselDataSource) -> PeekLayout {
        PeekLayout::new(self.params, source.viewport_size(), source.item_count())
    }

    /// Records the live offset at the start of a drag.
    pub fn on_drag_begin(&mut self, live_offset: f32) {
        self.pager.begin_drag(live_offset);
    }

    /// Resolves a drag release and returns the corrected main-axis target offset.
    pub fn on_drag_will_end(
        &mut self,
        source: &impl CarouselDataSource,
        velocity: f32,
        target_offset: f32,
    ) -> f32 {
        self.resolve_release(source, velocity, target_offset).offset
    }

    /// Like [`Self::on_drag_will_end`], but returns the full [`Resolution`].
    pub fn resolve_release(
        &mut self,
        source: &impl CarouselDataSource,
        velocity: f32,
        target_offset: f32,
    ) -> Resolution {
        let layout = self.layout(source);
        let resolution = self.pager.end_drag(&layout, velocity, target_offset);
        if resolution.corrected {
            if let Some(cb) = &self.on_active_index_change {
                cb(resolution.index);
            }
        }
        resolution
    }

    /// Computes the offset of item `index` and commits it as the current position.
    ///
    /// The host performs the actual scroll, animated or not.
    pub fn scroll_to_item(
        &mut self,
        source: &impl CarouselDataSource,
        index: usize,
        animated: bool,
    ) -> ScrollRequest {
        let layout = self.layout(source);
        let offset = self.pager.set_index(&layout, index);
        ptrace!(index, offset, animated, "scroll_to_item");
        ScrollRequest {
            offset,
            index: index.min(layout.item_count().saturating_sub(1)),
            animated,
        }
    }

    pub fn current_index(&self, source: &impl CarouselDataSource) -> usize {
        self.pager.current_index(&self.layout(source))
    }

    pub fn item_frame(&self, source: &impl CarouselDataSource, index: usize) -> Rect {
        self.layout(source).frame_for_item(index)
    }

    pub fn visible_items(&self, source: &impl CarouselDataSource, rect: Rect) -> Vec<usize> {
        self.layout(source).items_visible_in(rect)
    }

    pub fn layout_attributes_in(
        &self,
        source: &impl CarouselDataSource,
        rect: Rect,
    ) -> Vec<ItemAttributes> {
        self.layout(source).layout_attributes_in(rect)
    }

    pub fn content_size(&self, source: &impl CarouselDataSource) -> Size {
        self.layout(source).content_size()
    }

    pub fn item_size(&self, source: &impl CarouselDataSource) -> Size {
        self.layout(source).item_size()
    }

    pub fn section_insets(&self, source: &impl CarouselDataSource) -> EdgeInsets {
        self.layout(source).section_insets()
    }

    pub fn state(&self) -> PagingState {
        self.pager.state()
    }

    pub fn restore(&mut self, state: PagingState) {
        self.pager.restore(state);
    }
}

impl core::fmt::Debug for PeekingBehavior {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PeekingBehavior")
            .field("options", &self.options)
            .field("pager", &self.pager)
            .field(
                "on_active_index_change",
                &self.on_active_index_change.as_ref().map(|_| ".."),
            )
            .finish()
    }
}
