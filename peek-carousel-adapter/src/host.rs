use alloc::vec::Vec;

use peek_carousel::{CarouselDataSource, Point, Size};

/// The narrow slice of a scroll view the carousel needs.
///
/// Implement this for your toolkit's scroll container. Every getter is queried live; the
/// controller never caches bounds, item count or offsets.
pub trait ScrollHost {
    /// Size of the visible area.
    fn bounds(&self) -> Size;

    /// Number of items currently displayed.
    fn item_count(&self) -> usize;

    /// Current content offset.
    fn content_offset(&self) -> Point;

    /// Moves the content. `animated` is a hint; timing and easing are up to the host.
    fn set_content_offset(&mut self, offset: Point, animated: bool);

    /// Called after a drag release settles on a new active index.
    fn active_index_changed(&mut self, _index: usize) {}
}

/// Exposes a [`ScrollHost`] as a [`CarouselDataSource`].
pub(crate) struct HostSource<'a, H: ?Sized>(pub(crate) &'a H);

impl<H: ScrollHost + ?Sized> CarouselDataSource for HostSource<'_, H> {
    fn item_count(&self) -> usize {
        self.0.item_count()
    }

    fn viewport_size(&self) -> Size {
        self.0.bounds()
    }
}

/// An in-memory [`ScrollHost`] that records what the controller asked it to do.
///
/// Useful for tests, demos and headless simulations.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedHost {
    pub bounds: Size,
    pub item_count: usize,
    pub content_offset: Point,
    /// `animated` flag of the last `set_content_offset` call, if any.
    pub last_animated: Option<bool>,
    /// Every index reported through `active_index_changed`, oldest first.
    pub active_indexes: Vec<usize>,
}

impl SimulatedHost {
    pub fn new(bounds: Size, item_count: usize) -> Self {
        Self {
            bounds,
            item_count,
            ..Self::default()
        }
    }

    pub fn with_content_offset(mut self, offset: Point) -> Self {
        self.content_offset = offset;
        self
    }
}

impl ScrollHost for SimulatedHost {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn content_offset(&self) -> Point {
        self.content_offset
    }

    fn set_content_offset(&mut self, offset: Point, animated: bool) {
        self.content_offset = offset;
        self.last_animated = Some(animated);
    }

    fn active_index_changed(&mut self, index: usize) {
        self.active_indexes.push(index);
    }
}
