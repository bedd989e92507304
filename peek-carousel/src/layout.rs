use alloc::vec::Vec;

use crate::math;
use crate::{
    Axis, EdgeInsets, ItemAttributes, LayoutParameters, Point, Rect, ScrollDirection, Size,
};

/// The peeking layout for one strip of equally sized items.
///
/// A `PeekLayout` is a cheap, `Copy` view over the immutable [`LayoutParameters`] plus the two
/// runtime inputs that can change between calls: the viewport size and the item count. Build a
/// fresh one for every query (or let [`crate::PeekingBehavior`] do it) so results always reflect
/// the current data and bounds.
///
/// Along the main axis the strip looks like this:
///
/// ```text
/// | peek | spacing | item 0 | spacing | item 1 | ... | item n-1 | spacing | peek |
/// ```
///
/// and a viewport shows `items_to_show` whole items plus a `peek` of each neighbour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeekLayout {
    params: LayoutParameters,
    viewport: Size,
    item_count: usize,
}

impl PeekLayout {
    pub fn new(params: LayoutParameters, viewport: Size, item_count: usize) -> Self {
        Self {
            params,
            viewport,
            item_count,
        }
    }

    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.params.scroll_direction()
    }

    pub fn viewport_length(&self, axis: Axis) -> f32 {
        self.scroll_direction().length(self.viewport, axis)
    }

    /// Item length along `axis`.
    ///
    /// On the main axis the viewport minus `items_to_show + 1` spacings and two peeks, split
    /// between the visible items and clamped to zero. On the cross axis the full viewport length.
    pub fn item_length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Main => {
                let shown = self.params.items_to_show();
                let spacings = self.params.spacing_length() * (shown + 1) as f32;
                let peeks = self.params.peek_length() * 2.0;
                let length = (self.viewport_length(Axis::Main) - spacings - peeks) / shown as f32;
                length.max(0.0)
            }
            Axis::Cross => self.viewport_length(Axis::Cross),
        }
    }

    /// Main-axis distance between the leading edges of two adjacent items.
    pub fn stride(&self) -> f32 {
        self.item_length(Axis::Main) + self.params.spacing_length()
    }

    /// Total scrollable extent along `axis`.
    ///
    /// `allow_negative` only changes how the doubled spacing term is bounded: content-size
    /// measurement passes `false`, offset clamping passes `true`.
    pub fn content_length(&self, axis: Axis, allow_negative: bool) -> f32 {
        match axis {
            Axis::Main => {
                let spacing = self.params.spacing_length();
                let edge_spacing = if allow_negative {
                    spacing * 2.0
                } else {
                    (spacing * 2.0).max(0.0)
                };
                let count = self.item_count as f32;
                let edges = edge_spacing + self.params.peek_length() * 2.0;
                self.item_length(Axis::Main) * count + spacing * count + edges
            }
            Axis::Cross => self.item_length(Axis::Cross),
        }
    }

    /// Content size oriented by the scroll direction.
    pub fn content_size(&self) -> Size {
        self.scroll_direction().size(
            self.content_length(Axis::Main, false),
            self.content_length(Axis::Cross, false),
        )
    }

    /// Size of every item, oriented by the scroll direction.
    pub fn item_size(&self) -> Size {
        self.scroll_direction()
            .size(self.item_length(Axis::Main), self.item_length(Axis::Cross))
    }

    /// Leading/trailing main-axis insets (`spacing + peek`) of the item strip.
    pub fn section_insets(&self) -> EdgeInsets {
        self.scroll_direction()
            .insets(self.params.spacing_length() + self.params.peek_length())
    }

    /// Spacing between consecutive items along the main axis.
    pub fn line_spacing(&self) -> f32 {
        self.params.spacing_length()
    }

    /// Spacing between items along the cross axis. Always zero: there is a single row.
    pub fn interitem_spacing(&self) -> f32 {
        0.0
    }

    /// Main-axis start of item `index`.
    fn item_start(&self, index: usize) -> f32 {
        let lead = self.params.peek_length() + self.params.spacing_length();
        index as f32 * self.stride() + lead
    }

    /// The frame of item `index`. Indexes past the end are laid out as if the strip continued.
    pub fn frame_for_item(&self, index: usize) -> Rect {
        let dir = self.scroll_direction();
        let origin = dir.point(self.item_start(index), 0.0);
        Rect {
            origin,
            size: self.item_size(),
        }
    }

    /// Scroll offset that puts item `index` at the leading peek boundary.
    ///
    /// `index` is clamped to `[0, item_count]`; `item_count` itself is accepted so the offset
    /// one past the last item stays well defined.
    pub fn starting_offset_for_item(&self, index: usize) -> f32 {
        let index = index.min(self.item_count);
        self.item_start(index) - self.params.spacing_length() - self.params.peek_length()
    }

    /// Point form of [`Self::starting_offset_for_item`] (cross component is zero).
    pub fn starting_point_for_item(&self, index: usize) -> Point {
        self.scroll_direction()
            .point(self.starting_offset_for_item(index), 0.0)
    }

    /// Nearest item boundary to `offset`, clamped to `[0, item_count]`.
    ///
    /// A zero stride (empty viewport and no spacing) maps every offset to index 0.
    pub fn index_for_offset(&self, offset: f32) -> usize {
        let stride = self.stride();
        if stride <= 0.0 || !stride.is_finite() || offset.is_nan() {
            return 0;
        }
        let coefficient = math::round(offset / stride);
        if coefficient <= 0.0 {
            return 0;
        }
        let count = self.item_count as f32;
        if coefficient >= count {
            return self.item_count;
        }
        coefficient as usize
    }

    /// Point form of [`Self::index_for_offset`] using the main component.
    pub fn index_for_point(&self, point: Point) -> usize {
        self.index_for_offset(self.scroll_direction().main(point))
    }

    /// Clamps `offset` into the scrollable range before mapping it to an index.
    pub fn safe_index_for_offset(&self, offset: f32) -> usize {
        let upper = self.content_length(Axis::Main, true).max(0.0);
        self.index_for_offset(offset.clamp(0.0, upper))
    }

    /// Calls `f` for every item whose frame overlaps `rect`, in ascending order.
    pub fn for_each_visible_item(&self, rect: Rect, mut f: impl FnMut(usize)) {
        for index in 0..self.item_count {
            if self.frame_for_item(index).intersects(&rect) {
                f(index);
            }
        }
    }

    /// All item indexes whose frame overlaps `rect`, in ascending order.
    pub fn items_visible_in(&self, rect: Rect) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_visible_item(rect, |i| out.push(i));
        out
    }

    /// Attributes for the items overlapping `rect`.
    pub fn layout_attributes_in(&self, rect: Rect) -> Vec<ItemAttributes> {
        let mut out = Vec::new();
        self.for_each_visible_item(rect, |index| {
            out.push(ItemAttributes {
                index,
                frame: self.frame_for_item(index),
            });
        });
        out
    }
}
