use alloc::vec::Vec;

use peek_carousel::{
    CarouselOptions, ConfigError, EdgeInsets, ItemAttributes, PeekLayout, PeekingBehavior, Point,
    Rect, Resolution, Size,
};

use crate::ScrollHost;
use crate::host::HostSource;

/// A framework-neutral controller that binds a `peek_carousel::PeekingBehavior` to a
/// [`ScrollHost`].
///
/// This type does not hold any UI objects beyond the host it was given. Adapters drive it by
/// forwarding scroll-view delegate events:
/// - `scroll_view_will_begin_dragging` when the user starts a drag
/// - `scroll_view_will_end_dragging` when the user lifts the finger, with the proposed target
///
/// Item count and bounds are read from the host on every call.
#[derive(Clone, Debug)]
pub struct Controller<H> {
    behavior: PeekingBehavior,
    host: H,
}

impl<H: ScrollHost> Controller<H> {
    pub fn new(options: CarouselOptions, host: H) -> Result<Self, ConfigError> {
        Ok(Self {
            behavior: PeekingBehavior::new(options)?,
            host,
        })
    }

    pub fn from_behavior(behavior: PeekingBehavior, host: H) -> Self {
        Self { behavior, host }
    }

    pub fn behavior(&self) -> &PeekingBehavior {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut PeekingBehavior {
        &mut self.behavior
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (PeekingBehavior, H) {
        (self.behavior, self.host)
    }

    /// The layout for the host's current item count and bounds.
    pub fn layout(&self) -> PeekLayout {
        self.behavior.layout(&HostSource(&self.host))
    }

    /// Records the host's live offset as the drag's starting position.
    pub fn scroll_view_will_begin_dragging(&mut self) {
        let dir = self.behavior.options().scroll_direction;
        let live = dir.main(self.host.content_offset());
        self.behavior.on_drag_begin(live);
    }

    /// Rewrites `target` in place with the corrected release target.
    ///
    /// Only the main-axis component of `velocity` and `target` is read; the cross component of
    /// `target` is left untouched. The host is told about the new active index unless the
    /// release was passed through.
    pub fn scroll_view_will_end_dragging(
        &mut self,
        velocity: Point,
        target: &mut Point,
    ) -> Resolution {
        let dir = self.behavior.options().scroll_direction;
        let resolution = self.behavior.resolve_release(
            &HostSource(&self.host),
            dir.main(velocity),
            dir.main(*target),
        );
        *target = dir.with_main(*target, resolution.offset);
        if resolution.corrected {
            self.host.active_index_changed(resolution.index);
        }
        resolution
    }

    /// Scrolls the host to item `index` (clamped to the last item).
    ///
    /// Returns the offset passed to [`ScrollHost::set_content_offset`].
    pub fn scroll_to_item(&mut self, index: usize, animated: bool) -> Point {
        let request = self
            .behavior
            .scroll_to_item(&HostSource(&self.host), index, animated);
        let point = self
            .behavior
            .options()
            .scroll_direction
            .point(request.offset, 0.0);
        self.host.set_content_offset(point, request.animated);
        point
    }

    pub fn current_index(&self) -> usize {
        self.behavior.current_index(&HostSource(&self.host))
    }

    pub fn content_size(&self) -> Size {
        self.layout().content_size()
    }

    pub fn item_size(&self) -> Size {
        self.layout().item_size()
    }

    pub fn section_insets(&self) -> EdgeInsets {
        self.layout().section_insets()
    }

    /// The host's visible rect in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect {
            origin: self.host.content_offset(),
            size: self.host.bounds(),
        }
    }

    pub fn layout_attributes_for_elements(&self, rect: Rect) -> Vec<ItemAttributes> {
        self.layout().layout_attributes_in(rect)
    }

    pub fn layout_attributes_for_item(&self, index: usize) -> ItemAttributes {
        ItemAttributes {
            index,
            frame: self.layout().frame_for_item(index),
        }
    }

    /// Attributes for the items inside [`Self::visible_rect`].
    pub fn visible_attributes(&self) -> Vec<ItemAttributes> {
        self.layout_attributes_for_elements(self.visible_rect())
    }
}
