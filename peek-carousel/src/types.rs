/// One of the two layout axes, relative to the paging direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The axis along which paging happens.
    Main,
    /// The axis perpendicular to paging.
    Cross,
}

/// The concrete orientation of the carousel.
///
/// Fixed at construction: every geometry query maps [`Axis::Main`] to the x axis for
/// `Horizontal` and to the y axis for `Vertical`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl ScrollDirection {
    /// Returns `true` when `axis` maps to the x axis.
    pub fn is_x(self, axis: Axis) -> bool {
        matches!(
            (self, axis),
            (Self::Horizontal, Axis::Main) | (Self::Vertical, Axis::Cross)
        )
    }

    pub fn main(self, point: Point) -> f32 {
        self.component(point, Axis::Main)
    }

    pub fn cross(self, point: Point) -> f32 {
        self.component(point, Axis::Cross)
    }

    pub fn component(self, point: Point, axis: Axis) -> f32 {
        if self.is_x(axis) { point.x } else { point.y }
    }

    pub fn length(self, size: Size, axis: Axis) -> f32 {
        if self.is_x(axis) {
            size.width
        } else {
            size.height
        }
    }

    /// Builds a point from main/cross components.
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a size from main/cross lengths.
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Replaces the main component of `point`, keeping its cross component.
    pub fn with_main(self, point: Point, main: f32) -> Point {
        self.point(main, self.cross(point))
    }

    /// Insets of `value` on both main-axis ends and zero on the cross axis.
    pub fn insets(self, value: f32) -> EdgeInsets {
        match self {
            Self::Horizontal => EdgeInsets {
                top: 0.0,
                left: value,
                bottom: 0.0,
                right: value,
            },
            Self::Vertical => EdgeInsets {
                top: value,
                left: 0.0,
                bottom: value,
                right: 0.0,
            },
        }
    }
}

/// Which way a release moves along the main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageDirection {
    Forward,
    Backward,
}

impl PageDirection {
    /// Negative deltas page backward; zero counts as forward.
    pub fn from_delta(delta: f32) -> Self {
        if delta < 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    pub fn multiplier(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in content coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }

    /// Returns `true` if both rects are non-empty and overlap with positive area.
    ///
    /// Rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

/// Placement of a single item, as handed to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttributes {
    pub index: usize,
    pub frame: Rect,
}
