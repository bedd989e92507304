use crate::ScrollDirection;
use crate::error::{ConfigError, check_length};

/// How a drag release is classified as a fling (a deliberate page turn).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReleaseTrigger {
    /// Fling when `|velocity| > threshold` (strict). The page direction follows the velocity.
    #[default]
    Velocity,
    /// Fling when `|target - start| >= threshold` (inclusive). The page direction follows the
    /// drag displacement and the reported velocity is ignored.
    ///
    /// Use this when the host cannot report a meaningful release velocity and the threshold is
    /// expressed as a drag distance in points.
    Displacement,
}

/// Configuration for [`crate::PeekingBehavior`].
///
/// `Default` yields the stock carousel: 20pt peek, 20pt spacing, one item per page, horizontal
/// paging, a 0.2 velocity threshold and no scroll-count bounds.
///
/// Fields are public for convenience; every constructor runs [`Self::validate`] before the
/// options are used.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    /// Length of the neighbouring items left visible on each edge of the viewport.
    pub peek_length: f32,
    /// Gap between adjacent items (and between the outer items and the peek area).
    pub spacing_length: f32,
    /// Number of fully visible items per page.
    pub items_to_show: usize,
    pub scroll_direction: ScrollDirection,
    /// Threshold compared against the release velocity (or displacement, see
    /// [`ReleaseTrigger`]).
    pub velocity_threshold: f32,
    pub release_trigger: ReleaseTrigger,
    /// Lower bound on how many items a single gesture moves. Only applied to gestures that move
    /// at all; it never turns a zero step into movement.
    pub minimum_items_to_scroll: Option<usize>,
    /// Upper bound on how many items a single gesture moves.
    pub maximum_items_to_scroll: Option<usize>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            peek_length: 20.0,
            spacing_length: 20.0,
            items_to_show: 1,
            scroll_direction: ScrollDirection::Horizontal,
            velocity_threshold: 0.2,
            release_trigger: ReleaseTrigger::Velocity,
            minimum_items_to_scroll: None,
            maximum_items_to_scroll: None,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_peek_length(mut self, peek_length: f32) -> Self {
        self.peek_length = peek_length;
        self
    }

    pub fn with_spacing_length(mut self, spacing_length: f32) -> Self {
        self.spacing_length = spacing_length;
        self
    }

    pub fn with_items_to_show(mut self, items_to_show: usize) -> Self {
        self.items_to_show = items_to_show;
        self
    }

    pub fn with_scroll_direction(mut self, scroll_direction: ScrollDirection) -> Self {
        self.scroll_direction = scroll_direction;
        self
    }

    pub fn with_velocity_threshold(mut self, velocity_threshold: f32) -> Self {
        self.velocity_threshold = velocity_threshold;
        self
    }

    pub fn with_release_trigger(mut self, release_trigger: ReleaseTrigger) -> Self {
        self.release_trigger = release_trigger;
        self
    }

    /// Shorthand for a displacement trigger with the given distance threshold.
    pub fn with_displacement_threshold(mut self, threshold: f32) -> Self {
        self.release_trigger = ReleaseTrigger::Displacement;
        self.velocity_threshold = threshold;
        self
    }

    pub fn with_minimum_items_to_scroll(mut self, minimum: Option<usize>) -> Self {
        self.minimum_items_to_scroll = minimum;
        self
    }

    pub fn with_maximum_items_to_scroll(mut self, maximum: Option<usize>) -> Self {
        self.maximum_items_to_scroll = maximum;
        self
    }

    /// Checks every field, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.split().map(|_| ())
    }

    /// Validates and splits the options into their geometry and paging halves.
    pub fn split(&self) -> Result<(LayoutParameters, PagingPolicy), ConfigError> {
        let result = LayoutParameters::new(
            self.peek_length,
            self.spacing_length,
            self.items_to_show,
            self.scroll_direction,
        )
        .and_then(|layout| {
            PagingPolicy::new(
                self.velocity_threshold,
                self.release_trigger,
                self.minimum_items_to_scroll,
                self.maximum_items_to_scroll,
            )
            .map(|policy| (layout, policy))
        });
        if let Err(_err) = &result {
            pwarn!(error = %_err, "CarouselOptions rejected");
        }
        result
    }
}

/// The validated geometry half of [`CarouselOptions`].
///
/// The viewport size and item count are deliberately absent: they change at runtime and are
/// supplied per query (see [`crate::PeekLayout`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutParameters {
    peek_length: f32,
    spacing_length: f32,
    items_to_show: usize,
    scroll_direction: ScrollDirection,
}

impl LayoutParameters {
    pub fn new(
        peek_length: f32,
        spacing_length: f32,
        items_to_show: usize,
        scroll_direction: ScrollDirection,
    ) -> Result<Self, ConfigError> {
        if items_to_show == 0 {
            return Err(ConfigError::ItemsToShowZero);
        }
        let peek_length = check_length("peek_length", peek_length)?;
        if peek_length < 0.0 {
            return Err(ConfigError::NegativePeekLength(peek_length));
        }
        let spacing_length = check_length("spacing_length", spacing_length)?;
        if spacing_length < 0.0 {
            return Err(ConfigError::NegativeSpacingLength(spacing_length));
        }
        Ok(Self {
            peek_length,
            spacing_length,
            items_to_show,
            scroll_direction,
        })
    }

    pub fn peek_length(&self) -> f32 {
        self.peek_length
    }

    pub fn spacing_length(&self) -> f32 {
        self.spacing_length
    }

    pub fn items_to_show(&self) -> usize {
        self.items_to_show
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }
}

impl Default for LayoutParameters {
    fn default() -> Self {
        let o = CarouselOptions::default();
        Self {
            peek_length: o.peek_length,
            spacing_length: o.spacing_length,
            items_to_show: o.items_to_show,
            scroll_direction: o.scroll_direction,
        }
    }
}

/// The validated paging half of [`CarouselOptions`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PagingPolicy {
    threshold: f32,
    trigger: ReleaseTrigger,
    minimum_items_to_scroll: Option<usize>,
    maximum_items_to_scroll: Option<usize>,
}

impl PagingPolicy {
    pub fn new(
        threshold: f32,
        trigger: ReleaseTrigger,
        minimum_items_to_scroll: Option<usize>,
        maximum_items_to_scroll: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let threshold = check_length("velocity_threshold", threshold)?;
        if threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(threshold));
        }
        if maximum_items_to_scroll == Some(0) {
            return Err(ConfigError::ZeroMaximumItemsToScroll);
        }
        if let (Some(minimum), Some(maximum)) = (minimum_items_to_scroll, maximum_items_to_scroll)
        {
            if minimum > maximum {
                return Err(ConfigError::InvertedScrollBounds { minimum, maximum });
            }
        }
        Ok(Self {
            threshold,
            trigger,
            minimum_items_to_scroll,
            maximum_items_to_scroll,
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn trigger(&self) -> ReleaseTrigger {
        self.trigger
    }

    pub fn minimum_items_to_scroll(&self) -> Option<usize> {
        self.minimum_items_to_scroll
    }

    pub fn maximum_items_to_scroll(&self) -> Option<usize> {
        self.maximum_items_to_scroll
    }

    /// Applies the minimum/maximum bounds to a step count.
    ///
    /// The minimum only applies to a non-zero step; the maximum always caps.
    pub fn clamp_step(&self, step: usize) -> usize {
        let mut step = step;
        if let Some(minimum) = self.minimum_items_to_scroll {
            if step != 0 {
                step = step.max(minimum);
            }
        }
        if let Some(maximum) = self.maximum_items_to_scroll {
            step = step.min(maximum);
        }
        step
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        let o = CarouselOptions::default();
        Self {
            threshold: o.velocity_threshold,
            trigger: o.release_trigger,
            minimum_items_to_scroll: None,
            maximum_items_to_scroll: None,
        }
    }
}
