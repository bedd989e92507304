/// A rejected carousel configuration.
///
/// Returned by [`crate::CarouselOptions::validate`] and by every constructor that accepts
/// options. Runtime geometry never produces this error: a zero-sized viewport or a zero item
/// length is handled locally by returning safe defaults.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("items_to_show must be at least 1")]
    ItemsToShowZero,

    #[error("peek_length must not be negative (got {0})")]
    NegativePeekLength(f32),

    #[error("spacing_length must not be negative (got {0})")]
    NegativeSpacingLength(f32),

    #[error("velocity_threshold must not be negative (got {0})")]
    NegativeThreshold(f32),

    #[error("{field} must be finite (got {value})")]
    NonFiniteLength { field: &'static str, value: f32 },

    #[error("maximum_items_to_scroll must be at least 1")]
    ZeroMaximumItemsToScroll,

    #[error(
        "minimum_items_to_scroll ({minimum}) must not exceed maximum_items_to_scroll ({maximum})"
    )]
    InvertedScrollBounds { minimum: usize, maximum: usize },
}

pub(crate) fn check_length(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteLength { field, value });
    }
    Ok(value)
}
