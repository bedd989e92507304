//! A headless "peeking carousel" engine.
//!
//! For scroll-host glue (reading/writing 2-D content offsets, programmatic scrolls), see the
//! `peek-carousel-adapter` crate.
//!
//! The crate has two layers:
//! - [`PeekLayout`]: pure geometry for a strip of equally sized items with a configurable peek
//!   of the neighbouring items on both edges (item frames, content size, offset ↔ index).
//! - [`Pager`]: the snap decision taken on every drag release (velocity threshold, at-least-one
//!   item flings, minimum/maximum items per gesture, boundary guards).
//!
//! [`PeekingBehavior`] binds both to a [`CarouselOptions`] configuration.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport size and item count (via [`CarouselDataSource`])
//! - the live scroll offset when a drag begins
//! - the release velocity and the proposed target offset when a drag ends
//!
//! ## Features
//!
//! - `std` (default): float math through `std`.
//! - `libm`: float math through `libm` for `no_std` + `alloc` builds.
//! - `serde`: `Serialize`/`Deserialize` for options, geometry and snapshot types.
//! - `tracing`: emits `tracing` events under the `peek_carousel` target.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("peek-carousel requires either the `std` or the `libm` feature");

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod behavior;
mod error;
mod layout;
mod math;
mod options;
mod paging;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use behavior::{
    CarouselDataSource, FixedSource, OnActiveIndexChange, PeekingBehavior, ScrollRequest,
};
pub use error::ConfigError;
pub use layout::PeekLayout;
pub use options::{CarouselOptions, LayoutParameters, PagingPolicy, ReleaseTrigger};
pub use paging::{Pager, Resolution};
pub use state::PagingState;
pub use types::{
    Axis, EdgeInsets, ItemAttributes, PageDirection, Point, Rect, ScrollDirection, Size,
};
