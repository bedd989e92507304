//! Scroll-host adapter utilities for the `peek-carousel` crate.
//!
//! The `peek-carousel` crate is UI-agnostic and works on main-axis offsets. This crate provides
//! the small, framework-neutral glue a scroll view integration needs:
//!
//! - [`ScrollHost`]: the narrow interface a toolkit scroll container implements
//! - [`Controller`]: forwards drag begin/end events, rewrites the proposed 2-D target offset,
//!   performs programmatic scrolls and reports active-index changes to the host
//! - [`SimulatedHost`]: an in-memory host for tests and headless demos
//!
//! This crate is intentionally framework-agnostic (no UIKit/winit/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod host;


pub use controller::Controller;
pub use host::{ScrollHost, SimulatedHost};
