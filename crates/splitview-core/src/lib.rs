//! Splitview Core
//!
//! Shared math, geometry, color and diagnostics utilities used by the
//! `splitview` layout crate.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;

pub use color::Color;
pub use geometry::{Rect, Size};
