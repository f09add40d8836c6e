//! Vector math re-exported from [`glam`].
//!
//! Pointer locations and drag translations are carried as [`Vec2`] so hosts
//! can hand over whatever their windowing layer reports without conversion.
//!
//! ```
//! use splitview_core::math::Vec2;
//!
//! let start = Vec2::new(10.0, 20.0);
//! let moved = start + Vec2::new(5.0, 0.0);
//! assert_eq!(moved.x, 15.0);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;

/// Round `value` to the given number of decimal places.
///
/// Used for threshold comparisons that must tolerate floating point noise.
#[inline]
pub fn round_to(value: f32, places: i32) -> f32 {
    let scale = 10f32.powi(places);
    (value * scale).round() / scale
}
