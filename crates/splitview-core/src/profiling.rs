//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so instrumented call sites compile either way.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

/// Turn scope collection on or off.
///
/// # Example
/// ```no_run
/// use splitview_core::profiling::set_enabled;
///
/// set_enabled(true);
/// ```
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);
    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
    tracing::debug!(enabled, "profiling scopes toggled");
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per host frame so scopes are grouped per frame.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
