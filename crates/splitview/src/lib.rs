//! Splitview - a resizable two-pane split container.
//!
//! This crate provides the layout and interaction state behind a split view:
//! - **Geometry**: fraction and container size in, pane and divider rects out
//! - **Constraints**: minimum fractions, a priority side and drag-to-hide
//! - **Drag**: pointer samples turned into a bounded fraction
//! - **Resize**: priority side keeps its pixel length when the container resizes
//! - **Bindings**: caller-owned fraction, hidden side and axis
//!
//! Rendering is left to the host. A [`SplitView`] is driven by mutators and
//! asked for a [`SplitLayout`] after each one.
//!
//! # Quick Start
//!
//! ```
//! use splitview::{DragSample, FractionBinding, Side, SplitConstraints, SplitView};
//! use splitview_core::geometry::{Rect, Size};
//! use splitview_core::math::Vec2;
//!
//! let fraction = FractionBinding::new(0.5);
//! let mut split = SplitView::horizontal()
//!     .with_fraction(fraction.clone())
//!     .with_constraints(
//!         SplitConstraints::new()
//!             .min_primary(0.2)
//!             .drag_to_hide(Side::Primary),
//!     );
//!
//! let size = Size::new(400.0, 300.0);
//! split.resized(size);
//!
//! // Drag the divider 80px to the left, then let go.
//! split.drag_changed(DragSample::new(Vec2::new(120.0, 150.0), Vec2::new(-80.0, 0.0)), size);
//! split.drag_ended();
//! assert!((fraction.get() - 0.3).abs() < 1e-5);
//!
//! let layout = split.layout(Rect::from_size(size));
//! assert!((layout.primary_length - 120.0).abs() < 1e-3);
//! ```

pub mod animation;
pub mod axis;
pub mod binding;
pub mod constraints;
pub mod dirty;
pub mod drag;
pub mod geometry;
pub mod resize;
pub mod split;
pub mod style;

pub use animation::FractionTransition;
pub use axis::{Axis, Side};
pub use binding::{AxisBinding, Binding, FractionBinding, HiddenBinding};
pub use constraints::SplitConstraints;
pub use dirty::SplitChanges;
pub use drag::{DragSample, DragTracker, SplitFractions};
pub use geometry::{DividerState, SplitLayout, compute_lengths};
pub use resize::ResizeTracker;
pub use split::SplitView;
pub use style::{SplitStyle, StyleHandle};
