//! SplitView - a two-pane container with a draggable divider.
//!
//! The host drives a `SplitView` through mutators (`drag_changed`,
//! `drag_ended`, `resized`, `sync_bindings`, `tick`) and then asks for a
//! fresh [`SplitLayout`] with [`SplitView::layout`]. Each mutator reports
//! what it changed as [`SplitChanges`].

use std::fmt;

use splitview_core::geometry::{Rect, Size};
use splitview_core::profiling::profile_function;

use crate::animation::FractionTransition;
use crate::axis::{Axis, Side};
use crate::binding::{AxisBinding, FractionBinding, HiddenBinding};
use crate::constraints::SplitConstraints;
use crate::dirty::SplitChanges;
use crate::drag::{DragSample, DragTracker, SplitFractions};
use crate::geometry::{LayoutInput, SplitLayout, compute_layout};
use crate::resize::ResizeTracker;
use crate::style::{SplitStyle, StyleHandle};

/// Fraction used when no fraction binding is supplied.
pub const DEFAULT_FRACTION: f32 = 0.5;

type DragCallback = Box<dyn FnMut(f32)>;

/// Resizable split container.
///
/// Contains exactly two logical sides separated by one divider. Nest
/// instances to build larger layouts; each one manages only its own divider.
pub struct SplitView {
    axis: AxisBinding,
    fraction: FractionBinding,
    hidden: HiddenBinding,
    constraints: SplitConstraints,
    style: StyleHandle,
    fractions: SplitFractions,
    drag: DragTracker,
    resize: ResizeTracker,
    /// Version of `fraction` last reconciled or written by this split.
    observed_fraction: u32,
    on_drag: Option<DragCallback>,
    animate: bool,
    transition: Option<FractionTransition>,
}

impl SplitView {
    /// Create a split with its own bindings along `axis`.
    pub fn new(axis: Axis) -> Self {
        let fraction = FractionBinding::new(DEFAULT_FRACTION);
        let constraints = SplitConstraints::default();
        Self {
            axis: AxisBinding::new(axis),
            fractions: SplitFractions::new(fraction.get(), &constraints),
            observed_fraction: fraction.version(),
            fraction,
            hidden: HiddenBinding::default(),
            constraints,
            style: StyleHandle::default(),
            drag: DragTracker::new(),
            resize: ResizeTracker::new(),
            on_drag: None,
            animate: false,
            transition: None,
        }
    }

    /// Side-by-side panes.
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Stacked panes.
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Read and write the axis through a caller-owned binding.
    pub fn with_axis(mut self, axis: AxisBinding) -> Self {
        self.axis = axis;
        self
    }

    /// Read and publish the fraction through a caller-owned binding.
    pub fn with_fraction(mut self, fraction: FractionBinding) -> Self {
        self.fractions = SplitFractions::new(fraction.get(), &self.constraints);
        self.observed_fraction = fraction.version();
        self.fraction = fraction;
        self
    }

    /// Read and publish the hidden side through a caller-owned binding.
    pub fn with_hidden(mut self, hidden: HiddenBinding) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set the constraints, re-clamping the current fraction.
    pub fn with_constraints(mut self, constraints: SplitConstraints) -> Self {
        if constraints.is_degenerate() {
            tracing::warn!(
                min_primary = constraints.lower_bound(),
                min_secondary = 1.0 - constraints.upper_bound(),
                "split minimums exceed the container; the secondary minimum wins"
            );
        }
        self.constraints = constraints;
        self.fractions = SplitFractions::new(self.fraction.get(), &self.constraints);
        self
    }

    /// Use a fresh style handle holding `style`.
    pub fn with_style(self, style: SplitStyle) -> Self {
        self.with_style_handle(StyleHandle::new(style))
    }

    /// Share an existing style handle.
    ///
    /// The hide preview travels with the handle; see [`StyleHandle`].
    pub fn with_style_handle(mut self, style: StyleHandle) -> Self {
        self.style = style;
        self
    }

    /// Call `callback` with the constrained fraction on every drag sample.
    pub fn on_drag(mut self, callback: impl FnMut(f32) + 'static) -> Self {
        self.on_drag = Some(Box::new(callback));
        self
    }

    /// Ease the drawn fraction after external fraction changes.
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis.get()
    }

    pub fn axis_binding(&self) -> &AxisBinding {
        &self.axis
    }

    pub fn fraction_binding(&self) -> &FractionBinding {
        &self.fraction
    }

    pub fn hidden_binding(&self) -> &HiddenBinding {
        &self.hidden
    }

    /// Currently hidden side.
    pub fn hidden(&self) -> Option<Side> {
        self.hidden.get()
    }

    pub fn constraints(&self) -> &SplitConstraints {
        &self.constraints
    }

    pub fn style(&self) -> &StyleHandle {
        &self.style
    }

    /// Fraction that sizes the panes.
    pub fn constrained_fraction(&self) -> f32 {
        self.fractions.constrained
    }

    /// Unclamped fraction following the pointer.
    pub fn full_fraction(&self) -> f32 {
        self.fractions.full
    }

    /// Fraction that layout currently draws, including any running transition.
    pub fn display_fraction(&self) -> f32 {
        self.transition
            .as_ref()
            .map_or(self.fractions.constrained, FractionTransition::current)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the divider can be grabbed.
    ///
    /// A hidden side blocks dragging if the splitter is hidden with it or if
    /// that side has a minimum, since dragging it open would jump past the
    /// minimum. Hosts need another way to unhide in that case.
    pub fn is_draggable(&self) -> bool {
        match self.hidden.get() {
            Some(side) => {
                !(self.style.hide_splitter() || self.constraints.min_fraction(side).is_some())
            }
            None => true,
        }
    }

    /// Side the current drag would hide if it ended now.
    pub fn side_to_hide(&self) -> Option<Side> {
        self.constraints.side_to_hide(self.fractions.full)
    }

    /// Side drawn as collapsed because of a hide preview.
    pub fn preview_hidden_side(&self) -> Option<Side> {
        if self.style.preview_hide() {
            self.side_to_hide()
        } else {
            None
        }
    }

    /// Apply one pointer sample from a divider drag.
    ///
    /// A hidden side is shown first, with the divider starting from the edge
    /// the hidden side left it at.
    pub fn drag_changed(&mut self, sample: DragSample, size: Size<f32>) -> SplitChanges {
        profile_function!();

        let axis = self.axis.get();
        let length = axis.length(size);
        if length <= 0.0 {
            return SplitChanges::NONE;
        }
        if !self.is_draggable() {
            tracing::trace!("ignoring drag on a non-interactive divider");
            return SplitChanges::NONE;
        }

        let mut changes = SplitChanges::NONE;

        // Continue from what is drawn, not from where a transition was headed.
        if let Some(transition) = self.transition.take() {
            self.fractions.set(transition.current());
        }
        let before = self.fractions.constrained;

        if let Some(side) = self.hidden.get() {
            tracing::debug!(?side, "showing hidden side for drag");
            self.fractions.reveal(side);
            self.hidden.set(None);
            changes |= SplitChanges::HIDDEN;
        }

        self.drag
            .update(sample, axis, length, &mut self.fractions, &self.constraints);
        if self.fractions.constrained != before {
            changes |= SplitChanges::FRACTION;
        }

        let preview = !self.is_draggable() || self.side_to_hide().is_some();
        if self.style.set_preview_hide(preview) {
            changes |= SplitChanges::PREVIEW;
        }

        if let Some(callback) = self.on_drag.as_mut() {
            callback(self.fractions.constrained);
        }
        changes
    }

    /// Finish a divider drag and commit its result.
    ///
    /// Hides the side the drag ended over, if any, and publishes the
    /// constrained fraction to the fraction binding. Safe to call without a
    /// preceding [`drag_changed`](Self::drag_changed), but ignored then if the
    /// divider is not interactive.
    pub fn drag_ended(&mut self) -> SplitChanges {
        profile_function!();

        if !self.drag.is_dragging() && !self.is_draggable() {
            tracing::trace!("ignoring drag end on a non-interactive divider");
            return SplitChanges::NONE;
        }

        let mut changes = SplitChanges::NONE;
        self.drag.end();

        if self.style.set_preview_hide(false) {
            changes |= SplitChanges::PREVIEW;
        }

        let hide = self.side_to_hide();
        if self.hidden.set(hide) {
            changes |= SplitChanges::HIDDEN;
        }

        self.fractions.settle();
        changes |= self.publish();

        tracing::debug!(
            fraction = self.fractions.constrained,
            hidden = ?hide,
            "divider drag committed"
        );
        changes
    }

    /// Observe the container size.
    ///
    /// With a priority side configured, adjusts the fraction so that side
    /// keeps its pixel length. During a drag the size is only recorded.
    pub fn resized(&mut self, size: Size<f32>) -> SplitChanges {
        profile_function!();

        if self.drag.is_dragging() {
            self.resize.record(size);
            return SplitChanges::NONE;
        }

        let axis = self.axis.get();
        let Some(fraction) =
            self.resize
                .observe(size, axis, self.fractions.constrained, &self.constraints)
        else {
            return SplitChanges::NONE;
        };

        let mut changes = SplitChanges::NONE;
        if fraction != self.fractions.constrained {
            changes |= SplitChanges::FRACTION;
        }
        self.fractions.set(fraction);
        self.transition = None;
        changes |= self.publish();

        tracing::debug!(
            width = size.width,
            height = size.height,
            fraction,
            "resize kept priority side length"
        );
        changes
    }

    /// Pick up writes made to the fraction binding by the caller.
    ///
    /// The written value is clamped; if it differs from the constrained
    /// fraction both fractions move to it at once.
    pub fn sync_bindings(&mut self) -> SplitChanges {
        if !self.fraction.is_newer_than(self.observed_fraction) {
            return SplitChanges::NONE;
        }
        self.observed_fraction = self.fraction.version();

        let incoming = self.constraints.clamp(self.fraction.get());
        if incoming == self.fractions.constrained {
            return SplitChanges::NONE;
        }

        let from = self.display_fraction();
        self.fractions.set(incoming);
        tracing::debug!(from, to = incoming, "external fraction applied");

        if self.animate {
            self.transition = Some(FractionTransition::new(from, incoming));
            SplitChanges::FRACTION | SplitChanges::ANIMATING
        } else {
            SplitChanges::FRACTION
        }
    }

    /// Write `fraction` into the binding and reconcile it.
    pub fn set_fraction(&mut self, fraction: f32) -> SplitChanges {
        self.fraction.set(fraction);
        self.sync_bindings()
    }

    /// Collapse `side`.
    pub fn hide(&mut self, side: Side) -> SplitChanges {
        self.set_hidden(Some(side))
    }

    /// Show both sides.
    pub fn show(&mut self) -> SplitChanges {
        self.set_hidden(None)
    }

    /// Hide `side` if nothing is hidden, otherwise show both sides.
    pub fn toggle_hidden(&mut self, side: Side) -> SplitChanges {
        let next = match self.hidden.get() {
            Some(_) => None,
            None => Some(side),
        };
        self.set_hidden(next)
    }

    fn set_hidden(&mut self, hidden: Option<Side>) -> SplitChanges {
        if self.hidden.set(hidden) {
            SplitChanges::HIDDEN
        } else {
            SplitChanges::NONE
        }
    }

    /// Advance a running fraction transition by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> SplitChanges {
        let Some(transition) = self.transition.as_mut() else {
            return SplitChanges::NONE;
        };
        transition.update(dt);
        if transition.is_done() {
            self.transition = None;
            SplitChanges::FRACTION
        } else {
            SplitChanges::ANIMATING
        }
    }

    /// Compute pane and divider rects for the current state.
    pub fn layout(&self, bounds: Rect<f32>) -> SplitLayout {
        profile_function!();

        let style = self.style.get();
        compute_layout(LayoutInput {
            bounds,
            axis: self.axis.get(),
            fraction: self.display_fraction(),
            constraints: &self.constraints,
            style: &style,
            hidden: self.hidden.get(),
            preview_hidden: self.preview_hidden_side(),
            interactive: self.is_draggable(),
        })
    }

    fn publish(&mut self) -> SplitChanges {
        let published = self.fraction.set(self.fractions.constrained);
        self.observed_fraction = self.fraction.version();
        if published {
            SplitChanges::PUBLISHED
        } else {
            SplitChanges::NONE
        }
    }
}

impl Default for SplitView {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl fmt::Debug for SplitView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitView")
            .field("axis", &self.axis.get())
            .field("fractions", &self.fractions)
            .field("hidden", &self.hidden.get())
            .field("constraints", &self.constraints)
            .field("dragging", &self.drag.is_dragging())
            .field("animating", &self.transition.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitview_core::math::Vec2;

    const EPS: f32 = 1e-5;

    fn size() -> Size<f32> {
        Size::new(400.0, 200.0)
    }

    fn at(x: f32, translation: f32) -> DragSample {
        DragSample::new(Vec2::new(x, 100.0), Vec2::new(translation, 0.0))
    }

    #[test]
    fn test_drag_publishes_only_on_end() {
        let fraction = FractionBinding::new(0.5);
        let mut split = SplitView::horizontal().with_fraction(fraction.clone());

        let changes = split.drag_changed(at(240.0, 40.0), size());
        assert!(changes.contains(SplitChanges::FRACTION));
        assert!(!changes.published());
        assert_eq!(fraction.get(), 0.5);

        let changes = split.drag_ended();
        assert!(changes.published());
        assert!((fraction.get() - 0.6).abs() < EPS);
        assert!(!split.is_dragging());
    }

    #[test]
    fn test_drag_in_place_is_idempotent() {
        let fraction = FractionBinding::new(0.3);
        let mut split = SplitView::horizontal().with_fraction(fraction.clone());
        let version = fraction.version();

        split.drag_changed(at(120.0, 0.0), size());
        let changes = split.drag_ended();

        assert_eq!(changes, SplitChanges::NONE);
        assert_eq!(split.constrained_fraction(), 0.3);
        assert_eq!(split.full_fraction(), 0.3);
        assert_eq!(fraction.get(), 0.3);
        assert_eq!(fraction.version(), version);
    }

    #[test]
    fn test_drag_callback_receives_constrained() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut split = SplitView::horizontal()
            .with_constraints(SplitConstraints::new().min_primary(0.25))
            .on_drag(move |f| sink.borrow_mut().push(f));

        split.drag_changed(at(100.0, -100.0), size());
        split.drag_changed(at(40.0, -160.0), size());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!((seen[0] - 0.25).abs() < EPS);
        assert!((seen[1] - 0.25).abs() < EPS);
    }

    #[test]
    fn test_drag_end_without_start() {
        let mut split = SplitView::horizontal();
        let changes = split.drag_ended();
        assert_eq!(changes, SplitChanges::NONE);
        assert_eq!(split.constrained_fraction(), 0.5);
    }

    #[test]
    fn test_constraints_clamp_initial_fraction() {
        let split = SplitView::horizontal()
            .with_fraction(FractionBinding::new(0.05))
            .with_constraints(SplitConstraints::new().min_primary(0.2));
        assert!((split.constrained_fraction() - 0.2).abs() < EPS);
    }

    #[test]
    fn test_hidden_side_with_minimum_blocks_drag() {
        let hidden = HiddenBinding::new(Some(Side::Primary));
        let mut split = SplitView::horizontal()
            .with_hidden(hidden.clone())
            .with_constraints(SplitConstraints::new().min_primary(0.2));

        assert!(!split.is_draggable());
        assert_eq!(split.drag_changed(at(10.0, 10.0), size()), SplitChanges::NONE);
        assert_eq!(hidden.get(), Some(Side::Primary));
    }

    #[test]
    fn test_toggle_hidden() {
        let mut split = SplitView::horizontal();
        assert_eq!(split.toggle_hidden(Side::Secondary), SplitChanges::HIDDEN);
        assert_eq!(split.hidden(), Some(Side::Secondary));
        assert_eq!(split.toggle_hidden(Side::Secondary), SplitChanges::HIDDEN);
        assert_eq!(split.hidden(), None);
        assert_eq!(split.show(), SplitChanges::NONE);
    }
}
