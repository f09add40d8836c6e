//! Divider drag tracking.
//!
//! Pointer samples are turned into incremental deltas so the divider follows
//! the pointer from wherever the drag began, instead of snapping its center
//! to the pointer.

use splitview_core::math::Vec2;

use crate::axis::{Axis, Side};
use crate::constraints::SplitConstraints;

/// One pointer sample of a divider drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    /// Pointer location in the container's coordinate space.
    pub location: Vec2,
    /// Total pointer movement since the gesture started.
    pub translation: Vec2,
}

impl DragSample {
    pub fn new(location: Vec2, translation: Vec2) -> Self {
        Self { location, translation }
    }
}

/// The two fractions a split tracks.
///
/// `constrained` sizes the panes and always respects the constraints.
/// `full` follows the pointer without clamping to the minimums, so a drag
/// past a minimum can still be measured against the hide threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitFractions {
    pub constrained: f32,
    pub full: f32,
}

impl SplitFractions {
    /// Start both fractions at `fraction` clamped to `constraints`.
    pub fn new(fraction: f32, constraints: &SplitConstraints) -> Self {
        let constrained = constraints.clamp(fraction);
        Self {
            constrained,
            full: constrained,
        }
    }

    /// Move both fractions to `fraction` together.
    pub fn set(&mut self, fraction: f32) {
        self.constrained = fraction;
        self.full = fraction;
    }

    /// Reset to the edge a hidden side leaves the divider at.
    ///
    /// A hidden primary puts the divider at the leading edge, a hidden
    /// secondary at the trailing edge.
    pub fn reveal(&mut self, hidden: Side) {
        match hidden {
            Side::Primary => self.set(0.0),
            Side::Secondary => self.set(1.0),
        }
    }

    /// Drop any overshoot past the constraints.
    pub fn settle(&mut self) {
        self.full = self.constrained;
    }
}

/// Tracks an in-progress divider drag.
///
/// Idle while no previous position is recorded.
#[derive(Debug, Default, Clone)]
pub struct DragTracker {
    previous_position: Option<f32>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.previous_position.is_some()
    }

    /// Pointer position along the axis at the last sample.
    pub fn previous_position(&self) -> Option<f32> {
        self.previous_position
    }

    /// Apply one pointer sample to `fractions`.
    ///
    /// The first sample of a gesture moves the divider by the gesture's total
    /// translation; later samples move it by the distance since the previous
    /// sample. The divider never leaves `0..=container_length`.
    pub fn update(
        &mut self,
        sample: DragSample,
        axis: Axis,
        container_length: f32,
        fractions: &mut SplitFractions,
        constraints: &SplitConstraints,
    ) {
        if container_length <= 0.0 {
            return;
        }

        let location = axis.component(sample.location);
        let delta = match self.previous_position {
            Some(previous) => location - previous,
            None => axis.component(sample.translation),
        };

        // Kept in fraction space so a zero delta leaves `full` untouched.
        fractions.full = (fractions.full + delta / container_length).clamp(0.0, 1.0);
        fractions.constrained = constraints.clamp(fractions.full);
        self.previous_position = Some(location);

        tracing::trace!(
            delta,
            position = fractions.full * container_length,
            full = fractions.full,
            constrained = fractions.constrained,
            "divider drag sample"
        );
    }

    /// Return to idle.
    pub fn end(&mut self) {
        self.previous_position = None;
    }
}
