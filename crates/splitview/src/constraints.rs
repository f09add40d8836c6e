//! Minimum-size, priority and drag-to-hide policy for a split.

use splitview_core::math::round_to;

use crate::axis::Side;

/// Decimal places used when comparing the full fraction against a hide threshold.
pub const HIDE_THRESHOLD_PRECISION: i32 = 3;

/// Constraints on how far the divider may move and how the sides react to
/// container resizes.
///
/// Minimums are fractions of the container length. A side's drag-to-hide
/// flag only takes effect when that side also has a minimum, because the
/// hide threshold is half of it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SplitConstraints {
    /// Minimum fraction of the length the primary side may occupy.
    pub min_primary_fraction: Option<f32>,
    /// Minimum fraction of the length the secondary side may occupy.
    pub min_secondary_fraction: Option<f32>,
    /// Side that keeps its pixel length when the container is resized.
    pub priority: Option<Side>,
    /// Hide the primary side when dragged past half its minimum.
    pub drag_to_hide_primary: bool,
    /// Hide the secondary side when dragged past half its minimum.
    pub drag_to_hide_secondary: bool,
}

impl SplitConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary side's minimum fraction.
    pub fn min_primary(mut self, fraction: f32) -> Self {
        self.min_primary_fraction = Some(fraction);
        self
    }

    /// Set the secondary side's minimum fraction.
    pub fn min_secondary(mut self, fraction: f32) -> Self {
        self.min_secondary_fraction = Some(fraction);
        self
    }

    /// Keep `side` at a fixed pixel length across container resizes.
    pub fn priority(mut self, side: Side) -> Self {
        self.priority = Some(side);
        self
    }

    /// Enable drag-to-hide for `side`.
    pub fn drag_to_hide(mut self, side: Side) -> Self {
        match side {
            Side::Primary => self.drag_to_hide_primary = true,
            Side::Secondary => self.drag_to_hide_secondary = true,
        }
        self
    }

    /// Minimum fraction configured for `side`, if any.
    pub fn min_fraction(&self, side: Side) -> Option<f32> {
        match side {
            Side::Primary => self.min_primary_fraction,
            Side::Secondary => self.min_secondary_fraction,
        }
    }

    /// Whether drag-to-hide is active for `side`.
    pub fn hides_on_drag(&self, side: Side) -> bool {
        let enabled = match side {
            Side::Primary => self.drag_to_hide_primary,
            Side::Secondary => self.drag_to_hide_secondary,
        };
        enabled && self.min_fraction(side).is_some()
    }

    /// Lowest fraction the constrained value may take.
    pub fn lower_bound(&self) -> f32 {
        self.min_primary_fraction.unwrap_or(0.0)
    }

    /// Highest fraction the constrained value may take.
    pub fn upper_bound(&self) -> f32 {
        1.0 - self.min_secondary_fraction.unwrap_or(0.0)
    }

    /// Clamp a fraction into `[min_primary, 1 - min_secondary]`.
    ///
    /// The secondary bound is applied last, so when the two minimums sum to
    /// more than one the result is `1 - min_secondary`.
    pub fn clamp(&self, fraction: f32) -> f32 {
        self.upper_bound().min(self.lower_bound().max(fraction))
    }

    /// Whether the minimums leave no valid range (sum above one).
    pub fn is_degenerate(&self) -> bool {
        self.lower_bound() > self.upper_bound()
    }

    /// Side that a drag ending at `full_fraction` would hide.
    ///
    /// Uses the unclamped fraction so that overshoot past a minimum counts.
    /// Primary wins when both thresholds are met.
    pub fn side_to_hide(&self, full_fraction: f32) -> Option<Side> {
        if let Some(min) = self.min_primary_fraction
            && self.drag_to_hide_primary
            && round_to(full_fraction, HIDE_THRESHOLD_PRECISION) <= min / 2.0
        {
            return Some(Side::Primary);
        }
        if let Some(min) = self.min_secondary_fraction
            && self.drag_to_hide_secondary
            && round_to(1.0 - full_fraction, HIDE_THRESHOLD_PRECISION) <= min / 2.0
        {
            return Some(Side::Secondary);
        }
        None
    }
}
