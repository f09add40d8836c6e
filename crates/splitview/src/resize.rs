//! Keeps a priority side at a fixed pixel length when the container resizes.

use splitview_core::geometry::Size;

use crate::axis::{Axis, Side};
use crate::constraints::SplitConstraints;

/// Remembers the last container size seen by a split.
#[derive(Debug, Default, Clone)]
pub struct ResizeTracker {
    old_size: Option<Size<f32>>,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded container size.
    pub fn old_size(&self) -> Option<Size<f32>> {
        self.old_size
    }

    /// Record `size` as the new baseline without adjusting anything.
    pub fn record(&mut self, size: Size<f32>) {
        self.old_size = Some(size);
    }

    /// Observe a container size and compute the fraction that keeps the
    /// priority side's pixel length.
    ///
    /// Returns `None` on the first observation, when the size is unchanged,
    /// when no priority side is configured, or when either length is not
    /// positive. The non-priority side absorbs the whole length change and
    /// the result is clamped to `constraints`.
    pub fn observe(
        &mut self,
        size: Size<f32>,
        axis: Axis,
        constrained: f32,
        constraints: &SplitConstraints,
    ) -> Option<f32> {
        let old = self.old_size.replace(size)?;
        if old == size {
            return None;
        }
        let priority = constraints.priority?;

        let old_length = axis.length(old);
        let new_length = axis.length(size);
        if old_length <= 0.0 || new_length <= 0.0 {
            return None;
        }

        let delta = new_length - old_length;
        let primary = constrained * old_length;
        let new_primary = match priority {
            Side::Primary => primary,
            Side::Secondary => primary + delta,
        };
        Some(constraints.clamp(new_primary / new_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn size(width: f32) -> Size<f32> {
        Size::new(width, 100.0)
    }

    #[test]
    fn test_first_observation_is_baseline() {
        let constraints = SplitConstraints::new().priority(Side::Primary);
        let mut tracker = ResizeTracker::new();
        assert_eq!(tracker.observe(size(200.0), Axis::Horizontal, 0.5, &constraints), None);
        assert_eq!(tracker.old_size(), Some(size(200.0)));
    }

    #[test]
    fn test_no_priority_is_proportional() {
        let constraints = SplitConstraints::default();
        let mut tracker = ResizeTracker::new();
        tracker.observe(size(200.0), Axis::Horizontal, 0.5, &constraints);
        assert_eq!(tracker.observe(size(300.0), Axis::Horizontal, 0.5, &constraints), None);
        assert_eq!(tracker.old_size(), Some(size(300.0)));
    }

    #[test]
    fn test_primary_priority_keeps_pixels() {
        let constraints = SplitConstraints::new().priority(Side::Primary);
        let mut tracker = ResizeTracker::new();
        tracker.observe(size(200.0), Axis::Horizontal, 0.5, &constraints);
        let fraction = tracker
            .observe(size(300.0), Axis::Horizontal, 0.5, &constraints)
            .unwrap();
        assert!((fraction - 100.0 / 300.0).abs() < EPS);
    }

    #[test]
    fn test_secondary_priority_keeps_pixels() {
        let constraints = SplitConstraints::new().priority(Side::Secondary);
        let mut tracker = ResizeTracker::new();
        tracker.observe(size(200.0), Axis::Horizontal, 0.5, &constraints);
        let fraction = tracker
            .observe(size(300.0), Axis::Horizontal, 0.5, &constraints)
            .unwrap();
        // Secondary stays 100px, primary grows to 200px.
        assert!((fraction - 200.0 / 300.0).abs() < EPS);
    }

    #[test]
    fn test_priority_result_is_clamped() {
        let constraints = SplitConstraints::new().priority(Side::Primary).min_primary(0.4);
        let mut tracker = ResizeTracker::new();
        tracker.observe(size(200.0), Axis::Horizontal, 0.5, &constraints);
        let fraction = tracker
            .observe(size(400.0), Axis::Horizontal, 0.5, &constraints)
            .unwrap();
        assert!((fraction - 0.4).abs() < EPS);
    }

    #[test]
    fn test_breadth_change_is_ignored_by_axis() {
        let constraints = SplitConstraints::new().priority(Side::Primary);
        let mut tracker = ResizeTracker::new();
        tracker.observe(Size::new(200.0, 100.0), Axis::Horizontal, 0.5, &constraints);
        let fraction = tracker
            .observe(Size::new(200.0, 150.0), Axis::Horizontal, 0.5, &constraints)
            .unwrap();
        assert!((fraction - 0.5).abs() < EPS);
    }
}
