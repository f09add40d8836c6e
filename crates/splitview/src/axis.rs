//! Axis and side identifiers shared by the split container.

use splitview_core::geometry::Size;
use splitview_core::math::Vec2;

/// Direction along which the two panes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Side by side (vertical divider line). Length is the width.
    #[default]
    Horizontal,
    /// Stacked (horizontal divider line). Length is the height.
    Vertical,
}

impl Axis {
    /// Get the other axis.
    pub fn toggled(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Extent of `size` along this axis.
    pub fn length(self, size: Size<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across this axis.
    pub fn breadth(self, size: Size<f32>) -> f32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Component of a point or translation along this axis.
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }
}

/// One of the two panes of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Leading pane (left or top).
    Primary,
    /// Trailing pane (right or bottom).
    Secondary,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, Side::Primary)
    }

    pub fn is_secondary(self) -> bool {
        matches!(self, Side::Secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_length_and_breadth() {
        let size = Size::new(400.0, 200.0);
        assert_eq!(Axis::Horizontal.length(size), 400.0);
        assert_eq!(Axis::Horizontal.breadth(size), 200.0);
        assert_eq!(Axis::Vertical.length(size), 200.0);
        assert_eq!(Axis::Vertical.breadth(size), 400.0);
    }

    #[test]
    fn test_axis_component() {
        let v = Vec2::new(3.0, 7.0);
        assert_eq!(Axis::Horizontal.component(v), 3.0);
        assert_eq!(Axis::Vertical.component(v), 7.0);
        assert_eq!(Axis::Vertical.toggled(), Axis::Horizontal);
    }

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Primary.other(), Side::Secondary);
        assert!(Side::Secondary.other().is_primary());
    }
}
