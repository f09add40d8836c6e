//! Pure layout math: fraction and container size in, pane and divider rects out.

use splitview_core::Color;
use splitview_core::geometry::Rect;
use splitview_core::math::Vec2;

use crate::axis::{Axis, Side};
use crate::constraints::SplitConstraints;
use crate::style::SplitStyle;

/// Split the container length between the two sides.
///
/// A hidden side, or failing that a side being previewed for hiding, gets no
/// length and the other side gets all of it. Each side is floored at its
/// minimum length, with the collapsed side's minimum treated as zero.
pub fn compute_lengths(
    fraction: f32,
    container_length: f32,
    min_primary_length: f32,
    min_secondary_length: f32,
    hidden: Option<Side>,
    preview_hidden: Option<Side>,
) -> (f32, f32) {
    let collapsed = hidden.or(preview_hidden);
    let (primary, secondary) = match collapsed {
        Some(Side::Primary) => (0.0, container_length),
        Some(Side::Secondary) => (container_length, 0.0),
        None => {
            let primary = container_length * fraction;
            (primary, container_length - primary)
        }
    };
    let min_primary = if collapsed == Some(Side::Primary) { 0.0 } else { min_primary_length };
    let min_secondary = if collapsed == Some(Side::Secondary) { 0.0 } else { min_secondary_length };
    (primary.max(min_primary), secondary.max(min_secondary))
}

/// Minimum pixel lengths implied by `constraints` for a container length.
pub fn min_lengths(constraints: &SplitConstraints, container_length: f32) -> (f32, f32) {
    (
        constraints.min_primary_fraction.unwrap_or(0.0) * container_length,
        constraints.min_secondary_fraction.unwrap_or(0.0) * container_length,
    )
}

/// Space reserved between the panes for the divider.
pub fn spacing(style: &SplitStyle, hidden: Option<Side>) -> f32 {
    if style.preview_hide || (hidden.is_some() && style.hide_splitter) {
        0.0
    } else {
        style.visible_thickness
    }
}

/// What the divider's presentation needs to draw and hit-test itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerState {
    /// Whether the divider takes part in hit testing and receives drags.
    pub interactive: bool,
    /// A drag is about to hide a side.
    pub preview_hide: bool,
    /// Color of the visible line, `None` while previewing a hide.
    pub color: Option<Color>,
    /// Center of the divider along the axis, relative to the container origin.
    pub position: f32,
    /// Visible line.
    pub visible: Rect<f32>,
    /// Grabbable area. `None` when the divider is not interactive.
    pub hit: Option<Rect<f32>>,
}

impl DividerState {
    /// Check whether `point` falls on the grabbable area.
    pub fn hit_test(&self, point: Vec2) -> bool {
        self.hit.is_some_and(|hit| hit.contains(point))
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    pub axis: Axis,
    pub bounds: Rect<f32>,
    /// Length along the axis given to the primary side, before spacing.
    pub primary_length: f32,
    /// Length along the axis given to the secondary side, before spacing.
    pub secondary_length: f32,
    /// Space reserved for the divider.
    pub spacing: f32,
    pub primary: Rect<f32>,
    pub secondary: Rect<f32>,
    pub divider: DividerState,
}

impl SplitLayout {
    /// Rect for `side`.
    pub fn pane(&self, side: Side) -> Rect<f32> {
        match side {
            Side::Primary => self.primary,
            Side::Secondary => self.secondary,
        }
    }
}

/// Everything a layout pass reads, gathered so the computation stays pure.
#[derive(Debug, Clone, Copy)]
pub struct LayoutInput<'a> {
    pub bounds: Rect<f32>,
    pub axis: Axis,
    pub fraction: f32,
    pub constraints: &'a SplitConstraints,
    pub style: &'a SplitStyle,
    pub hidden: Option<Side>,
    pub preview_hidden: Option<Side>,
    pub interactive: bool,
}

/// Compute pane and divider rects.
///
/// Each pane gives up half the spacing on the divider's side so the divider
/// sits centered in the gap.
pub fn compute_layout(input: LayoutInput<'_>) -> SplitLayout {
    let LayoutInput {
        bounds,
        axis,
        fraction,
        constraints,
        style,
        hidden,
        preview_hidden,
        interactive,
    } = input;

    let length = axis.length(bounds.size());
    let (min_primary, min_secondary) = min_lengths(constraints, length);
    let (primary_length, secondary_length) =
        compute_lengths(fraction, length, min_primary, min_secondary, hidden, preview_hidden);
    let spacing = spacing(style, hidden);
    let half = spacing / 2.0;

    let primary_extent = (primary_length - half).max(0.0);
    let secondary_start = primary_length + half;
    let secondary_extent = (secondary_length - half).max(0.0);

    let (primary, secondary) = match axis {
        Axis::Horizontal => (
            Rect::new(bounds.x, bounds.y, primary_extent, bounds.height),
            Rect::new(bounds.x + secondary_start, bounds.y, secondary_extent, bounds.height),
        ),
        Axis::Vertical => (
            Rect::new(bounds.x, bounds.y, bounds.width, primary_extent),
            Rect::new(bounds.x, bounds.y + secondary_start, bounds.width, secondary_extent),
        ),
    };

    let divider = DividerState {
        interactive,
        preview_hide: style.preview_hide,
        color: style.current_color(),
        position: primary_length,
        visible: divider_rect(bounds, axis, primary_length, spacing, style.inset),
        hit: interactive
            .then(|| divider_rect(bounds, axis, primary_length, style.invisible_thickness, 0.0)),
    };

    SplitLayout {
        axis,
        bounds,
        primary_length,
        secondary_length,
        spacing,
        primary,
        secondary,
        divider,
    }
}

/// Rect of a divider band centered at `position` along the axis.
///
/// `inset` shortens the band at both ends across the axis.
fn divider_rect(
    bounds: Rect<f32>,
    axis: Axis,
    position: f32,
    thickness: f32,
    inset: f32,
) -> Rect<f32> {
    let half = thickness / 2.0;
    match axis {
        Axis::Horizontal => Rect::new(
            bounds.x + position - half,
            bounds.y + inset,
            thickness,
            (bounds.height - inset * 2.0).max(0.0),
        ),
        Axis::Vertical => Rect::new(
            bounds.x + inset,
            bounds.y + position - half,
            (bounds.width - inset * 2.0).max(0.0),
            thickness,
        ),
    }
}
