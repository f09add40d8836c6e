//! Nested splits driven by a scripted drag.
//!
//! A horizontal split whose secondary pane holds a vertical split. The outer
//! divider is dragged far enough to hide the sidebar, then the sidebar is
//! shown again through its binding.
//!
//! Run with `RUST_LOG=trace` to see every drag sample.

use splitview::{
    DragSample, FractionBinding, HiddenBinding, Side, SplitConstraints, SplitLayout, SplitStyle,
    SplitView,
};
use splitview_core::geometry::{Rect, Size};
use splitview_core::math::Vec2;

fn print_layout(name: &str, layout: &SplitLayout) {
    tracing::info!(
        "{name}: primary {:.1}px, secondary {:.1}px, spacing {:.1}, divider interactive: {}",
        layout.primary_length,
        layout.secondary_length,
        layout.spacing,
        layout.divider.interactive,
    );
}

fn main() {
    splitview_core::logging::init();

    let window = Size::new(1200.0, 800.0);
    // Each split gets its own style so the sidebar's hide preview does not
    // collapse the inner divider.
    let style = SplitStyle::new().visible_thickness(2.0);

    let sidebar_fraction = FractionBinding::new(0.25);
    let sidebar_hidden = HiddenBinding::default();
    let mut outer = SplitView::horizontal()
        .with_fraction(sidebar_fraction.clone())
        .with_hidden(sidebar_hidden.clone())
        .with_style(style.clone())
        .with_constraints(
            SplitConstraints::new()
                .min_primary(0.15)
                .priority(Side::Primary)
                .drag_to_hide(Side::Primary),
        )
        .on_drag(|fraction| tracing::debug!(fraction, "sidebar drag"));

    let mut inner = SplitView::vertical()
        .with_fraction(FractionBinding::new(0.7))
        .with_style(style)
        .with_constraints(SplitConstraints::new().min_secondary(0.1).priority(Side::Secondary));

    outer.resized(window);
    let layout = outer.layout(Rect::from_size(window));
    inner.resized(layout.secondary.size());
    print_layout("outer", &layout);
    print_layout("inner", &inner.layout(layout.secondary));

    // Drag the sidebar divider from 300px towards the left edge.
    let start = layout.divider.position;
    for step in 1..=10 {
        let dx = -(step as f32) * 25.0;
        let sample = DragSample::new(Vec2::new(start + dx, 400.0), Vec2::new(dx, 0.0));
        let changes = outer.drag_changed(sample, window);
        if changes.needs_layout() {
            print_layout("outer (dragging)", &outer.layout(Rect::from_size(window)));
        }
    }
    outer.drag_ended();
    tracing::info!(
        hidden = ?sidebar_hidden.get(),
        fraction = sidebar_fraction.get(),
        "drag committed"
    );

    // The window grows; the inner split keeps its bottom pane height.
    let window = Size::new(1400.0, 1000.0);
    outer.resized(window);
    let layout = outer.layout(Rect::from_size(window));
    inner.resized(layout.secondary.size());
    print_layout("outer (resized)", &layout);
    print_layout("inner (resized)", &inner.layout(layout.secondary));

    sidebar_hidden.show();
    print_layout("outer (shown)", &outer.layout(Rect::from_size(window)));
}
