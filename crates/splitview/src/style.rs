//! Divider styling shared between a split container and its divider.
//!
//! The container writes `preview_hide` while a drag is in progress; the
//! divider reads it to decide whether to draw its visible line. Both hold the
//! same [`StyleHandle`], and nested splits may share one handle as well.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use splitview_core::Color;

/// Default inset of the visible divider line from each end, in pixels.
pub const DEFAULT_INSET: f32 = 8.0;

/// Default thickness of the visible divider line, in pixels.
pub const DEFAULT_VISIBLE_THICKNESS: f32 = 4.0;

/// Default thickness of the divider's hit-test area, in pixels.
pub const DEFAULT_INVISIBLE_THICKNESS: f32 = 30.0;

/// Default divider color.
pub fn default_divider_color() -> Color {
    Color::GRAY
}

/// Divider appearance and the transient hide-preview flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitStyle {
    /// Color of the visible divider line.
    pub color: Color,
    /// Inset of the visible line from both ends, across the split axis.
    pub inset: f32,
    /// Thickness of the visible line. This is also the spacing reserved
    /// between the panes.
    pub visible_thickness: f32,
    /// Thickness of the grabbable area. Never smaller than `visible_thickness`.
    pub invisible_thickness: f32,
    /// Remove the divider entirely while a side is hidden.
    pub hide_splitter: bool,
    /// Set while a drag is about to hide a side.
    pub preview_hide: bool,
}

impl Default for SplitStyle {
    fn default() -> Self {
        Self {
            color: default_divider_color(),
            inset: DEFAULT_INSET,
            visible_thickness: DEFAULT_VISIBLE_THICKNESS,
            invisible_thickness: DEFAULT_INVISIBLE_THICKNESS,
            hide_splitter: false,
            preview_hide: false,
        }
    }
}

impl SplitStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the divider color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the inset of the visible line.
    pub fn inset(mut self, inset: f32) -> Self {
        self.inset = inset.max(0.0);
        self
    }

    /// Set the visible thickness, growing the hit area if needed.
    pub fn visible_thickness(mut self, thickness: f32) -> Self {
        self.visible_thickness = thickness.max(0.0);
        self.invisible_thickness = self.invisible_thickness.max(self.visible_thickness);
        self
    }

    /// Set the hit-test thickness. Clamped to at least the visible thickness.
    pub fn invisible_thickness(mut self, thickness: f32) -> Self {
        self.invisible_thickness = thickness.max(self.visible_thickness);
        self
    }

    /// Remove the divider while a side is hidden.
    pub fn hide_splitter(mut self, hide: bool) -> Self {
        self.hide_splitter = hide;
        self
    }

    /// Color the visible line should be drawn with right now.
    ///
    /// `None` while a hide preview is active.
    pub fn current_color(&self) -> Option<Color> {
        (!self.preview_hide).then_some(self.color)
    }
}

/// Shared, single-threaded handle to a [`SplitStyle`].
///
/// Cloning the handle shares the underlying style, including the transient
/// `preview_hide` flag. While any split sharing the handle previews a hide,
/// every split on it lays out with zero spacing and no divider color. Give
/// nested splits their own handle unless they should collapse together.
#[derive(Debug, Clone, Default)]
pub struct StyleHandle(Rc<RefCell<SplitStyle>>);

impl StyleHandle {
    pub fn new(style: SplitStyle) -> Self {
        Self(Rc::new(RefCell::new(style)))
    }

    /// Borrow the current style.
    pub fn get(&self) -> Ref<'_, SplitStyle> {
        self.0.borrow()
    }

    /// Copy of the current style.
    pub fn snapshot(&self) -> SplitStyle {
        self.0.borrow().clone()
    }

    /// Mutate the style in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut SplitStyle) -> R) -> R {
        let mut style = self.0.borrow_mut();
        let result = f(&mut style);
        debug_assert!(style.invisible_thickness >= style.visible_thickness);
        result
    }

    /// Replace the configured fields, keeping the transient preview flag.
    pub fn reset(&self, style: SplitStyle) {
        self.update(|current| {
            let preview_hide = current.preview_hide;
            *current = SplitStyle { preview_hide, ..style };
        });
    }

    /// Set the hide-preview flag. Returns `true` if it changed.
    pub fn set_preview_hide(&self, preview: bool) -> bool {
        self.update(|style| std::mem::replace(&mut style.preview_hide, preview) != preview)
    }

    pub fn preview_hide(&self) -> bool {
        self.0.borrow().preview_hide
    }

    pub fn hide_splitter(&self) -> bool {
        self.0.borrow().hide_splitter
    }

    pub fn visible_thickness(&self) -> f32 {
        self.0.borrow().visible_thickness
    }

    /// Whether two handles point at the same style.
    pub fn ptr_eq(&self, other: &StyleHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<SplitStyle> for StyleHandle {
    fn from(style: SplitStyle) -> Self {
        Self::new(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = SplitStyle::default();
        assert_eq!(style.visible_thickness, 4.0);
        assert_eq!(style.invisible_thickness, 30.0);
        assert_eq!(style.inset, 8.0);
        assert!(!style.hide_splitter);
        assert_eq!(style.current_color(), Some(Color::GRAY));
    }

    #[test]
    fn test_invisible_never_below_visible() {
        let style = SplitStyle::new().invisible_thickness(2.0);
        assert_eq!(style.invisible_thickness, 4.0);

        let style = SplitStyle::new().visible_thickness(40.0);
        assert_eq!(style.invisible_thickness, 40.0);
    }

    #[test]
    fn test_shared_handle_sees_preview() {
        let a = StyleHandle::default();
        let b = a.clone();
        assert!(a.set_preview_hide(true));
        assert!(!a.set_preview_hide(true));
        assert!(b.preview_hide());
        assert_eq!(b.get().current_color(), None);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_reset_keeps_preview_flag() {
        let handle = StyleHandle::default();
        handle.set_preview_hide(true);
        handle.reset(SplitStyle::new().visible_thickness(1.0).hide_splitter(true));
        let style = handle.snapshot();
        assert!(style.preview_hide);
        assert!(style.hide_splitter);
        assert_eq!(style.visible_thickness, 1.0);
    }
}
