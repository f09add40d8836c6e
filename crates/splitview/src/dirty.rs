//! Change flags returned by split mutators.

use bitflags::bitflags;

bitflags! {
    /// What a mutator changed, so the host can decide between a re-layout and
    /// a repaint.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SplitChanges: u8 {
        /// Nothing observable changed.
        const NONE       = 0b0000_0000;

        /// The constrained fraction moved.
        const FRACTION   = 0b0000_0001;

        /// The hidden side changed.
        const HIDDEN     = 0b0000_0010;

        /// The hide-preview flag flipped. Affects spacing and divider color.
        const PREVIEW    = 0b0000_0100;

        /// The fraction binding was written.
        const PUBLISHED  = 0b0000_1000;

        /// An eased transition is still running and needs another frame.
        const ANIMATING  = 0b0001_0000;
    }
}

impl SplitChanges {
    /// Returns true if pane rects must be recomputed.
    #[inline]
    pub fn needs_layout(&self) -> bool {
        self.intersects(Self::FRACTION | Self::HIDDEN | Self::PREVIEW | Self::ANIMATING)
    }

    /// Returns true if the caller's fraction binding was written.
    #[inline]
    pub fn published(&self) -> bool {
        self.contains(Self::PUBLISHED)
    }
}
