//! Scroll-driven presentation state: navbar style, navbar visibility, and the
//! reading-progress indicator.
//!
//! DESIGN
//! ======
//! One owned `ScrollState` is fed coalesced samples (at most one per
//! animation frame). `observe` is pure; the caller applies the returned
//! `ScrollUpdate` to the DOM and only issues navbar tweens on transitions.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{ANCHOR_SCROLL_OFFSET_PX, NAV_HIDDEN_OFFSET_PX, NAV_HIDE_THRESHOLD_PX, NAV_SCROLLED_THRESHOLD_PX};

/// One reading of the window's scroll geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    #[must_use]
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self { offset, document_height, viewport_height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Where the navbar should sit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPlacement {
    #[default]
    Visible,
    Hidden,
}

impl NavPlacement {
    /// Vertical translation for this placement.
    #[must_use]
    pub fn offset_y(self) -> f64 {
        match self {
            Self::Visible => 0.0,
            Self::Hidden => NAV_HIDDEN_OFFSET_PX,
        }
    }
}

/// Transient scroll state. Lives for the page's lifetime only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub direction: ScrollDirection,
    /// Reading progress in percent, always within `[0, 100]`.
    pub percent_end: f64,
    pub scrolled: bool,
    pub nav: NavPlacement,
}

/// What changed as a result of one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub direction: ScrollDirection,
    pub scrolled: bool,
    pub scrolled_changed: bool,
    /// Set only when the navbar must move.
    pub nav_transition: Option<NavPlacement>,
    pub percent_end: f64,
}

impl ScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the state.
    pub fn observe(&mut self, sample: ScrollSample) -> ScrollUpdate {
        let offset = sanitize_offset(sample.offset);
        let direction = if offset > self.offset {
            ScrollDirection::Down
        } else if offset < self.offset {
            ScrollDirection::Up
        } else {
            ScrollDirection::None
        };

        let scrolled = offset > NAV_SCROLLED_THRESHOLD_PX;
        let scrolled_changed = scrolled != self.scrolled;

        let nav = if direction == ScrollDirection::Down && offset > NAV_HIDE_THRESHOLD_PX {
            NavPlacement::Hidden
        } else {
            NavPlacement::Visible
        };
        let nav_transition = (nav != self.nav).then_some(nav);

        let percent_end = progress_percent(offset, sample.document_height, sample.viewport_height);

        self.offset = offset;
        self.direction = direction;
        self.scrolled = scrolled;
        self.nav = nav;
        self.percent_end = percent_end;

        ScrollUpdate { direction, scrolled, scrolled_changed, nav_transition, percent_end }
    }
}

/// Reading progress for `offset` within a document, clamped to `[0, 100]`.
///
/// A document no taller than the viewport has nothing to scroll through and
/// reports 0.
#[must_use]
pub fn progress_percent(offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }
    let percent = offset / scrollable * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Window offset that leaves an anchor target just below the fixed navbar.
///
/// `rect_top` is the target's current top relative to the viewport.
#[must_use]
pub fn anchor_scroll_top(current_offset: f64, rect_top: f64) -> f64 {
    sanitize_offset(current_offset + rect_top - ANCHOR_SCROLL_OFFSET_PX)
}

fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() { offset.max(0.0) } else { 0.0 }
}
