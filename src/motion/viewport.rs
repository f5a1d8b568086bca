//! Viewport geometry for scroll triggers.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use super::binding::ScrollEdge;

/// Scrub tracks closer than this to their target snap onto it.
const SETTLE_EPSILON: f64 = 1e-3;

/// Progress in `[0, 1]` of an element between two scroll edges.
///
/// `rect_top` is the element's top relative to the viewport (as reported by
/// `getBoundingClientRect`). Progress is 0 until the element's `start` line
/// reaches the viewport's `start` line and 1 once the `end` lines meet.
#[must_use]
pub fn scrub_progress(
    rect_top: f64,
    rect_height: f64,
    viewport_height: f64,
    start: ScrollEdge,
    end: ScrollEdge,
) -> f64 {
    let travelled = start.viewport * viewport_height - start.element * rect_height - rect_top;
    let distance = (end.element - start.element) * rect_height - (end.viewport - start.viewport) * viewport_height;
    if !distance.is_finite() || distance <= 0.0 {
        return if travelled >= 0.0 { 1.0 } else { 0.0 };
    }
    let progress = travelled / distance;
    if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) }
}

/// Whether an element's top edge has reached `line` (fraction of the
/// viewport height from the top).
#[must_use]
pub fn has_crossed(rect_top: f64, viewport_height: f64, line: f64) -> bool {
    rect_top <= line * viewport_height
}

/// `IntersectionObserver` root margin that fires when an element's top edge
/// passes `line`.
#[must_use]
pub fn enter_root_margin(line: f64) -> String {
    let shrink = ((1.0 - line.clamp(0.0, 1.0)) * 100.0).round();
    if shrink == 0.0 {
        return "0px 0px 0px 0px".to_owned();
    }
    format!("0px 0px -{shrink}% 0px")
}

/// Smoothed scrub progress that trails its target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrubTrack {
    current: f64,
    target: f64,
}

impl ScrubTrack {
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self { current: progress, target: progress }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 1.0);
    }

    /// Move toward the target after `dt_s` seconds. A lag of zero jumps
    /// straight there; otherwise the gap closes exponentially with time
    /// constant `lag_s / 4` so it is ~98% closed after `lag_s`.
    pub fn advance(&mut self, dt_s: f64, lag_s: f64) -> f64 {
        if lag_s <= 0.0 || dt_s.is_nan() {
            self.current = self.target;
            return self.current;
        }
        let alpha = 1.0 - (-4.0 * dt_s.max(0.0) / lag_s).exp();
        self.current += (self.target - self.current) * alpha;
        if self.is_settled() {
            self.current = self.target;
        }
        self.current
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.target - self.current).abs() < SETTLE_EPSILON
    }
}
