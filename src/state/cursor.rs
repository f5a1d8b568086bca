//! Pointer tracker behind the two cursor followers.
//!
//! Pointer moves are coalesced through a [`FrameGate`] so followers are
//! repositioned at most once per frame. Hover is tracked from the element
//! currently under the pointer, so nested targets (a button inside a project
//! card) never leave the followers stuck in the wrong style.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::util::effects::Point;
use crate::util::frame_gate::FrameGate;

#[derive(Debug, Default)]
pub struct PointerTracker {
    gate: FrameGate<Point>,
    hovering: bool,
}

impl PointerTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move. Returns `true` when a frame must be scheduled.
    pub fn moved(&mut self, pointer: Point) -> bool {
        self.gate.push(pointer)
    }

    /// Frame callback: the newest position since the previous frame.
    pub fn frame(&mut self) -> Option<Point> {
        self.gate.take()
    }

    /// Forget a frame request the browser refused.
    pub fn frame_failed(&mut self) {
        self.gate.cancel();
    }

    /// The element under the pointer changed. Returns the new hover state
    /// when it differs from the previous one.
    pub fn hover(&mut self, over_target: bool) -> Option<bool> {
        if self.hovering == over_target {
            return None;
        }
        self.hovering = over_target;
        Some(over_target)
    }
}
