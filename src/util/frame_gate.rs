//! Per-frame coalescing of high-frequency browser events.
//!
//! Scroll and pointer handlers record their latest sample and ask the gate
//! whether a frame callback must be scheduled. Only the first request between
//! two frames gets a `true`; everything after rides along with the pending
//! callback, which then consumes the newest sample.

#[cfg(test)]
#[path = "frame_gate_test.rs"]
mod frame_gate_test;

/// Latest-sample mailbox with at most one pending frame.
#[derive(Clone, Debug)]
pub struct FrameGate<T> {
    pending: bool,
    latest: Option<T>,
}

impl<T> Default for FrameGate<T> {
    fn default() -> Self {
        Self { pending: false, latest: None }
    }
}

impl<T> FrameGate<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample. Returns `true` when the caller must schedule a frame.
    pub fn push(&mut self, sample: T) -> bool {
        self.latest = Some(sample);
        self.request()
    }

    /// Ask for a frame without a new sample, e.g. to keep an animation
    /// running. Returns `true` when the caller must schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback: clears the pending flag and hands back
    /// the newest sample, if any arrived since the last frame.
    pub fn take(&mut self) -> Option<T> {
        self.pending = false;
        self.latest.take()
    }

    /// Abandon a frame that could not be scheduled so the next event retries.
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}
