//! Timeline layout: turns step positions into absolute start times.
//!
//! A step placed in `Sequence` starts when the timeline so far has finished;
//! `Overlap(s)` pulls it `s` seconds earlier (never before zero). A step
//! finishes when its last (most delayed) target finishes, so staggers push
//! later steps back. Infinite repeats count one cycle.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use super::binding::{Position, Step, Target};

/// Absolute placement of one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub start_s: f64,
    pub end_s: f64,
}

/// Place every step. `counts[i]` is the number of elements step `i` matched;
/// missing entries count as one.
#[must_use]
pub fn layout(steps: &[Step], counts: &[usize]) -> Vec<Placement> {
    let mut cursor: f64 = 0.0;
    let mut placements = Vec::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        let start_s = match step.position {
            Position::Sequence => cursor,
            Position::Overlap(secs) => (cursor - secs).max(0.0),
        };
        let count = counts.get(i).copied().unwrap_or(1).max(1);
        let span = (0..count).map(|ordinal| step.tween.span_s(ordinal)).fold(0.0, f64::max);
        let end_s = start_s + span;
        cursor = cursor.max(end_s);
        placements.push(Placement { start_s, end_s });
    }
    placements
}

/// Per-step counts for [`layout`]. `matched[i]` is how many elements step `i`
/// resolved to. A scope step plays with the delay of scope instance
/// `scope_index`, so it is counted as `scope_index + 1` targets.
#[must_use]
pub fn step_counts(steps: &[Step], matched: &[usize], scope_index: usize) -> Vec<usize> {
    steps
        .iter()
        .zip(matched)
        .map(|(step, &count)| if step.target == Target::Scope { scope_index + 1 } else { count })
        .collect()
}

/// Total length of a laid-out timeline.
#[must_use]
pub fn total_s(placements: &[Placement]) -> f64 {
    placements.iter().map(|p| p.end_s).fold(0.0, f64::max)
}
