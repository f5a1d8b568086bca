#![allow(clippy::float_cmp)]

use super::*;

const VH: f64 = 1000.0;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// "top bottom" -> "bottom top": whole passage of the element through the view.
fn passage(rect_top: f64, height: f64) -> f64 {
    scrub_progress(rect_top, height, VH, ScrollEdge::TOP_BOTTOM, ScrollEdge::BOTTOM_TOP)
}

#[test]
fn passage_starts_when_top_meets_viewport_bottom() {
    assert_eq!(passage(1200.0, 400.0), 0.0);
    assert_eq!(passage(1000.0, 400.0), 0.0);
}

#[test]
fn passage_ends_when_bottom_meets_viewport_top() {
    assert_eq!(passage(-400.0, 400.0), 1.0);
    assert_eq!(passage(-900.0, 400.0), 1.0);
}

#[test]
fn passage_midpoint() {
    // Travel distance is 1400; halfway the top sits at 1000 - 700.
    assert!(approx(passage(300.0, 400.0), 0.5));
}

#[test]
fn top_top_to_bottom_top_tracks_hero_scroll_out() {
    let p = scrub_progress(-250.0, 1000.0, VH, ScrollEdge::TOP_TOP, ScrollEdge::BOTTOM_TOP);
    assert!(approx(p, 0.25));
}

#[test]
fn degenerate_range_is_a_step() {
    let zero = ScrollEdge::TOP_TOP;
    assert_eq!(scrub_progress(10.0, 0.0, VH, zero, zero), 0.0);
    assert_eq!(scrub_progress(-10.0, 0.0, VH, zero, zero), 1.0);
}

#[test]
fn crossing_line() {
    assert!(!has_crossed(900.0, VH, 0.85));
    assert!(has_crossed(850.0, VH, 0.85));
    assert!(has_crossed(-50.0, VH, 0.85));
}

#[test]
fn root_margin_shrinks_viewport_bottom() {
    assert_eq!(enter_root_margin(0.85), "0px 0px -15% 0px");
    assert_eq!(enter_root_margin(0.9), "0px 0px -10% 0px");
    assert_eq!(enter_root_margin(1.0), "0px 0px 0px 0px");
}

// =============================================================
// ScrubTrack
// =============================================================

#[test]
fn zero_lag_jumps() {
    let mut track = ScrubTrack::new(0.0);
    track.set_target(0.7);
    assert_eq!(track.advance(0.016, 0.0), 0.7);
}

#[test]
fn lag_trails_then_settles() {
    let mut track = ScrubTrack::new(0.0);
    track.set_target(1.0);
    let first = track.advance(0.016, 1.0);
    assert!(first > 0.0 && first < 0.2);
    assert!(!track.is_settled());

    let last = (0..120).map(|_| track.advance(0.016, 1.0)).last();
    assert!(track.is_settled());
    assert_eq!(last, Some(1.0));
}

#[test]
fn target_is_clamped() {
    let mut track = ScrubTrack::new(0.0);
    track.set_target(3.0);
    assert_eq!(track.advance(1.0, 0.0), 1.0);
}
