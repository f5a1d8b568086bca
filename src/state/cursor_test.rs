use super::*;

#[test]
fn moves_between_frames_are_coalesced() {
    let mut tracker = PointerTracker::new();
    assert!(tracker.moved(Point::new(1.0, 1.0)));
    assert!(!tracker.moved(Point::new(2.0, 2.0)));
    assert!(!tracker.moved(Point::new(3.0, 4.0)));
    assert_eq!(tracker.frame(), Some(Point::new(3.0, 4.0)));
    assert!(tracker.moved(Point::new(5.0, 5.0)));
}

#[test]
fn frame_without_move_reports_nothing() {
    let mut tracker = PointerTracker::new();
    tracker.moved(Point::new(10.0, 20.0));
    assert_eq!(tracker.frame(), Some(Point::new(10.0, 20.0)));
    assert_eq!(tracker.frame(), None);
}

#[test]
fn refused_frame_lets_next_move_retry() {
    let mut tracker = PointerTracker::new();
    assert!(tracker.moved(Point::new(1.0, 1.0)));
    tracker.frame_failed();
    assert!(tracker.moved(Point::new(2.0, 2.0)));
}

#[test]
fn hover_reports_only_transitions() {
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.hover(false), None);
    assert_eq!(tracker.hover(true), Some(true));
    assert_eq!(tracker.hover(true), None);
    assert_eq!(tracker.hover(false), Some(false));
    assert_eq!(tracker.hover(false), None);
}
