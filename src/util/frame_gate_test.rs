use super::*;

#[test]
fn first_push_requests_a_frame() {
    let mut gate = FrameGate::new();
    assert!(gate.push(1));
    assert!(!gate.request());
}

#[test]
fn pushes_while_pending_do_not_request_more_frames() {
    let mut gate = FrameGate::new();
    let scheduled = (0..50).filter(|i| gate.push(*i)).count();
    assert_eq!(scheduled, 1);
    assert_eq!(gate.take(), Some(49));
}

#[test]
fn take_returns_newest_sample_and_rearms() {
    let mut gate = FrameGate::new();
    gate.push(10);
    gate.push(20);
    gate.push(30);
    assert_eq!(gate.take(), Some(30));
    assert!(gate.push(40));
}

#[test]
fn take_without_sample_is_none() {
    let mut gate: FrameGate<u32> = FrameGate::new();
    assert_eq!(gate.take(), None);
}

#[test]
fn cancel_lets_next_push_reschedule() {
    let mut gate = FrameGate::new();
    assert!(gate.push(1));
    gate.cancel();
    assert!(gate.push(2));
}

#[test]
fn request_without_sample_shares_the_pending_frame() {
    let mut gate: FrameGate<u32> = FrameGate::new();
    assert!(gate.request());
    assert!(!gate.request());
    assert!(!gate.push(7));
    assert_eq!(gate.take(), Some(7));
    assert!(gate.request());
    assert_eq!(gate.take(), None);
}
