#![allow(clippy::float_cmp)]

use super::*;
use crate::motion::binding::TweenKind;

fn button() -> Bounds {
    Bounds::new(100.0, 200.0, 120.0, 40.0)
}

#[test]
fn bounds_center() {
    assert_eq!(button().center(), Point::new(160.0, 220.0));
}

#[test]
fn magnetic_offset_is_thirty_percent_of_center_offset() {
    let offset = magnetic_offset(Point::new(200.0, 230.0), button());
    assert!((offset.x - 12.0).abs() < 1e-9);
    assert!((offset.y - 3.0).abs() < 1e-9);
}

#[test]
fn magnetic_offset_is_zero_at_center() {
    assert_eq!(magnetic_offset(button().center(), button()), Point::new(0.0, 0.0));
}

#[test]
fn magnetic_release_springs_home() {
    let tween = magnetic_release();
    assert_eq!(tween.ease, Ease::SPRING);
    assert_eq!(tween.duration_s, 0.5);
    assert_eq!(tween.props.keyframe(0).get("transform"), Some("translate(0px, 0px)"));
}

#[test]
fn tilt_is_offset_over_damping() {
    let card = Bounds::new(0.0, 0.0, 400.0, 300.0);
    let tilt = card_tilt(Point::new(300.0, 50.0), card);
    // y: (50 - 150) / 10, x: (200 - 300) / 10
    assert_eq!(tilt, Tilt { rotate_x: -10.0, rotate_y: -10.0 });
}

#[test]
fn tilt_is_flat_at_center() {
    let card = Bounds::new(40.0, 60.0, 400.0, 300.0);
    assert_eq!(card_tilt(card.center(), card), Tilt { rotate_x: 0.0, rotate_y: 0.0 });
}

#[test]
fn tilt_tween_carries_perspective() {
    let tween = tilt_toward(Point::new(0.0, 0.0), Bounds::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(
        tween.props.keyframe(0).get("transform"),
        Some("perspective(1000px) rotateX(-5deg) rotateY(5deg)")
    );
}

#[test]
fn hover_morph_and_revert() {
    let (outline, dot) = cursor_hover(true);
    assert_eq!(outline.props.scale, Some(1.5));
    assert_eq!(dot.props.scale, Some(0.0));

    let (outline, dot) = cursor_hover(false);
    assert_eq!(outline.props.scale, Some(1.0));
    assert_eq!(dot.props.scale, Some(1.0));
    assert_eq!(outline.props.keyframe(0).get("borderColor"), Some("var(--text-secondary)"));
}

#[test]
fn outline_trails_while_dot_snaps() {
    let p = Point::new(10.0, 20.0);
    assert_eq!(cursor_outline(p).duration_s, 0.3);
    assert_eq!(cursor_dot(p).keyframe(0).get("left"), Some("10px"));
}

#[test]
fn image_zoom_scales() {
    assert_eq!(image_zoom(true).props.scale, Some(1.1));
    assert_eq!(image_zoom(false).props.scale, Some(1.0));
}

// =============================================================
// Chrome
// =============================================================

#[test]
fn nav_slide_targets_placement_offset() {
    let hide = nav_slide(NavPlacement::Hidden);
    assert_eq!(hide.props.keyframe(0).get("transform"), Some("translate(0px, -100px)"));
    assert_eq!(hide.duration_s, 0.3);
    assert_eq!(hide.ease, Ease::Power2Out);
    assert_eq!(nav_slide(NavPlacement::Visible).props.keyframe(0).get("transform"), Some("translate(0px, 0px)"));
}

#[test]
fn theme_spin_pops_to_absolute_rotation() {
    let spin = theme_spin(720.0);
    assert_eq!(spin.props.keyframe(0).get("transform"), Some("rotate(720deg)"));
    assert_eq!(spin.ease, Ease::POP);
    assert_eq!(spin.duration_s, 0.6);
}

#[test]
fn status_tweens() {
    let pop = status_pop();
    assert_eq!(pop.kind, TweenKind::From);
    assert_eq!(pop.props.scale, Some(0.8));
    assert_eq!(status_fade(500).duration_s, 0.5);
    assert_eq!(status_fade(500).props.opacity, Some(0.0));
}
