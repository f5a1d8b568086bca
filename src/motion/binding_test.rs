#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Scalar
// =============================================================

#[test]
fn fixed_scalar_ignores_ordinal() {
    assert_eq!(Scalar::Fixed(3.0).at(0), 3.0);
    assert_eq!(Scalar::Fixed(3.0).at(7), 3.0);
}

#[test]
fn stagger_scalar_grows_linearly() {
    let s = Scalar::Stagger { base: -3.0, step: 3.0 };
    assert_eq!(s.at(0), -3.0);
    assert_eq!(s.at(1), 0.0);
    assert_eq!(s.at(2), 3.0);
}

#[test]
fn alternate_scalar_flips_sign_by_parity() {
    let s = Scalar::Alternate { even: 5.0, odd: -5.0 };
    assert_eq!(s.at(0), 5.0);
    assert_eq!(s.at(1), -5.0);
    assert_eq!(s.at(4), 5.0);
}

// =============================================================
// Props -> Keyframe
// =============================================================

#[test]
fn keyframe_composes_transform_in_fixed_order() {
    let frame = Props::new().y(30.0).scale(0.5).rotation(180.0).opacity(0.0).keyframe(0);
    assert_eq!(frame.get("opacity"), Some("0"));
    assert_eq!(frame.get("transform"), Some("translate(0px, 30px) rotate(180deg) scale(0.5)"));
}

#[test]
fn keyframe_resolves_per_ordinal_values() {
    let props = Props::new().rotation(Scalar::Alternate { even: 5.0, odd: -5.0 });
    assert_eq!(props.keyframe(1).get("transform"), Some("rotate(-5deg)"));
}

#[test]
fn keyframe_tilt_includes_perspective_first() {
    let frame = Props::new().tilt(2.5, -4.0).perspective(1000.0).keyframe(0);
    assert_eq!(frame.get("transform"), Some("perspective(1000px) rotateX(2.5deg) rotateY(-4deg)"));
}

#[test]
fn keyframe_position_and_raw_css() {
    let frame = Props::new().position(12.0, 34.5).css("borderColor", "transparent").keyframe(0);
    assert_eq!(frame.get("left"), Some("12px"));
    assert_eq!(frame.get("top"), Some("34.5px"));
    assert_eq!(frame.get("borderColor"), Some("transparent"));
    assert_eq!(frame.get("transform"), None);
}

#[test]
fn empty_props_make_empty_keyframe() {
    assert!(Props::new().keyframe(0).is_empty());
}

// =============================================================
// Tween
// =============================================================

#[test]
fn stagger_keeps_existing_delay_as_base() {
    let tween = Tween::from(Props::new().opacity(0.0), 1.0).delay(0.5).stagger(0.2);
    assert_eq!(tween.delay_s, Scalar::Stagger { base: 0.5, step: 0.2 });
    assert_eq!(tween.span_s(3), 0.5 + 0.6 + 1.0);
}

#[test]
fn tween_defaults() {
    let tween = Tween::to(Props::new().y(0.0), 0.3);
    assert_eq!(tween.kind, TweenKind::To);
    assert_eq!(tween.repeat, Repeat::Once);
    assert_eq!(tween.composite, Composite::Replace);
    assert_eq!(tween.ease, Ease::Power1Out);
}

// =============================================================
// validate
// =============================================================

fn fade() -> Tween {
    Tween::from(Props::new().opacity(0.0), 1.0)
}

#[test]
fn valid_document_binding_passes() {
    let binding = AnimationBinding::tween(
        "footer",
        Scope::Document,
        Trigger::Enter { anchor: Target::Selector("footer"), line: 0.95 },
        Target::Selector("footer"),
        fade(),
    );
    assert_eq!(binding.validate(), Ok(()));
}

#[test]
fn scope_target_requires_each_scope() {
    let binding = AnimationBinding::tween("bad", Scope::Document, Trigger::Load, Target::Scope, fade());
    assert!(matches!(binding.validate(), Err(MotionError::Invalid(_))));

    let ok = AnimationBinding::tween("ok", Scope::Each(".card"), Trigger::Load, Target::Scope, fade());
    assert_eq!(ok.validate(), Ok(()));
}

#[test]
fn empty_timeline_is_invalid() {
    let binding = AnimationBinding {
        name: "empty",
        scope: Scope::Document,
        trigger: Trigger::Load,
        effect: Effect::Timeline(Vec::new()),
    };
    assert!(binding.validate().is_err());
}

#[test]
fn enter_line_must_be_inside_viewport() {
    let binding = AnimationBinding::tween(
        "late",
        Scope::Document,
        Trigger::Enter { anchor: Target::Selector("footer"), line: 1.5 },
        Target::Selector("footer"),
        fade(),
    );
    assert!(binding.validate().is_err());
}

#[test]
fn scrubbed_counter_is_invalid() {
    let binding = AnimationBinding {
        name: "counter",
        scope: Scope::Each(".stat-number"),
        trigger: Trigger::Scrub {
            anchor: Target::Scope,
            start: ScrollEdge::TOP_BOTTOM,
            end: ScrollEdge::BOTTOM_TOP,
            lag_s: 1.0,
        },
        effect: Effect::Counter { target: Target::Scope, duration_s: 2.0, ease: Ease::Power1Out },
    };
    assert!(binding.validate().is_err());
}

#[test]
fn invalid_message_names_binding() {
    let binding = AnimationBinding::tween("hero", Scope::Document, Trigger::Load, Target::Scope, fade());
    let Err(err) = binding.validate() else {
        panic!("expected invalid binding");
    };
    assert!(err.to_string().contains("hero"));
}
