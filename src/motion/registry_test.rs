#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use super::*;
use crate::motion::binding::{Composite, Repeat, TweenKind};
use crate::motion::mod_test::RecordingEngine;
use crate::motion::{register_all, timeline};

fn find(name: &str) -> AnimationBinding {
    page_bindings()
        .into_iter()
        .find(|b| b.name == name)
        .unwrap_or_else(|| panic!("missing binding {name}"))
}

fn steps(binding: &AnimationBinding) -> &[Step] {
    match &binding.effect {
        Effect::Timeline(steps) => steps,
        Effect::Counter { .. } => panic!("{} is a counter", binding.name),
    }
}

#[test]
fn every_binding_is_valid() {
    for binding in page_bindings() {
        assert_eq!(binding.validate(), Ok(()), "{}", binding.name);
    }
}

#[test]
fn binding_names_are_unique() {
    let bindings = page_bindings();
    let names: HashSet<_> = bindings.iter().map(|b| b.name).collect();
    assert_eq!(names.len(), bindings.len());
}

#[test]
fn whole_set_registers_cleanly() {
    let mut engine = RecordingEngine::default();
    let report = register_all(&mut engine, &page_bindings());
    assert!(report.is_clean(), "{:?}", report.failed);
    assert_eq!(engine.registered.len(), page_bindings().len());
}

#[test]
fn hero_intro_plays_on_load_with_overlaps() {
    let hero = find("hero-intro");
    assert_eq!(hero.trigger, Trigger::Load);
    let steps = steps(&hero);
    assert_eq!(steps.len(), 6);

    // Two hero titles, three CTA buttons.
    let placements = timeline::layout(steps, &[1, 2, 1, 1, 3, 1]);
    assert!((placements[1].start_s - 0.4).abs() < 1e-9);
    assert!(placements.iter().all(|p| p.start_s >= 0.0));
}

#[test]
fn entrance_bindings_are_one_shot_from_tweens() {
    for name in ["section-header", "about-text", "stat-item", "project-card", "testimonial-card", "footer"] {
        let binding = find(name);
        assert!(matches!(binding.trigger, Trigger::Enter { .. }), "{name}");
        for step in steps(&binding) {
            assert_eq!(step.tween.kind, TweenKind::From, "{name}");
            assert_eq!(step.tween.repeat, Repeat::Once, "{name}");
        }
    }
}

#[test]
fn parallax_bindings_scrub_additively() {
    for name in ["hero-parallax", "project-card-parallax", "section-parallax"] {
        let binding = find(name);
        assert!(matches!(binding.trigger, Trigger::Scrub { lag_s, .. } if lag_s == 1.0), "{name}");
        assert_eq!(steps(&binding)[0].tween.composite, Composite::Add, "{name}");
    }
}

#[test]
fn floating_shape_loops_forever_with_yoyo() {
    let binding = find("floating-shape");
    let tween = &steps(&binding)[0].tween;
    assert_eq!(tween.repeat, Repeat::Forever { yoyo: true });
    assert_eq!(tween.ease, Ease::SineInOut);
}

#[test]
fn stat_counters_run_two_seconds() {
    let binding = find("stat-counter");
    assert_eq!(binding.scope, Scope::Each(".stat-number"));
    assert_eq!(
        binding.effect,
        Effect::Counter { target: Target::Scope, duration_s: 2.0, ease: Ease::Power1Out }
    );
}

#[test]
fn project_cards_alternate_tilt() {
    let binding = find("project-card");
    let frame0 = steps(&binding)[0].tween.props.keyframe(0);
    let frame1 = steps(&binding)[0].tween.props.keyframe(1);
    assert_eq!(frame0.get("transform"), Some("translate(0px, 80px) rotate(5deg)"));
    assert_eq!(frame1.get("transform"), Some("translate(0px, 80px) rotate(-5deg)"));
}

#[test]
fn testimonials_fan_out_around_middle_card() {
    let binding = find("testimonial-card");
    let tween = &steps(&binding)[0].tween;
    let rotations: Vec<_> = (0..3)
        .map(|i| tween.props.rotation.map(|r| r.at(i)))
        .collect();
    assert_eq!(rotations, vec![Some(-3.0), Some(0.0), Some(3.0)]);
    assert!((tween.delay_s.at(2) - 0.3).abs() < 1e-9);
}

// `prefers-reduced-motion` is read and logged at startup but never consulted:
// the full set, loops included, is armed either way. Pin that down so a change
// in behavior is a deliberate one.
#[test]
fn reduced_motion_does_not_thin_the_set() {
    let bindings = page_bindings();
    assert_eq!(bindings.len(), 19);
    assert!(bindings.iter().any(|b| b.name == "floating-shape"));
    assert!(bindings.iter().filter(|b| matches!(b.trigger, Trigger::Scrub { .. })).count() >= 3);
    assert_eq!(crate::util::dom::REDUCED_MOTION_QUERY, "(prefers-reduced-motion: reduce)");
}
