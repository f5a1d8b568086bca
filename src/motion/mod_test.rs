use super::binding::{Props, Scope, Target, Trigger, Tween};
use super::*;

/// Engine double that records calls and fails on chosen binding names.
#[derive(Default)]
pub(crate) struct RecordingEngine {
    pub registered: Vec<&'static str>,
    pub fail_on: Vec<&'static str>,
    pub throw_on: Vec<&'static str>,
}

impl MotionEngine for RecordingEngine {
    fn register(&mut self, binding: &AnimationBinding) -> Result<(), MotionError> {
        if self.fail_on.contains(&binding.name) {
            return Err(MotionError::NoTargets(binding.name.to_owned()));
        }
        if self.throw_on.contains(&binding.name) {
            return Err(MotionError::Dom("TypeError: invalid easing".to_owned()));
        }
        self.registered.push(binding.name);
        Ok(())
    }
}

fn binding(name: &'static str) -> AnimationBinding {
    AnimationBinding::tween(
        name,
        Scope::Document,
        Trigger::Load,
        Target::Selector("footer"),
        Tween::from(Props::new().opacity(0.0), 1.0),
    )
}

#[test]
fn registers_every_binding_in_order() {
    let mut engine = RecordingEngine::default();
    let report = register_all(&mut engine, &[binding("a"), binding("b"), binding("c")]);
    assert!(report.is_clean());
    assert_eq!(report.registered, vec!["a", "b", "c"]);
    assert_eq!(engine.registered, vec!["a", "b", "c"]);
}

#[test]
fn one_failing_binding_does_not_stop_the_rest() {
    let mut engine = RecordingEngine { fail_on: vec!["b"], ..RecordingEngine::default() };
    let report = register_all(&mut engine, &[binding("a"), binding("b"), binding("c")]);
    assert_eq!(report.registered, vec!["a", "c"]);
    assert_eq!(report.failed, vec![("b", MotionError::NoTargets("b".to_owned()))]);
}

#[test]
fn browser_exception_in_one_binding_does_not_stop_the_rest() {
    let mut engine = RecordingEngine { throw_on: vec!["b"], ..RecordingEngine::default() };
    let report = register_all(&mut engine, &[binding("a"), binding("b"), binding("c")]);
    assert_eq!(engine.registered, vec!["a", "c"]);
    assert_eq!(
        report.failed,
        vec![("b", MotionError::Dom("TypeError: invalid easing".to_owned()))]
    );
}

#[test]
fn invalid_bindings_never_reach_the_engine() {
    let mut engine = RecordingEngine::default();
    let bad = AnimationBinding::tween(
        "bad",
        Scope::Document,
        Trigger::Load,
        Target::Scope,
        Tween::from(Props::new().opacity(0.0), 1.0),
    );
    let report = register_all(&mut engine, &[bad, binding("good")]);
    assert_eq!(engine.registered, vec!["good"]);
    assert!(matches!(report.failed[0].1, MotionError::Invalid(_)));
}

#[test]
fn error_messages() {
    assert_eq!(MotionError::NoTargets(".x".to_owned()).to_string(), "no elements match .x");
    assert_eq!(MotionError::Dom("boom".to_owned()).to_string(), "dom error: boom");
}

// =============================================================
// arm_each
// =============================================================

#[test]
fn failing_instance_does_not_stop_later_instances() {
    let mut seen = Vec::new();
    let armed = arm_each("cards", &["one", "two", "three"], |index, card| {
        seen.push(*card);
        if index == 0 {
            return Err(MotionError::NoTargets(".project-image".to_owned()));
        }
        Ok(())
    });
    assert_eq!(armed, Ok(2));
    assert_eq!(seen, vec!["one", "two", "three"]);
}

#[test]
fn all_instances_failing_reports_the_first_error() {
    let armed = arm_each("cards", &[0, 1], |index, _| Err(MotionError::Dom(format!("instance {index}"))));
    assert_eq!(armed, Err(MotionError::Dom("instance 0".to_owned())));
}

#[test]
fn no_instances_arms_nothing() {
    let armed = arm_each("cards", &[] as &[u8], |_, _| Ok(()));
    assert_eq!(armed, Ok(0));
}
