//! Declarative animation bindings and the engine seam they are played through.
//!
//! SYSTEM CONTEXT
//! ==============
//! `binding` holds the data-only descriptors, `registry` the page's binding
//! set, `timeline` and `viewport` the pure layout math, and `web` the browser
//! engine built on `IntersectionObserver` and the Web Animations API.
//!
//! ERROR HANDLING
//! ==============
//! Bindings are independent. `register_all` isolates each registration so one
//! missing selector or DOM failure never stops the rest of the page from
//! animating; failures are logged and collected in a report.

pub mod binding;
pub mod registry;
pub mod timeline;
pub mod viewport;
pub mod web;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use binding::AnimationBinding;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MotionError {
    #[error("invalid binding {0}")]
    Invalid(String),
    #[error("no elements match {0}")]
    NoTargets(String),
    #[error("dom error: {0}")]
    Dom(String),
}

/// Anything that can play animation descriptors.
pub trait MotionEngine {
    /// Arm a binding. Load-triggered bindings start immediately; the others
    /// wait for their scroll condition.
    ///
    /// # Errors
    ///
    /// Returns an error if the binding cannot be armed.
    fn register(&mut self, binding: &AnimationBinding) -> Result<(), MotionError>;
}

/// Outcome of arming a binding set.
#[derive(Debug, Default, PartialEq)]
pub struct RegistrationReport {
    pub registered: Vec<&'static str>,
    pub failed: Vec<(&'static str, MotionError)>,
}

impl RegistrationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Validate and register every binding, isolating failures per binding.
pub fn register_all<E: MotionEngine + ?Sized>(engine: &mut E, bindings: &[AnimationBinding]) -> RegistrationReport {
    let mut report = RegistrationReport::default();
    for binding in bindings {
        match binding.validate().and_then(|()| engine.register(binding)) {
            Ok(()) => report.registered.push(binding.name),
            Err(err) => {
                log::warn!("animation binding {} skipped: {err}", binding.name);
                report.failed.push((binding.name, err));
            }
        }
    }
    log::debug!(
        "animation bindings armed: {} ok, {} failed",
        report.registered.len(),
        report.failed.len()
    );
    report
}

/// Arm one binding on each of its scope instances.
///
/// An instance that fails is logged and skipped so later instances still
/// animate. Returns how many were armed.
///
/// # Errors
///
/// Returns the first instance's error when none could be armed.
pub fn arm_each<T>(
    name: &str,
    instances: &[T],
    mut arm: impl FnMut(usize, &T) -> Result<(), MotionError>,
) -> Result<usize, MotionError> {
    let mut armed = 0;
    let mut first_err = None;
    for (index, instance) in instances.iter().enumerate() {
        match arm(index, instance) {
            Ok(()) => armed += 1,
            Err(err) => {
                log::warn!("animation binding {name} skipped instance {index}: {err}");
                first_err.get_or_insert(err);
            }
        }
    }
    match first_err {
        Some(err) if armed == 0 => Err(err),
        _ => Ok(armed),
    }
}
