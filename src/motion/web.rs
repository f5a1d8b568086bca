//! Browser [`MotionEngine`] on the Web Animations API.
//!
//! DESIGN
//! ======
//! Every tween becomes one `Element.animate` call per target. `Load` bindings
//! play at once; `Enter` bindings are created paused and released by a
//! one-shot `IntersectionObserver`; `Scrub` bindings stay paused and have their
//! `currentTime` driven from [`WebMotion::on_frame`] through a [`ScrubTrack`].
//!
//! TRADE-OFFS
//! ==========
//! Parallax scrubs compose additively so they stack on top of entrance
//! transforms instead of replacing them. Observers are kept for the lifetime
//! of the engine since dropping one frees the callback the browser still holds.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Animation, CompositeOperation, Element, FillMode, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyframeAnimationOptions, PlaybackDirection,
};

use super::binding::{AnimationBinding, Composite, Effect, Repeat, Scope, ScrollEdge, Step, Target, Trigger, Tween, TweenKind};
use super::timeline::{layout, step_counts, total_s};
use super::viewport::{ScrubTrack, enter_root_margin, has_crossed, scrub_progress};
use super::{MotionEngine, MotionError, arm_each};
use crate::util::counter::StatCounter;
use crate::util::dom::{elements, viewport_height};
use crate::util::easing::Ease;
use crate::util::frames::run_timed;

/// Longest frame gap fed to scrub smoothing, in seconds.
const MAX_FRAME_GAP_S: f64 = 0.1;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ScrubEntry {
    anchor: Element,
    start: ScrollEdge,
    end: ScrollEdge,
    lag_s: f64,
    track: ScrubTrack,
    animations: Vec<Animation>,
    total_ms: f64,
}

struct EnterWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// What a binding does once its trigger fires.
enum Prepared {
    Timeline { animations: Vec<Animation>, total_ms: f64 },
    Counter { targets: Vec<(Element, StatCounter)>, duration_s: f64, ease: Ease },
}

impl Prepared {
    fn fire(self) {
        match self {
            Self::Timeline { animations, .. } => {
                for animation in animations {
                    if let Err(err) = animation.play() {
                        log::debug!("animation did not start: {err:?}");
                    }
                }
            }
            Self::Counter { targets, duration_s, ease } => {
                for (el, counter) in targets {
                    run_timed(duration_s * 1000.0, move |t| {
                        el.set_text_content(Some(&counter.text_at(t, ease)));
                    });
                }
            }
        }
    }
}

pub struct WebMotion {
    root: Element,
    scrubs: Vec<ScrubEntry>,
    watches: Vec<EnterWatch>,
    last_frame_ms: Option<f64>,
}

impl WebMotion {
    /// Engine bound to the current document.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Dom`] outside a browser document.
    pub fn new() -> Result<Self, MotionError> {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .ok_or_else(|| MotionError::Dom("no document".to_owned()))?;
        Ok(Self { root, scrubs: Vec::new(), watches: Vec::new(), last_frame_ms: None })
    }

    /// Advance every scrub toward the current scroll position.
    ///
    /// Returns `true` while some scrub is still catching up and wants
    /// another frame.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        let dt_s = self
            .last_frame_ms
            .map_or(0.0, |last| ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_GAP_S));
        let vh = viewport_height();
        let mut unsettled = false;
        for scrub in &mut self.scrubs {
            let rect = scrub.anchor.get_bounding_client_rect();
            scrub
                .track
                .set_target(scrub_progress(rect.top(), rect.height(), vh, scrub.start, scrub.end));
            let progress = scrub.track.advance(dt_s, scrub.lag_s);
            for animation in &scrub.animations {
                animation.set_current_time(Some(progress * scrub.total_ms));
            }
            if !scrub.track.is_settled() {
                unsettled = true;
            }
        }
        self.last_frame_ms = if unsettled { Some(now_ms) } else { None };
        unsettled
    }

    fn scope_roots(&self, scope: Scope) -> Result<Vec<Element>, MotionError> {
        match scope {
            Scope::Document => Ok(vec![self.root.clone()]),
            Scope::Each(selector) => {
                let found = select_all(&self.root, selector)?;
                if found.is_empty() {
                    return Err(MotionError::NoTargets(selector.to_owned()));
                }
                Ok(found)
            }
        }
    }

    fn prepare(&self, root: &Element, scope_index: usize, effect: &Effect) -> Result<Prepared, MotionError> {
        match effect {
            Effect::Timeline(steps) => build_timeline(root, scope_index, steps),
            Effect::Counter { target, duration_s, ease } => {
                let mut targets = Vec::new();
                for el in resolve(root, *target)? {
                    let text = el.text_content().unwrap_or_default();
                    match StatCounter::parse(&text) {
                        Some(counter) => {
                            el.set_text_content(Some(&counter.text_at(0.0, *ease)));
                            targets.push((el, counter));
                        }
                        None => log::debug!("counter text {text:?} is not a number"),
                    }
                }
                Ok(Prepared::Counter { targets, duration_s: *duration_s, ease: *ease })
            }
        }
    }

    fn watch_enter(&mut self, anchor: Element, line: f64, prepared: Prepared) -> Result<(), MotionError> {
        let mut pending = Some(prepared);
        let callback: ObserverCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let vh = viewport_height();
            let entered = entries.iter().any(|entry| match entry.dyn_into::<IntersectionObserverEntry>() {
                Ok(entry) => entry.is_intersecting() || has_crossed(entry.bounding_client_rect().top(), vh, line),
                Err(_) => false,
            });
            if !entered {
                return;
            }
            observer.disconnect();
            if let Some(prepared) = pending.take() {
                prepared.fire();
            }
        });
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&enter_root_margin(line));
        init.set_threshold(&JsValue::from_f64(0.0));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(dom_err)?;
        observer.observe(&anchor);
        self.watches.push(EnterWatch { observer, _callback: callback });
        Ok(())
    }
}

impl MotionEngine for WebMotion {
    fn register(&mut self, binding: &AnimationBinding) -> Result<(), MotionError> {
        let roots = self.scope_roots(binding.scope)?;
        arm_each(binding.name, &roots, |scope_index, root| match binding.trigger {
            Trigger::Load => {
                self.prepare(root, scope_index, &binding.effect)?.fire();
                Ok(())
            }
            Trigger::Enter { anchor, line } => {
                let anchor = resolve_first(root, anchor)?;
                let prepared = self.prepare(root, scope_index, &binding.effect)?;
                pause_all(&prepared)?;
                self.watch_enter(anchor, line, prepared)
            }
            Trigger::Scrub { anchor, start, end, lag_s } => {
                let anchor = resolve_first(root, anchor)?;
                let Prepared::Timeline { animations, total_ms } = self.prepare(root, scope_index, &binding.effect)?
                else {
                    return Err(MotionError::Invalid(format!("{}: scrubbed counter", binding.name)));
                };
                let rect = anchor.get_bounding_client_rect();
                let progress = scrub_progress(rect.top(), rect.height(), viewport_height(), start, end);
                for animation in &animations {
                    animation.pause().map_err(dom_err)?;
                    animation.set_current_time(Some(progress * total_ms));
                }
                self.scrubs.push(ScrubEntry {
                    anchor,
                    start,
                    end,
                    lag_s,
                    track: ScrubTrack::new(progress),
                    animations,
                    total_ms,
                });
                Ok(())
            }
        })
        .map(|armed| log::trace!("{}: {armed}/{} instances armed", binding.name, roots.len()))
    }
}

impl Drop for WebMotion {
    fn drop(&mut self) {
        for watch in &self.watches {
            watch.observer.disconnect();
        }
    }
}

fn pause_all(prepared: &Prepared) -> Result<(), MotionError> {
    if let Prepared::Timeline { animations, .. } = prepared {
        for animation in animations {
            animation.pause().map_err(dom_err)?;
        }
    }
    Ok(())
}

fn build_timeline(root: &Element, scope_index: usize, steps: &[Step]) -> Result<Prepared, MotionError> {
    let resolved = steps
        .iter()
        .map(|step| resolve(root, step.target))
        .collect::<Result<Vec<_>, _>>()?;
    if resolved.iter().all(Vec::is_empty) {
        let wanted = steps.iter().map(|s| describe(s.target)).collect::<Vec<_>>().join(", ");
        return Err(MotionError::NoTargets(wanted));
    }
    let matched = resolved.iter().map(Vec::len).collect::<Vec<_>>();
    let placements = layout(steps, &step_counts(steps, &matched, scope_index));

    let mut animations = Vec::new();
    for ((step, targets), placement) in steps.iter().zip(&resolved).zip(&placements) {
        for (index, el) in targets.iter().enumerate() {
            let ordinal = if step.target == Target::Scope { scope_index } else { index };
            animations.push(animate(el, &step.tween, ordinal, placement.start_s)?);
        }
    }
    Ok(Prepared::Timeline { animations, total_ms: total_s(&placements) * 1000.0 })
}

/// Start `tween` on `el`, offset by `offset_s` on top of the tween's own delay.
///
/// # Errors
///
/// Returns [`MotionError::Dom`] when the browser rejects the keyframes or
/// options. `Element.animate` throws for those, so it is called through
/// `Function::call2` to turn the exception into an `Err`.
pub fn animate(el: &Element, tween: &Tween, ordinal: usize, offset_s: f64) -> Result<Animation, MotionError> {
    let frame = Object::new();
    for (name, value) in tween.props.keyframe(ordinal).values {
        Reflect::set(&frame, &JsValue::from_str(name), &JsValue::from_str(&value)).map_err(dom_err)?;
    }
    if tween.kind == TweenKind::To {
        Reflect::set(&frame, &JsValue::from_str("offset"), &JsValue::from_f64(1.0)).map_err(dom_err)?;
    } else {
        Reflect::set(&frame, &JsValue::from_str("offset"), &JsValue::from_f64(0.0)).map_err(dom_err)?;
    }
    let keyframes = Array::of1(&frame);

    let options = KeyframeAnimationOptions::new();
    options.set_duration(tween.duration_s * 1000.0);
    options.set_delay((offset_s + tween.delay_s.at(ordinal)) * 1000.0);
    options.set_easing(&tween.ease.css());
    options.set_fill(FillMode::Both);
    if let Repeat::Forever { yoyo } = tween.repeat {
        options.set_iterations(f64::INFINITY);
        if yoyo {
            options.set_direction(PlaybackDirection::Alternate);
        }
    }
    options.set_composite(match tween.composite {
        Composite::Replace => CompositeOperation::Replace,
        Composite::Add => CompositeOperation::Add,
    });
    let animate_fn = Reflect::get(el, &JsValue::from_str("animate"))
        .map_err(dom_err)?
        .dyn_into::<Function>()
        .map_err(dom_err)?;
    animate_fn
        .call2(el, &keyframes, &options)
        .map_err(dom_err)?
        .dyn_into::<Animation>()
        .map_err(dom_err)
}

/// Fire-and-forget `tween` on one element; failures are logged.
pub fn play_on(el: &Element, tween: &Tween) {
    if let Err(err) = animate(el, tween, 0, 0.0) {
        log::debug!("tween skipped: {err}");
    }
}

fn select_all(root: &Element, selector: &str) -> Result<Vec<Element>, MotionError> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|e| MotionError::Dom(format!("{selector}: {e:?}")))
}

fn resolve(root: &Element, target: Target) -> Result<Vec<Element>, MotionError> {
    match target {
        Target::Scope => Ok(vec![root.clone()]),
        Target::Selector(selector) => select_all(root, selector),
    }
}

fn resolve_first(root: &Element, target: Target) -> Result<Element, MotionError> {
    resolve(root, target)?
        .into_iter()
        .next()
        .ok_or_else(|| MotionError::NoTargets(describe(target)))
}

fn describe(target: Target) -> String {
    match target {
        Target::Scope => "scope element".to_owned(),
        Target::Selector(selector) => selector.to_owned(),
    }
}

fn dom_err(err: JsValue) -> MotionError {
    MotionError::Dom(format!("{err:?}"))
}
