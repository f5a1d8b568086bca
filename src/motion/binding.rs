//! Data-only animation descriptors.
//!
//! A binding says *what* animates, *when* it fires and *how* it moves. The
//! descriptors never touch the DOM; a [`super::MotionEngine`] turns them into
//! running animations.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use crate::util::easing::Ease;

use super::MotionError;

/// A per-target numeric value. `ordinal` is the target's position among the
/// elements animated by the same step (or the scope instance for `Each`
/// bindings).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar {
    Fixed(f64),
    /// `base + step * ordinal`.
    Stagger { base: f64, step: f64 },
    /// `even` for even ordinals, `odd` otherwise.
    Alternate { even: f64, odd: f64 },
}

impl Scalar {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn at(self, ordinal: usize) -> f64 {
        match self {
            Self::Fixed(v) => v,
            Self::Stagger { base, step } => base + step * ordinal as f64,
            Self::Alternate { even, odd } => {
                if ordinal % 2 == 0 {
                    even
                } else {
                    odd
                }
            }
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Fixed(v)
    }
}

/// Animatable properties. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props {
    pub opacity: Option<f64>,
    pub x: Option<Scalar>,
    pub y: Option<Scalar>,
    pub scale: Option<f64>,
    pub rotation: Option<Scalar>,
    pub rotation_x: Option<f64>,
    pub rotation_y: Option<f64>,
    pub perspective: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    /// Raw CSS properties (camel-cased keyframe names).
    pub css: Vec<(&'static str, String)>,
}

impl Props {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn opacity(mut self, v: f64) -> Self {
        self.opacity = Some(v);
        self
    }

    #[must_use]
    pub fn x(mut self, v: impl Into<Scalar>) -> Self {
        self.x = Some(v.into());
        self
    }

    #[must_use]
    pub fn y(mut self, v: impl Into<Scalar>) -> Self {
        self.y = Some(v.into());
        self
    }

    #[must_use]
    pub fn scale(mut self, v: f64) -> Self {
        self.scale = Some(v);
        self
    }

    #[must_use]
    pub fn rotation(mut self, v: impl Into<Scalar>) -> Self {
        self.rotation = Some(v.into());
        self
    }

    #[must_use]
    pub fn tilt(mut self, rotation_x: f64, rotation_y: f64) -> Self {
        self.rotation_x = Some(rotation_x);
        self.rotation_y = Some(rotation_y);
        self
    }

    #[must_use]
    pub fn perspective(mut self, px: f64) -> Self {
        self.perspective = Some(px);
        self
    }

    #[must_use]
    pub fn position(mut self, left: f64, top: f64) -> Self {
        self.left = Some(left);
        self.top = Some(top);
        self
    }

    #[must_use]
    pub fn css(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.css.push((name, value.into()));
        self
    }

    /// Resolve into a single keyframe for the target at `ordinal`.
    #[must_use]
    pub fn keyframe(&self, ordinal: usize) -> Keyframe {
        let mut parts = Vec::new();
        if let Some(p) = self.perspective {
            parts.push(format!("perspective({p}px)"));
        }
        if self.x.is_some() || self.y.is_some() {
            let x = self.x.map_or(0.0, |v| v.at(ordinal));
            let y = self.y.map_or(0.0, |v| v.at(ordinal));
            parts.push(format!("translate({x}px, {y}px)"));
        }
        if let Some(r) = self.rotation {
            parts.push(format!("rotate({}deg)", r.at(ordinal)));
        }
        if let Some(r) = self.rotation_x {
            parts.push(format!("rotateX({r}deg)"));
        }
        if let Some(r) = self.rotation_y {
            parts.push(format!("rotateY({r}deg)"));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }

        let mut values = Vec::new();
        if let Some(o) = self.opacity {
            values.push(("opacity", o.to_string()));
        }
        if !parts.is_empty() {
            values.push(("transform", parts.join(" ")));
        }
        if let Some(l) = self.left {
            values.push(("left", format!("{l}px")));
        }
        if let Some(t) = self.top {
            values.push(("top", format!("{t}px")));
        }
        values.extend(self.css.iter().cloned());
        Keyframe { values }
    }
}

/// Resolved CSS values for one keyframe, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Keyframe {
    pub values: Vec<(&'static str, String)>,
}

impl Keyframe {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Whether the props are the start (`From`, ending at the element's natural
/// style) or the end (`To`, starting from its current style).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TweenKind {
    From,
    #[default]
    To,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Once,
    Forever { yoyo: bool },
}

/// How the tween combines with animations created before it on the same
/// element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Composite {
    #[default]
    Replace,
    Add,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub kind: TweenKind,
    pub props: Props,
    pub duration_s: f64,
    pub delay_s: Scalar,
    pub ease: Ease,
    pub repeat: Repeat,
    pub composite: Composite,
}

impl Tween {
    /// Animate from `props` to the element's natural style.
    #[must_use]
    pub fn from(props: Props, duration_s: f64) -> Self {
        Self::new(TweenKind::From, props, duration_s)
    }

    /// Animate from the element's current style to `props`.
    #[must_use]
    pub fn to(props: Props, duration_s: f64) -> Self {
        Self::new(TweenKind::To, props, duration_s)
    }

    fn new(kind: TweenKind, props: Props, duration_s: f64) -> Self {
        Self {
            kind,
            props,
            duration_s,
            delay_s: Scalar::Fixed(0.0),
            ease: Ease::Power1Out,
            repeat: Repeat::Once,
            composite: Composite::Replace,
        }
    }

    #[must_use]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay_s: impl Into<Scalar>) -> Self {
        self.delay_s = delay_s.into();
        self
    }

    /// Delay each successive target by `step` seconds.
    #[must_use]
    pub fn stagger(mut self, step: f64) -> Self {
        let base = match self.delay_s {
            Scalar::Fixed(v) | Scalar::Stagger { base: v, .. } => v,
            Scalar::Alternate { even, .. } => even,
        };
        self.delay_s = Scalar::Stagger { base, step };
        self
    }

    #[must_use]
    pub fn forever(mut self, yoyo: bool) -> Self {
        self.repeat = Repeat::Forever { yoyo };
        self
    }

    #[must_use]
    pub fn additive(mut self) -> Self {
        self.composite = Composite::Add;
        self
    }

    /// Time from the tween's start until target `ordinal` finishes one cycle.
    #[must_use]
    pub fn span_s(&self, ordinal: usize) -> f64 {
        self.delay_s.at(ordinal) + self.duration_s
    }
}

/// Where a binding's targets live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Selectors resolve against the whole document.
    Document,
    /// The binding is instantiated once per element matching the selector;
    /// step selectors resolve inside that element.
    Each(&'static str),
}

/// An element reference relative to a scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// The scope element itself (only meaningful for `Scope::Each`).
    Scope,
    Selector(&'static str),
}

/// A line on the element and a line on the viewport, both as fractions from
/// the top (`0.0` = top edge, `1.0` = bottom edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEdge {
    pub element: f64,
    pub viewport: f64,
}

impl ScrollEdge {
    pub const TOP_TOP: Self = Self { element: 0.0, viewport: 0.0 };
    pub const TOP_BOTTOM: Self = Self { element: 0.0, viewport: 1.0 };
    pub const BOTTOM_TOP: Self = Self { element: 1.0, viewport: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Play immediately at registration.
    Load,
    /// Play once, the first time the anchor's top edge passes `line`
    /// (fraction of viewport height from the top).
    Enter { anchor: Target, line: f64 },
    /// Drive progress continuously from the anchor's position between
    /// `start` and `end`, trailing scroll by `lag_s` seconds.
    Scrub { anchor: Target, start: ScrollEdge, end: ScrollEdge, lag_s: f64 },
}

/// Placement of a timeline step relative to what came before it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Position {
    /// Start when everything before has finished.
    #[default]
    Sequence,
    /// Start this many seconds before everything before has finished.
    Overlap(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub target: Target,
    pub tween: Tween,
    pub position: Position,
}

impl Step {
    #[must_use]
    pub fn new(target: Target, tween: Tween) -> Self {
        Self { target, tween, position: Position::Sequence }
    }

    #[must_use]
    pub fn overlap(mut self, secs: f64) -> Self {
        self.position = Position::Overlap(secs);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Timeline(Vec<Step>),
    /// Count the target's integer text up from zero.
    Counter { target: Target, duration_s: f64, ease: Ease },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationBinding {
    pub name: &'static str,
    pub scope: Scope,
    pub trigger: Trigger,
    pub effect: Effect,
}

impl AnimationBinding {
    /// A single-tween binding.
    #[must_use]
    pub fn tween(name: &'static str, scope: Scope, trigger: Trigger, target: Target, tween: Tween) -> Self {
        Self { name, scope, trigger, effect: Effect::Timeline(vec![Step::new(target, tween)]) }
    }

    /// Reject descriptors no engine could honour.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), MotionError> {
        let invalid = |reason: &str| Err(MotionError::Invalid(format!("{}: {reason}", self.name)));

        let scope_relative = |target: Target| target == Target::Scope && self.scope == Scope::Document;
        match self.trigger {
            Trigger::Load => {}
            Trigger::Enter { anchor, line } => {
                if scope_relative(anchor) {
                    return invalid("scope anchor without an Each scope");
                }
                if !(0.0..=1.0).contains(&line) {
                    return invalid("enter line outside the viewport");
                }
            }
            Trigger::Scrub { anchor, lag_s, .. } => {
                if scope_relative(anchor) {
                    return invalid("scope anchor without an Each scope");
                }
                if lag_s < 0.0 {
                    return invalid("negative scrub lag");
                }
            }
        }

        match &self.effect {
            Effect::Timeline(steps) => {
                if steps.is_empty() {
                    return invalid("empty timeline");
                }
                for step in steps {
                    if scope_relative(step.target) {
                        return invalid("scope target without an Each scope");
                    }
                    if step.tween.duration_s.is_nan() || step.tween.duration_s < 0.0 {
                        return invalid("negative duration");
                    }
                }
            }
            Effect::Counter { target, duration_s, .. } => {
                if scope_relative(*target) {
                    return invalid("scope target without an Each scope");
                }
                if duration_s.is_nan() || *duration_s <= 0.0 {
                    return invalid("counter needs a positive duration");
                }
                if matches!(self.trigger, Trigger::Scrub { .. }) {
                    return invalid("counters cannot be scrubbed");
                }
            }
        }
        Ok(())
    }
}
