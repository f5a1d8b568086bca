//! Named easing curves shared by the animation engine and the frame-driven
//! effects (stat counters, smooth scrolling, scrub smoothing).
//!
//! Each curve maps normalized time `t ∈ [0, 1]` to progress. The browser
//! engine hands the same curve to the Web Animations API as a sampled CSS
//! `linear()` function so both paths agree frame for frame.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

/// Number of intervals used when sampling a curve into CSS `linear()`.
const CSS_SAMPLES: usize = 32;

/// Easing curves used across the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power2Out,
    #[default]
    Power3Out,
    Power2InOut,
    Power3InOut,
    SineInOut,
    /// Overshoots by `overshoot` before settling.
    BackOut { overshoot: f64 },
    /// Oscillates around the target, decaying over `period`.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    /// The springy settle used for magnetic buttons and the hero shape.
    pub const SPRING: Self = Self::ElasticOut { amplitude: 1.0, period: 0.5 };

    /// The overshoot used for pop-in effects.
    pub const POP: Self = Self::BackOut { overshoot: 1.7 };

    /// Evaluate the curve at normalized time `t` (clamped to `[0, 1]`).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power1Out => out_power(t, 2),
            Self::Power2Out => out_power(t, 3),
            Self::Power3Out => out_power(t, 4),
            Self::Power2InOut => in_out_power(t, 3),
            Self::Power3InOut => in_out_power(t, 4),
            Self::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Self::BackOut { overshoot } => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }

    /// CSS easing string equivalent to this curve.
    #[must_use]
    pub fn css(self) -> String {
        if self == Self::Linear {
            return "linear".to_owned();
        }
        let mut out = String::from("linear(");
        for i in 0..=CSS_SAMPLES {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / CSS_SAMPLES as f64;
            if i > 0 {
                out.push_str(", ");
            }
            // Writing into a String cannot fail.
            if write!(out, "{:.4}", self.apply(t)).is_err() {
                break;
            }
        }
        out.push(')');
        out
    }
}

fn out_power(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn in_out_power(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let amplitude = amplitude.max(1.0);
    let period = if period > 0.0 { period } else { 0.3 };
    let phase = period / TAU * (1.0 / amplitude).asin();
    amplitude * 2f64.powf(-10.0 * t) * ((t - phase) * TAU / period).sin() + 1.0
}
