//! Stat counter text frames.
//!
//! A stat such as `150+` counts up from `0+` to `150+`; the displayed value is
//! the eased progress rounded up to a whole number with the original suffix
//! re-attached on every frame.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::util::easing::Ease;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCounter {
    target: u64,
    suffix: &'static str,
}

impl StatCounter {
    /// Parse a displayed stat literal. Returns `None` for anything that is not
    /// a whole number with an optional trailing `+`.
    #[must_use]
    pub fn parse(literal: &str) -> Option<Self> {
        let literal = literal.trim();
        let (digits, suffix) = match literal.strip_suffix('+') {
            Some(rest) => (rest.trim_end(), "+"),
            None => (literal, ""),
        };
        let Ok(target) = digits.parse::<u64>() else {
            return None;
        };
        Some(Self { target, suffix })
    }

    /// Displayed integer at normalized time `t`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn value_at(&self, t: f64, ease: Ease) -> u64 {
        if t >= 1.0 {
            return self.target;
        }
        let raw = (ease.apply(t) * self.target as f64).ceil();
        (raw.max(0.0) as u64).min(self.target)
    }

    /// Displayed text at normalized time `t`.
    #[must_use]
    pub fn text_at(&self, t: f64, ease: Ease) -> String {
        format!("{}{}", self.value_at(t, ease), self.suffix)
    }
}
