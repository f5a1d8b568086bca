//! Theme preference and toggle state.
//!
//! The active theme is mirrored onto `<body>` as the `dark-mode` class; light
//! is the absence of that class.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::dom::set_body_class;
use crate::util::easing::Ease;
use crate::util::preference_store::{KeyValueStore, PreferenceStore};

const DARK_TAG: &str = "dark-mode";
const LIGHT_TAG: &str = "light-mode";

/// Class applied to `<body>` while the dark theme is active.
pub const DARK_BODY_CLASS: &str = DARK_TAG;

/// Extra rotation given to the toggle button on every click.
pub const TOGGLE_SPIN_DEG: f64 = 360.0;

/// Duration of the toggle spin.
pub const TOGGLE_SPIN_SECS: f64 = 0.6;

/// Easing of the toggle spin.
pub const TOGGLE_SPIN_EASE: Ease = Ease::POP;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Opaque storage tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Light => LIGHT_TAG,
            Self::Dark => DARK_TAG,
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            DARK_TAG => Some(Self::Dark),
            LIGHT_TAG => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Current theme plus the accumulated spin of the toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub toggle_rotation_deg: f64,
}

impl ThemeState {
    /// Initial state from whatever was persisted.
    pub fn load<S: KeyValueStore>(store: &PreferenceStore<S>) -> Self {
        Self { preference: store.get().unwrap_or_default(), toggle_rotation_deg: 0.0 }
    }

    /// Flip the theme and persist it. Dark is stored; light clears the key.
    pub fn toggle<S: KeyValueStore>(&mut self, store: &PreferenceStore<S>) -> ThemePreference {
        self.preference = self.preference.toggled();
        self.toggle_rotation_deg += TOGGLE_SPIN_DEG;
        match self.preference {
            ThemePreference::Dark => store.set(ThemePreference::Dark),
            ThemePreference::Light => store.clear(),
        }
        self.preference
    }
}

/// Mirror `pref` onto the `<body>` class list.
pub fn apply_to_body(pref: ThemePreference) {
    set_body_class(DARK_BODY_CLASS, pref.is_dark());
}
