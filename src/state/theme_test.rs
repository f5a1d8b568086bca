#![allow(clippy::float_cmp)]

use super::*;
use crate::util::preference_store::MemoryStore;

#[test]
fn default_preference_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn tags_round_trip() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(ThemePreference::from_tag(pref.tag()), Some(pref));
    }
}

#[test]
fn dark_tag_matches_body_class() {
    assert_eq!(ThemePreference::Dark.tag(), DARK_BODY_CLASS);
}

#[test]
fn toggled_flips() {
    assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
}

#[test]
fn load_without_stored_value_is_light() {
    let store = PreferenceStore::new(MemoryStore::new(), "theme");
    assert_eq!(ThemeState::load(&store).preference, ThemePreference::Light);
}

#[test]
fn toggle_to_dark_persists_and_back_to_light_clears() {
    let store = PreferenceStore::new(MemoryStore::new(), "theme");
    let mut state = ThemeState::load(&store);

    assert_eq!(state.toggle(&store), ThemePreference::Dark);
    assert_eq!(store.get(), Some(ThemePreference::Dark));

    assert_eq!(state.toggle(&store), ThemePreference::Light);
    assert_eq!(store.get(), None);
}

#[test]
fn toggle_accumulates_spin() {
    let store = PreferenceStore::new(MemoryStore::new(), "theme");
    let mut state = ThemeState::default();
    state.toggle(&store);
    state.toggle(&store);
    state.toggle(&store);
    assert_eq!(state.toggle_rotation_deg, 3.0 * TOGGLE_SPIN_DEG);
}

#[test]
fn load_picks_up_dark() {
    let store = PreferenceStore::new(MemoryStore::new(), "theme");
    store.set(ThemePreference::Dark);
    assert!(ThemeState::load(&store).preference.is_dark());
}
