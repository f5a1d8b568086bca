//! Fixed navigation bar: section links, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<ScrollState>` (fed by the page driver) for the condensed
//! `scrolled` style and the hide-on-scroll slide, and owns the theme toggle
//! which writes through `PreferenceStore`.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::PortfolioConfig;
use crate::consts::ANCHOR_SCROLL_SECS;
use crate::motion::web::play_on;
use crate::state::scroll::{NavPlacement, ScrollState, anchor_scroll_top};
use crate::state::theme::{ThemePreference, ThemeState, apply_to_body};
use crate::util::dom::{document, smooth_scroll_to};
use crate::util::easing::Ease;
use crate::util::effects::{nav_slide, theme_spin};
use crate::util::preference_store::{BrowserStorage, PreferenceStore};

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#work", "Work"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

/// Smooth-scroll to the element named by an in-page link's `href`.
pub fn on_anchor_click(ev: web_sys::MouseEvent) {
    ev.prevent_default();
    let href = ev
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().map_or(None, |el| el.get_attribute("href")));
    let Some(href) = href else {
        return;
    };
    let target = document().and_then(|d| match d.query_selector(&href) {
        Ok(found) => found,
        Err(_) => None,
    });
    let Some(target) = target else {
        log::debug!("anchor target {href} not found");
        return;
    };
    let current = web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0));
    let top = anchor_scroll_top(current, target.get_bounding_client_rect().top());
    smooth_scroll_to(top, ANCHOR_SCROLL_SECS, Ease::Power3InOut);
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let config = expect_context::<PortfolioConfig>();
    let nav_ref = NodeRef::<leptos::html::Nav>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();
    let menu_open = RwSignal::new(false);

    let placement = Memo::new(move |_| scroll.with(|s| s.nav));
    Effect::new(move |previous: Option<NavPlacement>| {
        let now = placement.get();
        if previous.is_some_and(|p| p != now) {
            if let Some(nav) = nav_ref.get_untracked() {
                play_on(&nav, &nav_slide(now));
            }
        }
        now
    });

    let storage_key = config.theme_storage_key;
    let on_theme_toggle = move |_| {
        let store = PreferenceStore::<BrowserStorage>::browser(storage_key.clone());
        let Some((next, spin)) = theme.try_update(|t| (t.toggle(&store), t.toggle_rotation_deg)) else {
            return;
        };
        apply_to_body(next);
        if let Some(button) = toggle_ref.get_untracked() {
            play_on(&button, &theme_spin(spin));
        }
        log::debug!("theme switched to {}", next.tag());
    };

    let is_dark = move || theme.with(|t| t.preference == ThemePreference::Dark);

    view! {
        <nav class="navbar" class:scrolled=move || scroll.with(|s| s.scrolled) node_ref=nav_ref>
            <div class="nav-container">
                <a href="#home" class="logo" on:click=on_anchor_click>
                    "Portfolio"
                </a>
                <ul class="nav-links" class:active=move || menu_open.get()>
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a href=*href on:click=on_anchor_click>
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        title="Toggle dark mode"
                        node_ref=toggle_ref
                        on:click=on_theme_toggle
                    >
                        {move || if is_dark() { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <span class="hamburger" class:active=move || menu_open.get()></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
