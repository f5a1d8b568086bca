//! Root component: provides shared state and lays out the page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::contact_form::ContactSection;
use crate::components::cursor::CursorFollowers;
use crate::components::navbar::Navbar;
use crate::components::progress_bar::ScrollProgress;
use crate::components::sections::{About, Footer, Hero, Testimonials, Work};
use crate::config::PortfolioConfig;
use crate::driver;
use crate::state::contact::ContactFormState;
use crate::state::scroll::ScrollState;
use crate::state::theme::{ThemeState, apply_to_body};
use crate::util::preference_store::{BrowserStorage, PreferenceStore};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PortfolioConfig::from_build_env();
    let theme = ThemeState::load(&PreferenceStore::<BrowserStorage>::browser(config.theme_storage_key.clone()));
    apply_to_body(theme.preference);

    let scroll = RwSignal::new(ScrollState::new());
    provide_context(RwSignal::new(theme));
    provide_context(scroll);
    provide_context(RwSignal::new(ContactFormState::new(config.status_dismiss_ms)));
    provide_context(config);

    // Bindings resolve selectors, so arm them once the page is in the DOM.
    Effect::new(move |armed: Option<()>| {
        if armed.is_none() {
            driver::start(scroll);
        }
    });

    view! {
        <Title text="Portfolio" />
        <ScrollProgress />
        <CursorFollowers />
        <Navbar />
        <main>
            <Hero />
            <About />
            <Work />
            <Testimonials />
            <ContactSection />
        </main>
        <Footer />
    }
}
