//! Contact section and form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds inputs to `RwSignal<ContactFormState>`, posts through
//! `net::form_client`, and drives the status region's pop-in and timed
//! dismissal.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome flows through `ContactFormState::finish`, which re-enables
//! the button and restores its label whatever happened.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::pointer_effects::magnetic_handlers;
use crate::config::PortfolioConfig;
use crate::motion::web::{animate, play_on};
use crate::net::form_client::submit_contact;
use crate::state::contact::{ContactFormState, DismissTicket, FormStatus};
use crate::util::effects::{status_fade, status_pop};

type StatusRef = NodeRef<leptos::html::Div>;

fn schedule_dismissal(form: RwSignal<ContactFormState>, status_ref: StatusRef, ticket: DismissTicket) {
    Timeout::new(ticket.delay_ms, move || {
        if !form.try_update(|f| f.begin_fade(ticket)).unwrap_or(false) {
            return;
        }
        let fade = status_ref
            .get_untracked()
            .and_then(|el| match animate(&el, &status_fade(ticket.fade_ms), 0, 0.0) {
                Ok(animation) => Some(animation),
                Err(err) => {
                    log::debug!("status fade skipped: {err}");
                    None
                }
            });
        Timeout::new(ticket.fade_ms, move || {
            let hidden = form.try_update(|f| f.finish_fade(ticket)).unwrap_or(false);
            if let Some(animation) = fade {
                animation.cancel();
            }
            log::debug!("success status dismissed: attempt={} hidden={hidden}", ticket.attempt);
        })
        .forget();
    })
    .forget();
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<PortfolioConfig>();
    let form = expect_context::<RwSignal<ContactFormState>>();
    let status_ref: StatusRef = NodeRef::new();
    let (on_button_move, on_button_leave) = magnetic_handlers();

    let endpoint = config.form_endpoint.clone();
    let timeout = config.submit_timeout;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(ContactFormState::begin_submit) {
            Some(Ok(submission)) => submission,
            Some(Err(rejected)) => {
                log::debug!("submit ignored: {rejected}");
                return;
            }
            None => return,
        };
        let endpoint = endpoint.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_contact(&endpoint, &submission.payload, timeout).await;
            let succeeded = outcome.is_ok();
            let ticket = form.try_update(|f| f.finish(submission.attempt, outcome)).flatten();
            if succeeded {
                if let Some(status) = status_ref.get_untracked() {
                    play_on(&status, &status_pop());
                }
            }
            if let Some(ticket) = ticket {
                schedule_dismissal(form, status_ref, ticket);
            }
        });
    };

    let submitting = move || form.with(ContactFormState::is_submitting);
    let status_class = move || {
        form.with(|f| f.status.as_ref().map_or_else(|| "form-status".to_owned(), FormStatus::class))
    };
    let status_text = move || form.with(|f| f.status.as_ref().map(|s| s.text.clone()).unwrap_or_default());

    view! {
        <section id="contact" class="contact-section">
            <div class="section-container">
                <div class="contact-wrapper">
                    <div class="contact-header">
                        <span class="section-tag">"Contact"</span>
                        <h2 class="section-title">"Let's build something together"</h2>
                        <p>"Have a project in mind or just want to say hello? My inbox is open."</p>
                    </div>
                    <form
                        id="contact-form"
                        class="contact-form-clean"
                        action=config.form_endpoint
                        method="POST"
                        on:submit=on_submit
                    >
                        <div class="form-group">
                            <label for="name">"Name"</label>
                            <input
                                id="name"
                                name="name"
                                type="text"
                                required
                                prop:value=move || form.with(|f| f.fields.name.clone())
                                on:input=move |ev| form.update(|f| f.fields.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                prop:value=move || form.with(|f| f.fields.email.clone())
                                on:input=move |ev| form.update(|f| f.fields.email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="message">"Message"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="5"
                                required
                                prop:value=move || form.with(|f| f.fields.message.clone())
                                on:input=move |ev| form.update(|f| f.fields.message = event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            id="submit-btn"
                            type="submit"
                            class="btn-primary"
                            disabled=submitting
                            on:mousemove=on_button_move
                            on:mouseleave=on_button_leave
                        >
                            <span class="btn-text" style:display=move || if submitting() { "none" } else { "inline" }>
                                "Send Message"
                            </span>
                            <span class="btn-loader" style:display=move || if submitting() { "inline" } else { "none" }>
                                "Sending..."
                            </span>
                        </button>
                        <div
                            id="form-status"
                            role="status"
                            class=status_class
                            style:display=move || if form.with(|f| f.status.is_some()) { "block" } else { "none" }
                            node_ref=status_ref
                        >
                            {status_text}
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}
