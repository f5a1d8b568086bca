//! Page-lifetime scroll driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the animation engine and the scroll frame gate. Scroll events push
//! samples; one frame callback applies the newest sample to
//! `RwSignal<ScrollState>` and advances scrub animations, re-requesting
//! frames only while a scrub is still catching up.
//!
//! TRADE-OFFS
//! ==========
//! Scrub catch-up frames carry no sample so they never feed a stale offset
//! into the navbar direction logic.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;

use crate::motion::registry::page_bindings;
use crate::motion::web::WebMotion;
use crate::motion::register_all;
use crate::state::scroll::{ScrollSample, ScrollState};
use crate::util::dom::{document, prefers_reduced_motion, scroll_sample, set_body_class};
use crate::util::frame_gate::FrameGate;
use crate::util::frames::request_frame;

pub const LOADED_BODY_CLASS: &str = "loaded";

struct PageDriver {
    motion: Option<WebMotion>,
    gate: FrameGate<ScrollSample>,
    scroll: RwSignal<ScrollState>,
}

type SharedDriver = Rc<RefCell<PageDriver>>;

/// Arm every animation binding and start listening for scroll.
pub fn start(scroll: RwSignal<ScrollState>) {
    if prefers_reduced_motion() {
        log::info!("reduced motion requested; animations run regardless");
    }

    let driver: SharedDriver = Rc::new(RefCell::new(PageDriver { motion: None, gate: FrameGate::new(), scroll }));
    let listener_driver = Rc::clone(&driver);
    window_event_listener(ev::scroll, move |_| {
        let Some(sample) = scroll_sample() else {
            return;
        };
        let schedule = listener_driver.borrow_mut().gate.push(sample);
        if schedule {
            schedule_frame(&listener_driver);
        }
    });
    mark_loaded();

    // Listeners go in first so a failing binding never leaves the page
    // without scroll state or the loaded class.
    driver.borrow_mut().motion = arm_motion();
}

fn arm_motion() -> Option<WebMotion> {
    match WebMotion::new() {
        Ok(mut motion) => {
            let report = register_all(&mut motion, &page_bindings());
            if !report.is_clean() {
                log::warn!("{} animation bindings failed to arm", report.failed.len());
            }
            Some(motion)
        }
        Err(err) => {
            log::warn!("animations disabled: {err}");
            None
        }
    }
}

fn schedule_frame(driver: &SharedDriver) {
    let driver_for_frame = Rc::clone(driver);
    let scheduled = request_frame(move |now| run_frame(&driver_for_frame, now));
    if let Err(err) = scheduled {
        log::debug!("scroll frame not scheduled: {err}");
        driver.borrow_mut().gate.cancel();
    }
}

fn run_frame(driver: &SharedDriver, now_ms: f64) {
    let more = {
        let mut this = driver.borrow_mut();
        if let Some(sample) = this.gate.take() {
            let update = this.scroll.try_update(|s| s.observe(sample));
            if let Some(placement) = update.and_then(|u| u.nav_transition) {
                log::trace!("navbar -> {placement:?} at {}", sample.offset);
            }
        }
        this.motion.as_mut().is_some_and(|m| m.on_frame(now_ms)) && this.gate.request()
    };
    if more {
        schedule_frame(driver);
    }
}

/// Tag `<body>` once the document has finished loading.
fn mark_loaded() {
    let complete = document().is_some_and(|d| d.ready_state() == "complete");
    if complete {
        set_body_class(LOADED_BODY_CLASS, true);
        log::info!("portfolio ready");
        return;
    }
    window_event_listener(ev::load, |_| {
        set_body_class(LOADED_BODY_CLASS, true);
        log::info!("portfolio ready");
    });
}
