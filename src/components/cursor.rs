//! Custom cursor: a dot pinned to the pointer and an outline trailing it.
//!
//! DESIGN
//! ======
//! Window-level listeners feed a shared `PointerTracker`; moves are drawn at
//! most once per frame. Hover is detected by delegation (`mouseover` plus
//! `closest`) so elements rendered later still morph the followers.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::motion::web::play_on;
use crate::state::cursor::PointerTracker;
use crate::util::dom::{pointer_of, set_style};
use crate::util::effects::{HOVER_TARGETS, cursor_dot, cursor_hover, cursor_outline};
use crate::util::frames::request_frame;

type Follower = NodeRef<leptos::html::Div>;

fn request_follow(tracker: &Rc<RefCell<PointerTracker>>, dot: Follower, outline: Follower) {
    let tracker_for_frame = Rc::clone(tracker);
    let scheduled = request_frame(move |_ts| {
        let Some(pointer) = tracker_for_frame.borrow_mut().frame() else {
            return;
        };
        if let Some(dot) = dot.get_untracked() {
            for (name, value) in cursor_dot(pointer).keyframe(0).values {
                set_style(&dot, name, &value);
            }
        }
        if let Some(outline) = outline.get_untracked() {
            play_on(&outline, &cursor_outline(pointer));
        }
    });
    if let Err(err) = scheduled {
        log::debug!("cursor frame not scheduled: {err}");
        tracker.borrow_mut().frame_failed();
    }
}

fn morph(dot: Follower, outline: Follower, active: bool) {
    let (outline_tween, dot_tween) = cursor_hover(active);
    if let Some(outline) = outline.get_untracked() {
        play_on(&outline, &outline_tween);
    }
    if let Some(dot) = dot.get_untracked() {
        play_on(&dot, &dot_tween);
    }
}

fn over_hover_target(ev: &web_sys::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().map_or(None, Some))
        .is_some_and(|el| matches!(el.closest(HOVER_TARGETS), Ok(Some(_))))
}

#[component]
pub fn CursorFollowers() -> impl IntoView {
    let dot_ref: Follower = NodeRef::new();
    let outline_ref: Follower = NodeRef::new();
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));

    {
        let tracker = Rc::clone(&tracker);
        window_event_listener(ev::mousemove, move |ev| {
            let schedule = tracker.borrow_mut().moved(pointer_of(&ev));
            if schedule {
                request_follow(&tracker, dot_ref, outline_ref);
            }
        });
    }
    {
        let tracker = Rc::clone(&tracker);
        window_event_listener(ev::mouseover, move |ev| {
            let changed = tracker.borrow_mut().hover(over_hover_target(&ev));
            if let Some(active) = changed {
                morph(dot_ref, outline_ref, active);
            }
        });
    }
    window_event_listener(ev::mouseout, move |ev| {
        if ev.related_target().is_some() {
            return;
        }
        let changed = tracker.borrow_mut().hover(false);
        if let Some(active) = changed {
            morph(dot_ref, outline_ref, active);
        }
    });

    view! {
        <div class="cursor-dot" node_ref=dot_ref></div>
        <div class="cursor-outline" node_ref=outline_ref></div>
    }
}
