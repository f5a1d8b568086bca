//! Pointer-driven micro-effects bound to individual elements: magnetic
//! buttons and tilting project cards with zooming images.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::navbar::on_anchor_click;
use crate::motion::binding::Tween;
use crate::motion::web::play_on;
use crate::util::dom::{bounds_of, pointer_of};
use crate::util::effects::{Bounds, Point, image_zoom, magnetic_pull, magnetic_release, tilt_release, tilt_toward};
use crate::util::frame_gate::FrameGate;
use crate::util::frames::request_frame;

type PointerGate = Rc<RefCell<FrameGate<Point>>>;

fn current_element(ev: &web_sys::MouseEvent) -> Option<web_sys::Element> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().map_or(None, Some))
}

/// Coalesce pointer moves over `measured` into one `effect` per frame,
/// played on `moved`.
fn follow_pointer(
    gate: &PointerGate,
    pointer: Point,
    measured: web_sys::Element,
    moved: web_sys::Element,
    effect: fn(Point, Bounds) -> Tween,
) {
    if !gate.borrow_mut().push(pointer) {
        return;
    }
    let gate_for_frame = Rc::clone(gate);
    let scheduled = request_frame(move |_ts| {
        let latest = gate_for_frame.borrow_mut().take();
        if let Some(pointer) = latest {
            play_on(&moved, &effect(pointer, bounds_of(&measured)));
        }
    });
    if let Err(err) = scheduled {
        log::debug!("pointer effect frame not scheduled: {err}");
        gate.borrow_mut().cancel();
    }
}

/// Drop any move still waiting for a frame so it cannot land after a release.
fn settle(gate: &PointerGate) {
    if gate.borrow_mut().take().is_some() {
        log::trace!("pending pointer move dropped on leave");
    }
}

/// In-page link styled as a button that leans toward the pointer.
#[component]
pub fn MagneticLink(href: &'static str, class: &'static str, children: Children) -> impl IntoView {
    let gate: PointerGate = Rc::new(RefCell::new(FrameGate::new()));
    let gate_for_leave = Rc::clone(&gate);

    view! {
        <a
            href=href
            class=class
            on:click=on_anchor_click
            on:mousemove=move |ev| {
                if let Some(el) = current_element(&ev) {
                    follow_pointer(&gate, pointer_of(&ev), el.clone(), el, magnetic_pull);
                }
            }
            on:mouseleave=move |ev| {
                settle(&gate_for_leave);
                if let Some(el) = current_element(&ev) {
                    play_on(&el, &magnetic_release());
                }
            }
        >
            {children()}
        </a>
    }
}

/// Magnetic handlers for an element that is not a [`MagneticLink`].
pub fn magnetic_handlers() -> (impl FnMut(web_sys::MouseEvent), impl FnMut(web_sys::MouseEvent)) {
    let gate: PointerGate = Rc::new(RefCell::new(FrameGate::new()));
    let gate_for_leave = Rc::clone(&gate);
    let on_move = move |ev: web_sys::MouseEvent| {
        if let Some(el) = current_element(&ev) {
            follow_pointer(&gate, pointer_of(&ev), el.clone(), el, magnetic_pull);
        }
    };
    let on_leave = move |ev: web_sys::MouseEvent| {
        settle(&gate_for_leave);
        if let Some(el) = current_element(&ev) {
            play_on(&el, &magnetic_release());
        }
    };
    (on_move, on_leave)
}

/// Project showcase card. The card itself carries the scroll entrance and
/// parallax; the tilt lives on an inner wrapper so the two never fight over
/// `transform`.
#[component]
pub fn ProjectCard(
    title: &'static str,
    summary: &'static str,
    tags: &'static [&'static str],
    accent: &'static str,
) -> impl IntoView {
    let tilt_ref = NodeRef::<leptos::html::Div>::new();
    let image_ref = NodeRef::<leptos::html::Div>::new();
    let gate: PointerGate = Rc::new(RefCell::new(FrameGate::new()));
    let gate_for_leave = Rc::clone(&gate);

    let on_enter = move |_| {
        if let Some(image) = image_ref.get_untracked() {
            play_on(&image, &image_zoom(true));
        }
    };
    let on_move = move |ev: web_sys::MouseEvent| {
        let (Some(card), Some(tilt)) = (current_element(&ev), tilt_ref.get_untracked()) else {
            return;
        };
        follow_pointer(&gate, pointer_of(&ev), card, tilt.into(), tilt_toward);
    };
    let on_leave = move |_| {
        settle(&gate_for_leave);
        if let Some(tilt) = tilt_ref.get_untracked() {
            play_on(&tilt, &tilt_release());
        }
        if let Some(image) = image_ref.get_untracked() {
            play_on(&image, &image_zoom(false));
        }
    };

    view! {
        <article class="project-card" on:mouseenter=on_enter on:mousemove=on_move on:mouseleave=on_leave>
            <div class="project-card__tilt" node_ref=tilt_ref>
                <div class="project-image-wrapper">
                    <div class="project-image" style:background=accent node_ref=image_ref></div>
                </div>
                <div class="project-info">
                    <h3>{title}</h3>
                    <p>{summary}</p>
                    <div class="project-tags">
                        {tags.iter().map(|tag| view! { <span>{*tag}</span> }).collect_view()}
                    </div>
                </div>
            </div>
        </article>
    }
}
