//! Thin `web-sys` helpers shared by components and the animation engine.

use wasm_bindgen::JsCast;

use crate::state::scroll::ScrollSample;
use crate::util::easing::Ease;
use crate::util::effects::{Bounds, Point};
use crate::util::frames::run_timed;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Elements of a `NodeList`, skipping non-element nodes.
#[must_use]
pub fn elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| match node.dyn_into::<web_sys::Element>() {
            Ok(el) => Some(el),
            Err(_) => None,
        })
        .collect()
}

#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[must_use]
pub fn bounds_of(el: &web_sys::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[must_use]
pub fn pointer_of(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[must_use]
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| match w.inner_height() {
            Ok(h) => h.as_f64(),
            Err(_) => None,
        })
        .unwrap_or(0.0)
}

/// Current scroll geometry of the window.
#[must_use]
pub fn scroll_sample() -> Option<ScrollSample> {
    let window = web_sys::window()?;
    let offset = match window.scroll_y() {
        Ok(y) => y,
        Err(_) => return None,
    };
    let document_height = window
        .document()
        .and_then(|d| d.body())
        .map_or(0.0, |b| f64::from(b.scroll_height()));
    Some(ScrollSample::new(offset, document_height, viewport_height()))
}

/// Set an inline style property, logging failures.
pub fn set_style(el: &web_sys::HtmlElement, name: &str, value: &str) {
    if let Err(err) = el.style().set_property(name, value) {
        log::debug!("style {name} not applied: {err:?}");
    }
}

/// Add or remove `class` on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if on { classes.add_1(class) } else { classes.remove_1(class) };
    if let Err(err) = result {
        log::debug!("body class {class} not updated: {err:?}");
    }
}

/// Whether the user asked for reduced motion.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| match w.match_media(REDUCED_MOTION_QUERY) {
            Ok(mq) => mq,
            Err(_) => None,
        })
        .is_some_and(|mq| mq.matches())
}

/// Scroll the window to `top` over `duration_s` with `ease`.
pub fn smooth_scroll_to(top: f64, duration_s: f64, ease: Ease) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let from = window.scroll_y().unwrap_or(0.0);
    run_timed(duration_s * 1000.0, move |t| {
        window.scroll_to_with_x_and_y(0.0, from + (top - from) * ease.apply(t));
    });
}
