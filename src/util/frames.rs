//! `requestAnimationFrame` helpers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Run `callback` on the next animation frame with the frame timestamp in ms.
///
/// # Errors
///
/// Returns a description of the failure when there is no window or the
/// browser refuses the request. The callback is dropped in that case.
pub fn request_frame(callback: impl FnOnce(f64) + 'static) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let cb = Closure::once_into_js(callback);
    window
        .request_animation_frame(cb.unchecked_ref())
        .map(|_handle| ())
        .map_err(|e| format!("{e:?}"))
}

/// Call `on_frame` once per frame with normalized time in `[0, 1]` until
/// `duration_ms` has elapsed. The final call always receives exactly `1.0`.
/// Without frame scheduling the effect jumps straight to its end.
pub fn run_timed<F>(duration_ms: f64, on_frame: F)
where
    F: FnMut(f64) + 'static,
{
    schedule_timed(Rc::new(Cell::new(None)), duration_ms, Rc::new(RefCell::new(on_frame)));
}

fn schedule_timed<F>(started: Rc<Cell<Option<f64>>>, duration_ms: f64, on_frame: Rc<RefCell<F>>)
where
    F: FnMut(f64) + 'static,
{
    let fallback = Rc::clone(&on_frame);
    let scheduled = request_frame(move |now| {
        let start = started.get().unwrap_or(now);
        started.set(Some(start));
        let t = if duration_ms > 0.0 { ((now - start) / duration_ms).clamp(0.0, 1.0) } else { 1.0 };
        (on_frame.borrow_mut())(t);
        if t < 1.0 {
            schedule_timed(started, duration_ms, on_frame);
        }
    });
    if let Err(err) = scheduled {
        log::debug!("frame scheduling unavailable, finishing immediately: {err}");
        (fallback.borrow_mut())(1.0);
    }
}
