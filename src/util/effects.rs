//! Pointer-driven micro-effects: cursor followers, magnetic buttons, card
//! tilt, and image zoom. Pure geometry plus the tweens that express it,
//! alongside the one-off tweens used by the navbar, theme toggle, and form
//! status.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::consts::{
    CURSOR_TRAIL_SECS, IMAGE_ZOOM_SCALE, MAGNETIC_PULL, NAV_SLIDE_SECS, TILT_DAMPING, TILT_PERSPECTIVE_PX,
};
use crate::state::scroll::NavPlacement;
use crate::state::theme::{TOGGLE_SPIN_EASE, TOGGLE_SPIN_SECS};
use crate::motion::binding::{Props, Tween};
use crate::util::easing::Ease;

/// Selectors whose hover morphs the cursor followers.
pub const HOVER_TARGETS: &str = "a, button, .project-card, input, textarea";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element's box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

// ── Cursor ──────────────────────────────────────────────────────

/// The dot jumps straight to the pointer.
#[must_use]
pub fn cursor_dot(pointer: Point) -> Props {
    Props::new().position(pointer.x, pointer.y)
}

/// The outline eases toward the pointer, trailing the dot.
#[must_use]
pub fn cursor_outline(pointer: Point) -> Tween {
    Tween::to(Props::new().position(pointer.x, pointer.y), CURSOR_TRAIL_SECS)
}

/// Follower tweens for entering (`true`) or leaving an interactive element:
/// `(outline, dot)`.
#[must_use]
pub fn cursor_hover(active: bool) -> (Tween, Tween) {
    let outline = if active {
        Props::new()
            .scale(1.5)
            .css("backgroundColor", "rgba(59, 130, 246, 0.1)")
            .css("borderColor", "transparent")
    } else {
        Props::new()
            .scale(1.0)
            .css("backgroundColor", "transparent")
            .css("borderColor", "var(--text-secondary)")
    };
    let dot = Props::new().scale(if active { 0.0 } else { 1.0 });
    (Tween::to(outline, 0.3), Tween::to(dot, 0.3))
}

// ── Magnetic buttons ────────────────────────────────────────────

/// Offset a magnetic button follows: a fraction of the pointer's distance
/// from the button's center.
#[must_use]
pub fn magnetic_offset(pointer: Point, bounds: Bounds) -> Point {
    let center = bounds.center();
    Point::new((pointer.x - center.x) * MAGNETIC_PULL, (pointer.y - center.y) * MAGNETIC_PULL)
}

#[must_use]
pub fn magnetic_pull(pointer: Point, bounds: Bounds) -> Tween {
    let offset = magnetic_offset(pointer, bounds);
    Tween::to(Props::new().x(offset.x).y(offset.y), 0.3)
}

/// Elastic return to rest.
#[must_use]
pub fn magnetic_release() -> Tween {
    Tween::to(Props::new().x(0.0).y(0.0), 0.5).ease(Ease::SPRING)
}

// ── Card tilt ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Rotation proportional to the pointer's offset from the card's center.
/// Pointer below center tips the top edge back; pointer right of center
/// turns the card toward it.
#[must_use]
pub fn card_tilt(pointer: Point, bounds: Bounds) -> Tilt {
    let local_x = pointer.x - bounds.left;
    let local_y = pointer.y - bounds.top;
    let center_x = bounds.width / 2.0;
    let center_y = bounds.height / 2.0;
    Tilt { rotate_x: (local_y - center_y) / TILT_DAMPING, rotate_y: (center_x - local_x) / TILT_DAMPING }
}

#[must_use]
pub fn tilt_toward(pointer: Point, bounds: Bounds) -> Tween {
    let tilt = card_tilt(pointer, bounds);
    Tween::to(
        Props::new().tilt(tilt.rotate_x, tilt.rotate_y).perspective(TILT_PERSPECTIVE_PX),
        0.5,
    )
    .ease(Ease::Power2Out)
}

#[must_use]
pub fn tilt_release() -> Tween {
    Tween::to(Props::new().tilt(0.0, 0.0).perspective(TILT_PERSPECTIVE_PX), 0.5).ease(Ease::Power2Out)
}

// ── Image zoom ──────────────────────────────────────────────────

#[must_use]
pub fn image_zoom(hovered: bool) -> Tween {
    let scale = if hovered { IMAGE_ZOOM_SCALE } else { 1.0 };
    Tween::to(Props::new().scale(scale), 0.6).ease(Ease::Power2Out)
}

// ── Chrome ──────────────────────────────────────────────────────

/// Navbar slide into `placement`.
#[must_use]
pub fn nav_slide(placement: NavPlacement) -> Tween {
    Tween::to(Props::new().y(placement.offset_y()), NAV_SLIDE_SECS).ease(Ease::Power2Out)
}

/// Theme toggle spin to an absolute rotation.
#[must_use]
pub fn theme_spin(rotation_deg: f64) -> Tween {
    Tween::to(Props::new().rotation(rotation_deg), TOGGLE_SPIN_SECS).ease(TOGGLE_SPIN_EASE)
}

/// Pop-in for a fresh success message.
#[must_use]
pub fn status_pop() -> Tween {
    Tween::from(Props::new().scale(0.8), 0.5).ease(Ease::POP)
}

#[must_use]
pub fn status_fade(fade_ms: u32) -> Tween {
    Tween::to(Props::new().opacity(0.0), f64::from(fade_ms) / 1000.0)
}
