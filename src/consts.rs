//! Shared numeric constants for the page controllers.

// ── Scroll ──────────────────────────────────────────────────────

/// Offset past which the navbar switches to its condensed `scrolled` style.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Offset past which a downward scroll hides the navbar.
pub const NAV_HIDE_THRESHOLD_PX: f64 = 500.0;

/// Vertical translation applied to the navbar while hidden.
pub const NAV_HIDDEN_OFFSET_PX: f64 = -100.0;

/// Duration of the navbar show/hide slide.
pub const NAV_SLIDE_SECS: f64 = 0.3;

/// Space left above an anchor target when smooth-scrolling to it.
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0;

/// Duration of a smooth anchor scroll.
pub const ANCHOR_SCROLL_SECS: f64 = 1.2;

// ── Pointer effects ─────────────────────────────────────────────

/// Fraction of the pointer's offset from center a magnetic button follows.
pub const MAGNETIC_PULL: f64 = 0.3;

/// Divisor applied to pointer offsets to derive card tilt in degrees.
pub const TILT_DAMPING: f64 = 10.0;

/// Perspective distance used for card tilt.
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

/// Easing time for the trailing cursor outline.
pub const CURSOR_TRAIL_SECS: f64 = 0.3;

/// Scale applied to project images while their card is hovered.
pub const IMAGE_ZOOM_SCALE: f64 = 1.1;

// ── Contact form ────────────────────────────────────────────────

/// Delay before a success message starts fading out.
pub const STATUS_DISMISS_MS: u32 = 5000;

/// Fade-out duration of a dismissed status message.
pub const STATUS_FADE_MS: u32 = 500;

// ── Counters ────────────────────────────────────────────────────

/// Time a stat counter takes to reach its final value.
pub const COUNTER_SECS: f64 = 2.0;
