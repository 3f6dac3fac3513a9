//! Scroll-driven motion math.
//!
//! Pure functions mapping layout measurements (pixels) to animation
//! progress and CSS offsets. The browser glue in `scroll_fx` feeds them
//! `getBoundingClientRect` values on every scroll frame.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Marker class for elements that fade/rise in when first seen.
pub const REVEAL_CLASS: &str = "reveal";
/// Added to a reveal element once it intersects the viewport.
pub const REVEALED_CLASS: &str = "is-revealed";
/// Reveal elements carrying this class hide again when scrolled out.
pub const REVERSIBLE_CLASS: &str = "reveal--reversible";

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

/// Document scroll progress in `[0, 1]`. Content that fits the viewport is 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    clamp_unit(scroll_top / range)
}

/// Progress of an element crossing the viewport: 0 while its top is at or
/// below the viewport bottom, 1 once its bottom has left the viewport top.
pub fn traversal_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let distance = viewport_height + rect_height;
    if distance <= 0.0 {
        return 0.0;
    }
    clamp_unit((viewport_height - rect_top) / distance)
}

/// Vertical translation, in percent of the element height, for a parallax weight.
pub fn parallax_percent(progress: f64, weight: f64) -> f64 {
    weight * 100.0 * clamp_unit(progress)
}

/// Progress through a pinned section: 0 when its top reaches the viewport top,
/// 1 when its bottom reaches the viewport bottom.
pub fn pin_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let travel = section_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    clamp_unit(-section_top / travel)
}

/// Horizontal offset of a pinned track of `panels` full-width panels.
#[allow(clippy::cast_precision_loss)]
pub fn track_offset_percent(progress: f64, panels: usize) -> f64 {
    if panels < 2 {
        return 0.0;
    }
    -100.0 * (panels - 1) as f64 * clamp_unit(progress)
}

/// Offset of a scroll-scrubbed marquee that slides half its width.
pub fn marquee_offset_percent(progress: f64) -> f64 {
    -50.0 * clamp_unit(progress)
}
