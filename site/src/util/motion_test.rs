use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// scroll_progress
// =============================================================

#[test]
fn scroll_progress_spans_scrollable_range() {
    assert!(approx(scroll_progress(0.0, 3000.0, 1000.0), 0.0));
    assert!(approx(scroll_progress(1000.0, 3000.0, 1000.0), 0.5));
    assert!(approx(scroll_progress(2000.0, 3000.0, 1000.0), 1.0));
}

#[test]
fn scroll_progress_is_zero_when_content_fits() {
    assert!(approx(scroll_progress(0.0, 800.0, 1000.0), 0.0));
    assert!(approx(scroll_progress(50.0, 1000.0, 1000.0), 0.0));
}

#[test]
fn scroll_progress_clamps_overscroll() {
    assert!(approx(scroll_progress(-40.0, 3000.0, 1000.0), 0.0));
    assert!(approx(scroll_progress(2500.0, 3000.0, 1000.0), 1.0));
}

// =============================================================
// traversal_progress / parallax
// =============================================================

#[test]
fn traversal_progress_runs_from_entry_to_exit() {
    // Top at viewport bottom: just entering.
    assert!(approx(traversal_progress(1000.0, 500.0, 1000.0), 0.0));
    // Centered-ish: halfway through the 1500px journey.
    assert!(approx(traversal_progress(250.0, 500.0, 1000.0), 0.5));
    // Bottom at viewport top: gone.
    assert!(approx(traversal_progress(-500.0, 500.0, 1000.0), 1.0));
}

#[test]
fn traversal_progress_clamps_outside_viewport() {
    assert!(approx(traversal_progress(4000.0, 500.0, 1000.0), 0.0));
    assert!(approx(traversal_progress(-4000.0, 500.0, 1000.0), 1.0));
}

#[test]
fn parallax_percent_scales_by_weight() {
    assert!(approx(parallax_percent(1.0, 0.12), 12.0));
    assert!(approx(parallax_percent(0.5, -0.08), -4.0));
    assert!(approx(parallax_percent(2.0, 0.05), 5.0));
    assert!(approx(parallax_percent(f64::NAN, 0.05), 0.0));
}

// =============================================================
// Pinned horizontal track
// =============================================================

#[test]
fn pin_progress_tracks_section_travel() {
    // Section 3000px tall, viewport 1000px: 2000px of pinned travel.
    assert!(approx(pin_progress(100.0, 3000.0, 1000.0), 0.0));
    assert!(approx(pin_progress(-1000.0, 3000.0, 1000.0), 0.5));
    assert!(approx(pin_progress(-2600.0, 3000.0, 1000.0), 1.0));
}

#[test]
fn pin_progress_zero_without_travel() {
    assert!(approx(pin_progress(-300.0, 900.0, 1000.0), 0.0));
}

#[test]
fn track_offset_moves_one_panel_per_step() {
    assert!(approx(track_offset_percent(0.0, 3), 0.0));
    assert!(approx(track_offset_percent(0.5, 3), -100.0));
    assert!(approx(track_offset_percent(1.0, 3), -200.0));
    assert!(approx(track_offset_percent(1.0, 1), 0.0));
}

#[test]
fn marquee_offset_slides_half_width() {
    assert!(approx(marquee_offset_percent(0.0), 0.0));
    assert!(approx(marquee_offset_percent(1.0), -50.0));
}
