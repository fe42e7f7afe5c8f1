// Host-side tests for scroll reveal bookkeeping and the injected stylesheet.

use heart_core::*;

#[test]
fn repeated_intersections_flag_once() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.observe(2, true));
    for _ in 0..10 {
        assert!(!tracker.observe(2, true));
    }
    assert!(tracker.observe(3, true));
}

#[test]
fn leaving_the_viewport_never_unreveals() {
    let mut tracker = RevealTracker::new();
    assert!(tracker.observe(0, true));
    assert!(!tracker.observe(0, false));
    assert!(!tracker.observe(0, true));
}

#[test]
fn non_intersecting_entries_do_nothing() {
    let mut tracker = RevealTracker::new();
    assert!(!tracker.observe(1, false));
    assert!(!tracker.observe(1, false));
    assert!(tracker.observe(1, true));
}

#[test]
fn sections_are_tracked_independently() {
    let mut tracker = RevealTracker::new();
    let flagged: Vec<bool> = [3, 1, 3, 4, 1, 0]
        .iter()
        .map(|&i| tracker.observe(i, true))
        .collect();
    assert_eq!(flagged, vec![true, true, false, true, false, true]);
    assert_eq!(flagged.iter().filter(|&&f| f).count(), 4);
}

#[test]
fn stylesheet_defines_keyframes_and_both_states() {
    let css = reveal_stylesheet(REVEAL_SECTIONS, REVEALED_CLASS);
    assert!(css.contains("@keyframes fadeInUp"));
    assert!(css.contains("translateY(30px)"));
    assert!(css.contains("transition: opacity 0.8s ease, transform 0.8s ease"));
    for section in REVEAL_SECTIONS {
        assert!(css.contains(&format!(".{section},")) || css.contains(&format!(".{section} {{")));
        assert!(css.contains(&format!(".{section}.animated")));
    }
    assert!(!css.contains("message-section"));
}

#[test]
fn stylesheet_without_sections_keeps_only_keyframes() {
    let css = reveal_stylesheet(&[], REVEALED_CLASS);
    assert!(css.contains("@keyframes fadeInUp"));
    assert!(!css.contains("transition"));
}
