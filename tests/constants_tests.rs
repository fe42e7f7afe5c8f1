// Host-side tests for constants, their relationships and the default config.

use heart_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_within_reasonable_bounds() {
    assert!(PARTICLE_COUNT > 0);
    assert!(SIZE_MIN > 0.0 && SIZE_MAX > SIZE_MIN);
    assert!(SPEED_MIN > 0.0 && SPEED_MAX > SPEED_MIN);

    // Opacity is an alpha value
    assert!(OPACITY_MIN >= 0.0 && OPACITY_MAX <= 1.0);
    assert!(OPACITY_MAX > OPACITY_MIN);

    assert!(OSCILLATION_MIN >= 0.0 && OSCILLATION_MAX > OSCILLATION_MIN);
    assert!(SWAY_AMPLITUDE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn heart_shape_ratios_keep_lobes_above_the_point() {
    assert!(HEART_SHOULDER < HEART_LOBE);
    assert!(HEART_LOBE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_and_reveal_constants_have_logical_relationships() {
    assert!(CASCADE_STEP_MS < FADE_OUT_MS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(INTERACTION_VOLUME > 0.0 && INTERACTION_VOLUME < 1.0);
    assert_eq!(AUTOPLAY_DELAY_MS, FADE_OUT_MS);
    assert!(ENTRANCE_ANIMATION.starts_with("fadeInUp"));
    assert!(REVEAL_ROOT_MARGIN.ends_with("-50px 0px"));
}

#[test]
fn reveal_sections_are_a_subset_of_entrance_sections() {
    for s in REVEAL_SECTIONS {
        assert!(ENTRANCE_SECTIONS.contains(s), "{s} missing from entrance list");
    }
    assert_eq!(ENTRANCE_SECTIONS[0], "message-section");
    assert_eq!(ENTRANCE_SECTIONS.len(), REVEAL_SECTIONS.len() + 1);
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.particles.count, PARTICLE_COUNT);
    assert_eq!(cfg.particles.color, HEART_COLOR);
    assert_eq!(cfg.ids.canvas, CANVAS_ID);
    assert_eq!(cfg.ids.audio, AUDIO_ID);
    assert_eq!(cfg.reveal.threshold, REVEAL_THRESHOLD);
    assert_eq!(cfg.reveal.revealed_class, REVEALED_CLASS);
    assert_eq!(cfg.hidden_class, HIDDEN_CLASS);
    assert_eq!(cfg.audio.interaction_volume, INTERACTION_VOLUME);
}

#[test]
fn config_rejects_out_of_range_threshold_and_volume() {
    let mut cfg = PageConfig::default();
    cfg.reveal.threshold = 1.5;
    assert_eq!(cfg.validate(), Err(ConfigError::ThresholdOutOfRange(1.5)));

    let mut cfg = PageConfig::default();
    cfg.audio.interaction_volume = -0.1;
    assert_eq!(cfg.validate(), Err(ConfigError::VolumeOutOfRange(-0.1)));
}

#[test]
fn entrance_selector_lists_sections_in_document_order() {
    assert_eq!(
        class_selector(ENTRANCE_SECTIONS),
        ".message-section, .gallery-section, .timeline-section, .music-section, .ending-section, .qr-section"
    );
}

#[test]
fn signals_map_to_dom_events() {
    assert_eq!(Signal::Resize.event_name(), "resize");
    assert_eq!(Signal::Activate.event_name(), "click");
    assert_eq!(Signal::FirstInteraction.event_name(), "click");
    let one_shot: Vec<Signal> = Signal::ALL.into_iter().filter(|s| s.is_one_shot()).collect();
    assert_eq!(one_shot, vec![Signal::FirstInteraction]);
}
