// Shared tuning constants for the particle field, page choreography and audio.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const HEART_COLOR: &str = "#ff69b4";
pub const SIZE_MIN: f64 = 5.0;
pub const SIZE_MAX: f64 = 15.0;
pub const SPEED_MIN: f64 = 1.0; // surface px per frame
pub const SPEED_MAX: f64 = 4.0;
pub const OPACITY_MIN: f64 = 0.5;
pub const OPACITY_MAX: f64 = 1.0;
pub const OSCILLATION_MIN: f64 = 0.0; // radians per frame
pub const OSCILLATION_MAX: f64 = 0.05;
pub const SWAY_AMPLITUDE: f64 = 0.5; // horizontal px per frame at sin(angle) == 1

// Heart silhouette control-point ratios (multiples of particle size)
pub const HEART_LOBE: f64 = 0.7;
pub const HEART_SHOULDER: f64 = 0.5;

// Page transition (milliseconds)
pub const FADE_OUT_MS: u64 = 1000;
pub const CASCADE_STEP_MS: u64 = 200;
pub const ENTRANCE_ANIMATION: &str = "fadeInUp 1s forwards";

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Audio
pub const AUTOPLAY_DELAY_MS: u64 = 1000;
pub const INTERACTION_VOLUME: f64 = 0.3;

// Element ids expected in the host page
pub const LANDING_ID: &str = "landingPage";
pub const MAIN_ID: &str = "mainContent";
pub const ENTER_BUTTON_ID: &str = "enterButton";
pub const CANVAS_ID: &str = "heartCanvas";
pub const AUDIO_ID: &str = "backgroundMusic";

// Class names
pub const HIDDEN_CLASS: &str = "hidden";
pub const REVEALED_CLASS: &str = "animated";

/// Sections that cascade in when the main view is shown, in document order.
pub const ENTRANCE_SECTIONS: &[&str] = &[
    "message-section",
    "gallery-section",
    "timeline-section",
    "music-section",
    "ending-section",
    "qr-section",
];

/// Sections revealed on scroll. The message section is visible on entry.
pub const REVEAL_SECTIONS: &[&str] = &[
    "gallery-section",
    "timeline-section",
    "music-section",
    "ending-section",
    "qr-section",
];
