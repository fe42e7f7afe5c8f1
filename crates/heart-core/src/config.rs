//! Page configuration assembled from the constants in [`crate::constants`].

use crate::audio::AudioPolicy;
use crate::constants::*;
use crate::transition::TransitionPlan;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("particle field must hold at least one particle")]
    EmptyField,
    #[error("particle size must stay positive (min was {0})")]
    NonPositiveSize(f64),
    #[error("particle opacity span {min}..{max} leaves [0, 1]")]
    OpacityOutOfRange { min: f64, max: f64 },
    #[error("{name} span is inverted ({min} > {max})")]
    InvertedSpan { name: &'static str, min: f64, max: f64 },
    #[error("reveal threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("interaction volume {0} is outside [0, 1]")]
    VolumeOutOfRange(f64),
}

/// Half-open `[min, max)` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.min + rng.gen::<f64>() * (self.max - self.min)
    }

    fn check(&self, name: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedSpan {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub size: Span,
    pub speed: Span,
    pub opacity: Span,
    pub oscillation: Span,
    pub sway: f64,
    pub color: &'static str,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            size: Span::new(SIZE_MIN, SIZE_MAX),
            speed: Span::new(SPEED_MIN, SPEED_MAX),
            opacity: Span::new(OPACITY_MIN, OPACITY_MAX),
            oscillation: Span::new(OSCILLATION_MIN, OSCILLATION_MAX),
            sway: SWAY_AMPLITUDE,
            color: HEART_COLOR,
        }
    }
}

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyField);
        }
        self.size.check("size")?;
        self.speed.check("speed")?;
        self.opacity.check("opacity")?;
        self.oscillation.check("oscillation")?;
        if self.size.min <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.size.min));
        }
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(ConfigError::OpacityOutOfRange {
                min: self.opacity.min,
                max: self.opacity.max,
            });
        }
        Ok(())
    }
}

/// Ids of the elements the page wiring looks up.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementIds {
    pub landing: &'static str,
    pub main: &'static str,
    pub enter_button: &'static str,
    pub canvas: &'static str,
    pub audio: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            landing: LANDING_ID,
            main: MAIN_ID,
            enter_button: ENTER_BUTTON_ID,
            canvas: CANVAS_ID,
            audio: AUDIO_ID,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub sections: &'static [&'static str],
    pub revealed_class: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
            sections: REVEAL_SECTIONS,
            revealed_class: REVEALED_CLASS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub ids: ElementIds,
    pub particles: ParticleConfig,
    pub transition: TransitionPlan,
    pub entrance_sections: &'static [&'static str],
    pub entrance_animation: &'static str,
    pub hidden_class: &'static str,
    pub reveal: RevealConfig,
    pub audio: AudioPolicy,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            particles: ParticleConfig::default(),
            transition: TransitionPlan::default(),
            entrance_sections: ENTRANCE_SECTIONS,
            entrance_animation: ENTRANCE_ANIMATION,
            hidden_class: HIDDEN_CLASS,
            reveal: RevealConfig::default(),
            audio: AudioPolicy::default(),
        }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.particles.validate()?;
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.reveal.threshold));
        }
        if !(0.0..=1.0).contains(&self.audio.interaction_volume) {
            return Err(ConfigError::VolumeOutOfRange(self.audio.interaction_volume));
        }
        Ok(())
    }
}

/// Comma-separated class selector, e.g. `.a, .b`.
pub fn class_selector(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| format!(".{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(PageConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_size_and_empty_field() {
        let mut cfg = PageConfig::default();
        cfg.particles.size = Span::new(0.0, 4.0);
        assert_eq!(cfg.validate(), Err(ConfigError::NonPositiveSize(0.0)));

        let mut cfg = PageConfig::default();
        cfg.particles.count = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyField));
    }

    #[test]
    fn rejects_opacity_above_one() {
        let mut cfg = PageConfig::default();
        cfg.particles.opacity = Span::new(0.5, 1.2);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OpacityOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_inverted_span() {
        let mut cfg = PageConfig::default();
        cfg.particles.speed = Span::new(4.0, 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvertedSpan { name: "speed", .. })
        ));
    }

    #[test]
    fn selector_joins_classes() {
        assert_eq!(class_selector(&["a", "b-c"]), ".a, .b-c");
        assert_eq!(class_selector(&[]), "");
    }
}
