use crate::constants::{AUTOPLAY_DELAY_MS, INTERACTION_VOLUME};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioPolicy {
    /// Wait before the first (and only) autoplay attempt.
    pub autoplay_delay: Duration,
    /// Volume applied on the first interaction, as a fraction of maximum.
    pub interaction_volume: f64,
}

impl Default for AudioPolicy {
    fn default() -> Self {
        Self {
            autoplay_delay: Duration::from_millis(AUTOPLAY_DELAY_MS),
            interaction_volume: INTERACTION_VOLUME,
        }
    }
}

/// Hands out the interaction volume exactly once.
#[derive(Debug)]
pub struct VolumeGate {
    volume: f64,
    fired: bool,
}

impl VolumeGate {
    pub fn new(policy: &AudioPolicy) -> Self {
        Self {
            volume: policy.interaction_volume.clamp(0.0, 1.0),
            fired: false,
        }
    }

    /// Volume to apply for this interaction, or `None` if already applied.
    pub fn on_interaction(&mut self) -> Option<f64> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(self.volume)
    }
}
