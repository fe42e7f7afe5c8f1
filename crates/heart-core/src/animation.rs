//! State owned by the render loop.
//!
//! The web front-end builds one [`AnimationContext`] at startup and calls
//! [`AnimationContext::frame`] from every animation-frame callback. Nothing
//! else reads or writes the particles, so no synchronization is involved.

use crate::config::ParticleConfig;
use crate::field::ParticleField;
use crate::surface::{Bounds, Surface};
use rand::Rng;

pub struct AnimationContext<R> {
    field: ParticleField,
    rng: R,
    frames: u64,
}

impl<R: Rng> AnimationContext<R> {
    pub fn new(config: ParticleConfig, bounds: Bounds, mut rng: R) -> Self {
        let field = ParticleField::new(config, bounds, &mut rng);
        log::info!(
            "[field] particles={} surface={}x{}",
            field.len(),
            bounds.width,
            bounds.height
        );
        Self {
            field,
            rng,
            frames: 0,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Clear the whole surface, then update and draw every particle.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, bounds: Bounds) {
        surface.clear(bounds);
        let recycled = self.field.step(surface, bounds, &mut self.rng);
        if recycled > 0 {
            log::trace!("[field] frame={} recycled={}", self.frames, recycled);
        }
        self.frames += 1;
    }
}
