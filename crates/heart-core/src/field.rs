use crate::config::ParticleConfig;
use crate::particle::Particle;
use crate::surface::{Bounds, Surface};
use rand::Rng;

/// Fixed-size, ordered set of hearts. Particles are recycled, never removed.
#[derive(Clone, Debug)]
pub struct ParticleField {
    config: ParticleConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: ParticleConfig, bounds: Bounds, rng: &mut R) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::spawn(&config, bounds, rng))
            .collect();
        Self { config, particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Update then draw every particle in order. Returns how many recycled.
    pub fn step<S, R>(&mut self, surface: &mut S, bounds: Bounds, rng: &mut R) -> usize
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let mut recycled = 0;
        for p in &mut self.particles {
            if p.update(bounds, self.config.sway, rng) {
                recycled += 1;
            }
            p.draw(surface, self.config.color);
        }
        recycled
    }
}
