use crate::config::ParticleConfig;
use crate::constants::{HEART_LOBE, HEART_SHOULDER};
use crate::surface::{AlphaScope, Bounds, Surface};
use glam::DVec2;
use rand::Rng;

/// One drifting heart.
///
/// `size`, `speed`, `opacity` and `oscillation` are fixed when the particle
/// is spawned; only `pos` and `angle` change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    size: f64,
    speed: f64,
    opacity: f64,
    oscillation: f64,
    angle: f64,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(config: &ParticleConfig, bounds: Bounds, rng: &mut R) -> Self {
        let pos = DVec2::new(
            rng.gen::<f64>() * bounds.width,
            rng.gen::<f64>() * bounds.height,
        );
        Self {
            pos,
            size: config.size.sample(rng),
            speed: config.speed.sample(rng),
            opacity: config.opacity.sample(rng),
            oscillation: config.oscillation.sample(rng),
            angle: 0.0,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn oscillation(&self) -> f64 {
        self.oscillation
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Advance one frame: drift up, sway sideways and recycle at the top edge.
    /// Returns `true` when the particle was recycled to the bottom.
    pub fn update<R: Rng + ?Sized>(&mut self, bounds: Bounds, sway: f64, rng: &mut R) -> bool {
        self.pos.y -= self.speed;
        self.angle += self.oscillation;
        self.pos.x += self.angle.sin() * sway;

        if self.pos.y < -self.size {
            self.pos.y = bounds.height + self.size;
            self.pos.x = rng.gen::<f64>() * bounds.width;
            return true;
        }
        false
    }

    /// Fill the heart silhouette at the particle's opacity.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: &str) {
        let mut s = AlphaScope::new(surface, self.opacity);
        s.begin_path();
        s.set_fill_color(color);
        trace_heart(&mut *s, self.pos, self.size);
        s.fill();
    }
}

/// Two lobes meeting at a point below, traced clockwise from the top notch.
pub fn heart_segments(center: DVec2, size: f64) -> [[DVec2; 3]; 4] {
    let (x, y) = (center.x, center.y);
    let lobe = size * HEART_LOBE;
    let shoulder = size * HEART_SHOULDER;
    let p = DVec2::new;
    [
        [p(x, y - lobe), p(x - lobe, y - lobe), p(x - lobe, y)],
        [p(x - lobe, y + shoulder), p(x, y + lobe), p(x, y + size)],
        [p(x, y + lobe), p(x + lobe, y + shoulder), p(x + lobe, y)],
        [p(x + lobe, y - lobe), p(x, y - lobe), p(x, y)],
    ]
}

fn trace_heart<S: Surface + ?Sized>(surface: &mut S, center: DVec2, size: f64) {
    surface.move_to(center);
    for [c1, c2, end] in heart_segments(center, size) {
        surface.bezier_curve_to(c1, c2, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn heart_path_is_closed_and_symmetric() {
        let c = DVec2::new(10.0, 20.0);
        let segs = heart_segments(c, 10.0);
        assert_eq!(segs[3][2], c);
        assert_eq!(segs[1][2], DVec2::new(10.0, 30.0));
        // Left and right lobes mirror around x = 10.
        assert!((segs[0][2].x - 10.0 + (segs[2][2].x - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn spawn_starts_with_zero_phase_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bounds::new(320.0, 240.0);
        let p = Particle::spawn(&ParticleConfig::default(), bounds, &mut rng);
        assert_eq!(p.angle(), 0.0);
        assert!(p.pos.x >= 0.0 && p.pos.x < 320.0);
        assert!(p.pos.y >= 0.0 && p.pos.y < 240.0);
    }
}
