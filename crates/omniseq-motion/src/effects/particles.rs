//! Free-floating hero particles with elastic edges.

use omniseq_core::Vec2;

/// Fixed field population.
pub const PARTICLE_COUNT: usize = 50;

/// One point particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    /// Velocity in pixels per 60 Hz frame.
    pub velocity: Vec2,
    /// Radius in pixels, 1.0..3.0.
    pub size: f32,
    /// Draw opacity, 0.2..0.7.
    pub opacity: f32,
}

impl Particle {
    fn spawn(index: usize, seed: u64, width: f32, height: f32) -> Self {
        // Mix the index with the startup seed so runs differ but a fixed
        // seed stays reproducible.
        let mixed = index.wrapping_mul(31).wrapping_add(seed as usize);
        let unit = |k: usize| (mixed.wrapping_mul(k) % 1000) as f32 / 1000.0;
        Self {
            position: Vec2::new(unit(7) * width, unit(11) * height),
            velocity: Vec2::new((unit(13) - 0.5) * 0.5, (unit(17) - 0.5) * 0.5),
            size: 1.0 + unit(19) * 2.0,
            opacity: 0.2 + unit(23) * 0.5,
        }
    }
}

/// A fixed-size particle field advanced one step per frame. The field runs
/// for the page's lifetime once started.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|index| Particle::spawn(index, seed, width, height))
            .collect();
        Self {
            particles,
            bounds: Vec2::new(width, height),
        }
    }

    /// Change the field bounds. Particles keep their state; the next step
    /// reflects any that ended up outside.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Advance every particle by `delta_ms` worth of motion and reflect off
    /// the edges.
    pub fn step(&mut self, delta_ms: u64) {
        let scale = delta_ms as f32 / (1000.0 / 60.0);
        for particle in &mut self.particles {
            particle.position.x += particle.velocity.x * scale;
            particle.position.y += particle.velocity.y * scale;
            reflect(&mut particle.position.x, &mut particle.velocity.x, self.bounds.x);
            reflect(&mut particle.position.y, &mut particle.velocity.y, self.bounds.y);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

/// Fold a coordinate back inside `0.0..=limit`, pointing the velocity back
/// inward. The sign flips exactly once per crossing.
fn reflect(position: &mut f32, velocity: &mut f32, limit: f32) {
    if *position < 0.0 {
        *position = (-*position).min(limit);
        *velocity = velocity.abs();
    } else if *position > limit {
        *position = (limit - (*position - limit)).max(0.0);
        *velocity = -velocity.abs();
    }
}
