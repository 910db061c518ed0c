// The whole set of particles plus the bounds of the surface they live on

use crate::config::FieldConfig;
use crate::particle::{self, Particle};
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f64, height: f64) -> ParticleField {
        ParticleField {
            config,
            width,
            height,
            particles: Vec::new(),
        }
    }

    /// Throws away any existing particles and spawns a fresh set sized for
    /// `viewport_width`, spread over the current bounds.
    pub fn initialize<R: Rng + ?Sized>(&mut self, viewport_width: f64, rng: &mut R) {
        let num_particles = self.config.particle_count(viewport_width);
        self.particles.clear();
        self.particles.reserve(num_particles);
        for _ in 0..num_particles {
            self.particles
                .push(Particle::random(rng, self.width, self.height));
        }
    }

    /// New bounds only. Particles left outside get bounced back in by `advance`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn advance(&mut self, pointer: Vector2<f64>) {
        let bounds = [self.width, self.height];
        for p in &mut self.particles {
            particle::advance(p, pointer, bounds, &self.config);
        }
    }

    /// Endpoints of every unordered pair of particles closer than the
    /// connection distance.
    pub fn connections(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let max_distance = self.config.connection_distance;
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                if distance < max_distance {
                    Some((a.pos, b.pos))
                } else {
                    None
                }
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
