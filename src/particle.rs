// Simple particle struct to keep track of individual position, velocity, size and color.
// Size and color are fixed at creation, position and velocity change every frame.

use crate::color::Hsla;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    size: f64,
    color: Hsla,
    fill_style: String,
}

impl Particle {
    pub const MIN_SIZE: f64 = 1.0;
    pub const SIZE_SPREAD: f64 = 3.0;
    // Initial velocity components fall in [-MAX_INITIAL_VELOCITY, MAX_INITIAL_VELOCITY)
    pub const MAX_INITIAL_VELOCITY: f64 = 0.25;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, size: f64, color: Hsla) -> Particle {
        Particle {
            pos,
            vel,
            size,
            fill_style: color.to_css(),
            color,
        }
    }

    /// Random particle somewhere on a `width` x `height` surface.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos = [rng.gen::<f64>() * width, rng.gen::<f64>() * height];
        let size = rng.gen::<f64>() * Particle::SIZE_SPREAD + Particle::MIN_SIZE;
        let vel = [
            (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_INITIAL_VELOCITY,
            (rng.gen::<f64>() - 0.5) * 2.0 * Particle::MAX_INITIAL_VELOCITY,
        ];
        Particle::new(pos, vel, size, Hsla::random_violet(rng))
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> Hsla {
        self.color
    }

    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }
}

/// Moves one particle by a frame: integrate, bounce off the surface edges,
/// pull toward the pointer and cap the speed.
///
/// Edges only flip the velocity. The position is left where it landed, so a
/// particle can sit just outside the surface for a frame before coming back.
pub fn advance(particle: &mut Particle, pointer: Vector2<f64>, bounds: Vector2<f64>, config: &FieldConfig) {
    particle.pos = vecmath::vec2_add(particle.pos, particle.vel);

    if particle.pos[0] > bounds[0] || particle.pos[0] < 0.0 {
        particle.vel[0] = -particle.vel[0];
    }
    if particle.pos[1] > bounds[1] || particle.pos[1] < 0.0 {
        particle.vel[1] = -particle.vel[1];
    }

    let to_pointer = vecmath::vec2_sub(pointer, particle.pos);
    let distance = vecmath::vec2_len(to_pointer);
    // A pointer exactly on the particle has no direction to pull in
    if distance > 0.0 && distance < config.attraction_radius {
        let force = (config.attraction_radius - distance) / config.attraction_radius
            * config.attraction_strength;
        let pull = vecmath::vec2_scale(vecmath::vec2_normalized(to_pointer), force);
        particle.vel = vecmath::vec2_add(particle.vel, pull);
    }

    let speed = vecmath::vec2_len(particle.vel);
    if speed > config.max_speed {
        particle.vel = vecmath::vec2_scale(particle.vel, config.max_speed / speed);
    }
}
