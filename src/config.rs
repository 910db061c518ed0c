// Tunable constants for the particle field. Default matches the hero background.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    // One particle per this many pixels of viewport width
    pub pixels_per_particle: f64,
    pub connection_distance: f64,
    pub attraction_radius: f64,
    pub attraction_strength: f64,
    pub max_speed: f64,
    pub connection_line_width: f64,
    pub connection_color: &'static str,
}

impl FieldConfig {
    pub const MAX_PARTICLES: usize = 100;
    pub const PIXELS_PER_PARTICLE: f64 = 20.0;
    pub const CONNECTION_DISTANCE: f64 = 150.0;
    pub const ATTRACTION_RADIUS: f64 = 100.0;
    pub const ATTRACTION_STRENGTH: f64 = 0.2;
    pub const MAX_SPEED: f64 = 2.0;

    /// Number of particles to spawn for a viewport of the given width.
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        if viewport_width.is_nan() || viewport_width <= 0.0 {
            return 0;
        }
        let by_width = (viewport_width / self.pixels_per_particle).floor() as usize;
        by_width.min(self.max_particles)
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            max_particles: FieldConfig::MAX_PARTICLES,
            pixels_per_particle: FieldConfig::PIXELS_PER_PARTICLE,
            connection_distance: FieldConfig::CONNECTION_DISTANCE,
            attraction_radius: FieldConfig::ATTRACTION_RADIUS,
            attraction_strength: FieldConfig::ATTRACTION_STRENGTH,
            max_speed: FieldConfig::MAX_SPEED,
            connection_line_width: 0.3,
            connection_color: "rgba(140, 90, 250, 0.1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_is_capped() {
        assert_eq!(FieldConfig::default().particle_count(2000.0), 100);
        assert_eq!(FieldConfig::default().particle_count(3840.0), 100);
    }

    #[test]
    fn narrow_viewport_scales_with_width() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(400.0), 20);
        assert_eq!(config.particle_count(419.0), 20);
        assert_eq!(config.particle_count(19.0), 0);
    }

    #[test]
    fn degenerate_width_spawns_nothing() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(0.0), 0);
        assert_eq!(config.particle_count(-50.0), 0);
        assert_eq!(config.particle_count(f64::NAN), 0);
    }
}
