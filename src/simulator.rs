// Ties a particle field to a surface. One `tick` is one animation frame.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

pub struct Simulator<S: Surface> {
    field: ParticleField,
    surface: S,
    pointer: Vector2<f64>,
    running: bool,
}

impl<S: Surface> Simulator<S> {
    /// Spawns the particles across the surface's current size, using the
    /// surface width as the viewport width.
    pub fn new<R: Rng + ?Sized>(surface: S, config: FieldConfig, rng: &mut R) -> Simulator<S> {
        let (width, height) = surface.size();
        let mut field = ParticleField::new(config, width, height);
        field.initialize(width, rng);
        Simulator {
            field,
            surface,
            pointer: [0.0, 0.0],
            running: true,
        }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, viewport_width: f64, rng: &mut R) {
        self.field.initialize(viewport_width, rng);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.surface.set_size(width, height);
        self.field.resize(width, height);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = [x, y];
    }

    pub fn pointer(&self) -> Vector2<f64> {
        self.pointer
    }

    /// After this, `tick` never touches the surface again.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Draws one frame. Returns whether another frame should be scheduled.
    pub fn tick(&mut self) -> Result<bool, S::Error> {
        if !self.running {
            return Ok(false);
        }
        self.surface.clear();

        let config = *self.field.config();
        self.surface
            .set_stroke(config.connection_color, config.connection_line_width);
        for (from, to) in self.field.connections() {
            self.surface.stroke_line(from, to);
        }

        self.field.advance(self.pointer);
        for p in self.field.particles() {
            self.surface.fill_circle(p.pos, p.size(), p.fill_style())?;
        }
        Ok(true)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::Infallible;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Clear,
        Stroke(String, f64),
        Line(Vector2<f64>, Vector2<f64>),
        Circle(Vector2<f64>, f64, String),
    }

    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub calls: Vec<Call>,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> RecordingSurface {
            RecordingSurface {
                width,
                height,
                calls: Vec::new(),
            }
        }

        pub fn draw_calls(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Line(..) | Call::Circle(..)))
                .count()
        }
    }

    impl Surface for RecordingSurface {
        type Error = Infallible;

        fn size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn set_size(&mut self, width: f64, height: f64) {
            self.width = width;
            self.height = height;
        }

        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn set_stroke(&mut self, color: &str, line_width: f64) {
            self.calls.push(Call::Stroke(color.to_owned(), line_width));
        }

        fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>) {
            self.calls.push(Call::Line(from, to));
        }

        fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: &str) -> Result<(), Infallible> {
            self.calls.push(Call::Circle(center, radius, color.to_owned()));
            Ok(())
        }
    }

    fn simulator(width: f64, height: f64) -> Simulator<RecordingSurface> {
        let mut rng = StdRng::seed_from_u64(11);
        Simulator::new(RecordingSurface::new(width, height), FieldConfig::default(), &mut rng)
    }

    #[test]
    fn spawns_for_surface_width() {
        assert_eq!(simulator(2000.0, 1000.0).field().particles().len(), 100);
        assert_eq!(simulator(400.0, 700.0).field().particles().len(), 20);
    }

    #[test]
    fn frame_clears_then_draws_lines_then_particles() {
        let mut sim = simulator(600.0, 400.0);
        assert_eq!(sim.tick(), Ok(true));
        let calls = &sim.surface().calls;
        assert_eq!(calls[0], Call::Clear);
        assert_eq!(calls[1], Call::Stroke("rgba(140, 90, 250, 0.1)".to_owned(), 0.3));

        let first_circle = calls
            .iter()
            .position(|c| matches!(c, Call::Circle(..)))
            .unwrap();
        assert!(calls[first_circle..]
            .iter()
            .all(|c| matches!(c, Call::Circle(..))));
        assert_eq!(calls.len() - first_circle, 30);
    }

    #[test]
    fn circles_are_drawn_after_the_move() {
        let mut sim = simulator(600.0, 400.0);
        sim.set_pointer(-5000.0, -5000.0);
        let before = sim.field().particles().to_vec();
        sim.tick().unwrap();
        let circles: Vec<_> = sim
            .surface()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Circle(pos, radius, color) => Some((*pos, *radius, color.clone())),
                _ => None,
            })
            .collect();
        for (p, (pos, radius, color)) in before.iter().zip(circles) {
            assert_eq!(pos, [p.pos[0] + p.vel[0], p.pos[1] + p.vel[1]]);
            assert_eq!(radius, p.size());
            assert_eq!(color, p.fill_style());
        }
    }

    #[test]
    fn resize_updates_surface_and_bounds() {
        let mut sim = simulator(600.0, 400.0);
        let before = sim.field().particles().to_vec();
        sim.resize(300.0, 900.0);
        assert_eq!(sim.surface().size(), (300.0, 900.0));
        assert_eq!((sim.field().width(), sim.field().height()), (300.0, 900.0));
        assert_eq!(sim.field().particles(), &before[..]);
    }

    #[test]
    fn pointer_attracts_through_tick() {
        let mut sim = simulator(400.0, 400.0);
        sim.reset(0.0, &mut StdRng::seed_from_u64(0));
        assert!(sim.field().particles().is_empty());

        sim.reset(20.0, &mut StdRng::seed_from_u64(5));
        let start = sim.field().particles()[0].clone();
        let moved = [start.pos[0] + start.vel[0], start.pos[1] + start.vel[1]];
        // Pointer 50 units to the right of where the particle lands this frame
        sim.set_pointer(moved[0] + 50.0, moved[1]);
        sim.tick().unwrap();
        let p = &sim.field().particles()[0];
        let gained = p.vel[0] - start.vel[0] * if moved[0] < 0.0 || moved[0] > 400.0 { -1.0 } else { 1.0 };
        assert!((gained - 0.1).abs() < 1e-9, "gained {}", gained);
        assert!(p.speed() <= FieldConfig::MAX_SPEED);
    }

    #[test]
    fn stopped_simulator_draws_nothing() {
        let mut sim = simulator(800.0, 600.0);
        sim.tick().unwrap();
        let drawn = sim.surface().calls.len();
        assert!(sim.surface().draw_calls() > 0);

        sim.stop();
        assert!(!sim.is_running());
        for _ in 0..10 {
            assert_eq!(sim.tick(), Ok(false));
        }
        assert_eq!(sim.surface().calls.len(), drawn);
    }
}
