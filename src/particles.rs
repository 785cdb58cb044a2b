use std::time::Duration;

/// How long the particle burst stays on after the future era comes into view.
pub const PARTICLE_ACTIVE_DURATION: Duration = Duration::from_secs(5);

pub const PARTICLE_COLORS: [&str; 3] = [
    "rgba(0, 240, 255, 0.8)",
    "rgba(255, 0, 160, 0.8)",
    "rgba(123, 0, 255, 0.8)",
];

pub fn density_for_width(width: f64) -> usize {
    if width > 768.0 {
        100
    } else {
        50
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: &'static str,
    pub active: bool,
}

impl Particle {
    /// `rng` yields values in `[0, 1)`.
    fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
        let x = rng() * width;
        let y = rng() * height;
        let radius = rng() * 2.0 + 1.0;
        let color_idx = ((rng() * PARTICLE_COLORS.len() as f64) as usize).min(PARTICLE_COLORS.len() - 1);
        let vx = rng() * 2.0 - 1.0;
        let vy = rng() * 2.0 - 1.0;
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            color: PARTICLE_COLORS[color_idx],
            active: false,
        }
    }

    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 {
            self.x = width;
        } else if self.x > width {
            self.x = 0.0;
        }
        if self.y < 0.0 {
            self.y = height;
        } else if self.y > height {
            self.y = 0.0;
        }
    }
}

/// Fixed-size particle pool for one viewport size.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, density: usize, mut rng: impl FnMut() -> f64) -> Self {
        let particles = (0..density)
            .map(|_| Particle::spawn(width, height, &mut rng))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Rebuilds the pool for a new viewport, sized by [`density_for_width`].
    pub fn resize(&mut self, width: f64, height: f64, rng: impl FnMut() -> f64) {
        *self = Self::new(width, height, density_for_width(width), rng);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn activate(&mut self) {
        self.particles.iter_mut().for_each(|p| p.active = true);
    }

    pub fn deactivate(&mut self) {
        self.particles.iter_mut().for_each(|p| p.active = false);
    }

    pub fn any_active(&self) -> bool {
        self.particles.iter().any(|p| p.active)
    }

    /// Moves every active particle one frame. Returns whether another frame
    /// should be scheduled.
    pub fn step(&mut self) -> bool {
        let (w, h) = (self.width, self.height);
        let mut any = false;
        for p in self.particles.iter_mut().filter(|p| p.active) {
            p.advance(w, h);
            any = true;
        }
        any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic stand-in for Math.random
    fn seq(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn test_density() {
        assert_eq!(density_for_width(1280.0), 100);
        assert_eq!(density_for_width(768.0), 50);
        assert_eq!(density_for_width(375.0), 50);
    }

    #[test]
    fn test_spawn_ranges() {
        let field = ParticleField::new(800.0, 600.0, 50, seq(&[0.0, 0.25, 0.5, 0.75, 0.999]));
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.radius));
            assert!((-1.0..1.0).contains(&p.vx));
            assert!((-1.0..1.0).contains(&p.vy));
            assert!(PARTICLE_COLORS.contains(&p.color));
            assert!(!p.active);
        }
    }

    #[test]
    fn test_step_only_runs_while_active() {
        let mut field = ParticleField::new(100.0, 100.0, 4, seq(&[0.5]));
        let before = field.particles().to_vec();
        assert!(!field.step());
        assert_eq!(field.particles(), &before[..]);

        field.activate();
        assert!(field.step());
        assert!(field.any_active());

        field.deactivate();
        assert!(!field.step());
        assert!(!field.any_active());
    }

    #[test]
    fn test_wraps_at_edges() {
        // x = 0, y = 99.9, radius 1, color 0, vx = -1, vy = 1
        let mut field = ParticleField::new(100.0, 100.0, 1, seq(&[0.0, 0.999, 0.0, 0.0, 0.0, 1.0]));
        field.activate();
        field.step();
        let p = &field.particles()[0];
        assert_eq!(p.x, 100.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_resize_rebuilds_pool() {
        let mut field = ParticleField::new(400.0, 400.0, 50, seq(&[0.3]));
        field.activate();
        field.resize(1024.0, 768.0, seq(&[0.3]));
        assert_eq!(field.particles().len(), 100);
        assert_eq!(field.size(), (1024.0, 768.0));
        assert!(!field.any_active());
    }
}
