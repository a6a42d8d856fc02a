//! Particle field behind the page: drifting points joined by faint lines
//! whenever two of them are close.
//!
//! The field is pure state; drawing goes through [`Surface`] so the browser
//! canvas, the native SVG fallback and the tests share one simulation.

use rand::Rng;

use crate::core::platform::Viewport;

pub const PARTICLE_COUNT: usize = 45;

/// Pairs closer than this (strictly) are joined by a line.
pub const LINK_DISTANCE: f64 = 280.0;

/// Each velocity component is drawn from `[-MAX_SPEED, MAX_SPEED)`.
pub const MAX_SPEED: f64 = 0.2;

pub const LINE_COLOR: &str = "rgba(37, 99, 235, 0.1)";
pub const LINE_WIDTH: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(bounds: Viewport, rng: &mut R) -> Self {
        Self {
            x: rng.gen::<f64>() * bounds.width,
            y: rng.gen::<f64>() * bounds.height,
            vx: (rng.gen::<f64>() - 0.5) * 2.0 * MAX_SPEED,
            vy: (rng.gen::<f64>() - 0.5) * 2.0 * MAX_SPEED,
        }
    }

    /// Advance one frame; a component that ends up outside the bounds has
    /// its velocity inverted so the next frame carries it back in.
    fn advance(&mut self, bounds: Viewport) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > bounds.width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > bounds.height {
            self.vy = -self.vy;
        }
    }

    fn distance(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Something a frame can be drawn onto.
pub trait Surface {
    fn clear(&mut self, bounds: Viewport);
    fn line(&mut self, segment: Segment);
}

/// Collects a frame's segments; the native backdrop renders these as SVG.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBuffer {
    pub segments: Vec<Segment>,
}

impl Surface for LineBuffer {
    fn clear(&mut self, _bounds: Viewport) {
        self.segments.clear();
    }

    fn line(&mut self, segment: Segment) {
        self.segments.push(segment);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
    bounds: Viewport,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// A fresh field of [`PARTICLE_COUNT`] particles inside `bounds`.
    pub fn new<R: Rng + ?Sized>(bounds: Viewport, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(bounds, rng))
            .collect();
        Self { bounds, particles }
    }

    pub fn from_particles(bounds: Viewport, particles: Vec<Particle>) -> Self {
        Self { bounds, particles }
    }

    pub fn bounds(&self) -> Viewport {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt new bounds. Old particles are discarded, not rescaled.
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Viewport, rng: &mut R) {
        *self = Self::new(bounds, rng);
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.advance(bounds);
        }
    }

    /// Every unordered pair closer than [`LINK_DISTANCE`]. Quadratic in the
    /// particle count, which is why the count is fixed and small.
    pub fn links(&self) -> impl Iterator<Item = Segment> + '_ {
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..]
                .iter()
                .filter(move |b| a.distance(b) < LINK_DISTANCE)
                .map(move |b| Segment {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y,
                })
        })
    }

    /// Clear, move every particle, then draw the links.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.bounds);
        self.step();
        for segment in self.links() {
            surface.line(segment);
        }
    }
}
