//! Decorative particle field.
//!
//! Particles are plain records. [`ParticleField::step`] advances every
//! particle by its velocity and reverses a velocity component once the
//! particle leaves the box; rendering is left to the caller.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Field dimensions and density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleSettings {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    /// Pairs closer than this are linked.
    #[serde(default = "default_link_distance")]
    pub link_distance: f64,
}

fn default_count() -> usize {
    120
}
fn default_width() -> f64 {
    800.0
}
fn default_height() -> f64 {
    600.0
}
fn default_link_distance() -> f64 {
    100.0
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            count: default_count(),
            width: default_width(),
            height: default_height(),
            link_distance: default_link_distance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Radius, in `[1, 3)`.
    pub size: f64,
    pub speed_x: f64,
    pub speed_y: f64,
}

impl Particle {
    fn random<R: Rng>(width: f64, height: f64, rng: &mut R) -> Self {
        Self {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            size: rng.random::<f64>() * 2.0 + 1.0,
            speed_x: rng.random::<f64>() * 0.5 - 0.25,
            speed_y: rng.random::<f64>() * 0.5 - 0.25,
        }
    }

    fn update(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;
        if self.x > width || self.x < 0.0 {
            self.speed_x = -self.speed_x;
        }
        if self.y > height || self.y < 0.0 {
            self.speed_y = -self.speed_y;
        }
    }
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    /// Stroke opacity, fading to zero at the link distance.
    pub alpha: f64,
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    settings: ParticleSettings,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(settings: ParticleSettings, rng: &mut R) -> Self {
        let mut field = Self {
            settings,
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    pub fn settings(&self) -> &ParticleSettings {
        &self.settings
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn populate<R: Rng>(&mut self, rng: &mut R) {
        let (width, height) = (self.settings.width, self.settings.height);
        self.particles = (0..self.settings.count)
            .map(|_| Particle::random(width, height, &mut *rng))
            .collect();
    }

    /// Change the box size and scatter a fresh set of particles over it.
    pub fn resize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.settings.width = width;
        self.settings.height = height;
        self.populate(rng);
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let (width, height) = (self.settings.width, self.settings.height);
        for p in &mut self.particles {
            p.update(width, height);
        }
    }

    /// Every pair of distinct particles closer than the link distance.
    pub fn links(&self) -> Vec<Link> {
        let limit = self.settings.link_distance;
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
                let distance = (pa.x - pb.x).hypot(pa.y - pb.y);
                if distance < limit {
                    links.push(Link {
                        a,
                        b,
                        distance,
                        alpha: 0.3 * (1.0 - distance / limit),
                    });
                }
            }
        }
        links
    }
}
