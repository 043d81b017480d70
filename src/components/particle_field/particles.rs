//! Particle field simulation.
//!
//! One field type serves both backdrops. In [`FieldMode::Ambient`] it holds
//! drifting, pointer-repelled particles; in [`FieldMode::Sparkle`] it holds
//! rising glints for the closed curtain. All motion uses fixed per-tick
//! deltas, there is no notion of elapsed time.

use std::f64::consts::TAU;

use log::debug;

use super::random::RandomSource;
use super::theme::{Color, ParticlePalette};

/// Pointer influence radius for ambient particles.
pub const POINTER_RADIUS: f64 = 120.0;
/// Force at zero distance from the pointer.
pub const POINTER_STRENGTH: f64 = 0.2;
/// Per-tick velocity multiplier.
pub const DAMPING: f64 = 0.99;
/// Ambient alpha bounds.
pub const ALPHA_MIN: f64 = 0.1;
pub const ALPHA_MAX: f64 = 0.7;
/// Ambient particles per unit of viewport area.
pub const AREA_PER_PARTICLE: f64 = 10_000.0;
pub const MAX_PARTICLES: usize = 150;
pub const SPARKLE_COUNT: usize = 80;
/// Sparkle rise per tick.
pub const SPARKLE_RISE: f64 = 0.5;
/// Sparkle horizontal drift amplitude per tick.
pub const SPARKLE_DRIFT: f64 = 0.3;

/// Which backdrop a field simulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMode {
	Ambient,
	Sparkle,
}

impl FieldMode {
	/// Number of entities a field of this mode holds for the given viewport.
	pub fn count(self, width: f64, height: f64) -> usize {
		match self {
			FieldMode::Ambient => {
				let by_area = ((width * height) / AREA_PER_PARTICLE).floor();
				if by_area <= 0.0 {
					0
				} else {
					(by_area as usize).min(MAX_PARTICLES)
				}
			}
			FieldMode::Sparkle => SPARKLE_COUNT,
		}
	}
}

/// A single ambient particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub alpha: f64,
	pub color: Color,
}

impl Particle {
	fn spawn(rng: &mut dyn RandomSource, palette: &ParticlePalette, width: f64, height: f64) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			vx: (rng.next_f64() - 0.5) * 0.6,
			vy: (rng.next_f64() - 0.5) * 0.6,
			size: rng.next_f64() * 2.5 + 0.5,
			alpha: rng.next_f64() * 0.5 + 0.2,
			color: palette.pick(rng.next_f64()),
		}
	}

	/// Push away from the pointer, accumulating into velocity.
	fn repel(&mut self, px: f64, py: f64) {
		let (dx, dy) = (px - self.x, py - self.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist <= 0.0 || dist >= POINTER_RADIUS {
			return;
		}
		let force = repulsion(dist);
		self.vx -= (dx / dist) * force;
		self.vy -= (dy / dist) * force;
	}

	pub fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}
}

/// Magnitude of the pointer force at `dist`, zero outside the radius.
pub fn repulsion(dist: f64) -> f64 {
	if dist >= POINTER_RADIUS {
		return 0.0;
	}
	(POINTER_RADIUS - dist) / POINTER_RADIUS * POINTER_STRENGTH
}

/// A rising curtain glint.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub alpha: f64,
	/// Drawn per sparkle; the rise itself is the fixed [`SPARKLE_RISE`].
	pub speed: f64,
	/// Drift angle in radians.
	pub direction: f64,
}

impl Sparkle {
	fn spawn(rng: &mut dyn RandomSource, width: f64, height: f64) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			size: rng.next_f64() * 3.0 + 1.0,
			alpha: rng.next_f64(),
			speed: rng.next_f64() * 1.5 + 0.5,
			direction: rng.next_f64() * TAU,
		}
	}
}

/// Entities of a field, one variant per mode.
#[derive(Clone, Debug)]
pub enum Population {
	Ambient(Vec<Particle>),
	Sparkle(Vec<Sparkle>),
}

/// Wrap `v` into `[0, extent)`.
fn wrap(v: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	let w = v.rem_euclid(extent);
	// rem_euclid can round up to `extent` for tiny negative inputs
	if w >= extent { 0.0 } else { w }
}

/// Owns every entity of one backdrop plus its bounds and random source.
pub struct ParticleField {
	mode: FieldMode,
	population: Population,
	width: f64,
	height: f64,
	pointer: Option<(f64, f64)>,
	palette: ParticlePalette,
	rng: Box<dyn RandomSource>,
}

impl ParticleField {
	/// An empty field; call [`ParticleField::initialize`] to seed it.
	pub fn new(mode: FieldMode, rng: Box<dyn RandomSource>) -> Self {
		let population = match mode {
			FieldMode::Ambient => Population::Ambient(Vec::new()),
			FieldMode::Sparkle => Population::Sparkle(Vec::new()),
		};
		Self {
			mode,
			population,
			width: 0.0,
			height: 0.0,
			pointer: None,
			palette: ParticlePalette::default(),
			rng,
		}
	}

	/// An ambient field holding exactly `particles`.
	pub fn with_particles(
		width: f64,
		height: f64,
		particles: Vec<Particle>,
		rng: Box<dyn RandomSource>,
	) -> Self {
		Self {
			population: Population::Ambient(particles),
			width,
			height,
			..Self::new(FieldMode::Ambient, rng)
		}
	}

	/// A sparkle field holding exactly `sparkles`.
	pub fn with_sparkles(
		width: f64,
		height: f64,
		sparkles: Vec<Sparkle>,
		rng: Box<dyn RandomSource>,
	) -> Self {
		Self {
			population: Population::Sparkle(sparkles),
			width,
			height,
			..Self::new(FieldMode::Sparkle, rng)
		}
	}

	/// Discard all entities and reseed for a `width` x `height` viewport.
	pub fn initialize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		let count = self.mode.count(width, height);
		let rng = self.rng.as_mut();

		self.population = match self.mode {
			FieldMode::Ambient => Population::Ambient(
				(0..count)
					.map(|_| Particle::spawn(rng, &self.palette, width, height))
					.collect(),
			),
			FieldMode::Sparkle => Population::Sparkle(
				(0..count).map(|_| Sparkle::spawn(rng, width, height)).collect(),
			),
		};
		debug!("particle field: seeded {:?} x{} in {}x{}", self.mode, count, width, height);
	}

	/// React to a viewport change. Ambient fields reseed to the new particle
	/// count; sparkle fields keep their glints and only adopt the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		match self.mode {
			FieldMode::Ambient => self.initialize(width, height),
			FieldMode::Sparkle => {
				self.width = width;
				self.height = height;
			}
		}
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = None;
	}

	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	pub fn mode(&self) -> FieldMode {
		self.mode
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	pub fn len(&self) -> usize {
		match &self.population {
			Population::Ambient(ps) => ps.len(),
			Population::Sparkle(ss) => ss.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Ambient particles; empty for a sparkle field.
	pub fn particles(&self) -> &[Particle] {
		match &self.population {
			Population::Ambient(ps) => ps,
			Population::Sparkle(_) => &[],
		}
	}

	/// Curtain sparkles; empty for an ambient field.
	pub fn sparkles(&self) -> &[Sparkle] {
		match &self.population {
			Population::Sparkle(ss) => ss,
			Population::Ambient(_) => &[],
		}
	}

	pub fn population(&self) -> &Population {
		&self.population
	}

	/// Advance every entity by one tick.
	pub fn advance(&mut self) {
		let (width, height, pointer) = (self.width, self.height, self.pointer);
		let rng = self.rng.as_mut();

		match &mut self.population {
			Population::Ambient(particles) => {
				for p in particles.iter_mut() {
					if let Some((px, py)) = pointer {
						p.repel(px, py);
					}

					p.x += p.vx;
					p.y += p.vy;
					p.vx *= DAMPING;
					p.vy *= DAMPING;

					p.x = wrap(p.x, width);
					p.y = wrap(p.y, height);

					p.alpha = (p.alpha + (rng.next_f64() - 0.5) * 0.02).clamp(ALPHA_MIN, ALPHA_MAX);
				}
			}
			Population::Sparkle(sparkles) => {
				for s in sparkles.iter_mut() {
					s.alpha = (s.alpha + (rng.next_f64() - 0.5) * 0.08).clamp(0.0, 1.0);

					s.y -= SPARKLE_RISE;
					s.x += s.direction.sin() * SPARKLE_DRIFT;

					if s.y < 0.0 {
						s.y = height;
						s.x = rng.next_f64() * width;
					}
				}
			}
		}
	}
}
