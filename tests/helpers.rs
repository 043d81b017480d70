use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scan_deck::components::particle_field::{Color, Glow, RandomSource, Surface};

/// One primitive issued to a [`RecordingSurface`].
#[allow(unused)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
	Clear {
		width: f64,
		height: f64,
	},
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		fill: Color,
		glow: Glow,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		width: f64,
	},
}

/// Captures draw calls instead of painting.
#[allow(unused)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub calls: Vec<DrawCall>,
}

#[allow(unused)]
impl RecordingSurface {
	pub fn lines(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Line { .. }))
			.collect()
	}

	pub fn circles(&self) -> Vec<&DrawCall> {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Circle { .. }))
			.collect()
	}

	pub fn clears(&self) -> usize {
		self.calls
			.iter()
			.filter(|c| matches!(c, DrawCall::Clear { .. }))
			.count()
	}
}

impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.calls.push(DrawCall::Clear { width, height });
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Glow) {
		self.calls.push(DrawCall::Circle {
			x,
			y,
			radius,
			fill,
			glow,
		});
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.calls.push(DrawCall::Line {
			from,
			to,
			color,
			width,
		});
	}
}

/// Reproducible pseudo-random draws for long runs.
#[allow(unused)]
pub struct SeededRandom(StdRng);

#[allow(unused)]
impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}

	pub fn boxed(seed: u64) -> Box<Self> {
		Box::new(Self::new(seed))
	}
}

impl RandomSource for SeededRandom {
	fn next_f64(&mut self) -> f64 {
		self.0.random::<f64>()
	}
}

#[allow(unused)]
pub fn approx_eq(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}
