//! Injectable source of uniform random draws.

/// Yields uniform values in `[0, 1)`.
///
/// Fields own a boxed source so tests can replay exact sequences while the
/// browser build draws from `Math.random`.
pub trait RandomSource {
	fn next_f64(&mut self) -> f64;
}

/// Browser randomness via `Math.random()`.
///
/// Only callable on a wasm target with a JS host.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
	values: Vec<f64>,
	cursor: usize,
}

impl SequenceRandom {
	/// An empty list behaves like a constant `0.5`, the zero point of every random walk.
	pub fn new(values: Vec<f64>) -> Self {
		Self { values, cursor: 0 }
	}
}

impl RandomSource for SequenceRandom {
	fn next_f64(&mut self) -> f64 {
		if self.values.is_empty() {
			return 0.5;
		}
		let value = self.values[self.cursor % self.values.len()];
		self.cursor += 1;
		value
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sequence_cycles() {
		let mut rng = SequenceRandom::new(vec![0.1, 0.9]);
		let drawn: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
		assert_eq!(drawn, vec![0.1, 0.9, 0.1, 0.9, 0.1]);
	}

	#[test]
	fn empty_sequence_is_neutral() {
		let mut rng = SequenceRandom::new(Vec::new());
		assert_eq!(rng.next_f64(), 0.5);
	}
}
