//! Colors and glow styles for the particle backdrops.
//!
//! Both fields draw from the same golden hue family: the ambient field picks
//! one of four palette entries per particle, the curtain sparkles all share
//! the primary gold.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits the `rgba(...)` form so per-frame alpha survives formatting.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Primary gold shared by sparkles and connection lines.
pub const GOLD: Color = Color::rgb(255, 215, 0);

/// Fixed palette for ambient particles.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	pub colors: [Color; 4],
}

impl ParticlePalette {
	pub const fn gold() -> Self {
		Self {
			colors: [
				GOLD,                       // Gold
				Color::rgb(218, 165, 32),  // Goldenrod
				Color::rgb(255, 193, 37),  // Amber
				Color::rgb(184, 134, 11),  // Dark goldenrod
			],
		}
	}

	/// Pick an entry from a uniform draw in [0, 1).
	pub fn pick(&self, r: f64) -> Color {
		let last = self.colors.len() - 1;
		let idx = ((r * self.colors.len() as f64).floor() as usize).min(last);
		self.colors[idx]
	}
}

impl Default for ParticlePalette {
	fn default() -> Self {
		Self::gold()
	}
}

/// Soft shadow drawn around a filled circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// Shadow blur radius in pixels
	pub blur: f64,
	/// Shadow color
	pub color: Color,
}

/// Glow blur for ambient particles.
pub const AMBIENT_GLOW_BLUR: f64 = 8.0;
/// Alpha of the ambient glow, independent of the particle's own alpha.
pub const AMBIENT_GLOW_ALPHA: f64 = 0.4;
/// Glow blur for curtain sparkles.
pub const SPARKLE_GLOW_BLUR: f64 = 12.0;
/// Alpha of the sparkle glow.
pub const SPARKLE_GLOW_ALPHA: f64 = 0.7;
/// Sparkle fill alpha is scaled down by this factor.
pub const SPARKLE_FILL_SCALE: f64 = 0.6;
/// Stroke width of constellation lines.
pub const LINK_LINE_WIDTH: f64 = 0.5;
/// Opacity of a constellation line between two coincident particles.
pub const LINK_MAX_OPACITY: f64 = 0.12;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pick_covers_every_entry_and_clamps_the_top() {
		let palette = ParticlePalette::gold();
		assert_eq!(palette.pick(0.0), palette.colors[0]);
		assert_eq!(palette.pick(0.3), palette.colors[1]);
		assert_eq!(palette.pick(0.6), palette.colors[2]);
		assert_eq!(palette.pick(0.99), palette.colors[3]);
		assert_eq!(palette.pick(1.0), palette.colors[3]);
	}

	#[test]
	fn css_keeps_alpha() {
		assert_eq!(GOLD.with_alpha(0.06).to_css(), "rgba(255, 215, 0, 0.06)");
		assert_eq!(GOLD.to_css(), "rgba(255, 215, 0, 1)");
	}
}
