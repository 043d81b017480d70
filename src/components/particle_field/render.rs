//! Drawing a particle field onto a [`Surface`].
//!
//! Rendering is a pure function of field state: it clears the surface, draws
//! every entity as a glowing dot and, for ambient fields, links every pair of
//! nearby particles with a faint line.

use super::particles::{ParticleField, Particle, Population, Sparkle};
use super::surface::Surface;
use super::theme::{
	AMBIENT_GLOW_ALPHA, AMBIENT_GLOW_BLUR, GOLD, Glow, LINK_LINE_WIDTH, LINK_MAX_OPACITY,
	SPARKLE_FILL_SCALE, SPARKLE_GLOW_ALPHA, SPARKLE_GLOW_BLUR,
};

/// Particles closer than this are joined by a constellation line.
pub const LINK_DISTANCE: f64 = 100.0;

/// Opacity of the line joining two particles `distance` apart, if any.
pub fn link_opacity(distance: f64) -> Option<f64> {
	if distance < LINK_DISTANCE {
		Some((1.0 - distance / LINK_DISTANCE) * LINK_MAX_OPACITY)
	} else {
		None
	}
}

/// Renders the complete field to the surface.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S) {
	surface.clear(field.width(), field.height());

	match field.population() {
		Population::Ambient(particles) => {
			draw_particles(surface, particles);
			draw_links(surface, particles);
		}
		Population::Sparkle(sparkles) => draw_sparkles(surface, sparkles),
	}
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle]) {
	for p in particles {
		let glow = Glow {
			blur: AMBIENT_GLOW_BLUR,
			color: p.color.with_alpha(AMBIENT_GLOW_ALPHA),
		};
		surface.fill_circle(p.x, p.y, p.size, p.color.with_alpha(p.alpha), glow);
	}
}

/// O(n²) over pairs; acceptable while the ambient count stays capped.
fn draw_links<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle]) {
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if let Some(opacity) = link_opacity(distance) {
				surface.stroke_line(
					(a.x, a.y),
					(b.x, b.y),
					GOLD.with_alpha(opacity),
					LINK_LINE_WIDTH,
				);
			}
		}
	}
}

fn draw_sparkles<S: Surface + ?Sized>(surface: &mut S, sparkles: &[Sparkle]) {
	let glow = Glow {
		blur: SPARKLE_GLOW_BLUR,
		color: GOLD.with_alpha(SPARKLE_GLOW_ALPHA),
	};
	for s in sparkles {
		surface.fill_circle(s.x, s.y, s.size, GOLD.with_alpha(s.alpha * SPARKLE_FILL_SCALE), glow);
	}
}

impl ParticleField {
	/// Draw this field; see [`render`].
	pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
		render(self, surface);
	}
}
