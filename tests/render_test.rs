use scan_deck::components::particle_field::theme::{GOLD, ParticlePalette};
use scan_deck::components::particle_field::{
	FieldMode, Glow, Particle, ParticleField, SequenceRandom, Sparkle, render,
};
mod helpers;
use helpers::{DrawCall, RecordingSurface, SeededRandom, approx_eq};

fn particle(x: f64, y: f64) -> Particle {
	Particle {
		x,
		y,
		vx: 0.0,
		vy: 0.0,
		size: 2.0,
		alpha: 0.5,
		color: ParticlePalette::gold().colors[1],
	}
}

fn ambient(particles: Vec<Particle>) -> ParticleField {
	ParticleField::with_particles(500.0, 500.0, particles, Box::new(SequenceRandom::new(vec![0.5])))
}

#[test]
fn test_render_clears_first() {
	let field = ambient(vec![particle(10.0, 10.0)]);
	let mut surface = RecordingSurface::default();
	render(&field, &mut surface);

	assert_eq!(
		surface.calls.first(),
		Some(&DrawCall::Clear {
			width: 500.0,
			height: 500.0
		})
	);
	assert_eq!(surface.clears(), 1);
}

#[test]
fn test_two_close_particles_draw_one_line() {
	let field = ambient(vec![particle(100.0, 100.0), particle(130.0, 140.0)]);
	let mut surface = RecordingSurface::default();
	field.render(&mut surface);

	let lines = surface.lines();
	assert_eq!(lines.len(), 1);
	match lines[0] {
		DrawCall::Line {
			from,
			to,
			color,
			width,
		} => {
			assert_eq!(*from, (100.0, 100.0));
			assert_eq!(*to, (130.0, 140.0));
			assert!(approx_eq(color.a, 0.06));
			assert_eq!((color.r, color.g, color.b), (GOLD.r, GOLD.g, GOLD.b));
			assert_eq!(*width, 0.5);
		}
		other => panic!("expected a line, got {:?}", other),
	}
}

#[test]
fn test_distant_particles_draw_no_line() {
	let mut surface = RecordingSurface::default();
	ambient(vec![particle(100.0, 100.0), particle(200.0, 100.0)]).render(&mut surface);
	assert!(surface.lines().is_empty());

	let mut surface = RecordingSurface::default();
	ambient(vec![particle(100.0, 100.0), particle(400.0, 400.0)]).render(&mut surface);
	assert!(surface.lines().is_empty());
	assert_eq!(surface.circles().len(), 2);
}

#[test]
fn test_lines_cover_every_close_pair() {
	// three mutually close particles: 3 pairs
	let field = ambient(vec![
		particle(100.0, 100.0),
		particle(110.0, 100.0),
		particle(100.0, 110.0),
	]);
	let mut surface = RecordingSurface::default();
	field.render(&mut surface);
	assert_eq!(surface.lines().len(), 3);
}

#[test]
fn test_ambient_circle_uses_particle_color_and_glow() {
	let p = particle(20.0, 30.0);
	let field = ambient(vec![p.clone()]);
	let mut surface = RecordingSurface::default();
	field.render(&mut surface);

	assert_eq!(
		surface.circles()[0],
		&DrawCall::Circle {
			x: 20.0,
			y: 30.0,
			radius: 2.0,
			fill: p.color.with_alpha(0.5),
			glow: Glow {
				blur: 8.0,
				color: p.color.with_alpha(0.4),
			},
		}
	);
}

#[test]
fn test_sparkles_render_without_lines() {
	let sparkles = vec![
		Sparkle {
			x: 10.0,
			y: 10.0,
			size: 3.0,
			alpha: 0.5,
			speed: 1.0,
			direction: 0.0,
		},
		Sparkle {
			x: 12.0,
			y: 12.0,
			size: 1.5,
			alpha: 1.0,
			speed: 1.0,
			direction: 0.0,
		},
	];
	let field =
		ParticleField::with_sparkles(100.0, 100.0, sparkles, Box::new(SequenceRandom::new(vec![])));
	let mut surface = RecordingSurface::default();
	field.render(&mut surface);

	assert!(surface.lines().is_empty());
	let circles = surface.circles();
	assert_eq!(circles.len(), 2);
	match circles[0] {
		DrawCall::Circle { fill, glow, .. } => {
			assert!(approx_eq(fill.a, 0.3));
			assert_eq!(glow.blur, 12.0);
			assert_eq!(glow.color, GOLD.with_alpha(0.7));
		}
		other => panic!("expected a circle, got {:?}", other),
	}
}

#[test]
fn test_seeded_field_renders_one_circle_per_particle() {
	let mut field = ParticleField::new(FieldMode::Ambient, SeededRandom::boxed(8));
	field.initialize(1000.0, 500.0);
	let mut surface = RecordingSurface::default();
	field.render(&mut surface);
	assert_eq!(surface.circles().len(), 50);
}
