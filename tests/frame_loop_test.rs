use std::cell::RefCell;
use std::rc::Rc;

use scan_deck::components::particle_field::{Frame, FieldMode, FrameLoop, ParticleField, Scene};
mod helpers;
use helpers::{RecordingSurface, SeededRandom};

/// Counts invocations.
#[derive(Default)]
struct Counter {
	frames: u32,
}

impl Frame for Counter {
	fn frame(&mut self) {
		self.frames += 1;
	}
}

#[test]
fn test_run_for_executes_exact_ticks() {
	let counter = Rc::new(RefCell::new(Counter::default()));
	let frame_loop = FrameLoop::new(counter.clone());

	assert_eq!(frame_loop.run_for(25), 25);
	assert_eq!(frame_loop.ticks(), 25);
	assert_eq!(counter.borrow().frames, 25);
}

#[test]
fn test_stop_halts_further_ticks() {
	let counter = Rc::new(RefCell::new(Counter::default()));
	let frame_loop = FrameLoop::new(counter.clone());
	let handle = frame_loop.handle();

	assert!(frame_loop.step());
	assert!(handle.is_running());
	handle.stop();
	assert!(!handle.is_running());

	assert!(!frame_loop.step());
	assert_eq!(frame_loop.run_for(10), 0);
	assert_eq!(counter.borrow().frames, 1);
}

#[test]
fn test_cloned_handle_controls_same_loop() {
	let frame_loop = FrameLoop::new(Rc::new(RefCell::new(Counter::default())));
	let a = frame_loop.handle();
	let b = a.clone();
	b.stop();
	assert!(!a.is_running());
}

#[test]
fn test_scene_advances_then_renders_each_tick() {
	let mut field = ParticleField::new(FieldMode::Ambient, SeededRandom::boxed(4));
	field.initialize(400.0, 250.0);
	let initial = field.particles().to_vec();
	let scene = Rc::new(RefCell::new(Scene::new(field, RecordingSurface::default())));
	let frame_loop = FrameLoop::new(scene.clone());

	assert_eq!(frame_loop.run_for(3), 3);

	let scene = scene.borrow();
	assert_eq!(scene.surface.clears(), 3);
	assert_eq!(scene.surface.circles().len(), 3 * initial.len());
	assert_ne!(scene.field.particles(), initial.as_slice());
}

#[test]
fn test_pointer_updates_between_ticks_are_seen() {
	let mut field = ParticleField::new(FieldMode::Ambient, SeededRandom::boxed(6));
	field.initialize(400.0, 400.0);
	let scene = Rc::new(RefCell::new(Scene::new(field, RecordingSurface::default())));
	let frame_loop = FrameLoop::new(scene.clone());

	frame_loop.step();
	scene.borrow_mut().field.set_pointer(200.0, 200.0);
	frame_loop.step();
	assert_eq!(scene.borrow().field.pointer(), Some((200.0, 200.0)));
	assert_eq!(frame_loop.ticks(), 2);
}
