//! Frame loop driving a field once per display refresh.
//!
//! In the browser the loop reschedules itself via `requestAnimationFrame`
//! until its [`LoopHandle`] is stopped. Outside the browser, [`FrameLoop::step`]
//! and [`FrameLoop::run_for`] drive a bounded number of ticks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;

use super::particles::ParticleField;
use super::surface::Surface;

/// Work performed once per tick.
pub trait Frame {
	fn frame(&mut self);
}

/// A field paired with the surface it draws on.
pub struct Scene<S: Surface> {
	pub field: ParticleField,
	pub surface: S,
}

impl<S: Surface> Scene<S> {
	pub fn new(field: ParticleField, surface: S) -> Self {
		Self { field, surface }
	}
}

impl<S: Surface> Frame for Scene<S> {
	fn frame(&mut self) {
		self.field.advance();
		self.field.render(&mut self.surface);
	}
}

/// Stops a running loop. Cloning shares the same loop.
#[derive(Clone, Debug)]
pub struct LoopHandle {
	running: Rc<Cell<bool>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
	fn new() -> Self {
		Self {
			running: Rc::new(Cell::new(true)),
			pending: Rc::new(Cell::new(None)),
		}
	}

	/// No tick runs after this returns; a pending frame request is cancelled.
	pub fn stop(&self) {
		self.running.set(false);
		if let Some(id) = self.pending.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}
}

/// Drives a shared [`Frame`].
///
/// The frame sits behind `Rc<RefCell<_>>` so event handlers (pointer, resize)
/// can mutate it between ticks on the same thread.
pub struct FrameLoop {
	frame: Rc<RefCell<dyn Frame>>,
	handle: LoopHandle,
	ticks: Rc<Cell<u64>>,
}

impl FrameLoop {
	pub fn new(frame: Rc<RefCell<dyn Frame>>) -> Self {
		Self {
			frame,
			handle: LoopHandle::new(),
			ticks: Rc::new(Cell::new(0)),
		}
	}

	pub fn handle(&self) -> LoopHandle {
		self.handle.clone()
	}

	/// Ticks executed so far.
	pub fn ticks(&self) -> u64 {
		self.ticks.get()
	}

	/// Run one tick unless stopped. Returns whether a tick ran.
	pub fn step(&self) -> bool {
		if !self.handle.is_running() {
			return false;
		}
		self.frame.borrow_mut().frame();
		self.ticks.set(self.ticks.get() + 1);
		true
	}

	/// Run up to `n` ticks, returning how many ran.
	pub fn run_for(&self, n: u64) -> u64 {
		let mut ran = 0;
		while ran < n && self.step() {
			ran += 1;
		}
		ran
	}

	/// Tick once per animation frame until stopped.
	///
	/// Browser only: requires `window.requestAnimationFrame`.
	pub fn start(self) -> LoopHandle {
		let handle = self.handle.clone();
		let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let animate_inner = animate.clone();

		*animate.borrow_mut() = Some(Closure::new(move || {
			self.handle.pending.set(None);
			if !self.step() {
				debug!("frame loop: stopped after {} ticks", self.ticks());
				return;
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				schedule(&self.handle, cb);
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			schedule(&handle, cb);
		}
		handle
	}
}

fn schedule(handle: &LoopHandle, cb: &Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		warn!("frame loop: no window, cannot schedule frame");
		return;
	};
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(id) => handle.pending.set(Some(id)),
		Err(e) => warn!("frame loop: requestAnimationFrame failed: {:?}", e),
	}
}
