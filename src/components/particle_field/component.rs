//! Leptos components hosting particle fields on canvas elements.
//!
//! Each component creates a canvas, seeds a [`ParticleField`] sized to the
//! viewport and starts a [`FrameLoop`]. Window listeners feed pointer and
//! resize events into the shared scene between frames.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::frame_loop::{FrameLoop, Scene};
use super::particles::{FieldMode, ParticleField};
use super::random::MathRandom;
use super::surface::acquire_context;

type CanvasScene = Rc<RefCell<Scene<CanvasRenderingContext2d>>>;

fn viewport_size(window: &Window) -> (f64, f64) {
	let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
	let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
	(w, h)
}

/// Size the canvas, grab its context and seed a field of `mode`.
fn mount_scene(canvas: &HtmlCanvasElement, mode: FieldMode, w: f64, h: f64) -> anyhow::Result<CanvasScene> {
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = acquire_context(canvas)?;

	let mut field = ParticleField::new(mode, Box::new(MathRandom));
	field.initialize(w, h);
	Ok(Rc::new(RefCell::new(Scene::new(field, ctx))))
}

/// Resize the canvas and hand the new bounds to the field.
fn resize_closure(scene: CanvasScene, canvas: HtmlCanvasElement) -> Closure<dyn FnMut()> {
	Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = viewport_size(&win);
		canvas.set_width(nw as u32);
		canvas.set_height(nh as u32);
		scene.borrow_mut().field.resize(nw, nh);
	})
}

/// Full-viewport ambient particles that shy away from the mouse.
#[component]
pub fn ParticleBackdrop() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene: Rc<RefCell<Option<CanvasScene>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if scene.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		let mounted = match mount_scene(&canvas, FieldMode::Ambient, w, h) {
			Ok(s) => s,
			Err(e) => {
				error!("particle backdrop: {:#}", e);
				return;
			}
		};
		*scene.borrow_mut() = Some(mounted.clone());

		let scene_mm = mounted.clone();
		*pointer_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			scene_mm
				.borrow_mut()
				.field
				.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
		}));
		if let Some(ref cb) = *pointer_cb.borrow() {
			let _ = window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		*resize_cb.borrow_mut() = Some(resize_closure(mounted.clone(), canvas));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let count = mounted.borrow().field.len();
		FrameLoop::new(mounted).start();
		info!("particle backdrop: started with {} particles", count);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="bg-canvas"
			class="bg-canvas"
			style="position: fixed; inset: 0; pointer-events: none;"
		/>
	}
}

/// Rising golden glints over the closed curtain.
///
/// The field is created the first time `active` turns true and runs from then
/// on; later toggles have no effect.
#[component]
pub fn CurtainSparkle(#[prop(into)] active: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let started = Rc::new(Cell::new(false));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let active = active.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if !active || started.get() {
			return;
		}
		started.set(true);
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		let mounted = match mount_scene(&canvas, FieldMode::Sparkle, w, h) {
			Ok(s) => s,
			Err(e) => {
				error!("curtain sparkle: {:#}", e);
				return;
			}
		};

		*resize_cb.borrow_mut() = Some(resize_closure(mounted.clone(), canvas));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		FrameLoop::new(mounted).start();
		info!("curtain sparkle: started");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="curtain-sparkle"
			class="curtain-sparkle"
			style="position: absolute; inset: 0; pointer-events: none;"
		/>
	}
}
