//! Drawing surface abstraction.
//!
//! The renderer only needs three primitives, so it talks to this trait
//! rather than to the canvas directly. The browser build implements it for
//! `CanvasRenderingContext2d`; tests substitute a recorder.

use std::f64::consts::PI;

use anyhow::{Context, anyhow};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::{Color, Glow};

/// Minimal immediate-mode 2D target.
pub trait Surface {
	/// Erase the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);

	/// Fill a circle, surrounded by a soft shadow.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Glow);

	/// Stroke a straight segment.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: Color, glow: Glow) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&fill.to_css());
		self.set_shadow_blur(glow.blur);
		self.set_shadow_color(&glow.color.to_css());
		self.fill();
		self.set_shadow_blur(0.0);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// Fetch the 2D context of a canvas.
///
/// A canvas without a 2D context cannot host a field at all, so callers treat
/// an error here as fatal and never start the frame loop.
pub fn acquire_context(canvas: &HtmlCanvasElement) -> anyhow::Result<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.map_err(|e| anyhow!("getContext(\"2d\") threw: {:?}", e))?
		.context("canvas has no 2d context")?;
	ctx.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| anyhow!("2d context is not a CanvasRenderingContext2d"))
}
