//! scan-deck: animated slide presentation with a fingerprint scan gate.
//!
//! This crate provides a WASM-based single-page presentation with an ambient
//! particle backdrop, keyboard/click navigation, and a curtain sparkle finale.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldMode, ParticleField};
pub use components::presentation::{Deck, Presentation, StageConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("scan-deck: logging initialized");
}

/// Load stage configuration from a script element with id="stage-config".
/// Expected format: JSON with { slides: [...], music, timing, copy }
fn load_stage_config() -> Option<StageConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("stage-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match StageConfig::from_json(&json_text) {
		Ok(config) => {
			info!("scan-deck: loaded {} slides", config.slides.len());
			Some(config)
		}
		Err(e) => {
			warn!("scan-deck: failed to parse stage config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the stage configuration from the DOM and renders the presentation.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_stage_config().unwrap_or_default();
	let title = config.title.clone().unwrap_or_else(|| "Presentation".to_string());

	view! {
		<Html attr:lang="bn" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="stage">
			<Presentation config=config />
		</div>
	}
}
