//! Leptos component for the full presentation: scan gate, slides, curtain.
//!
//! Gate timers chain through `set_timeout`. Keyboard and click navigation are
//! window listeners that stay inert until the deck opens. Reaching past the
//! last slide closes the curtain and starts the sparkle field.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use super::deck::{Deck, GatePhase, NavKey, Step};
use super::types::{GateCopy, StageConfig};
use crate::components::particle_field::{CurtainSparkle, ParticleBackdrop};

/// Clicks inside these never navigate.
const NAV_EXCLUDED: [&str; 2] = ["#loader", ".fingerprint-area"];

fn click_is_excluded(ev: &MouseEvent) -> bool {
	let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
		return false;
	};
	NAV_EXCLUDED
		.iter()
		.any(|sel| matches!(target.closest(sel), Ok(Some(_))))
}

/// Start the background track quietly. Autoplay rejections are swallowed.
fn play_music(audio_ref: NodeRef<leptos::html::Audio>) {
	let Some(audio) = audio_ref.get_untracked() else {
		return;
	};
	audio.set_volume(0.3);
	match audio.play() {
		Ok(promise) => {
			let ignore = Closure::<dyn FnMut(JsValue)>::new(|_| {});
			let _ = promise.catch(&ignore);
			ignore.forget();
		}
		Err(e) => debug!("presentation: music did not start: {:?}", e),
	}
}

/// Status line pair (local, English) for a gate phase.
fn status_lines(copy: &GateCopy, phase: GatePhase) -> (String, String) {
	match phase {
		GatePhase::Locked => (copy.idle.clone(), copy.idle_en.clone()),
		GatePhase::Scanning => (copy.scanning.clone(), copy.scanning_en.clone()),
		GatePhase::Verified | GatePhase::Open => (copy.verified.clone(), copy.verified_en.clone()),
	}
}

/// Renders the scan gate, the slides and both particle backdrops.
#[component]
pub fn Presentation(config: StageConfig) -> impl IntoView {
	let StageConfig {
		slides,
		music,
		timing,
		copy,
		..
	} = config;

	let deck = RwSignal::new(Deck::new(slides.len()));
	let curtain_closed = RwSignal::new(true);
	let audio_ref = NodeRef::<leptos::html::Audio>::new();
	let badge = copy.badge.clone();
	let copy = StoredValue::new(copy);

	let start_scan = move || {
		if !deck.try_update(|d| d.begin_scan()).unwrap_or(false) {
			return;
		}
		info!("presentation: scanning");
		set_timeout(
			move || {
				deck.update(|d| {
					d.verify();
				});
				info!("presentation: identity verified");
				play_music(audio_ref);
				set_timeout(
					move || {
						deck.update(|d| {
							d.open();
						});
						set_timeout(
							move || curtain_closed.set(false),
							Duration::from_millis(timing.curtain_ms),
						);
					},
					Duration::from_millis(timing.grant_ms),
				);
			},
			Duration::from_millis(timing.scan_ms),
		);
	};

	let navigate = move |key: NavKey| match deck.try_update(|d| d.navigate(key)) {
		Some(Step::Moved(idx)) => debug!("presentation: slide {}", idx),
		Some(Step::Finale) => {
			curtain_closed.set(true);
			info!("presentation: finale");
		}
		Some(Step::Ignored) | None => {}
	};

	let keydown_cb: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> = Rc::new(RefCell::new(None));
	let click_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	Effect::new(move |_| {
		if keydown_cb.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		*keydown_cb.borrow_mut() = Some(Closure::new(move |ev: KeyboardEvent| {
			if !deck.with_untracked(|d| d.is_open()) {
				return;
			}
			if let Some(key) = NavKey::from_code(&ev.code()) {
				ev.prevent_default();
				navigate(key);
			}
		}));
		if let Some(ref cb) = *keydown_cb.borrow() {
			let _ = window.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
		}

		*click_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if !deck.with_untracked(|d| d.is_open()) || click_is_excluded(&ev) {
				return;
			}
			navigate(NavKey::Next);
		}));
		if let Some(ref cb) = *click_cb.borrow() {
			let _ = window.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}
	});

	let phase = move || deck.with(|d| d.phase());
	let verified = move || matches!(phase(), GatePhase::Verified | GatePhase::Open);
	let status = move || copy.with_value(|c| status_lines(c, phase()));
	let status_color = move || if verified() { "#00ff88" } else { "" };
	let finale = Signal::derive(move || deck.with(|d| d.in_finale()));

	let slide_views = slides
		.into_iter()
		.enumerate()
		.map(|(idx, slide)| {
			view! {
				<section class="slide" class:active=move || deck.with(|d| d.is_active(idx))>
					<h2 class="slide-title">{slide.title}</h2>
					{slide.subtitle.map(|s| view! { <p class="slide-subtitle">{s}</p> })}
					{slide.body.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
				</section>
			}
		})
		.collect_view();

	view! {
		<ParticleBackdrop />

		<div id="loader" class="loader" class:hidden=move || deck.with(|d| d.is_open())>
			<div
				id="fingerprint-area"
				class="fingerprint-area"
				class:scanning=move || phase() == GatePhase::Scanning
				class:verified=verified
				on:click=move |ev: MouseEvent| {
					ev.prevent_default();
					start_scan();
				}
				on:touchstart=move |ev: web_sys::TouchEvent| {
					ev.prevent_default();
					start_scan();
				}
			>
				<div class="fingerprint-icon" />
				<div class="scan-line" />
			</div>
			<p id="scan-status" class="scan-status" style:color=status_color>
				{move || status().0}
			</p>
			<p id="scan-status-en" class="scan-status-en" style:color=status_color>
				{move || status().1}
			</p>
			<div id="access-badge" class="access-badge" class:show=verified>
				{badge}
			</div>
		</div>

		<main class="slides">{slide_views}</main>

		<div class="progress-bar">
			<div
				id="progress"
				class="progress-fill"
				style:width=move || format!("{}%", deck.with(|d| d.progress_percent()))
			/>
		</div>

		<div
			class="navigation-overlay"
			style:opacity=move || if finale.get() { "0" } else { "1" }
		/>

		<div id="curtain" class="curtain" class:closed=move || curtain_closed.get()>
			<div class="curtain-left" />
			<div class="curtain-right" />
			<CurtainSparkle active=finale />
		</div>

		{music.map(|src| view! { <audio node_ref=audio_ref id="bgm" src=src preload="auto" /> })}
	}
}
