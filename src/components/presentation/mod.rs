//! Slide presentation behind a fingerprint scan gate.
//!
//! The gate plays out as timed phases (locked, scanning, verified, open).
//! Once open, the deck advances on Space/Enter/ArrowRight/ArrowDown or a
//! click, and steps back on ArrowLeft/ArrowUp. Advancing past the last slide
//! closes the curtain for the finale.

mod component;
pub mod deck;
mod types;

pub use component::Presentation;
pub use deck::{Deck, GatePhase, NavKey, Step};
pub use types::{GateCopy, GateTiming, SlideData, StageConfig};
