//! Canvas particle backdrops.
//!
//! Two variants share one simulation:
//! - **Ambient**: drifting golden dots, repelled by the mouse and joined by
//!   faint constellation lines when close together
//! - **Sparkle**: rising glints over the closed curtain, no lines, no pointer
//!
//! Simulation, rendering and scheduling are split so the field can be driven
//! tick by tick against any [`Surface`].
//!
//! # Example
//!
//! ```ignore
//! use scan_deck::components::particle_field::{FieldMode, ParticleField, SequenceRandom};
//!
//! let mut field = ParticleField::new(FieldMode::Ambient, Box::new(SequenceRandom::new(vec![0.25, 0.75])));
//! field.initialize(1280.0, 720.0);
//! field.advance();
//! field.render(&mut surface);
//! ```

mod component;
mod frame_loop;
mod particles;
mod random;
mod render;
mod surface;
pub mod theme;

pub use component::{CurtainSparkle, ParticleBackdrop};
pub use frame_loop::{Frame, FrameLoop, LoopHandle, Scene};
pub use particles::{
	ALPHA_MAX, ALPHA_MIN, DAMPING, FieldMode, MAX_PARTICLES, POINTER_RADIUS, Particle,
	ParticleField, Population, SPARKLE_COUNT, Sparkle, repulsion,
};
pub use random::{MathRandom, RandomSource, SequenceRandom};
pub use render::{LINK_DISTANCE, link_opacity, render};
pub use surface::{Surface, acquire_context};
pub use theme::{Color, Glow};
