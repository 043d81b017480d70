//! UI components: the presentation shell and its particle backdrops.

pub mod particle_field;
pub mod presentation;
