//! # Pitch Diagrams
//!
//! Static backdrop for shot maps. Nothing here feeds the probability model.

pub mod figure;
pub mod renderer;

pub use figure::{Axes, Element, Figure, Point};
pub use renderer::{create_pitch, PitchRenderer};
