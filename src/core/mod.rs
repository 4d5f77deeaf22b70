//! Core value types: coordinates, pieces, RNG.
//!
//! These are the building blocks the cube state is made of; all mutation
//! flows through [`crate::cube::Cube`].

pub mod coord;
pub mod piece;
pub mod rng;

pub use coord::{Axis, Coord};
pub use piece::{Label, Piece};
pub use rng::{ScrambleRng, ScrambleRngState};
