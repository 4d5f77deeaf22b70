//! # cube-twist
//!
//! A 3x3x3 twisty puzzle state engine: tracks where each of the 26 visible
//! pieces sits versus where it belongs, applies the six face turns, scores
//! how far the puzzle is from solved, and generates random scrambles.
//!
//! ## Design
//!
//! - **Coordinates over facelets**: a piece position is a vector in
//!   {-1, 0, 1}³ and a face turn is a fixed 2D rotation on the two free
//!   axes, so the whole move table is one small transform.
//!
//! - **Owned contiguous state**: the cube is a single `[Piece; 27]` array.
//!   Cloning is a deep, independent copy; there is no shared ownership to
//!   reason about.
//!
//! - **Injected randomness**: scrambling takes a seedable
//!   [`ScrambleRng`](crate::core::ScrambleRng), so a seed reproduces both
//!   the scramble string and the resulting state.
//!
//! - **No solver yet**: [`Cube::solve`] is an explicit stub returning the
//!   empty string. Rendering is equally out of scope; a renderer only needs
//!   [`Cube::piece`] and [`Piece::label`](crate::core::Piece::label).
//!
//! ## Modules
//!
//! - `core`: coordinates, pieces, labels, RNG
//! - `moves`: faces, turn styles, move notation
//! - `cube`: the cube itself — storage, turns, cost, scrambling
//!
//! ## Example
//!
//! ```
//! use cube_twist::{core::ScrambleRng, Cube};
//!
//! let mut cube = Cube::new();
//! let mut rng = ScrambleRng::new(2024);
//!
//! let sequence = cube.scramble(20, &mut rng);
//! assert_eq!(sequence.split_whitespace().count(), 20);
//! assert!(cube.cost() > 0);
//!
//! // Replaying the recorded notation on a fresh cube lands on the same state.
//! let mut replay = Cube::new();
//! replay.apply_algorithm(&sequence).unwrap();
//! assert_eq!(replay, cube);
//! ```

pub mod core;
pub mod cube;
pub mod moves;

// Re-export commonly used types
pub use crate::core::{Axis, Coord, Label, Piece, ScrambleRng, ScrambleRngState};
pub use crate::cube::{Cube, PieceGrid, DEFAULT_SCRAMBLE_MOVES};
pub use crate::moves::{parse_algorithm, Face, Move, ParseMoveError, TurnStyle};
