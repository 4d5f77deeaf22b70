//! Faces, turn styles, and move notation.

pub mod face;
pub mod turn;

pub use face::Face;
pub use turn::{parse_algorithm, Move, ParseMoveError, TurnStyle};
