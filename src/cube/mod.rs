//! Cube state: piece storage, face turns, cost, scrambling.

pub mod grid;
pub mod scramble;
pub mod state;

pub use grid::PieceGrid;
pub use scramble::DEFAULT_SCRAMBLE_MOVES;
pub use state::Cube;
