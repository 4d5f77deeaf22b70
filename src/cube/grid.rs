//! Piece storage: one owned contiguous 3x3x3 grid.
//!
//! Pieces are addressed by their `current` coordinate, shifted by +1 per
//! axis into a 0..3 index and flattened. The grid replaces the usual
//! heap-of-pointers 3D array with a single `[Piece; 27]`, so cloning a cube
//! is a plain value copy with no aliasing.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, Piece};

/// Linear index of a coordinate: `(x+1)*9 + (y+1)*3 + (z+1)`.
fn index(c: Coord) -> usize {
    // Coord construction already enforces the {-1, 0, 1} domain.
    debug_assert!(c.in_domain());
    ((c.x() + 1) as usize) * 9 + ((c.y() + 1) as usize) * 3 + ((c.z() + 1) as usize)
}

/// The 27 pieces of the cube, indexed by current position.
///
/// Invariant: the piece stored at a cell has `current` equal to that cell's
/// coordinate. Construction establishes it and [`relocate`](Self::relocate)
/// preserves it whenever the batch's new positions are a permutation of its
/// old ones — which every face turn is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceGrid([Piece; 27]);

impl PieceGrid {
    /// A fully solved grid: every piece at home.
    #[must_use]
    pub fn solved() -> Self {
        let mut pieces = [Piece::new(Coord::CORE); 27];
        for coord in Coord::all() {
            pieces[index(coord)] = Piece::new(coord);
        }
        Self(pieces)
    }

    /// The piece currently stored at `coord`.
    #[must_use]
    pub fn piece(&self, coord: Coord) -> &Piece {
        &self.0[index(coord)]
    }

    /// Write a batch of moved pieces back, each at its new `current`.
    ///
    /// All new positions must be computed from the pre-move grid before this
    /// is called; interleaving reads and writes within one turn would let
    /// pieces overwrite each other mid-transform.
    pub(crate) fn relocate(&mut self, batch: &[Piece]) {
        for piece in batch {
            self.0[index(piece.current())] = *piece;
        }
    }

    /// Iterate over all 27 stored pieces.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.0.iter()
    }
}
