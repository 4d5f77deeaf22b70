//! Pieces: the mutable unit of puzzle state.
//!
//! A piece pairs a fixed `target` coordinate (its home, assigned once) with
//! a live `current` coordinate that face turns move around. Its colour
//! [`Label`] is the stickers glued to the physical piece: a pure function of
//! `target`, one letter per nonzero axis, unchanged no matter where the
//! piece travels.
//!
//! ```
//! use cube_twist::core::{Coord, Piece};
//!
//! let corner = Piece::new(Coord::new(1, 1, 1));
//! assert_eq!(corner.label().as_str(), "GRW");
//! assert_eq!(corner.cost(), 0); // solved pieces cost nothing
//! ```

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A colour label: up to three sticker letters, one per nonzero target axis.
///
/// Letters by axis sign: x -1→'B' +1→'G', y -1→'O' +1→'R', z -1→'Y' +1→'W'.
/// The hidden core has the empty label, face centres one letter, edges two,
/// corners three. Stored inline so reading labels never allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label {
    letters: [u8; 3],
    len: u8,
}

impl Label {
    /// Derive the label for a home coordinate.
    #[must_use]
    pub fn for_target(target: Coord) -> Self {
        let mut letters = [0u8; 3];
        let mut len = 0usize;
        for (value, pair) in [
            (target.x(), [b'B', b'G']),
            (target.y(), [b'O', b'R']),
            (target.z(), [b'Y', b'W']),
        ] {
            match value {
                -1 => {
                    letters[len] = pair[0];
                    len += 1;
                }
                1 => {
                    letters[len] = pair[1];
                    len += 1;
                }
                _ => {}
            }
        }
        Self { letters, len: len as u8 }
    }

    /// The label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII sticker letters are ever written.
        std::str::from_utf8(&self.letters[..self.len as usize]).unwrap_or("")
    }

    /// Number of sticker letters (0 core, 1 centre, 2 edge, 3 corner).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sub-cube of the puzzle.
///
/// `target` is the piece's permanent identity and never changes after
/// construction; `current` is the only field rotations touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    target: Coord,
    current: Coord,
}

impl Piece {
    /// Create a piece at home: `current == target`.
    #[must_use]
    pub fn new(target: Coord) -> Self {
        Self { target, current: target }
    }

    /// The piece's home coordinate.
    #[must_use]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// Where the piece currently sits.
    #[must_use]
    pub fn current(&self) -> Coord {
        self.current
    }

    /// Move the piece. Callers must keep the occupancy invariant: across the
    /// whole cube, `current` coordinates stay a permutation of positions.
    pub(crate) fn set_current(&mut self, current: Coord) {
        self.current = current;
    }

    /// The piece's colour label, derived from its home coordinate.
    #[must_use]
    pub fn label(&self) -> Label {
        Label::for_target(self.target)
    }

    /// Whether the piece sits at home.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.current == self.target
    }

    /// Heuristic move estimate for restoring this piece, in 0..=3.
    ///
    /// Computed from the dot product `d = target · current`, a coarse proxy
    /// for the angle between home and current position:
    ///
    /// | d        | cost |
    /// |----------|------|
    /// | 1        | 1    |
    /// | 0, -1    | 2    |
    /// | -2, -3   | 3    |
    /// | 2, 3     | 0    |
    ///
    /// The catch-all 0 row is what makes solved pieces free: a solved edge
    /// has d = 2 and a solved corner d = 3. It also means a corner twisted
    /// in place is indistinguishable from a solved one; the heuristic is
    /// intentionally coarse.
    #[must_use]
    pub fn cost(&self) -> u32 {
        match self.target.dot(self.current) {
            1 => 1,
            0 | -1 => 2,
            -2 | -3 => 3,
            _ => 0,
        }
    }
}
