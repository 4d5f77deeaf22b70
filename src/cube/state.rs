//! The cube itself: construction, face turns, the cost heuristic.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::PieceGrid;
use crate::core::{Coord, Piece};
use crate::moves::{parse_algorithm, Face, Move, ParseMoveError, TurnStyle};

/// A 3x3x3 twisty puzzle.
///
/// Owns its 27-piece grid; all mutation goes through the face-turn
/// operations. `Clone` produces a fully independent copy — turning one cube
/// never affects another — and plain assignment replaces a cube wholesale,
/// so callers get copy-then-swap semantics for free.
///
/// ```
/// use cube_twist::Cube;
///
/// let mut cube = Cube::new();
/// assert_eq!(cube.cost(), 0);
///
/// cube.front(false, false);
/// assert!(cube.cost() > 0);
///
/// cube.front(true, false); // undo
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cube {
    grid: PieceGrid,
}

impl Cube {
    /// A solved cube: every piece at its home position.
    #[must_use]
    pub fn new() -> Self {
        Self { grid: PieceGrid::solved() }
    }

    /// The piece currently sitting at `coord`.
    ///
    /// This is the whole read surface a renderer needs: the piece's
    /// [`label`](Piece::label) and positions.
    #[must_use]
    pub fn piece(&self, coord: Coord) -> &Piece {
        self.grid.piece(coord)
    }

    /// Iterate over all 27 pieces.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.pieces()
    }

    /// Whether every piece sits at its home position.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pieces().all(Piece::is_home)
    }

    /// Turn one face.
    ///
    /// Selects the 9 pieces in the face's layer, computes every new position
    /// from the pre-turn grid, then writes the batch back in one step.
    pub fn rotate(&mut self, face: Face, style: TurnStyle) {
        let mut batch: SmallVec<[Piece; 9]> = SmallVec::new();
        for coord in face.layer_coords() {
            let mut piece = *self.grid.piece(coord);
            piece.set_current(face.rotate(piece.current(), style));
            batch.push(piece);
        }
        self.grid.relocate(&batch);
    }

    /// Turn the front face (x = 1) clockwise; `inverse` turns it
    /// counter-clockwise, `twice` makes it a half turn (`inverse` is then
    /// ignored).
    pub fn front(&mut self, inverse: bool, twice: bool) {
        self.rotate(Face::Front, TurnStyle::from_flags(inverse, twice));
    }

    /// Turn the back face (x = -1).
    pub fn back(&mut self, inverse: bool, twice: bool) {
        self.rotate(Face::Back, TurnStyle::from_flags(inverse, twice));
    }

    /// Turn the right face (y = 1).
    pub fn right(&mut self, inverse: bool, twice: bool) {
        self.rotate(Face::Right, TurnStyle::from_flags(inverse, twice));
    }

    /// Turn the left face (y = -1).
    pub fn left(&mut self, inverse: bool, twice: bool) {
        self.rotate(Face::Left, TurnStyle::from_flags(inverse, twice));
    }

    /// Turn the up face (z = 1).
    pub fn up(&mut self, inverse: bool, twice: bool) {
        self.rotate(Face::Up, TurnStyle::from_flags(inverse, twice));
    }

    /// Turn the down face (z = -1).
    pub fn down(&mut self, inverse: bool, twice: bool) {
        self.rotate(Face::Down, TurnStyle::from_flags(inverse, twice));
    }

    /// Apply one move.
    pub fn apply(&mut self, mv: Move) {
        self.rotate(mv.face, mv.style);
    }

    /// Apply a sequence of moves in order.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Parse and apply an algorithm like `"F R2 U' L"`.
    ///
    /// The whole string is parsed before anything is applied, so on error
    /// the cube is unchanged.
    pub fn apply_algorithm(&mut self, algorithm: &str) -> Result<(), ParseMoveError> {
        let moves = parse_algorithm(algorithm)?;
        self.apply_all(&moves);
        Ok(())
    }

    /// Heuristic distance from solved: the sum of per-piece costs over all
    /// edge and corner positions (weight >= 2).
    ///
    /// Face centres are exempt — face turns cannot misplace them — and the
    /// hidden core never moves at all.
    #[must_use]
    pub fn cost(&self) -> u32 {
        Coord::all()
            .filter(|c| c.weight() >= 2)
            .map(|c| self.piece(c).cost())
            .sum()
    }

    /// Solve the cube.
    ///
    /// Not yet implemented: always returns the empty string and leaves the
    /// cube untouched. The entry point exists so callers can already depend
    /// on the contract.
    #[must_use]
    pub fn solve(&self) -> String {
        String::new()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cube_is_solved() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        assert_eq!(cube.cost(), 0);
        for piece in cube.pieces() {
            assert_eq!(piece.current(), piece.target());
        }
    }

    #[test]
    fn test_front_turn_exact_mapping() {
        let mut cube = Cube::new();
        cube.front(false, false);

        // The corner that started at (1,1,1) moved to (1,-1,1), and the one
        // from (1,-1,1) on to (1,-1,-1).
        assert_eq!(cube.piece(Coord::new(1, -1, 1)).target(), Coord::new(1, 1, 1));
        assert_eq!(cube.piece(Coord::new(1, -1, -1)).target(), Coord::new(1, -1, 1));
    }

    #[test]
    fn test_turn_moves_only_its_layer() {
        let mut cube = Cube::new();
        cube.up(false, false);
        for piece in cube.pieces() {
            if piece.target().z() != 1 {
                assert!(piece.is_home(), "{} left its layer", piece.target());
            }
        }
    }

    #[test]
    fn test_apply_algorithm_round_trip() {
        let mut cube = Cube::new();
        cube.apply_algorithm("F R2 U'").unwrap();
        cube.apply_algorithm("U R2 F'").unwrap();
        assert!(cube.is_solved());
    }

    #[test]
    fn test_apply_algorithm_rejects_garbage_without_mutating() {
        let mut cube = Cube::new();
        assert!(cube.apply_algorithm("F X").is_err());
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solve_is_a_stub() {
        let mut cube = Cube::new();
        assert_eq!(cube.solve(), "");
        cube.apply_algorithm("R U R' U'").unwrap();
        assert_eq!(cube.solve(), "");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Cube::new();
        let copy = original.clone();

        original.front(false, false);
        assert!(!original.is_solved());
        assert!(copy.is_solved());
    }
}
