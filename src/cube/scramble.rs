//! Scramble generation.
//!
//! Draws random moves and applies them to the live cube, returning the
//! notation. Face selection avoids degenerate sequences: a face never
//! repeats immediately, and no three consecutive turns stay on one axis
//! (`F B F` is out).

use super::state::Cube;
use crate::core::ScrambleRng;
use crate::moves::{Face, Move, TurnStyle};

/// Conventional scramble length for a 3x3x3.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 20;

/// Face selection with the repetition constraints.
///
/// `blocked` remembers the face before last while the last two moves sit on
/// the same axis; it is cleared as soon as a move leaves that axis. At most
/// two of the six faces are ever excluded, so the rejection draw always
/// terminates.
#[derive(Debug, Default)]
struct FacePicker {
    last: Option<Face>,
    blocked: Option<Face>,
}

impl FacePicker {
    fn pick(&mut self, rng: &mut ScrambleRng) -> Face {
        let face = loop {
            let candidate = Face::ALL[rng.gen_range(0..Face::ALL.len())];
            if Some(candidate) != self.last && Some(candidate) != self.blocked {
                break candidate;
            }
        };

        self.blocked = match self.last {
            Some(last) if face.is_opposite(last) => Some(last),
            _ => None,
        };
        self.last = Some(face);
        face
    }
}

impl Cube {
    /// Scramble the cube with `moves` random turns.
    ///
    /// Each turn has a 1/3 chance of being a half turn, otherwise a 1/2
    /// chance of being counter-clockwise. Returns the applied sequence in
    /// space-separated notation; `scramble(0, ..)` returns the empty string
    /// and draws nothing from the RNG.
    ///
    /// The RNG is passed in rather than owned, so a fixed seed reproduces
    /// both the notation and the resulting cube state exactly.
    ///
    /// ```
    /// use cube_twist::{core::ScrambleRng, Cube, DEFAULT_SCRAMBLE_MOVES};
    ///
    /// let mut cube = Cube::new();
    /// let mut rng = ScrambleRng::new(7);
    /// let sequence = cube.scramble(DEFAULT_SCRAMBLE_MOVES, &mut rng);
    /// assert_eq!(sequence.split_whitespace().count(), 20);
    /// ```
    pub fn scramble(&mut self, moves: usize, rng: &mut ScrambleRng) -> String {
        let mut picker = FacePicker::default();
        let mut tokens = Vec::with_capacity(moves);

        for _ in 0..moves {
            let face = picker.pick(rng);
            let twice = rng.gen_range(0..3) == 0;
            let inverse = !twice && rng.gen_range(0..2) == 1;

            let mv = Move::new(face, TurnStyle::from_flags(inverse, twice));
            self.apply(mv);
            tokens.push(mv.to_string());
        }

        tokens.join(" ")
    }
}
