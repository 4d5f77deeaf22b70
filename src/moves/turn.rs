//! Turn styles and move notation.
//!
//! A [`Move`] is a face plus a [`TurnStyle`], written in standard notation:
//! `F` for a clockwise quarter turn, `F'` counter-clockwise, `F2` for a half
//! turn. Notation round-trips through `Display`/`FromStr` so a recorded
//! scramble can be replayed.
//!
//! ```
//! use cube_twist::moves::{Face, Move, TurnStyle};
//!
//! let mv: Move = "R'".parse().unwrap();
//! assert_eq!(mv, Move::new(Face::Right, TurnStyle::Counterclockwise));
//! assert_eq!(mv.to_string(), "R'");
//! ```

use serde::{Deserialize, Serialize};

use super::face::Face;

/// How far and which way a face turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStyle {
    /// Quarter turn, clockwise seen from outside the cube.
    Clockwise,
    /// Quarter turn, counter-clockwise.
    Counterclockwise,
    /// Half turn (180 degrees); direction is irrelevant.
    Half,
}

impl TurnStyle {
    /// Style from the `(inverse, twice)` flag pair of the face operations.
    ///
    /// `twice` wins: an inverted half turn is just a half turn.
    #[must_use]
    pub const fn from_flags(inverse: bool, twice: bool) -> Self {
        if twice {
            TurnStyle::Half
        } else if inverse {
            TurnStyle::Counterclockwise
        } else {
            TurnStyle::Clockwise
        }
    }

    /// The style that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            TurnStyle::Clockwise => TurnStyle::Counterclockwise,
            TurnStyle::Counterclockwise => TurnStyle::Clockwise,
            TurnStyle::Half => TurnStyle::Half,
        }
    }

    /// Notation suffix: nothing, `'`, or `2`.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            TurnStyle::Clockwise => "",
            TurnStyle::Counterclockwise => "'",
            TurnStyle::Half => "2",
        }
    }
}

/// A single face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub style: TurnStyle,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, style: TurnStyle) -> Self {
        Self { face, style }
    }

    /// The move that undoes this one (half turns are self-inverse).
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.style.inverse())
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.style.suffix())
    }
}

/// Error for a token that is not valid move notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMoveError {
    token: String,
}

impl ParseMoveError {
    /// The offending token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid move token: {:?}", self.token)
    }
}

impl std::error::Error for ParseMoveError {}

impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError { token: s.to_string() };

        let mut chars = s.chars();
        let face = match chars.next() {
            Some('F') => Face::Front,
            Some('B') => Face::Back,
            Some('U') => Face::Up,
            Some('D') => Face::Down,
            Some('R') => Face::Right,
            Some('L') => Face::Left,
            _ => return Err(err()),
        };
        let style = match chars.next() {
            None => TurnStyle::Clockwise,
            Some('\'') => TurnStyle::Counterclockwise,
            Some('2') => TurnStyle::Half,
            Some(_) => return Err(err()),
        };
        if chars.next().is_some() {
            return Err(err());
        }
        Ok(Move::new(face, style))
    }
}

/// Parse a whitespace-separated algorithm like `"F R2 U' L"`.
pub fn parse_algorithm(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(TurnStyle::from_flags(false, false), TurnStyle::Clockwise);
        assert_eq!(TurnStyle::from_flags(true, false), TurnStyle::Counterclockwise);
        assert_eq!(TurnStyle::from_flags(false, true), TurnStyle::Half);
        // twice overrides inverse
        assert_eq!(TurnStyle::from_flags(true, true), TurnStyle::Half);
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(Face::Front, TurnStyle::Clockwise).to_string(), "F");
        assert_eq!(Move::new(Face::Right, TurnStyle::Counterclockwise).to_string(), "R'");
        assert_eq!(Move::new(Face::Down, TurnStyle::Half).to_string(), "D2");
    }

    #[test]
    fn test_notation_round_trip() {
        for face in Face::ALL {
            for style in [TurnStyle::Clockwise, TurnStyle::Counterclockwise, TurnStyle::Half] {
                let mv = Move::new(face, style);
                let parsed: Move = mv.to_string().parse().unwrap();
                assert_eq!(parsed, mv);
            }
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "X", "F3", "FF", "F'2", "f"] {
            assert!(bad.parse::<Move>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_inverse() {
        let f: Move = "F".parse().unwrap();
        assert_eq!(f.inverse().to_string(), "F'");
        assert_eq!(f.inverse().inverse(), f);

        let d2: Move = "D2".parse().unwrap();
        assert_eq!(d2.inverse(), d2);
    }

    #[test]
    fn test_parse_algorithm() {
        let moves = parse_algorithm("F R2  U' L").unwrap();
        assert_eq!(moves.len(), 4);
        assert_eq!(moves[1], Move::new(Face::Right, TurnStyle::Half));

        assert!(parse_algorithm("").unwrap().is_empty());
        assert!(parse_algorithm("F Q").is_err());
    }
}
