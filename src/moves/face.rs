//! The six faces and the coordinate transform a face turn applies.
//!
//! A face is identified by an axis and a layer value (+1 or -1 on that
//! axis): front is x=1, back x=-1, right y=1, left y=-1, up z=1, down z=-1.
//! Turning a face moves the 9 pieces in its layer; the face's own axis
//! component never changes, only the other two rotate.
//!
//! Directions are clockwise as seen from outside the cube looking at the
//! face, which is why opposite faces turn through mirrored transforms.

use serde::{Deserialize, Serialize};

use super::turn::TurnStyle;
use crate::core::{Axis, Coord};

/// One of the six cube faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Front,
    Back,
    Up,
    Down,
    Right,
    Left,
}

impl Face {
    /// All six faces in notation order (F B U D R L).
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Right,
        Face::Left,
    ];

    /// The axis this face sits on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Face::Front | Face::Back => Axis::X,
            Face::Right | Face::Left => Axis::Y,
            Face::Up | Face::Down => Axis::Z,
        }
    }

    /// The layer value (+1 or -1) of this face on its axis.
    #[must_use]
    pub const fn layer(self) -> i8 {
        match self {
            Face::Front | Face::Right | Face::Up => 1,
            Face::Back | Face::Left | Face::Down => -1,
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// Whether `other` is this face's opposite (same axis, other layer).
    #[must_use]
    pub fn is_opposite(self, other: Face) -> bool {
        self.opposite() == other
    }

    /// Standard notation letter for this face.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    /// The 9 coordinates in this face's layer.
    pub fn layer_coords(self) -> impl Iterator<Item = Coord> {
        Coord::all().filter(move |c| c.component(self.axis()) == self.layer())
    }

    /// Where a turn of this face sends a coordinate in its layer.
    ///
    /// The face's own axis component is untouched. For the two free axes
    /// (a, b) — the cyclic successors of the face axis — a half turn negates
    /// both, and a quarter turn maps (a, b) → (-b, a) or (b, -a) depending
    /// on the product of layer and direction. With (a, b) in cyclic order
    /// this one rule reproduces the clockwise-from-outside convention for
    /// all six faces; e.g. a clockwise front turn sends (1, 1, 1) to
    /// (1, -1, 1).
    ///
    /// Quarter turns are bijections on the layer with period 4; a face
    /// centre has both free components 0 and is a fixed point.
    #[must_use]
    pub fn rotate(self, c: Coord, style: TurnStyle) -> Coord {
        let a = self.axis().next();
        let b = a.next();
        let (ca, cb) = (c.component(a), c.component(b));
        match style {
            TurnStyle::Half => c.with_component(a, -ca).with_component(b, -cb),
            TurnStyle::Clockwise | TurnStyle::Counterclockwise => {
                let dir: i8 = if style == TurnStyle::Clockwise { 1 } else { -1 };
                if self.layer() * dir > 0 {
                    c.with_component(a, -cb).with_component(b, ca)
                } else {
                    c.with_component(a, cb).with_component(b, -ca)
                }
            }
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
