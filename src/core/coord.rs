//! Cube coordinates.
//!
//! Every piece position is a 3-component vector with each component in
//! {-1, 0, 1}: the layer the piece occupies along each axis. That gives 27
//! possible coordinates; (0, 0, 0) is the hidden core at the centre of the
//! puzzle.
//!
//! `Coord` is a pure value type. All rotation arithmetic lives in
//! [`Face::rotate`](crate::moves::Face::rotate) — coordinates only store and
//! compare.
//!
//! ```
//! use cube_twist::core::Coord;
//!
//! let c = Coord::new(1, -1, 0);
//! assert_eq!(c.x(), 1);
//! assert_eq!(c.weight(), 2);          // an edge position
//! assert_eq!(format!("{}", c), "(1, -1, 0)");
//! ```

use serde::{Deserialize, Serialize};

/// One of the three cube axes.
///
/// Axes follow the colour scheme of the solved cube: `X` runs back→front,
/// `Y` left→right, `Z` down→up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The cyclically next axis (X → Y → Z → X).
    ///
    /// A face turn rotates the plane spanned by `axis.next()` and
    /// `axis.next().next()`.
    #[must_use]
    pub const fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Component index of this axis (X=0, Y=1, Z=2).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A position on the cube: one layer value in {-1, 0, 1} per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord([i8; 3]);

impl Coord {
    /// Create a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if any component is outside {-1, 0, 1}.
    #[must_use]
    pub fn new(x: i8, y: i8, z: i8) -> Self {
        let c = Self([x, y, z]);
        assert!(c.in_domain(), "coordinate out of domain: ({x}, {y}, {z})");
        c
    }

    /// The hidden core position (0, 0, 0).
    pub const CORE: Coord = Coord([0, 0, 0]);

    #[must_use]
    pub const fn x(self) -> i8 {
        self.0[0]
    }

    #[must_use]
    pub const fn y(self) -> i8 {
        self.0[1]
    }

    #[must_use]
    pub const fn z(self) -> i8 {
        self.0[2]
    }

    /// Component along the given axis.
    #[must_use]
    pub const fn component(self, axis: Axis) -> i8 {
        self.0[axis.index()]
    }

    /// Copy of this coordinate with one component replaced.
    ///
    /// Used by the rotation transform; the replacement must stay in
    /// {-1, 0, 1}, which negation and swaps of in-domain values always do.
    #[must_use]
    pub(crate) fn with_component(mut self, axis: Axis, value: i8) -> Self {
        debug_assert!((-1..=1).contains(&value));
        self.0[axis.index()] = value;
        self
    }

    /// Whether every component lies in {-1, 0, 1}.
    #[must_use]
    pub fn in_domain(self) -> bool {
        self.0.iter().all(|v| (-1..=1).contains(v))
    }

    /// Dot product with another coordinate.
    ///
    /// For a piece's target and current positions this ranges over -3..=3
    /// and drives the cost heuristic.
    #[must_use]
    pub fn dot(self, other: Coord) -> i32 {
        (0..3).map(|i| i32::from(self.0[i]) * i32::from(other.0[i])).sum()
    }

    /// Sum of absolute components: 0 for the core, 1 for a face centre,
    /// 2 for an edge, 3 for a corner.
    #[must_use]
    pub fn weight(self) -> i32 {
        self.0.iter().map(|v| i32::from(v.abs())).sum()
    }

    /// Whether this is the hidden core position.
    #[must_use]
    pub fn is_core(self) -> bool {
        self == Self::CORE
    }

    /// Iterate over all 27 coordinates in grid-index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| Coord([x, y, z]))))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}
