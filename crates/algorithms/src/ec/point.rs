//! Curve point representation

use core::fmt;

/// A point on a short Weierstrass curve: affine `(x, y)` or the point at
/// infinity.
///
/// The two variants share no coordinates, so the affine point `(0, 0)` and
/// the identity are never confused. Affine coordinates live in `[0, p)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Point {
    /// Point at infinity (identity element)
    #[default]
    Infinity,
    /// Affine point (x, y)
    Affine {
        /// x-coordinate
        x: i64,
        /// y-coordinate
        y: i64,
    },
}

impl Point {
    /// Create an affine point without checking the curve equation.
    ///
    /// Use [`CurveParameters::point`](crate::ec::CurveParameters::point) for
    /// coordinates that come from outside the library.
    pub const fn affine(x: i64, y: i64) -> Self {
        Point::Affine { x, y }
    }

    /// The identity (point at infinity)
    pub const fn identity() -> Self {
        Point::Infinity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<i64> {
        match self {
            Point::Affine { x, .. } => Some(*x),
            Point::Infinity => None,
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<i64> {
        match self {
            Point::Affine { y, .. } => Some(*y),
            Point::Infinity => None,
        }
    }

    /// Both coordinates, `None` for the identity
    pub fn coordinates(&self) -> Option<(i64, i64)> {
        match self {
            Point::Affine { x, y } => Some((*x, *y)),
            Point::Infinity => None,
        }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::Affine { x, y }
    }
}

/// `(x,y)` for affine points, `O` for the identity
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Affine { x, y } => write!(f, "({},{})", x, y),
            Point::Infinity => write!(f, "O"),
        }
    }
}
