//! Curve parameters and membership checks

use core::fmt;

use toycurve_params::CurveConstants;

use crate::ec::point::Point;
use crate::error::{validate, Error, Result};
use crate::modular::{add_mod, mul_mod, reduce};

/// Curve y² = x³ + ax + b over 𝔽ₚ.
///
/// `a` and `b` are stored reduced into `[0, p)`. Neither primality of `p`
/// nor non-singularity of the curve is checked; an unsuitable choice shows up
/// later as [`Error::NoInverseExists`] or as a curve with too few points.
///
/// Deserialization goes through [`CurveParameters::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCurveParameters"))]
pub struct CurveParameters {
    p: i64,
    a: i64,
    b: i64,
}

impl CurveParameters {
    /// Create curve parameters.
    ///
    /// # Errors
    /// [`Error::Parameter`] when `p < 2`.
    pub fn new(p: i64, a: i64, b: i64) -> Result<Self> {
        validate::modulus(p)?;
        Ok(Self {
            p,
            a: reduce(a, p),
            b: reduce(b, p),
        })
    }

    /// Curve parameters of a named curve
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        Self::new(constants.p, constants.a, constants.b)
    }

    /// The prime modulus p
    pub fn p(&self) -> i64 {
        self.p
    }

    /// Coefficient a, in `[0, p)`
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Coefficient b, in `[0, p)`
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Right-hand side of the curve equation, `x³ + ax + b mod p`
    pub fn rhs(&self, x: i64) -> i64 {
        let p = self.p;
        let x = reduce(x, p);
        let x3 = mul_mod(mul_mod(x, x, p), x, p);
        add_mod(add_mod(x3, mul_mod(self.a, x, p), p), self.b, p)
    }

    /// Check that a point satisfies y² = x³ + ax + b. The identity is on
    /// every curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                (0..self.p).contains(x)
                    && (0..self.p).contains(y)
                    && mul_mod(*y, *y, self.p) == self.rhs(*x)
            }
        }
    }

    /// Create a point from externally supplied coordinates.
    ///
    /// Coordinates are reduced modulo p first.
    ///
    /// # Errors
    /// [`Error::PointNotOnCurve`] when the reduced pair misses the curve.
    pub fn point(&self, x: i64, y: i64) -> Result<Point> {
        let point = Point::affine(reduce(x, self.p), reduce(y, self.p));
        if !self.is_on_curve(&point) {
            let (x, y) = (reduce(x, self.p), reduce(y, self.p));
            return Err(Error::PointNotOnCurve { x, y });
        }
        Ok(point)
    }
}

/// Unvalidated wire form of [`CurveParameters`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCurveParameters {
    p: i64,
    a: i64,
    b: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurveParameters> for CurveParameters {
    type Error = Error;

    fn try_from(raw: RawCurveParameters) -> Result<Self> {
        Self::new(raw.p, raw.a, raw.b)
    }
}

impl fmt::Display for CurveParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {} (mod {})", self.a, self.b, self.p)
    }
}
