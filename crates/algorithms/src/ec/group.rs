//! Affine group law and scalar multiplication

use log::trace;

use crate::ec::params::CurveParameters;
use crate::ec::point::Point;
use crate::error::{validate, Result};
use crate::modular::{add_mod, mod_inverse, mul_mod, reduce, sub_mod};

impl CurveParameters {
    /// Add two points (chord-tangent law).
    ///
    /// For distinct x-coordinates the slope is λ = (y₂ − y₁) / (x₂ − x₁);
    /// for P = Q it is the tangent slope λ = (3x₁² + a) / (2y₁). Then
    /// x₃ = λ² − x₁ − x₂ and y₃ = λ(x₁ − x₃) − y₁.
    ///
    /// Equal x-coordinates with different y, or a vertical tangent (y = 0),
    /// give the identity.
    ///
    /// # Errors
    /// [`Error::NoInverseExists`](crate::Error::NoInverseExists) when the
    /// slope denominator is not invertible, which can only happen for a
    /// composite modulus. The operation is aborted, no point is produced.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (x1, y1, x2, y2) = match (*lhs, *rhs) {
            // Identity cases: O + Q = Q, P + O = P
            (Point::Infinity, _) => return Ok(*rhs),
            (_, Point::Infinity) => return Ok(*lhs),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        // P + (-P) = O, and 2P = O for points of order two
        if x1 == x2 && (y1 != y2 || y1 == 0) {
            return Ok(Point::Infinity);
        }

        let p = self.p();
        let lambda = if x1 == x2 {
            // Tangent: λ = (3x² + a) / 2y
            let num = add_mod(mul_mod(3, mul_mod(x1, x1, p), p), self.a(), p);
            let den = mod_inverse(mul_mod(2, y1, p), p)?;
            mul_mod(num, den, p)
        } else {
            // Chord: λ = (y₂ − y₁) / (x₂ − x₁)
            let num = sub_mod(y2, y1, p);
            let den = mod_inverse(sub_mod(x2, x1, p), p)?;
            mul_mod(num, den, p)
        };

        let x3 = sub_mod(sub_mod(mul_mod(lambda, lambda, p), x1, p), x2, p);
        let y3 = sub_mod(mul_mod(lambda, sub_mod(x1, x3, p), p), y1, p);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Double a point: 2P
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    /// Negate a point: (x, y) ↦ (x, −y)
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: reduce(-*y, self.p()),
            },
        }
    }

    /// Scalar multiplication: n·P.
    ///
    /// Double-and-add over the bits of `n`, least significant first: the
    /// accumulator starts at the identity, picks up the current addend for
    /// every set bit, and the addend is doubled after every bit. O(log n)
    /// group operations. `n = 0` gives the identity.
    ///
    /// # Errors
    /// [`Error::Parameter`](crate::Error::Parameter) for negative `n`; any
    /// failure of [`add`](Self::add) aborts the multiplication.
    pub fn scalar_mul(&self, point: &Point, n: i64) -> Result<Point> {
        validate::non_negative("scalar", n)?;

        let mut acc = Point::Infinity;
        let mut addend = *point;
        let mut k = n;
        while k > 0 {
            if k & 1 == 1 {
                acc = self.add(&acc, &addend)?;
            }
            addend = self.double(&addend)?;
            k >>= 1;
            trace!("scalar_mul {}·{}: acc = {}, addend = {}", n, point, acc, addend);
        }
        Ok(acc)
    }
}
