//! Brute-force enumeration of curve points

use crate::ec::params::CurveParameters;
use crate::ec::point::Point;
use crate::modular::mul_mod;

/// Iterator over every affine point of a curve, by increasing x and then by
/// increasing y.
///
/// Tests all p² candidate pairs, so it is only meant for demonstration-sized
/// moduli. Cloning the iterator (or calling
/// [`CurveParameters::points`] again) restarts the enumeration.
#[derive(Clone, Debug)]
pub struct CurvePoints {
    curve: CurveParameters,
    x: i64,
    y: i64,
    rhs: i64,
}

impl Iterator for CurvePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.curve.p();
        while self.x < p {
            while self.y < p {
                let y = self.y;
                self.y += 1;
                if mul_mod(y, y, p) == self.rhs {
                    return Some(Point::Affine { x: self.x, y });
                }
            }
            self.x += 1;
            self.y = 0;
            if self.x < p {
                self.rhs = self.curve.rhs(self.x);
            }
        }
        None
    }
}

impl CurveParameters {
    /// Lazily enumerate every affine point on the curve
    pub fn points(&self) -> CurvePoints {
        CurvePoints {
            curve: *self,
            x: 0,
            y: 0,
            rhs: self.rhs(0),
        }
    }

    /// Every affine point on the curve, in enumeration order. May be empty.
    pub fn all_points(&self) -> Vec<Point> {
        self.points().collect()
    }

    /// Number of points in the group, identity included
    pub fn order(&self) -> i64 {
        self.points().count() as i64 + 1
    }
}
