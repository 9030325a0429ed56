//! Public domain parameters: the curve and its base point.

use toycurve_algorithms::{CurveParameters, Point};
use toycurve_params::CurveConstants;

use crate::error::{Error, Result};

/// Curve plus generator G, shared by both parties.
///
/// Deserialization goes through [`Domain::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDomain"))]
pub struct Domain {
    curve: CurveParameters,
    generator: Point,
}

impl Domain {
    /// Pair a curve with a generator. The generator must be an affine point
    /// on the curve.
    pub fn new(curve: CurveParameters, generator: Point) -> Result<Self> {
        let generator = match generator {
            Point::Infinity => return Err(Error::InvalidKey("generator is the point at infinity")),
            Point::Affine { x, y } => curve.point(x, y)?,
        };
        Ok(Self { curve, generator })
    }

    /// Domain of a named curve
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        let curve = CurveParameters::from_constants(constants)?;
        let generator = curve.point(constants.g_x, constants.g_y)?;
        Self::new(curve, generator)
    }

    /// The curve
    pub fn curve(&self) -> &CurveParameters {
        &self.curve
    }

    /// The generator G
    pub fn generator(&self) -> &Point {
        &self.generator
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDomain {
    curve: CurveParameters,
    generator: Point,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDomain> for Domain {
    type Error = Error;

    fn try_from(raw: RawDomain) -> Result<Self> {
        Self::new(raw.curve, raw.generator)
    }
}
