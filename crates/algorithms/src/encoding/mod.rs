//! Embedding integer messages as curve points
//!
//! A message `m` owns the `h` consecutive x-coordinates starting at
//! `m·h mod p`, where `h = ⌊p / M⌋` and `M` is the smallest power of two
//! with `m ≤ M`. Encoding picks the first enumerated curve point whose
//! x-coordinate falls in that slot range. Decoding is not provided.

use log::{debug, trace};

use crate::ec::{CurveParameters, Point};
use crate::error::{validate, Error, Result};
use crate::modular::{add_mod, mul_mod};

/// Encoding parameters `M` and `h` for one message on one curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodingParameters {
    /// `M`, a power of two bounding the message
    pub bound: i64,
    /// `h = ⌊p / M⌋`, the number of x-coordinates reserved per message
    pub slots: i64,
}

impl EncodingParameters {
    /// Pick `M` as the smallest power of two `≥ message` (1 for messages 0
    /// and 1) and derive `h` from the modulus.
    ///
    /// # Errors
    /// [`Error::Parameter`] for a negative message, or one so large that `M`
    /// would overflow.
    pub fn for_message(message: i64, modulus: i64) -> Result<Self> {
        validate::non_negative("message", message)?;
        let mut bound: i64 = 1;
        while message > bound {
            bound = bound
                .checked_mul(2)
                .ok_or_else(|| Error::param("message", "too large for a power-of-two bound"))?;
        }
        Self::with_bound(bound, modulus)
    }

    /// Use a caller-chosen bound `M`
    pub fn with_bound(bound: i64, modulus: i64) -> Result<Self> {
        validate::parameter(bound > 0, "M", "bound must be positive")?;
        validate::modulus(modulus)?;
        Ok(Self {
            bound,
            slots: modulus / bound,
        })
    }
}

/// Encode `message` as a point of `curve_points`.
///
/// Tries `x = (m·h + j) mod p` for `j = 0, 1, ..., h - 1` and returns the
/// first point of `curve_points` (in list order) with that x-coordinate.
///
/// # Errors
/// [`Error::EncodingNotFound`] when none of the `h` candidates is the
/// x-coordinate of a listed point, including the case `h = 0`.
pub fn encode(
    curve: &CurveParameters,
    message: i64,
    curve_points: &[Point],
    bound: i64,
) -> Result<Point> {
    validate::non_negative("message", message)?;
    let EncodingParameters { slots, .. } = EncodingParameters::with_bound(bound, curve.p())?;
    let p = curve.p();
    let first_x = mul_mod(message, slots, p);

    for j in 0..slots {
        let x = add_mod(first_x, j, p);
        trace!("encode {}: trying x = {}", message, x);
        if let Some(point) = curve_points.iter().find(|pt| pt.x() == Some(x)) {
            debug!("encoded message {} as {} (j = {})", message, point, j);
            return Ok(*point);
        }
    }

    debug!("message {} has no curve point in {} slots from x = {}", message, slots, first_x);
    Err(Error::EncodingNotFound {
        message,
        first_x,
        slots,
    })
}

/// A message encoded as a point, with the parameters used to encode it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedMessage {
    /// The message
    pub message: i64,
    /// `M` and `h`
    pub parameters: EncodingParameters,
    /// The curve point `Qm`
    pub point: Point,
}

/// Message encoder bound to one curve and its enumerated points
#[derive(Clone, Debug)]
pub struct MessageCodec {
    curve: CurveParameters,
    points: Vec<Point>,
}

impl MessageCodec {
    /// Enumerate the curve and build a codec over its points.
    ///
    /// # Errors
    /// [`Error::DegenerateCurve`] when the curve has no affine points.
    pub fn new(curve: &CurveParameters) -> Result<Self> {
        Self::from_points(curve, curve.all_points())
    }

    /// Build a codec over an already enumerated point list
    pub fn from_points(curve: &CurveParameters, points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::DegenerateCurve {
                reason: "curve has no affine points to encode messages with",
            });
        }
        Ok(Self {
            curve: *curve,
            points,
        })
    }

    /// The curve this codec encodes onto
    pub fn curve(&self) -> &CurveParameters {
        &self.curve
    }

    /// The enumerated curve points, in enumeration order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Give the points back
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Encoding parameters `M` and `h` for `message`
    pub fn parameters(&self, message: i64) -> Result<EncodingParameters> {
        EncodingParameters::for_message(message, self.curve.p())
    }

    /// Encode `message`, choosing `M` as the smallest power of two `≥ message`
    pub fn encode(&self, message: i64) -> Result<EncodedMessage> {
        let parameters = self.parameters(message)?;
        let point = encode(&self.curve, message, &self.points, parameters.bound)?;
        Ok(EncodedMessage {
            message,
            parameters,
            point,
        })
    }
}
