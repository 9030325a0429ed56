//! One complete exchange: key agreement followed by message encryption.
//!
//! [`run_exchange`] takes the eight integers of a scenario, checks that the
//! curve can carry a message at all, lets both parties derive their keys and
//! the shared secret, embeds the message in the curve and encrypts it for B.

use log::{debug, warn};
use toycurve_algorithms::{CurveParameters, EncodingParameters, MessageCodec, Point};
use toycurve_params::CurveConstants;

use crate::domain::Domain;
use crate::ecdh::{derive_shared_secret, establish_keys};
use crate::elgamal::{encrypt, Ciphertext};
use crate::error::{Error, Result};

/// Externally supplied scenario: curve, generator, both private scalars and
/// the plaintext.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeInput {
    /// Prime modulus
    pub p: i64,
    /// Curve coefficient a
    pub a: i64,
    /// Curve coefficient b
    pub b: i64,
    /// x-coordinate of G
    pub generator_x: i64,
    /// y-coordinate of G
    pub generator_y: i64,
    /// Private scalar of party A
    pub private_a: i64,
    /// Private scalar of party B
    pub private_b: i64,
    /// Plaintext integer
    pub message: i64,
}

impl ExchangeInput {
    /// Scenario on a named curve
    pub fn from_constants(
        constants: &CurveConstants,
        private_a: i64,
        private_b: i64,
        message: i64,
    ) -> Self {
        Self {
            p: constants.p,
            a: constants.a,
            b: constants.b,
            generator_x: constants.g_x,
            generator_y: constants.g_y,
            private_a,
            private_b,
            message,
        }
    }

    /// The curve described by `p`, `a`, `b`
    pub fn curve(&self) -> Result<CurveParameters> {
        Ok(CurveParameters::new(self.p, self.a, self.b)?)
    }

    /// Curve plus generator
    pub fn domain(&self) -> Result<Domain> {
        let curve = self.curve()?;
        Domain::new(curve, Point::affine(self.generator_x, self.generator_y))
    }
}

/// Every value produced during an exchange, in the order it is computed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeTranscript {
    /// The curve
    pub curve: CurveParameters,
    /// Generator G
    pub generator: Point,
    /// All affine points, by increasing x then y
    pub curve_points: Vec<Point>,
    /// dA·G
    pub public_a: Point,
    /// dB·G
    pub public_b: Point,
    /// dA·(dB·G), as computed by A
    pub shared_a: Point,
    /// dB·(dA·G), as computed by B
    pub shared_b: Point,
    /// M and h used to embed the message
    pub encoding: EncodingParameters,
    /// Qm
    pub encoded_message: Point,
    /// {Qm + dA·dB·G, dA·G}
    pub ciphertext: Ciphertext,
}

/// Run a full exchange.
///
/// # Errors
/// - [`Error::Primitive`] wrapping `DegenerateCurve` if the curve has no
///   affine points, `PointNotOnCurve` for a bad generator, `NoInverseExists`
///   for a composite modulus and `EncodingNotFound` when the message has no
///   point in its slot range.
/// - [`Error::InvalidKey`] for negative private scalars.
/// - [`Error::SharedSecretMismatch`] if the two parties disagree.
pub fn run_exchange(input: &ExchangeInput) -> Result<ExchangeTranscript> {
    let curve = input.curve()?;
    let codec = MessageCodec::new(&curve)?;
    debug!("{}: {} affine points", curve, codec.points().len());

    let domain = Domain::new(curve, Point::affine(input.generator_x, input.generator_y))?;
    let (party_a, party_b) = establish_keys(&domain, input.private_a, input.private_b)?;

    let shared_a = derive_shared_secret(&curve, party_a.private(), party_b.public())?;
    let shared_b = derive_shared_secret(&curve, party_b.private(), party_a.public())?;
    if shared_a != shared_b {
        warn!("shared secrets differ: A has {}, B has {}", shared_a, shared_b);
        return Err(Error::SharedSecretMismatch {
            party_a: shared_a,
            party_b: shared_b,
        });
    }
    debug!("shared secret {}", shared_a);

    let encoded = codec.encode(input.message)?;
    debug!(
        "message {} -> {} (M = {}, h = {})",
        input.message, encoded.point, encoded.parameters.bound, encoded.parameters.slots
    );

    let cipher_point = encrypt(&curve, &encoded.point, &shared_a)?;
    let ciphertext = Ciphertext {
        cipher_point,
        sender_public: *party_a.public(),
    };

    Ok(ExchangeTranscript {
        curve,
        generator: *domain.generator(),
        curve_points: codec.into_points(),
        public_a: *party_a.public(),
        public_b: *party_b.public(),
        shared_a,
        shared_b,
        encoding: encoded.parameters,
        encoded_message: encoded.point,
        ciphertext,
    })
}
