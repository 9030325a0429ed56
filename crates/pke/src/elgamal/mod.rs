//! ElGamal-style encryption of encoded messages
//!
//! The sender adds the ECDH shared secret to the encoded message point and
//! ships the sum together with its own public key: `{Qm + dA·dB·G, dA·G}`.

use core::fmt;

use toycurve_algorithms::error::to_core_result;
use toycurve_algorithms::{CurveParameters, Point};
use toycurve_api::{PointEncryption, Result as ApiResult};

use crate::error::Result;

/// Ciphertext handed to the recipient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ciphertext {
    /// Qm + shared secret
    pub cipher_point: Point,
    /// Sender's public point
    pub sender_public: Point,
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.cipher_point, self.sender_public)
    }
}

/// Encrypt an encoded message point: plaintext_point + shared_secret.
pub fn encrypt(
    curve: &CurveParameters,
    plaintext_point: &Point,
    shared_secret: &Point,
) -> Result<Point> {
    Ok(curve.add(plaintext_point, shared_secret)?)
}

/// ElGamal point encryption
pub struct ElGamal;

impl PointEncryption for ElGamal {
    type Domain = CurveParameters;
    type Plaintext = Point;
    type SharedSecret = Point;
    type PublicKey = Point;
    type Ciphertext = Ciphertext;

    fn name() -> &'static str {
        "ElGamal-toycurve"
    }

    fn encrypt(
        curve: &CurveParameters,
        plaintext: &Point,
        shared_secret: &Point,
        sender_public_key: &Point,
    ) -> ApiResult<Ciphertext> {
        let cipher_point = to_core_result(curve.add(plaintext, shared_secret), "ElGamal encrypt")?;
        Ok(Ciphertext {
            cipher_point,
            sender_public: *sender_public_key,
        })
    }
}
