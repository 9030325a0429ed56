//! Error handling for key agreement and encryption.

use thiserror::Error as ThisError;
use toycurve_algorithms::error::Error as PrimitiveError;
use toycurve_algorithms::Point;
use toycurve_api::error::Error as CoreError;

/// Error type for protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Curve arithmetic failed underneath the protocol step
    #[error("PKE primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// A key is unusable (negative scalar, identity generator)
    #[error("PKE invalid key: {0}")]
    InvalidKey(&'static str),

    /// The two parties derived different shared secrets
    #[error("PKE shared secret mismatch: A computed {party_a}, B computed {party_b}")]
    SharedSecretMismatch {
        /// Secret computed by party A, dA·(dB·G)
        party_a: Point,
        /// Secret computed by party B, dB·(dA·G)
        party_b: Point,
    },
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey(reason) => CoreError::InvalidKey {
                context: "ECDH",
                message: reason.to_string(),
            },
            mismatch @ Error::SharedSecretMismatch { .. } => CoreError::ProtocolFailure {
                context: "ECDH agreement",
                message: mismatch.to_string(),
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
