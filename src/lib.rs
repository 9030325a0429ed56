//! # toycurve
//!
//! Elliptic-curve Diffie-Hellman and ElGamal-style point encryption over
//! small curves y² = x³ + ax + b (mod p), small enough to enumerate and to
//! check by hand.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! toycurve = "0.1"
//! ```
//!
//! ## Features
//!
//! - `protocol` (default): key agreement, message embedding and encryption
//! - `algorithms`: modular arithmetic, the group law and point enumeration only
//! - `serde`: `Serialize`/`Deserialize` for points, curves and transcripts
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`toycurve-api`]: error type and the `KeyAgreement`/`PointEncryption` traits
//! - [`toycurve-params`]: named toy curves
//! - [`toycurve-algorithms`]: arithmetic mod p, curve group, enumeration, message codec
//! - [`toycurve-pke`]: ECDH, ElGamal and the full exchange
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "protocol")]
//! # {
//! use toycurve::prelude::*;
//! use toycurve::params::TOY_P17;
//!
//! let transcript = run_exchange(&ExchangeInput::from_constants(&TOY_P17, 3, 5, 5)).unwrap();
//! assert_eq!(transcript.public_a, Point::affine(10, 6));
//! assert_eq!(transcript.ciphertext.cipher_point, Point::affine(5, 16));
//! # }
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use toycurve_api as api;
pub use toycurve_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use toycurve_algorithms as algorithms;

#[cfg(feature = "protocol")]
pub use toycurve_pke as pke;

/// Common imports for toycurve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KeyAgreement, PointEncryption};

    pub use zeroize::Zeroize;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{CurveParameters, MessageCodec, Point};

    #[cfg(feature = "protocol")]
    pub use crate::pke::{
        run_exchange, Ciphertext, Domain, Ecdh, ElGamal, ExchangeInput, ExchangeTranscript,
        KeyPair,
    };

    #[cfg(feature = "protocol")]
    pub use rand::{CryptoRng, RngCore};
}
