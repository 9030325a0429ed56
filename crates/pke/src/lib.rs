//! ECDH key agreement and ElGamal-style point encryption over toy curves.
//!
//! Two parties agree on a shared point dA·dB·G; the sender embeds an integer
//! message as a curve point Qm and sends `{Qm + dA·dB·G, dA·G}`.
//!
//! ```
//! use toycurve_pke::{run_exchange, ExchangeInput};
//! use toycurve_params::TOY_P17;
//!
//! let transcript = run_exchange(&ExchangeInput::from_constants(&TOY_P17, 3, 5, 5)).unwrap();
//! assert_eq!(transcript.shared_a, transcript.shared_b);
//! assert_eq!(transcript.ciphertext.to_string(), "{(5,16),(10,6)}");
//! ```

#![forbid(unsafe_code)]

pub mod domain;
pub mod ecdh;
pub mod elgamal;
pub mod error;
pub mod protocol;

// Re-export key items
pub use domain::Domain;
pub use ecdh::{derive_shared_secret, establish_keys, Ecdh, KeyPair, PrivateScalar};
pub use elgamal::{encrypt, Ciphertext, ElGamal};
pub use error::{Error, Result};
pub use protocol::{run_exchange, ExchangeInput, ExchangeTranscript};
