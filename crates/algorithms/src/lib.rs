//! Small-field elliptic curve arithmetic
//!
//! This crate implements the computational core of the toycurve workspace:
//!
//! - [`modular`]: canonical reduction and brute-force modular inversion
//! - [`ec`]: curve parameters, points, the group law, scalar multiplication
//!   and exhaustive point enumeration
//! - [`encoding`]: embedding integer messages as curve points
//!
//! Every value fits an `i64`. The algorithms are the textbook ones (linear
//! scan inversion, O(p²) enumeration) and are only meant for curves small
//! enough to list by hand.
//!
//! ```
//! use toycurve_algorithms::{CurveParameters, Point};
//!
//! let curve = CurveParameters::new(17, 2, 2).unwrap();
//! let g = curve.point(5, 1).unwrap();
//! assert_eq!(curve.double(&g).unwrap(), Point::affine(6, 3));
//! assert_eq!(curve.scalar_mul(&g, 19).unwrap(), Point::Infinity);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Modular arithmetic
pub mod modular;
pub use modular::{mod_inverse, reduce};

// Elliptic curve primitives
pub mod ec;
pub use ec::{CurveParameters, CurvePoints, Point};

// Message embedding
pub mod encoding;
pub use encoding::{encode, EncodedMessage, EncodingParameters, MessageCodec};
