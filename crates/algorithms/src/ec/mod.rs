//! Elliptic curve primitives over small prime fields
//!
//! Curves are in short Weierstrass form y² = x³ + ax + b over 𝔽ₚ with `p`
//! small enough that every value fits an `i64`. The curve is an explicit
//! [`CurveParameters`] value passed into every operation; nothing here keeps
//! ambient curve state.
//!
//! Implements:
//! - the affine group law (addition, doubling, negation),
//! - LSB-first double-and-add scalar multiplication,
//! - brute-force enumeration of every point on the curve.
//!
//! None of it is constant time.

mod enumerate;
mod group;
mod params;
mod point;

pub use enumerate::CurvePoints;
pub use params::CurveParameters;
pub use point::Point;
