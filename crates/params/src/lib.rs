//! Constant values for the toycurve workspace
//!
//! Curve coefficients and base points used by the demos and the tests. All
//! of them are small enough to enumerate by hand.

#![no_std]
#![forbid(unsafe_code)]

pub mod traditional;

pub use traditional::ecdh::{CurveConstants, ALL_CURVES, TOY_P17, TOY_P23, TOY_P97};
