//! Scenario vectors and shared fixtures for the toycurve integration tests
pub mod vectors;

use toycurve_algorithms::CurveParameters;
use toycurve_params::CurveConstants;
use toycurve_pke::Domain;

/// Domain of a named curve. Panics on invalid constants.
pub fn domain(constants: &CurveConstants) -> Domain {
    Domain::from_constants(constants).expect("named curve constants are valid")
}

/// Curve of a named curve. Panics on invalid constants.
pub fn curve(constants: &CurveConstants) -> CurveParameters {
    *domain(constants).curve()
}
