//! Validation utilities for curve arithmetic

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that an integer input is not negative
#[inline(always)]
pub fn non_negative(name: &'static str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(Error::param(name, format!("must be non-negative, got {}", value)));
    }
    Ok(())
}

/// Validate that a modulus can define a field of at least two elements
#[inline(always)]
pub fn modulus(value: i64) -> Result<()> {
    if value < 2 {
        return Err(Error::param("p", format!("modulus must be at least 2, got {}", value)));
    }
    Ok(())
}
