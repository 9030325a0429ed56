//! Modular arithmetic over a small prime modulus
//!
//! All values are `i64`. Products go through `i128` so that any modulus that
//! fits an `i64` can be multiplied without overflow. Inversion is a linear
//! scan, which is fine for the curve sizes this crate is meant for.

use crate::error::{validate, Error, Result};

/// Reduce `n` into the canonical range `[0, p)`, whatever the sign of `n`.
///
/// `p` must be positive.
#[inline]
pub fn reduce(n: i64, p: i64) -> i64 {
    debug_assert!(p > 0, "modulus must be positive");
    n.rem_euclid(p)
}

/// `(a · b) mod p`, in `[0, p)`
#[inline]
pub fn mul_mod(a: i64, b: i64, p: i64) -> i64 {
    debug_assert!(p > 0, "modulus must be positive");
    ((a as i128) * (b as i128)).rem_euclid(p as i128) as i64
}

/// `(a + b) mod p`, in `[0, p)`
#[inline]
pub fn add_mod(a: i64, b: i64, p: i64) -> i64 {
    debug_assert!(p > 0, "modulus must be positive");
    ((a as i128) + (b as i128)).rem_euclid(p as i128) as i64
}

/// `(a - b) mod p`, in `[0, p)`
#[inline]
pub fn sub_mod(a: i64, b: i64, p: i64) -> i64 {
    debug_assert!(p > 0, "modulus must be positive");
    ((a as i128) - (b as i128)).rem_euclid(p as i128) as i64
}

/// Multiplicative inverse of `n` modulo `p`.
///
/// Scans `x = 1, 2, ..., p - 1` for the first `x` with `n·x ≡ 1 (mod p)`.
/// Costs O(p) multiplications.
///
/// # Errors
/// [`Error::Parameter`] when `p < 2`.
/// [`Error::NoInverseExists`] when `gcd(n, p) ≠ 1`, which includes `n ≡ 0`.
pub fn mod_inverse(n: i64, p: i64) -> Result<i64> {
    validate::modulus(p)?;
    let n = reduce(n, p);
    if gcd(n, p) != 1 {
        return Err(Error::NoInverseExists { value: n, modulus: p });
    }
    (1..p)
        .find(|&x| mul_mod(n, x, p) == 1)
        .ok_or(Error::NoInverseExists { value: n, modulus: p })
}

/// Greatest common divisor of `|a|` and `|b|`
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a as i64
}
