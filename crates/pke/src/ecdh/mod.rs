//! Elliptic-curve Diffie-Hellman over toy curves
//!
//! Each party holds a private scalar d and publishes d·G. Combining the own
//! scalar with the peer's public point gives dA·dB·G on both sides.

use core::fmt;

use log::debug;
use rand::{CryptoRng, Rng, RngCore};
use toycurve_algorithms::{CurveParameters, Point};
use toycurve_api::{KeyAgreement, Result as ApiResult, ResultExt};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::Domain;
use crate::error::{Error, Result};

/// Private scalar d. Wiped on drop, never printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateScalar(i64);

impl PrivateScalar {
    /// Wrap a scalar. Negative scalars are rejected.
    pub fn new(d: i64) -> Result<Self> {
        if d < 0 {
            return Err(Error::InvalidKey("private scalar must be non-negative"));
        }
        Ok(Self(d))
    }

    /// The raw scalar
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateScalar(..)")
    }
}

/// A party's key pair: private d and public d·G.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateScalar,
    public: Point,
}

impl KeyPair {
    /// Key pair for an externally supplied private scalar
    pub fn from_private(domain: &Domain, d: i64) -> Result<Self> {
        let private = PrivateScalar::new(d)?;
        let public = domain.curve().scalar_mul(domain.generator(), private.value())?;
        Ok(Self { private, public })
    }

    /// Generate a key pair with d drawn uniformly from `[1, n)`, n being the
    /// number of points on the curve.
    ///
    /// A [`Domain`] always holds an affine generator, so n ≥ 2.
    pub fn generate<R: CryptoRng + RngCore>(domain: &Domain, rng: &mut R) -> Result<Self> {
        let order = domain.curve().order();
        let d = rng.gen_range(1..order);
        Self::from_private(domain, d)
    }

    /// The private scalar
    pub fn private(&self) -> &PrivateScalar {
        &self.private
    }

    /// The public point d·G
    pub fn public(&self) -> &Point {
        &self.public
    }

    /// Shared secret with a peer: d·peer_public
    pub fn agree(&self, domain: &Domain, peer_public: &Point) -> Result<Point> {
        derive_shared_secret(domain.curve(), &self.private, peer_public)
    }
}

/// Derive both parties' key pairs: dA·G and dB·G.
pub fn establish_keys(domain: &Domain, d_a: i64, d_b: i64) -> Result<(KeyPair, KeyPair)> {
    let party_a = KeyPair::from_private(domain, d_a)?;
    let party_b = KeyPair::from_private(domain, d_b)?;
    debug!(
        "public keys: dA·G = {}, dB·G = {}",
        party_a.public(),
        party_b.public()
    );
    Ok((party_a, party_b))
}

/// Shared secret seen by the owner of `own_private`: own_private·other_public.
///
/// The peer point must be on the curve with canonical coordinates; the
/// identity is accepted, since it is the public key of `d = 0`.
pub fn derive_shared_secret(
    curve: &CurveParameters,
    own_private: &PrivateScalar,
    other_public: &Point,
) -> Result<Point> {
    if !curve.is_on_curve(other_public) {
        return Err(Error::InvalidKey("peer public key is not on the curve"));
    }
    let shared = curve.scalar_mul(other_public, own_private.value())?;
    Ok(shared)
}

/// ECDH over a [`Domain`]
pub struct Ecdh;

impl KeyAgreement for Ecdh {
    type Domain = Domain;
    type PublicKey = Point;
    type SecretKey = PrivateScalar;
    type SharedSecret = Point;

    fn name() -> &'static str {
        "ECDH-toycurve"
    }

    fn public_key(domain: &Domain, secret_key: &PrivateScalar) -> ApiResult<Point> {
        domain
            .curve()
            .scalar_mul(domain.generator(), secret_key.value())
            .with_context("ECDH public key")
    }

    fn agree(
        domain: &Domain,
        secret_key: &PrivateScalar,
        peer_public_key: &Point,
    ) -> ApiResult<Point> {
        derive_shared_secret(domain.curve(), secret_key, peer_public_key)
            .with_context("ECDH agree")
    }
}
