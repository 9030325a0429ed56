//! Trait definition for Diffie-Hellman style key agreement.

use crate::error::AgreementResult as Result;
use zeroize::Zeroize;

/// Trait for key agreement schemes where two parties combine their own
/// secret with the other party's public value and reach the same result.
pub trait KeyAgreement {
    /// Public domain parameters shared by both parties (curve and generator).
    type Domain;

    /// Public key type sent over the wire.
    type PublicKey: Clone + PartialEq;

    /// Secret key type. Implements `Zeroize` so it can be wiped after use.
    type SecretKey: Zeroize;

    /// Agreed value. Both parties must compute an identical value.
    type SharedSecret: Clone + PartialEq;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Derive the public key belonging to `secret_key`.
    fn public_key(domain: &Self::Domain, secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Combine the local secret with the peer's public key.
    ///
    /// # Arguments
    /// * `domain` - The shared domain parameters.
    /// * `secret_key` - This party's secret key.
    /// * `peer_public_key` - The other party's public key.
    fn agree(
        domain: &Self::Domain,
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
