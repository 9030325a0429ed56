//! Trait definition for encryption of messages already embedded in a group.

use crate::error::EncryptionResult as Result;

/// Trait for schemes that encrypt a group element under a previously agreed
/// shared secret (ElGamal style).
pub trait PointEncryption {
    /// Domain the group operation runs in.
    type Domain;

    /// Plaintext type, i.e. an encoded message.
    type Plaintext;

    /// Shared secret produced by the key agreement step.
    type SharedSecret;

    /// Sender public key shipped next to the ciphertext.
    type PublicKey;

    /// Ciphertext type produced by the scheme.
    type Ciphertext;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Encrypts an encoded message.
    ///
    /// # Arguments
    /// * `domain` - The group the message lives in.
    /// * `plaintext` - The encoded message.
    /// * `shared_secret` - Secret agreed with the recipient.
    /// * `sender_public_key` - The sender's public key, returned inside the ciphertext.
    fn encrypt(
        domain: &Self::Domain,
        plaintext: &Self::Plaintext,
        shared_secret: &Self::SharedSecret,
        sender_public_key: &Self::PublicKey,
    ) -> Result<Self::Ciphertext>;
}
