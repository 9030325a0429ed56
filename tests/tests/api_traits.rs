//! The protocol through the generic traits of `toycurve-api`

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toycurve_algorithms::Point;
use toycurve_api::{Error, KeyAgreement, PointEncryption};
use toycurve_params::{ALL_CURVES, TOY_P17};
use toycurve_pke::{Ciphertext, Ecdh, ElGamal, KeyPair, PrivateScalar};
use toycurve_tests::domain;

fn agree_then_encrypt<K, E>(
    domain: &K::Domain,
    group: &E::Domain,
    secret_a: &K::SecretKey,
    secret_b: &K::SecretKey,
    plaintext: &E::Plaintext,
) -> Result<E::Ciphertext, Error>
where
    K: KeyAgreement,
    E: PointEncryption<SharedSecret = K::SharedSecret, PublicKey = K::PublicKey>,
{
    let public_a = K::public_key(domain, secret_a)?;
    let public_b = K::public_key(domain, secret_b)?;
    let shared_a = K::agree(domain, secret_a, &public_b)?;
    let shared_b = K::agree(domain, secret_b, &public_a)?;
    assert!(shared_a == shared_b, "{} disagreement", K::name());
    E::encrypt(group, plaintext, &shared_a, &public_a)
}

#[test]
fn test_generic_exchange_p17() {
    let domain = domain(&TOY_P17);
    let ciphertext = agree_then_encrypt::<Ecdh, ElGamal>(
        &domain,
        domain.curve(),
        &PrivateScalar::new(3).unwrap(),
        &PrivateScalar::new(5).unwrap(),
        &Point::affine(10, 6),
    )
    .unwrap();
    assert_eq!(
        ciphertext,
        Ciphertext {
            cipher_point: Point::affine(5, 16),
            sender_public: Point::affine(10, 6),
        }
    );
}

#[test]
fn test_generated_keys_agree_on_every_named_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x7079_6375);
    for constants in &ALL_CURVES {
        let domain = domain(constants);
        for _ in 0..16 {
            let alice = KeyPair::generate(&domain, &mut rng).unwrap();
            let bob = KeyPair::generate(&domain, &mut rng).unwrap();
            let via_trait = Ecdh::agree(&domain, alice.private(), bob.public()).unwrap();
            assert_eq!(via_trait, bob.agree(&domain, alice.public()).unwrap());
        }
    }
}
