//! End-to-end tests through the `luov` facade crate.
//!
//! These exercise the public surface the way a downstream user would: traits
//! from the prelude, byte-level serialization, and deterministic derivation.
//! Sign/verify round trips run on a reduced parameter set so the suite stays
//! fast in debug builds; full-size parameter sets are covered by key
//! derivation and size checks only.

use luov::prelude::*;
use luov_tests::{fixed_seed, test_rng};

/// Reduced dimensions for fast end-to-end runs. The 16-bit digest keeps the
/// chance of a tampered input slipping through at 2^-16.
struct SmallParams;

impl LuovParams for SmallParams {
    const NAME: &'static str = "LUOV-small";
    const V: usize = 20;
    const M: usize = 16;
    const SECURITY_LEVEL: u32 = 0;
}

type SmallLuov = Luov<SmallParams>;

#[test]
fn facade_reexports_are_consistent() {
    assert_eq!(<Luov1 as Signature>::name(), "LUOV-1");
    assert_eq!(<Luov3 as Signature>::name(), "LUOV-3");
    assert_eq!(<Luov5 as Signature>::name(), "LUOV-5");
    assert_eq!(<Luov1 as SignatureSerialize>::PUBLIC_KEY_SIZE, 11831);
    assert_eq!(<Luov3 as SignatureSerialize>::PUBLIC_KEY_SIZE, 36220);
    assert_eq!(<Luov5 as SignatureSerialize>::PUBLIC_KEY_SIZE, 84072);
    assert_eq!(<Luov1 as SignatureSerialize>::SIGNATURE_SIZE, 48);
}

#[test]
fn sign_verify_round_trip_through_traits() {
    let mut rng = test_rng();
    let keypair = SmallLuov::keypair(&mut rng).expect("keypair");
    let pk = SmallLuov::public_key(&keypair);
    let sk = SmallLuov::secret_key(&keypair);

    let message = b"integration test message";
    let sig = SmallLuov::sign(message, &sk).expect("sign");

    assert!(SmallLuov::verify(message, &sig, &pk).is_ok());
    assert!(SmallLuov::verify(b"some other message", &sig, &pk).is_err());
}

#[test]
fn tampered_signature_is_rejected() {
    let mut rng = test_rng();
    let (pk, sk) = SmallLuov::keypair(&mut rng).expect("keypair");
    let message = b"tamper target";
    let sig = SmallLuov::sign(message, &sk).expect("sign");

    let mut bytes = SmallLuov::serialize_signature(&sig);
    bytes[0] ^= 0x80;
    let forged = SmallLuov::deserialize_signature(&bytes).expect("well-formed");
    assert!(SmallLuov::verify(message, &forged, &pk).is_err());
}

#[test]
fn derived_keypair_is_deterministic() {
    let seed = fixed_seed();
    let (pk_a, sk_a) = Luov1::derive_keypair(&seed).expect("derive");
    let (pk_b, _) = Luov1::derive_keypair(&seed).expect("derive");
    assert_eq!(pk_a.as_ref(), pk_b.as_ref());
    assert_eq!(pk_a.as_ref().len(), 11831);

    let pk_c = Luov1::derive_public_key(&sk_a).expect("re-derive");
    assert_eq!(pk_c.as_ref(), pk_a.as_ref());
}

#[test]
fn serialization_round_trips_and_rejects_bad_lengths() {
    let seed = fixed_seed();
    let (pk, sk) = SmallLuov::derive_keypair(&seed).expect("derive");

    let pk_bytes = SmallLuov::serialize_public_key(&pk);
    assert_eq!(pk_bytes.len(), <SmallLuov as SignatureSerialize>::PUBLIC_KEY_SIZE);
    let pk_back = SmallLuov::deserialize_public_key(&pk_bytes).expect("pk round trip");
    assert_eq!(pk_back.as_ref(), pk.as_ref());
    assert!(SmallLuov::deserialize_public_key(&pk_bytes[..pk_bytes.len() - 1]).is_err());

    let sk_bytes = SmallLuov::serialize_secret_key(&sk);
    assert_eq!(sk_bytes.len(), <SmallLuov as SignatureSerialize>::SECRET_KEY_SIZE);
    let sk_back = SmallLuov::deserialize_secret_key(&sk_bytes).expect("sk round trip");
    assert_eq!(sk_back.as_ref(), sk.as_ref());
}

#[test]
fn secret_key_is_the_seed() {
    let seed = fixed_seed();
    let (_, sk) = SmallLuov::derive_keypair(&seed).expect("derive");
    assert_eq!(sk.as_ref(), seed.as_slice());
}

#[test]
fn cross_parameter_keys_are_rejected() {
    let seed = fixed_seed();
    let (pk_small, _) = SmallLuov::derive_keypair(&seed).expect("derive");
    // a SmallParams public key has the wrong length for the toy set
    assert!(Luov::<LuovToyParams>::deserialize_public_key(pk_small.as_ref()).is_err());
}
