// File: crates/sign/src/pq/luov/mod.rs
//! LUOV multivariate signature scheme over GF(2)
//!
//! LUOV is an Unbalanced Oil and Vinegar scheme: the public key is a system
//! of M quadratic equations in N = V + M binary variables, and the secret is
//! a linear transform T that hides an easily invertible structure inside it.
//! Keys are fully deterministic functions of a 32-byte private seed: the
//! secret key stores nothing but the seed, and signing re-derives T and the
//! public map on demand through a SHAKE256 expander.
//!
//! Submodule layout:
//! - `gf2.rs`: bit-packed GF(2) vectors, matrices, and Gauss-Jordan solving.
//! - `expander.rs`: the `Expander` strategy trait and the SHAKE256 instance.
//! - `blocks.rs`: per-equation (Pk1, Pk2) extraction from the squeezed Q1.
//! - `reduce.rs`: folding T into the published oil-oil coefficients Pk3.
//! - `encoding.rs`: triangular bit packing and the key/signature wire formats.
//! - `keygen.rs`: seed-to-keypair derivation, Q2 assembly.
//! - `sign.rs`: the salted digest, public-map evaluation, sign and verify.

use core::marker::PhantomData;

use api::{Result as ApiResult, Signature as SignatureTrait};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

mod blocks;
mod encoding;
mod expander;
mod gf2;
mod keygen;
mod reduce;
mod sign;

pub use expander::{Expander, PublicMap, SecretExpansion, ShakeExpander};
pub use keygen::{generate_private_seed, public_key_size_estimate};

use crate::error::Error;
use params::pqc::luov::{Luov1Params, Luov3Params, Luov5Params, LuovParams};

/// LUOV public key: the public seed followed by the packed Q2 body.
#[derive(Clone, Debug, Zeroize)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuovPublicKey(pub(crate) Vec<u8>);

/// LUOV secret key: the raw 32-byte private seed. Everything else the signer
/// needs is re-derived, so this is the only material that must stay secret
/// and the only material that gets zeroized.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct LuovSecretKey(pub(crate) Vec<u8>);

/// LUOV signature: the packed variable assignment followed by the salt.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LuovSignatureData(pub(crate) Vec<u8>);

impl AsRef<[u8]> for LuovPublicKey { fn as_ref(&self) -> &[u8] { &self.0 } }
impl AsRef<[u8]> for LuovSecretKey { fn as_ref(&self) -> &[u8] { &self.0 } }
impl AsRef<[u8]> for LuovSignatureData { fn as_ref(&self) -> &[u8] { &self.0 } }

/// Generic LUOV scheme parameterized by a `LuovParams` set, so one core
/// implementation serves every security level.
pub struct Luov<P: LuovParams + 'static> {
    _params: PhantomData<P>,
}

impl<P: LuovParams + 'static> Luov<P> {
    /// Deterministically derives a keypair from a private seed.
    pub fn keypair_from_seed(seed: &[u8]) -> crate::error::Result<(LuovPublicKey, LuovSecretKey)> {
        let (pk, sk) = keygen::keypair_from_seed_internal::<P, _>(&ShakeExpander, seed)?;
        Ok((LuovPublicKey(pk), LuovSecretKey(sk)))
    }

    /// Verifies a signature, reporting the outcome as a boolean.
    ///
    /// `Ok(false)` means a well-formed signature that does not check;
    /// `Err(_)` is reserved for malformed keys or signatures. Callers that
    /// only need pass/fail should use the trait-level `verify`.
    pub fn verify_detached(
        message: &[u8],
        signature: &LuovSignatureData,
        public_key: &LuovPublicKey,
    ) -> crate::error::Result<bool> {
        sign::verify_internal::<P, _>(&ShakeExpander, &public_key.0, &signature.0, message)
    }
}

impl<P: LuovParams + 'static> SignatureTrait for Luov<P> {
    type PublicKey = LuovPublicKey;
    type SecretKey = LuovSecretKey;
    type SignatureData = LuovSignatureData;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str { P::NAME }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let seed = generate_private_seed::<P, R>(rng).map_err(api::Error::from)?;
        let (pk, sk) = keygen::keypair_from_seed_internal::<P, _>(&ShakeExpander, &seed)
            .map_err(api::Error::from)?;
        Ok((LuovPublicKey(pk), LuovSecretKey(sk)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey { keypair.0.clone() }
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey { keypair.1.clone() }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        // Vinegar variables and the salt are drawn fresh for every signature.
        let mut rng = rand::rngs::OsRng;
        let sig = sign::sign_internal::<P, _, _>(&ShakeExpander, &secret_key.0, message, &mut rng)
            .map_err(api::Error::from)?;
        Ok(LuovSignatureData(sig))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let ok = Self::verify_detached(message, signature, public_key)
            .map_err(api::Error::from)?;
        if ok {
            Ok(())
        } else {
            Err(api::Error::InvalidSignature {
                context: P::NAME,
                message: "signature does not verify".into(),
            })
        }
    }
}

impl<P: LuovParams + 'static> api::traits::SignatureSerialize for Luov<P> {
    const PUBLIC_KEY_SIZE: usize = P::PUBLIC_KEY_BYTES;
    const SECRET_KEY_SIZE: usize = P::SECRET_KEY_BYTES;
    const SIGNATURE_SIZE: usize = P::SIGNATURE_BYTES;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.0.clone()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        if bytes.len() != P::PUBLIC_KEY_BYTES {
            return Err(Error::InvalidKeySize {
                expected: P::PUBLIC_KEY_BYTES,
                actual: bytes.len(),
            }
            .into());
        }
        Ok(LuovPublicKey(bytes.to_vec()))
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(key.0.clone())
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        if bytes.len() != P::SECRET_KEY_BYTES {
            return Err(Error::InvalidKeySize {
                expected: P::SECRET_KEY_BYTES,
                actual: bytes.len(),
            }
            .into());
        }
        Ok(LuovSecretKey(bytes.to_vec()))
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.0.clone()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        if bytes.len() != P::SIGNATURE_BYTES {
            return Err(Error::InvalidSignatureSize {
                expected: P::SIGNATURE_BYTES,
                actual: bytes.len(),
            }
            .into());
        }
        Ok(LuovSignatureData(bytes.to_vec()))
    }
}

impl<P: LuovParams + 'static> api::traits::SignatureDerive for Luov<P> {
    const SEED_SIZE: usize = P::SEED_SIZE;

    fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
        Self::keypair_from_seed(seed).map_err(api::Error::from)
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        let (pk, _) = Self::keypair_from_seed(&secret_key.0).map_err(api::Error::from)?;
        Ok(pk)
    }
}

/// LUOV-1: 128-bit security, v = 197, m = 57.
pub type Luov1 = Luov<Luov1Params>;
/// LUOV-3: 192-bit security, v = 283, m = 83.
pub type Luov3 = Luov<Luov3Params>;
/// LUOV-5: 256-bit security, v = 374, m = 110.
pub type Luov5 = Luov<Luov5Params>;
