//! Key generation: private seed to (public key, secret key).
//!
//! The secret key is the raw private seed; everything else is re-derived on
//! demand. The public key is the public seed plus Q2, the packed reduced
//! oil-oil coefficients of all M equations.

use rand::{CryptoRng, RngCore};

use super::blocks::extract_blocks;
use super::encoding::{pack_public_key, pack_triangular_row};
use super::expander::{Expander, PublicMap, SecretExpansion};
use super::gf2::BitMatrix;
use super::reduce::compute_pk3;
use crate::error::{Error, Result};
use params::pqc::luov::LuovParams;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Draws a fresh private seed from the given RNG.
///
/// Entropy failure is surfaced as [`Error::Rng`] and never papered over with
/// a fallback source.
pub fn generate_private_seed<P: LuovParams, R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<Vec<u8>> {
    let mut seed = vec![0u8; P::SEED_SIZE];
    rng.try_fill_bytes(&mut seed)
        .map_err(|e| Error::Rng(e.to_string()))?;
    Ok(seed)
}

/// Derives Q2 from the public quadratic coefficients and the secret transform:
/// per equation, extract (Pk1, Pk2), reduce to Pk3, pack its upper triangle.
///
/// Equations never share mutable state, so with the `parallel` feature the
/// per-equation work fans out across a rayon pool.
pub(crate) fn derive_q2<P: LuovParams>(q1: &BitMatrix, t: &BitMatrix) -> Result<Vec<u8>> {
    let row = |k: usize| -> Result<Vec<u8>> {
        let (pk1, pk2) = extract_blocks::<P>(q1, k)?;
        let pk3 = compute_pk3(&pk1, &pk2, t);
        Ok(pack_triangular_row::<P>(&pk3))
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<u8>> = (0..P::M).into_par_iter().map(row).collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<u8>> = (0..P::M).map(row).collect::<Result<_>>()?;

    let mut q2 = Vec::with_capacity(P::M * P::Q2_ROW_BYTES);
    for r in rows {
        q2.extend_from_slice(&r);
    }
    Ok(q2)
}

/// Deterministic keypair derivation from a private seed.
///
/// Returns `(public_key_bytes, secret_key_bytes)`; the secret key is a copy
/// of the seed itself.
pub(crate) fn keypair_from_seed_internal<P: LuovParams, E: Expander>(
    expander: &E,
    private_seed: &[u8],
) -> Result<(Vec<u8>, Vec<u8>)> {
    if private_seed.len() != P::SEED_SIZE {
        return Err(Error::InvalidKeySize {
            expected: P::SEED_SIZE,
            actual: private_seed.len(),
        });
    }

    let SecretExpansion { public_seed, t } = expander.expand_secret::<P>(private_seed)?;
    if t.rows() != P::V || t.cols() != P::M {
        return Err(Error::DimensionMismatch {
            context: "T",
            expected: (P::V, P::M),
            actual: (t.rows(), t.cols()),
        });
    }

    let PublicMap { q1, .. } = expander.expand_public_map::<P>(&public_seed)?;
    let q2 = derive_q2::<P>(&q1, &t)?;
    let pk = pack_public_key::<P>(&public_seed, &q2)?;

    Ok((pk, private_seed.to_vec()))
}

/// Public key size in bytes for a parameter set, without generating a key.
pub fn public_key_size_estimate<P: LuovParams>() -> usize {
    P::PUBLIC_KEY_BYTES
}
