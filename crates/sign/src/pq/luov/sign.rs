//! Signing and verification.
//!
//! Verification evaluates the public quadratic map at the signature's
//! variable assignment and compares against the salted message digest.
//! Signing exploits the structure of the key: for a fixed vinegar assignment
//! the composed map is affine in the oil variables, so one Gauss-Jordan solve
//! produces a preimage. A singular system means the vinegar draw was unlucky;
//! signing retries with fresh vinegar up to `MAX_SIGN_ATTEMPTS` times.

use rand::{CryptoRng, RngCore};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use subtle::ConstantTimeEq;

use super::encoding::{pack_signature, q2_bit, unpack_public_key, unpack_signature};
use super::expander::{Expander, PublicMap, SecretExpansion};
use super::gf2::{self, BitMatrix, BitVec};
use super::keygen::derive_q2;
use crate::error::{Error, Result};
use params::pqc::luov::LuovParams;

/// Salted message digest: the first M bits of SHAKE256(message || 0x00 || salt).
///
/// The 0x00 domain separator keeps a message ending in salt-like bytes from
/// colliding with a shorter message and a different salt.
pub(crate) fn message_digest<P: LuovParams>(message: &[u8], salt: &[u8]) -> BitVec {
    debug_assert_eq!(salt.len(), P::SALT_SIZE);
    let mut sponge = Shake256::default();
    sponge.update(message);
    sponge.update(&[0x00]);
    sponge.update(salt);
    let mut reader = sponge.finalize_xof();
    let mut buf = vec![0u8; (P::M + 7) / 8];
    reader.read(&mut buf);
    BitVec::from_msb_bytes(&buf, P::M)
}

/// Evaluates the public map at `s`: per equation, the constant bit, the
/// linear row, the vinegar-anchored quadratic terms from Q1, and the oil-oil
/// terms from the packed Q2 body.
pub(crate) fn evaluate_public_map<P: LuovParams>(
    map: &PublicMap,
    q2: &[u8],
    s: &BitVec,
) -> BitVec {
    debug_assert_eq!(s.len(), P::N);
    debug_assert_eq!(q2.len(), P::M * P::Q2_ROW_BYTES);

    let mut out = BitVec::zero(P::M);
    for k in 0..P::M {
        let mut bit = map.c.get(k) ^ map.l.row_dot(k, s);

        // Vinegar-anchored terms x_i * x_j, i < V, j in i..N. A clear s_i
        // zeroes the whole run of columns for that row, so skip it outright.
        let mut col = 0;
        for i in 0..P::V {
            if s.get(i) == 1 {
                for j in i..P::N {
                    if s.get(j) == 1 {
                        bit ^= map.q1.get(k, col + (j - i));
                    }
                }
            }
            col += P::N - i;
        }

        // Oil-oil terms from the published reduced coefficients.
        let mut idx = 0;
        for a in 0..P::M {
            for b in a..P::M {
                if s.get(P::V + a) & s.get(P::V + b) == 1 {
                    bit ^= q2_bit::<P>(q2, k, idx);
                }
                idx += 1;
            }
        }

        out.set(k, bit);
    }
    out
}

/// Maps (vinegar, oil) to the published variable assignment:
/// `s = (xv ^ T*xo, xo)`.
fn assemble<P: LuovParams>(t: &BitMatrix, vinegar: &BitVec, oil: &BitVec) -> BitVec {
    debug_assert_eq!(vinegar.len(), P::V);
    debug_assert_eq!(oil.len(), P::M);
    let mut mixed = t.mul_vec(oil);
    mixed.xor_assign(vinegar);
    let mut s = BitVec::zero(P::N);
    for i in 0..P::V {
        s.set(i, mixed.get(i));
    }
    for j in 0..P::M {
        s.set(P::V + j, oil.get(j));
    }
    s
}

/// Attempts one vinegar draw: builds the affine oil system by evaluating the
/// map at the all-zero oil vector and at each unit vector, then solves it.
///
/// The oil system reuses the verifier's evaluator, so any convention drift
/// between signer and verifier would fail here first.
fn solve_oil<P: LuovParams>(
    map: &PublicMap,
    q2: &[u8],
    t: &BitMatrix,
    vinegar: &BitVec,
    target: &BitVec,
) -> Option<BitVec> {
    let zero_oil = BitVec::zero(P::M);
    let g0 = evaluate_public_map::<P>(map, q2, &assemble::<P>(t, vinegar, &zero_oil));

    let mut a = BitMatrix::zero(P::M, P::M);
    for b in 0..P::M {
        let mut unit = BitVec::zero(P::M);
        unit.set(b, 1);
        let mut col = evaluate_public_map::<P>(map, q2, &assemble::<P>(t, vinegar, &unit));
        col.xor_assign(&g0);
        for k in 0..P::M {
            a.set(k, b, col.get(k));
        }
    }

    let mut rhs = target.clone();
    rhs.xor_assign(&g0);
    gf2::solve(&a, &rhs)
}

pub(crate) fn sign_internal<P: LuovParams, E: Expander, R: CryptoRng + RngCore>(
    expander: &E,
    secret_key: &[u8],
    message: &[u8],
    rng: &mut R,
) -> Result<Vec<u8>> {
    if secret_key.len() != P::SEED_SIZE {
        return Err(Error::InvalidKeySize {
            expected: P::SEED_SIZE,
            actual: secret_key.len(),
        });
    }

    let SecretExpansion { public_seed, t } = expander.expand_secret::<P>(secret_key)?;
    let map = expander.expand_public_map::<P>(&public_seed)?;
    let q2 = derive_q2::<P>(&map.q1, &t)?;

    let mut salt = vec![0u8; P::SALT_SIZE];
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| Error::Rng(e.to_string()))?;
    let digest = message_digest::<P>(message, &salt);

    let mut vinegar_buf = vec![0u8; (P::V + 7) / 8];
    for _ in 0..P::MAX_SIGN_ATTEMPTS {
        rng.try_fill_bytes(&mut vinegar_buf)
            .map_err(|e| Error::Rng(e.to_string()))?;
        let vinegar = BitVec::from_msb_bytes(&vinegar_buf, P::V);

        if let Some(oil) = solve_oil::<P>(&map, &q2, &t, &vinegar, &digest) {
            let s = assemble::<P>(&t, &vinegar, &oil);
            debug_assert_eq!(evaluate_public_map::<P>(&map, &q2, &s), digest);
            return pack_signature::<P>(&s, &salt);
        }
    }

    Err(Error::SignatureGeneration {
        algorithm: P::NAME,
        details: format!(
            "no invertible oil system after {} vinegar draws",
            P::MAX_SIGN_ATTEMPTS
        ),
    })
}

/// Returns `Ok(false)` for a well-formed signature that does not check;
/// errors are reserved for malformed inputs.
pub(crate) fn verify_internal<P: LuovParams, E: Expander>(
    expander: &E,
    public_key: &[u8],
    signature: &[u8],
    message: &[u8],
) -> Result<bool> {
    let (public_seed, q2) = unpack_public_key::<P>(public_key)?;
    let (s, salt) = unpack_signature::<P>(signature)?;

    let map = expander.expand_public_map::<P>(public_seed)?;
    let evaluated = evaluate_public_map::<P>(&map, q2, &s);
    let digest = message_digest::<P>(message, salt);

    let ok: bool = evaluated
        .to_msb_bytes()
        .ct_eq(&digest.to_msb_bytes())
        .into();
    Ok(ok)
}
