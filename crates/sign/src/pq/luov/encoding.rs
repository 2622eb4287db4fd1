//! Bit packing and wire formats.
//!
//! Public key layout: `public_seed` (SEED_SIZE bytes) followed by the M rows
//! of Q2, each `ceil(M(M+1)/2 / 8)` bytes. Within a row, the upper-triangular
//! entries of Pk3 are enumerated row-major with `i <= j` and packed eight per
//! byte, most-significant bit first; the low-order bits of the final byte are
//! zero padding. This exact byte layout is the compatibility contract between
//! independently implemented signers and verifiers.
//!
//! Signature layout: the packed variable assignment (`ceil(N/8)` bytes,
//! MSB-first) followed by the salt.

use super::gf2::{BitMatrix, BitVec};
use crate::error::{Error, Result};
use params::pqc::luov::LuovParams;

/// Flattens the upper triangle of one reduced oil matrix into a packed row.
///
/// Entries come out of the bit-packed representation already reduced mod 2;
/// the representation itself is the normalization step.
pub(crate) fn pack_triangular_row<P: LuovParams>(pk3: &BitMatrix) -> Vec<u8> {
    debug_assert_eq!((pk3.rows(), pk3.cols()), (P::M, P::M));
    let mut bytes = vec![0u8; P::Q2_ROW_BYTES];
    let mut idx = 0;
    for i in 0..P::M {
        for j in i..P::M {
            if pk3.get(i, j) == 1 {
                bytes[idx / 8] |= 1 << (7 - (idx % 8));
            }
            idx += 1;
        }
    }
    debug_assert_eq!(idx, P::PK3_TRIANGLE);
    bytes
}

/// Inverse of [`pack_triangular_row`]: rebuilds the upper-triangular matrix.
/// Padding bits are ignored.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) fn unpack_triangular_row<P: LuovParams>(bytes: &[u8]) -> Result<BitMatrix> {
    if bytes.len() != P::Q2_ROW_BYTES {
        return Err(Error::Deserialization(format!(
            "Q2 row length mismatch: expected {}, got {}",
            P::Q2_ROW_BYTES,
            bytes.len()
        )));
    }
    let mut pk3 = BitMatrix::zero(P::M, P::M);
    let mut idx = 0;
    for i in 0..P::M {
        for j in i..P::M {
            let bit = (bytes[idx / 8] >> (7 - (idx % 8))) & 1;
            pk3.set(i, j, bit);
            idx += 1;
        }
    }
    Ok(pk3)
}

/// Assembles the public key: public seed followed by the packed Q2 body.
pub(crate) fn pack_public_key<P: LuovParams>(
    public_seed: &[u8],
    q2: &[u8],
) -> Result<Vec<u8>> {
    let mut pk = Vec::with_capacity(P::PUBLIC_KEY_BYTES);
    pk.extend_from_slice(public_seed);
    pk.extend_from_slice(q2);
    if pk.len() != P::PUBLIC_KEY_BYTES {
        return Err(Error::Serialization(format!(
            "public key size mismatch: expected {}, got {}",
            P::PUBLIC_KEY_BYTES,
            pk.len()
        )));
    }
    Ok(pk)
}

/// Splits a packed public key into (public_seed, Q2 body).
pub(crate) fn unpack_public_key<P: LuovParams>(bytes: &[u8]) -> Result<(&[u8], &[u8])> {
    if bytes.len() != P::PUBLIC_KEY_BYTES {
        return Err(Error::Deserialization(format!(
            "public key length mismatch: expected {}, got {}",
            P::PUBLIC_KEY_BYTES,
            bytes.len()
        )));
    }
    Ok(bytes.split_at(P::SEED_SIZE))
}

/// Reads one bit of the packed Q2 body: equation `k`, triangular index `idx`.
#[inline]
pub(crate) fn q2_bit<P: LuovParams>(q2: &[u8], k: usize, idx: usize) -> u8 {
    debug_assert!(k < P::M && idx < P::PK3_TRIANGLE);
    let byte = q2[k * P::Q2_ROW_BYTES + idx / 8];
    (byte >> (7 - (idx % 8))) & 1
}

/// Packs a signature: variable assignment followed by the salt.
pub(crate) fn pack_signature<P: LuovParams>(s: &BitVec, salt: &[u8]) -> Result<Vec<u8>> {
    debug_assert_eq!(s.len(), P::N);
    debug_assert_eq!(salt.len(), P::SALT_SIZE);
    let mut sig = s.to_msb_bytes();
    sig.extend_from_slice(salt);
    if sig.len() != P::SIGNATURE_BYTES {
        return Err(Error::Serialization(format!(
            "signature size mismatch: expected {}, got {}",
            P::SIGNATURE_BYTES,
            sig.len()
        )));
    }
    Ok(sig)
}

/// Splits a packed signature into the variable assignment and the salt.
pub(crate) fn unpack_signature<P: LuovParams>(bytes: &[u8]) -> Result<(BitVec, &[u8])> {
    if bytes.len() != P::SIGNATURE_BYTES {
        return Err(Error::InvalidSignatureSize {
            expected: P::SIGNATURE_BYTES,
            actual: bytes.len(),
        });
    }
    let (s_bytes, salt) = bytes.split_at(P::SIGNATURE_BYTES - P::SALT_SIZE);
    Ok((BitVec::from_msb_bytes(s_bytes, P::N), salt))
}
