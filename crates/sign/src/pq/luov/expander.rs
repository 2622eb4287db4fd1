//! Deterministic seed expansion through a SHAKE256 sponge.
//!
//! The expander is the only source of pseudorandomness in key derivation:
//! identical seeds must yield identical outputs across processes and over
//! time, both for signature reproducibility and for test fixtures. It is
//! modeled as a strategy trait so an alternate expansion primitive can be
//! substituted without touching the matrix-reduction core.
//!
//! Squeeze layout (fixed, part of the compatibility contract):
//! - private sponge absorbs the raw private seed, then squeezes the public
//!   seed followed by the rows of T (`ceil(M/8)` bytes each, MSB-first);
//! - public sponge absorbs the public seed, then squeezes C, the rows of L
//!   (`ceil(N/8)` bytes each) and the rows of Q1 (`ceil(Q1_COLS/8)` bytes
//!   each), in that order.

use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use super::gf2::{BitMatrix, BitVec};
use crate::error::{Error, Result};
use params::pqc::luov::LuovParams;

/// Everything derived from the private seed.
pub struct SecretExpansion {
    /// Public seed, shared and immutable once produced.
    pub public_seed: Vec<u8>,
    /// Secret linear transform T, a `V x M` matrix over GF(2). Logically part
    /// of the private key material; re-derivable, never stored separately.
    pub t: BitMatrix,
}

/// The public quadratic map squeezed from the public seed.
pub struct PublicMap {
    /// Constant part, one bit per equation.
    pub c: BitVec,
    /// Linear part, `M x N`.
    pub l: BitMatrix,
    /// Quadratic part: per equation, the flattened vinegar-row upper
    /// triangle and vinegar-oil rectangle, `M x Q1_COLS`.
    pub q1: BitMatrix,
}

/// Deterministic expansion strategy turning seed bytes into key material.
pub trait Expander {
    /// Expands the private seed into the public seed and the secret
    /// transform T.
    fn expand_secret<P: LuovParams>(&self, private_seed: &[u8]) -> Result<SecretExpansion>;

    /// Expands the public seed into the public quadratic map (C, L, Q1).
    fn expand_public_map<P: LuovParams>(&self, public_seed: &[u8]) -> Result<PublicMap>;
}

/// SHAKE256-based expander used by the scheme.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShakeExpander;

impl Expander for ShakeExpander {
    fn expand_secret<P: LuovParams>(&self, private_seed: &[u8]) -> Result<SecretExpansion> {
        if private_seed.len() != P::SEED_SIZE {
            return Err(Error::InvalidKeySize {
                expected: P::SEED_SIZE,
                actual: private_seed.len(),
            });
        }

        let mut sponge = Shake256::default();
        sponge.update(private_seed);
        let mut reader = sponge.finalize_xof();

        let mut public_seed = vec![0u8; P::SEED_SIZE];
        reader.read(&mut public_seed);
        let t = squeeze_bit_matrix(&mut reader, P::V, P::M);

        Ok(SecretExpansion { public_seed, t })
    }

    fn expand_public_map<P: LuovParams>(&self, public_seed: &[u8]) -> Result<PublicMap> {
        if public_seed.len() != P::SEED_SIZE {
            return Err(Error::InvalidKeySize {
                expected: P::SEED_SIZE,
                actual: public_seed.len(),
            });
        }

        let mut sponge = Shake256::default();
        sponge.update(public_seed);
        let mut reader = sponge.finalize_xof();

        let c = squeeze_bit_vec(&mut reader, P::M);
        let l = squeeze_bit_matrix(&mut reader, P::M, P::N);
        let q1 = squeeze_bit_matrix(&mut reader, P::M, P::Q1_COLS);

        Ok(PublicMap { c, l, q1 })
    }
}

fn squeeze_bit_vec<R: XofReader>(reader: &mut R, len: usize) -> BitVec {
    let mut buf = vec![0u8; (len + 7) / 8];
    reader.read(&mut buf);
    BitVec::from_msb_bytes(&buf, len)
}

fn squeeze_bit_matrix<R: XofReader>(reader: &mut R, rows: usize, cols: usize) -> BitMatrix {
    let mut buf = vec![0u8; (cols + 7) / 8];
    let mut out = BitMatrix::zero(rows, cols);
    for i in 0..rows {
        reader.read(&mut buf);
        out.set_row_from_msb_bytes(i, &buf);
    }
    out
}
