//! GF(2) linear algebra on bit-packed matrices.
//!
//! Matrices and vectors over the binary field are stored as `u64` words,
//! least-significant bit first within a word. Addition is XOR and
//! multiplication is AND, so no explicit modular reduction is needed;
//! trailing bits past the logical width of a row are kept at zero, which is
//! where the "normalize before packing" obligation of the packed
//! representation lives.
//!
//! Byte-level conversions use the MSB-first convention shared by the whole
//! wire format: bit index `b` maps to byte `b / 8`, bit position `7 - b % 8`.

const WORD_BITS: usize = 64;

#[inline]
fn words_for(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

/// A dense bit vector over GF(2).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVec {
    len: usize,
    words: Vec<u64>,
}

impl BitVec {
    /// All-zero vector of the given length.
    pub fn zero(len: usize) -> Self {
        BitVec {
            len,
            words: vec![0u64; words_for(len)],
        }
    }

    /// Reads a vector from MSB-first packed bytes; bits past `len` are ignored.
    pub fn from_msb_bytes(bytes: &[u8], len: usize) -> Self {
        debug_assert!(bytes.len() * 8 >= len);
        let mut v = BitVec::zero(len);
        for i in 0..len {
            let bit = (bytes[i / 8] >> (7 - (i % 8))) & 1;
            if bit == 1 {
                v.set(i, 1);
            }
        }
        v
    }

    /// Packs the vector into MSB-first bytes, zero-padding the final byte.
    pub fn to_msb_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; (self.len + 7) / 8];
        for i in 0..self.len {
            if self.get(i) == 1 {
                bytes[i / 8] |= 1 << (7 - (i % 8));
            }
        }
        bytes
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> u8 {
        debug_assert!(i < self.len);
        ((self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1) as u8
    }

    #[inline]
    pub fn set(&mut self, i: usize, bit: u8) {
        debug_assert!(i < self.len);
        let mask = 1u64 << (i % WORD_BITS);
        if bit & 1 == 1 {
            self.words[i / WORD_BITS] |= mask;
        } else {
            self.words[i / WORD_BITS] &= !mask;
        }
    }

    /// `self ^= other`, elementwise GF(2) addition.
    pub fn xor_assign(&mut self, other: &BitVec) {
        debug_assert_eq!(self.len, other.len);
        for (d, s) in self.words.iter_mut().zip(&other.words) {
            *d ^= s;
        }
    }

    /// Inner product over GF(2): parity of the AND of both vectors.
    pub fn dot(&self, other: &BitVec) -> u8 {
        debug_assert_eq!(self.len, other.len);
        let mut acc = 0u32;
        for (a, b) in self.words.iter().zip(&other.words) {
            acc ^= (a & b).count_ones();
        }
        (acc & 1) as u8
    }

    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }
}

/// A dense bit matrix over GF(2), one row per contiguous word run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    row_words: usize,
    words: Vec<u64>,
}

impl BitMatrix {
    /// All-zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        let row_words = words_for(cols);
        BitMatrix {
            rows,
            cols,
            row_words,
            words: vec![0u64; rows * row_words],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn row(&self, i: usize) -> &[u64] {
        &self.words[i * self.row_words..(i + 1) * self.row_words]
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u8 {
        debug_assert!(i < self.rows && j < self.cols);
        let w = self.words[i * self.row_words + j / WORD_BITS];
        ((w >> (j % WORD_BITS)) & 1) as u8
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, bit: u8) {
        debug_assert!(i < self.rows && j < self.cols);
        let idx = i * self.row_words + j / WORD_BITS;
        let mask = 1u64 << (j % WORD_BITS);
        if bit & 1 == 1 {
            self.words[idx] |= mask;
        } else {
            self.words[idx] &= !mask;
        }
    }

    /// Overwrites row `i` from MSB-first packed bytes; bits past `cols` are
    /// discarded so the trailing-zero invariant holds.
    pub fn set_row_from_msb_bytes(&mut self, i: usize, bytes: &[u8]) {
        debug_assert!(bytes.len() * 8 >= self.cols);
        for j in 0..self.cols {
            let bit = (bytes[j / 8] >> (7 - (j % 8))) & 1;
            self.set(i, j, bit);
        }
    }

    /// Inner product of row `i` with `v` over GF(2).
    pub fn row_dot(&self, i: usize, v: &BitVec) -> u8 {
        debug_assert_eq!(self.cols, v.len);
        let mut acc = 0u32;
        for (a, b) in self.row(i).iter().zip(v.words()) {
            acc ^= (a & b).count_ones();
        }
        (acc & 1) as u8
    }

    pub fn transpose(&self) -> BitMatrix {
        let mut out = BitMatrix::zero(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                if self.get(i, j) == 1 {
                    out.set(j, i, 1);
                }
            }
        }
        out
    }

    /// Matrix product over GF(2): row-wise accumulation, one XOR of the whole
    /// right-hand row per set bit on the left.
    pub fn mul(&self, rhs: &BitMatrix) -> BitMatrix {
        assert_eq!(
            self.cols, rhs.rows,
            "GF(2) matrix product shape mismatch: {}x{} * {}x{}",
            self.rows, self.cols, rhs.rows, rhs.cols
        );
        let mut out = BitMatrix::zero(self.rows, rhs.cols);
        for i in 0..self.rows {
            let lhs_row = i * self.row_words;
            let out_row = i * out.row_words;
            for k in 0..self.cols {
                let bit = (self.words[lhs_row + k / WORD_BITS] >> (k % WORD_BITS)) & 1;
                if bit == 1 {
                    let rhs_row = k * rhs.row_words;
                    for w in 0..out.row_words {
                        out.words[out_row + w] ^= rhs.words[rhs_row + w];
                    }
                }
            }
        }
        out
    }

    /// `self ^= other`, elementwise GF(2) addition.
    pub fn xor_assign(&mut self, other: &BitMatrix) {
        assert_eq!((self.rows, self.cols), (other.rows, other.cols));
        for (d, s) in self.words.iter_mut().zip(&other.words) {
            *d ^= s;
        }
    }

    /// Matrix-vector product over GF(2).
    pub fn mul_vec(&self, v: &BitVec) -> BitVec {
        assert_eq!(self.cols, v.len);
        let mut out = BitVec::zero(self.rows);
        for i in 0..self.rows {
            out.set(i, self.row_dot(i, v));
        }
        out
    }

    pub fn swap_rows(&mut self, r0: usize, r1: usize) {
        if r0 == r1 {
            return;
        }
        for w in 0..self.row_words {
            self.words.swap(r0 * self.row_words + w, r1 * self.row_words + w);
        }
    }

    /// Row `dst ^= row src`. The rows must be distinct.
    pub fn xor_rows(&mut self, src: usize, dst: usize) {
        debug_assert_ne!(src, dst);
        for w in 0..self.row_words {
            let v = self.words[src * self.row_words + w];
            self.words[dst * self.row_words + w] ^= v;
        }
    }
}

/// Solves `a * x = b` over GF(2) by Gauss-Jordan elimination.
///
/// Returns `None` when `a` is singular; callers treat that as "draw new
/// inputs and retry", not as an error.
pub fn solve(a: &BitMatrix, b: &BitVec) -> Option<BitVec> {
    let n = a.rows();
    debug_assert_eq!(a.cols(), n);
    debug_assert_eq!(b.len(), n);

    let mut aug = BitMatrix::zero(n, n + 1);
    for i in 0..n {
        for j in 0..n {
            aug.set(i, j, a.get(i, j));
        }
        aug.set(i, n, b.get(i));
    }

    for col in 0..n {
        let pivot = (col..n).find(|&r| aug.get(r, col) == 1)?;
        aug.swap_rows(col, pivot);
        for r in 0..n {
            if r != col && aug.get(r, col) == 1 {
                aug.xor_rows(col, r);
            }
        }
    }

    let mut x = BitVec::zero(n);
    for i in 0..n {
        x.set(i, aug.get(i, n));
    }
    Some(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut impl Rng, rows: usize, cols: usize) -> BitMatrix {
        let mut m = BitMatrix::zero(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                m.set(i, j, rng.gen_range(0..=1));
            }
        }
        m
    }

    #[test]
    fn mul_matches_naive_product() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let a = random_matrix(&mut rng, 13, 70);
        let b = random_matrix(&mut rng, 70, 9);
        let c = a.mul(&b);
        for i in 0..13 {
            for j in 0..9 {
                let mut acc = 0u8;
                for k in 0..70 {
                    acc ^= a.get(i, k) & b.get(k, j);
                }
                assert_eq!(c.get(i, j), acc, "mismatch at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn transpose_round_trip() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let a = random_matrix(&mut rng, 65, 3);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn msb_byte_round_trip_masks_padding() {
        let v = BitVec::from_msb_bytes(&[0b1011_0111], 5);
        assert_eq!(
            (0..5).map(|i| v.get(i)).collect::<Vec<_>>(),
            vec![1, 0, 1, 1, 0]
        );
        // repacking pads the dropped tail with zeros
        assert_eq!(v.to_msb_bytes(), vec![0b1011_0000]);
    }

    #[test]
    fn solve_recovers_known_solution() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(23);
        let mut solved = 0;
        for _ in 0..20 {
            let a = random_matrix(&mut rng, 16, 16);
            let mut x = BitVec::zero(16);
            for i in 0..16 {
                x.set(i, rng.gen_range(0..=1));
            }
            let b = a.mul_vec(&x);
            if let Some(found) = solve(&a, &b) {
                // a may be singular with multiple solutions; check a*found = b
                assert_eq!(a.mul_vec(&found), b);
                solved += 1;
            }
        }
        // random square GF(2) matrices are invertible often enough
        assert!(solved > 0);
    }

    #[test]
    fn dot_is_parity_of_and() {
        let a = BitVec::from_msb_bytes(&[0b1100_0000], 4);
        let b = BitVec::from_msb_bytes(&[0b0100_0000], 4);
        assert_eq!(a.dot(&b), 1);
        assert_eq!(a.dot(&a), 0);
    }
}
