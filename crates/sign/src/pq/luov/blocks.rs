//! Per-equation sub-block extraction from the public quadratic coefficients.
//!
//! Equation `k` of Q1 stores its coefficients flattened in row-major
//! vinegar-row order: for each vinegar index `i`, the coefficients of
//! `x_i * x_j` for `j = i..N`. Columns with `j < V` form the vinegar-vinegar
//! block Pk1 (upper triangular, `V x V`); columns with `j >= V` form the
//! vinegar-oil block Pk2 (`V x M`).

use super::gf2::BitMatrix;
use crate::error::{Error, Result};
use params::pqc::luov::LuovParams;

/// Extracts (Pk1, Pk2) for equation `k`. Q1 is read, never mutated.
pub(crate) fn extract_blocks<P: LuovParams>(
    q1: &BitMatrix,
    k: usize,
) -> Result<(BitMatrix, BitMatrix)> {
    if q1.rows() != P::M || q1.cols() != P::Q1_COLS {
        return Err(Error::DimensionMismatch {
            context: "Q1",
            expected: (P::M, P::Q1_COLS),
            actual: (q1.rows(), q1.cols()),
        });
    }
    if k >= P::M {
        return Err(Error::InvalidParameter(format!(
            "equation index {} out of range for m = {}",
            k,
            P::M
        )));
    }

    let mut pk1 = BitMatrix::zero(P::V, P::V);
    let mut pk2 = BitMatrix::zero(P::V, P::M);
    let mut col = 0;
    for i in 0..P::V {
        for j in i..P::N {
            let bit = q1.get(k, col);
            if j < P::V {
                pk1.set(i, j, bit);
            } else {
                pk2.set(i, j - P::V, bit);
            }
            col += 1;
        }
    }
    debug_assert_eq!(col, P::Q1_COLS);

    Ok((pk1, pk2))
}
