//! Folding the secret transform into one equation of the public map.

use super::gf2::BitMatrix;

/// Computes the reduced oil-oil matrix for one equation:
///
/// ```text
/// Pk3 = T^t * Pk1 * T  ^  T^t * Pk2
/// ```
///
/// with GF(2) arithmetic throughout (multiply = AND, add = XOR; the negation
/// in the reference formula is a no-op mod 2). The result is then folded to
/// the unique upper-triangular matrix representing the same quadratic form:
/// the `x_i x_j` and `x_j x_i` coefficients combine, and the lower triangle
/// is cleared. The packer reads only `i <= j` entries, and the composed map
/// loses its oil-oil terms exactly when this folded form is published.
///
/// Pure function: T, Pk1, Pk2 are never mutated, and equations are
/// independent of each other.
pub(crate) fn compute_pk3(pk1: &BitMatrix, pk2: &BitMatrix, t: &BitMatrix) -> BitMatrix {
    debug_assert_eq!(pk1.rows(), pk1.cols());
    debug_assert_eq!(pk1.rows(), t.rows());
    debug_assert_eq!(pk2.rows(), t.rows());
    debug_assert_eq!(pk2.cols(), t.cols());

    let t_t = t.transpose();
    let mut pk3 = t_t.mul(pk1).mul(t);
    pk3.xor_assign(&t_t.mul(pk2));

    let m = pk3.rows();
    for i in 0..m {
        for j in (i + 1)..m {
            pk3.set(i, j, pk3.get(i, j) ^ pk3.get(j, i));
            pk3.set(j, i, 0);
        }
    }
    pk3
}
