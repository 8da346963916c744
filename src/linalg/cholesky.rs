use num_traits::{Float, Zero};

use crate::dynmatrix::{DynMatrix, MatrixView};
use crate::linalg::LinalgError;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};

/// Factor a row-major `n x n` slice: `A = L * L^T`.
///
/// Only the lower triangle of `a` (diagonal included) is read; entries above
/// the diagonal are taken to mirror it. The returned factor is freshly
/// allocated and owned by the caller. `a` is never modified.
///
/// # Errors
///
/// - [`LinalgError::InvalidDimension`] if `n == 0`.
/// - [`LinalgError::DimensionMismatch`] if `a.len() != n * n`.
/// - [`LinalgError::NotPositiveDefinite`] if a pivot radicand is `<= 0` or
///   not finite.
/// - [`LinalgError::AllocationFailure`] if the factor cannot be allocated.
///
/// ```
/// use cholesky::decompose;
///
/// let a = [
///     25.0_f64, 15.0, -5.0,
///     15.0, 18.0, 0.0,
///     -5.0, 0.0, 11.0,
/// ];
/// let l = decompose(&a, 3).unwrap();
/// assert_eq!(l.as_slice(), &[5.0, 0.0, 0.0, 3.0, 3.0, 0.0, -1.0, 1.0, 3.0]);
/// ```
pub fn decompose<T: LinalgScalar>(a: &[T], n: usize) -> Result<DynMatrix<T>, LinalgError> {
    if n == 0 {
        return Err(LinalgError::InvalidDimension);
    }
    cholesky(&MatrixView::new(a, n, n)?)
}

/// Cholesky factorization of any square matrix-like type.
///
/// Computes lower triangular `L` with `A = L * L^H` (`L * L^T` for reals),
/// row by row and, within a row, column by column. Every diagonal entry of
/// `L` is real and strictly positive, which makes the factor unique.
///
/// ```
/// use cholesky::{cholesky, DynMatrix};
///
/// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// let l = cholesky(&a).unwrap();
/// assert_eq!(l[(0, 0)], 2.0);
/// assert_eq!(l[(1, 0)], 1.0);
/// assert_eq!(l[(0, 1)], 0.0);
/// assert!((l[(1, 1)] - 2.0_f64.sqrt()).abs() < 1e-15);
/// ```
pub fn cholesky<T: LinalgScalar>(a: &impl MatrixRef<T>) -> Result<DynMatrix<T>, LinalgError> {
    let n = square_dim(a)?;
    tracing::trace!(n, "cholesky factorization");
    let mut l = DynMatrix::try_zeros(n, n)?;
    factor_rows(a, &mut l, n)?;
    Ok(l)
}

/// Cholesky factorization into a caller-provided `n x n` buffer.
///
/// Every entry of `l` is written, zeros above the diagonal included, so the
/// buffer may hold anything on entry. A buffer of the wrong shape is
/// rejected untouched; if the factorization itself fails, `l` is left all
/// zeros.
///
/// ```
/// use cholesky::{cholesky_into, DynMatrix};
///
/// let a = DynMatrix::from_rows(2, 2, &[9.0_f64, 3.0, 3.0, 5.0]);
/// let mut l = DynMatrix::fill(2, 2, f64::NAN);
/// cholesky_into(&a, &mut l).unwrap();
/// assert_eq!(l.as_slice(), &[3.0, 0.0, 1.0, 2.0]);
/// ```
pub fn cholesky_into<T: LinalgScalar>(
    a: &impl MatrixRef<T>,
    l: &mut impl MatrixMut<T>,
) -> Result<(), LinalgError> {
    let n = square_dim(a)?;
    if l.nrows() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: l.nrows(),
        });
    }
    if l.ncols() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: l.ncols(),
        });
    }
    tracing::trace!(n, "cholesky factorization into buffer");

    if let Err(err) = factor_rows(a, l, n) {
        for i in 0..n {
            for j in 0..n {
                *l.get_mut(i, j) = T::zero();
            }
        }
        return Err(err);
    }
    Ok(())
}

fn square_dim<T>(a: &impl MatrixRef<T>) -> Result<usize, LinalgError> {
    let (nrows, ncols) = (a.nrows(), a.ncols());
    if nrows != ncols {
        return Err(LinalgError::NotSquare { nrows, ncols });
    }
    if nrows == 0 {
        return Err(LinalgError::InvalidDimension);
    }
    Ok(nrows)
}

/// Cholesky–Banachiewicz recurrence.
///
/// Row `i` depends on every earlier row, and `L[i][j]` on `L[i][k]` for
/// `k < j`, so both loops must run in increasing order.
fn factor_rows<T: LinalgScalar>(
    a: &impl MatrixRef<T>,
    l: &mut impl MatrixMut<T>,
    n: usize,
) -> Result<(), LinalgError> {
    for i in 0..n {
        for j in 0..i {
            let mut sum = *a.get(i, j);
            for k in 0..j {
                sum = sum - *l.get(i, k) * l.get(j, k).conj();
            }
            *l.get_mut(i, j) = sum / *l.get(j, j);
        }

        let mut radicand = a.get(i, i).re();
        for k in 0..i {
            radicand = radicand - l.get(i, k).modulus_squared();
        }
        if !radicand.is_finite() || radicand <= <T::Real as Zero>::zero() {
            tracing::debug!(pivot = i, radicand = ?radicand, "non-positive pivot");
            return Err(LinalgError::NotPositiveDefinite { pivot: i });
        }
        *l.get_mut(i, i) = T::from_real(radicand.sqrt());

        for j in (i + 1)..n {
            *l.get_mut(i, j) = T::zero();
        }
    }
    Ok(())
}

/// Solve `L * x = b` by forward substitution, where `L` is lower triangular.
///
/// Panics if `b` or `x` is shorter than `L` has rows.
#[inline]
pub fn forward_substitute<T: LinalgScalar>(l: &impl MatrixRef<T>, b: &[T], x: &mut [T]) {
    let n = l.nrows();
    for i in 0..n {
        let mut acc = b[i];
        for (k, &xk) in x[..i].iter().enumerate() {
            acc = acc - *l.get(i, k) * xk;
        }
        x[i] = acc / *l.get(i, i);
    }
}

/// Solve `L^H * x = b` by back substitution, where `L` is lower triangular.
///
/// Panics if `b` or `x` is shorter than `L` has rows.
#[inline]
pub fn back_substitute_lt<T: LinalgScalar>(l: &impl MatrixRef<T>, b: &[T], x: &mut [T]) {
    let n = l.nrows();
    for i in (0..n).rev() {
        let mut acc = b[i];
        for k in (i + 1)..n {
            acc = acc - l.get(k, i).conj() * x[k];
        }
        x[i] = acc / l.get(i, i).conj();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn canonical() -> [f64; 9] {
        [25.0, 15.0, -5.0, 15.0, 18.0, 0.0, -5.0, 0.0, 11.0]
    }

    #[test]
    fn canonical_3x3_exact() {
        let l = decompose(&canonical(), 3).unwrap();
        assert_eq!(l.as_slice(), &[5.0, 0.0, 0.0, 3.0, 3.0, 0.0, -1.0, 1.0, 3.0]);

        let rebuilt = &l * &l.transpose();
        assert_eq!(rebuilt.as_slice(), &canonical());
    }

    #[test]
    fn one_by_one() {
        let l = decompose(&[4.0_f64], 1).unwrap();
        assert_eq!(l.as_slice(), &[2.0]);
    }

    #[test]
    fn not_positive_definite() {
        let err = decompose(&[1.0_f64, 2.0, 2.0, 1.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 1 });
    }

    #[test]
    fn negative_leading_entry() {
        let err = decompose(&[-1.0_f64, 0.0, 0.0, 1.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 0 });
    }

    #[test]
    fn semidefinite_rejected() {
        // rank one: [1 1; 1 1]
        let err = decompose(&[1.0_f64, 1.0, 1.0, 1.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 1 });
    }

    #[test]
    fn nan_pivot_rejected() {
        let err = decompose(&[f64::NAN, 0.0, 0.0, 1.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 0 });
    }

    #[test]
    fn infinite_pivot_rejected() {
        let err = decompose(&[f64::INFINITY, 1.0, 1.0, 1.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 0 });

        // inf below the diagonal drives the next radicand to -inf
        let err = decompose(&[1.0_f64, 0.0, f64::INFINITY, 1.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 1 });
    }

    #[test]
    fn zero_dimension() {
        assert_eq!(
            decompose::<f64>(&[], 0).unwrap_err(),
            LinalgError::InvalidDimension
        );
        let empty = DynMatrix::<f64>::from_vec(0, 0, Vec::new());
        assert_eq!(cholesky(&empty).unwrap_err(), LinalgError::InvalidDimension);
    }

    #[test]
    fn length_mismatch() {
        let err = decompose(&[1.0_f64, 0.0, 0.0], 2).unwrap_err();
        assert_eq!(err, LinalgError::DimensionMismatch { expected: 4, got: 3 });
    }

    #[test]
    fn non_square() {
        let a = DynMatrix::from_rows(2, 3, &[1.0_f64, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(
            cholesky(&a).unwrap_err(),
            LinalgError::NotSquare { nrows: 2, ncols: 3 }
        );
    }

    #[test]
    fn upper_triangle_is_ignored() {
        let mut a = canonical();
        a[1] = 1.0e6;
        a[2] = f64::NAN;
        a[5] = -42.0;
        let l = decompose(&a, 3).unwrap();
        assert_eq!(l.as_slice(), &[5.0, 0.0, 0.0, 3.0, 3.0, 0.0, -1.0, 1.0, 3.0]);
    }

    #[test]
    fn input_is_untouched() {
        let a = DynMatrix::from_rows(3, 3, &canonical());
        let before = a.clone();
        let _ = cholesky(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = DynMatrix::from_fn(6, 6, |i, j| {
            1.0 / ((i + j + 1) as f64) + if i == j { 1.0 } else { 0.0 }
        });
        let first = cholesky(&a).unwrap();
        let second = cholesky(&a).unwrap();
        let bits = |m: &DynMatrix<f64>| m.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn into_buffer_overwrites_everything() {
        let a = DynMatrix::from_rows(3, 3, &canonical());
        let mut l = DynMatrix::fill(3, 3, 7.0_f64);
        cholesky_into(&a, &mut l).unwrap();
        assert_eq!(l.as_slice(), &[5.0, 0.0, 0.0, 3.0, 3.0, 0.0, -1.0, 1.0, 3.0]);
    }

    #[test]
    fn into_buffer_zeroed_on_failure() {
        let a = DynMatrix::from_rows(3, 3, &[4.0_f64, 2.0, 0.0, 2.0, 5.0, 0.0, 0.0, 0.0, -1.0]);
        let mut l = DynMatrix::fill(3, 3, 7.0_f64);
        let err = cholesky_into(&a, &mut l).unwrap_err();
        assert_eq!(err, LinalgError::NotPositiveDefinite { pivot: 2 });
        assert!(l.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn into_buffer_wrong_shape() {
        let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
        let mut l = DynMatrix::zeros(3, 2, 0.0_f64);
        assert_eq!(
            cholesky_into(&a, &mut l).unwrap_err(),
            LinalgError::DimensionMismatch { expected: 2, got: 3 }
        );
        let mut l = DynMatrix::zeros(2, 3, 0.0_f64);
        assert_eq!(
            cholesky_into(&a, &mut l).unwrap_err(),
            LinalgError::DimensionMismatch { expected: 2, got: 3 }
        );
    }

    #[test]
    fn f32_factor() {
        let l = decompose(&[4.0_f32, 2.0, 2.0, 5.0], 2).unwrap();
        assert_eq!(l.as_slice(), &[2.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn substitutions() {
        let l = decompose(&canonical(), 3).unwrap();
        let b = [1.0, 2.0, 3.0];
        let mut y = vec![0.0; 3];
        forward_substitute(&l, &b, &mut y);
        // L y = b
        for i in 0..3 {
            let s: f64 = (0..=i).map(|k| l[(i, k)] * y[k]).sum();
            assert!((s - b[i]).abs() < 1e-12);
        }

        let mut x = vec![0.0; 3];
        back_substitute_lt(&l, &y, &mut x);
        // L^T x = y
        for i in 0..3 {
            let s: f64 = (i..3).map(|k| l[(k, i)] * x[k]).sum();
            assert!((s - y[i]).abs() < 1e-12);
        }
    }
}
