mod linalg;
mod norm;
mod ops;
mod slice;
mod util;
mod vector;

pub use linalg::DynCholesky;
pub use slice::MatrixView;
pub use vector::DynVector;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dynamically-sized heap-allocated matrix.
///
/// Row-major `Vec<T>` storage: element `(r, c)` lives at `r * ncols + c`.
/// Dimensions are set at runtime. Implements [`MatrixRef`] and [`MatrixMut`],
/// so the generic factorization routines accept it directly.
///
/// # Examples
///
/// ```
/// use cholesky::DynMatrix;
///
/// let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = DynMatrix::eye(3, 0.0_f64);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynMatrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Create an `nrows x ncols` zero matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::zeros(2, 3, 0.0_f64);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize, _zero: T) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create a zero matrix, reporting allocation failure instead of aborting.
    ///
    /// ```
    /// use cholesky::{DynMatrix, LinalgError};
    ///
    /// let m = DynMatrix::<f64>::try_zeros(3, 3).unwrap();
    /// assert_eq!(m.as_slice(), &[0.0; 9]);
    ///
    /// let huge = DynMatrix::<f64>::try_zeros(usize::MAX, 2);
    /// assert!(matches!(huge, Err(LinalgError::AllocationFailure { .. })));
    /// ```
    pub fn try_zeros(nrows: usize, ncols: usize) -> Result<Self, LinalgError> {
        let Some(len) = nrows.checked_mul(ncols) else {
            tracing::debug!(nrows, ncols, "matrix size overflows usize");
            return Err(LinalgError::AllocationFailure { len: usize::MAX });
        };
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            tracing::debug!(len, "matrix allocation failed");
            return Err(LinalgError::AllocationFailure { len });
        }
        data.resize(len, T::zero());
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// The `_zero` parameter is only used for type inference.
    pub fn eye(n: usize, _zero: T) -> Self {
        let mut m = Self::zeros(n, n, T::zero());
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix by copying a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }
}

impl<T> DynMatrix<T> {
    /// Take ownership of a `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Consume the matrix, returning its row-major storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for DynMatrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for DynMatrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DynMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DynMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DynMatrix::zeros(3, 4, 0.0_f64);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn try_zeros_matches_zeros() {
        let a = DynMatrix::<f64>::try_zeros(4, 2).unwrap();
        assert_eq!(a, DynMatrix::zeros(4, 2, 0.0));
    }

    #[test]
    fn try_zeros_overflow() {
        let err = DynMatrix::<f64>::try_zeros(usize::MAX, usize::MAX).unwrap_err();
        assert_eq!(err, LinalgError::AllocationFailure { len: usize::MAX });
    }

    #[test]
    fn try_zeros_capacity_overflow() {
        // len fits in usize but len * size_of::<f64>() does not
        let len = usize::MAX / 2;
        let err = DynMatrix::<f64>::try_zeros(len, 1).unwrap_err();
        assert_eq!(err, LinalgError::AllocationFailure { len });
    }

    #[test]
    fn eye() {
        let m = DynMatrix::eye(3, 0.0_f64);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows_is_row_major() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_wrong_length() {
        let _ = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_fn_and_into_vec() {
        let m = DynMatrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
        assert_eq!(m.into_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn index_mut() {
        let mut m = DynMatrix::zeros(2, 2, 0.0_f64);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
        assert_eq!(m.as_slice(), &[0.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn matrix_mut_trait() {
        let mut m = DynMatrix::zeros(2, 2, 0.0_f64);
        fn set_diag<T: Scalar>(m: &mut impl MatrixMut<T>, val: T) {
            let n = m.nrows().min(m.ncols());
            for i in 0..n {
                *m.get_mut(i, i) = val;
            }
        }
        set_diag(&mut m, 7.0);
        assert_eq!(m[(0, 0)], 7.0);
        assert_eq!(m[(1, 1)], 7.0);
        assert_eq!(m[(0, 1)], 0.0);
    }

    #[test]
    fn is_square() {
        assert!(DynMatrix::zeros(3, 3, 0.0_f64).is_square());
        assert!(!DynMatrix::zeros(2, 3, 0.0_f64).is_square());
    }
}
