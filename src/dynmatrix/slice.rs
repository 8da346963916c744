use crate::linalg::LinalgError;
use crate::traits::MatrixRef;

use super::DynMatrix;

impl<T> DynMatrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View row `i` as a slice.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }
}

/// Borrowed row-major matrix over a caller-owned slice.
///
/// Lets a flat `&[T]` go through the generic routines without copying it
/// into a [`DynMatrix`] first.
///
/// ```
/// use cholesky::{cholesky, MatrixView};
///
/// let data = [4.0_f64, 0.0, 0.0, 9.0];
/// let a = MatrixView::new(&data, 2, 2).unwrap();
/// let l = cholesky(&a).unwrap();
/// assert_eq!(l.as_slice(), &[2.0, 0.0, 0.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
}

impl<'a, T> MatrixView<'a, T> {
    /// Wrap `data` as an `nrows x ncols` row-major matrix.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] if the slice length is
    /// not `nrows * ncols`.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize) -> Result<Self, LinalgError> {
        let expected = nrows.checked_mul(ncols).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(LinalgError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// The underlying slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T> MatrixRef<T> for MatrixView<'_, T> {
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
