use alloc::vec;

use crate::linalg::{back_substitute_lt, cholesky, forward_substitute, LinalgError};
use crate::traits::LinalgScalar;

use super::vector::DynVector;
use super::DynMatrix;

/// Cholesky factorization of a (Hermitian) positive-definite matrix.
///
/// Owns the lower triangular factor `L` where `A = L * L^H`, and uses it to
/// solve systems, invert, and take determinants.
///
/// # Example
///
/// ```
/// use cholesky::{DynMatrix, DynVector};
///
/// let a = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// let chol = a.cholesky().unwrap();
///
/// let b = DynVector::from_slice(&[8.0, 7.0]);
/// let x = chol.solve(&b).unwrap();
/// assert!((x[0] - 1.25).abs() < 1e-12);
/// assert!((x[1] - 1.5).abs() < 1e-12);
/// assert!((chol.det() - 8.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DynCholesky<T> {
    l: DynMatrix<T>,
}

impl<T: LinalgScalar> DynCholesky<T> {
    /// Factor a (Hermitian) positive-definite matrix.
    ///
    /// Only the lower triangle of `a` is read.
    pub fn new(a: &DynMatrix<T>) -> Result<Self, LinalgError> {
        Ok(Self { l: cholesky(a)? })
    }

    /// The lower triangular factor (zeros above the diagonal).
    #[inline]
    pub fn l(&self) -> &DynMatrix<T> {
        &self.l
    }

    /// Consume the factorization, returning `L`.
    #[inline]
    pub fn into_l(self) -> DynMatrix<T> {
        self.l
    }

    /// Dimension `n` of the factored `n x n` matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.l.nrows()
    }

    /// Solve `A * x = b` for `x`.
    ///
    /// Fails with [`LinalgError::DimensionMismatch`] if `b` has the wrong
    /// length.
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        let n = self.dim();
        if b.len() != n {
            return Err(LinalgError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        let mut y = vec![T::zero(); n];
        forward_substitute(&self.l, b.as_slice(), &mut y);
        let mut x = vec![T::zero(); n];
        back_substitute_lt(&self.l, &y, &mut x);
        Ok(DynVector::from_vec(x))
    }

    /// Determinant: `det(A) = prod(L[i][i])^2`.
    pub fn det(&self) -> T {
        let prod = (0..self.dim()).fold(T::one(), |acc, i| acc * self.l[(i, i)]);
        prod * prod
    }

    /// Log-determinant: `ln(det(A)) = 2 * sum(ln(L[i][i]))`.
    ///
    /// Stays finite where [`det`](Self::det) would overflow.
    pub fn ln_det(&self) -> T {
        let sum = (0..self.dim()).fold(T::zero(), |acc, i| acc + self.l[(i, i)].lln());
        sum + sum
    }

    /// Matrix inverse, one unit column at a time.
    pub fn inverse(&self) -> DynMatrix<T> {
        let n = self.dim();
        let mut inv = DynMatrix::zeros(n, n, T::zero());
        let mut e = vec![T::zero(); n];
        let mut y = vec![T::zero(); n];
        let mut x = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();

            forward_substitute(&self.l, &e, &mut y);
            back_substitute_lt(&self.l, &y, &mut x);

            for (row, &v) in x.iter().enumerate() {
                inv[(row, col)] = v;
            }
        }

        inv
    }

    /// Rebuild `L * L^H`, which equals the factored matrix up to rounding.
    pub fn reconstruct(&self) -> DynMatrix<T> {
        &self.l * &self.l.adjoint()
    }
}

impl<T: LinalgScalar> DynMatrix<T> {
    /// Cholesky factorization (`A = L * L^H`).
    ///
    /// ```
    /// use cholesky::{DynMatrix, LinalgError};
    ///
    /// let spd = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
    /// assert!(spd.cholesky().unwrap().l().is_lower_triangular());
    ///
    /// let indefinite = DynMatrix::from_rows(2, 2, &[1.0_f64, 5.0, 5.0, 1.0]);
    /// assert_eq!(
    ///     indefinite.cholesky().unwrap_err(),
    ///     LinalgError::NotPositiveDefinite { pivot: 1 }
    /// );
    /// ```
    pub fn cholesky(&self) -> Result<DynCholesky<T>, LinalgError> {
        DynCholesky::new(self)
    }
}
