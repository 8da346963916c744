pub(crate) mod cholesky;

pub use cholesky::{back_substitute_lt, cholesky, cholesky_into, decompose, forward_substitute};

use thiserror::Error;

/// Errors from the factorization routines and their helpers.
///
/// Success and failure are mutually exclusive: no factor is ever handed back
/// alongside an error.
///
/// ```
/// use cholesky::{decompose, LinalgError};
///
/// let not_pd = [1.0_f64, 2.0, 2.0, 1.0];
/// assert_eq!(
///     decompose(&not_pd, 2).unwrap_err(),
///     LinalgError::NotPositiveDefinite { pivot: 1 }
/// );
///
/// assert_eq!(decompose::<f64>(&[], 0).unwrap_err(), LinalgError::InvalidDimension);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinalgError {
    /// The matrix dimension is zero.
    #[error("matrix dimension must be positive")]
    InvalidDimension,
    /// A diagonal radicand was not strictly positive, so no real factor exists.
    #[error("matrix is not positive definite (non-positive pivot at row {pivot})")]
    NotPositiveDefinite {
        /// Row of the pivot whose radicand was `<= 0`, NaN or infinite.
        pivot: usize,
    },
    /// Storage for the result could not be reserved.
    #[error("failed to allocate storage for {len} elements")]
    AllocationFailure {
        /// Number of elements requested.
        len: usize,
    },
    /// Operand sizes do not agree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Required element count (or row count for square operands).
        expected: usize,
        /// Supplied element count (or row count).
        got: usize,
    },
    /// The factorization requires a square matrix.
    #[error("matrix is not square: {nrows}x{ncols}")]
    NotSquare {
        /// Rows of the supplied matrix.
        nrows: usize,
        /// Columns of the supplied matrix.
        ncols: usize,
    },
}
