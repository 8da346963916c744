//! # cholesky
//!
//! Dense Cholesky factorization for symmetric (Hermitian) positive-definite
//! matrices, no-std compatible.
//!
//! Given `A`, [`decompose`] produces the unique lower triangular `L` with a
//! positive diagonal such that `A = L * L^T`. A matrix that is not positive
//! definite is reported as [`LinalgError::NotPositiveDefinite`]; the square
//! root of a non-positive pivot is never taken, so no NaN-filled factor can
//! escape.
//!
//! ## Quick start
//!
//! ```
//! use cholesky::decompose;
//!
//! let a = [
//!     25.0_f64, 15.0, -5.0,
//!     15.0, 18.0, 0.0,
//!     -5.0, 0.0, 11.0,
//! ];
//! let l = decompose(&a, 3).unwrap();
//! assert_eq!(l[(2, 0)], -1.0);
//! assert_eq!(l[(2, 2)], 3.0);
//! ```
//!
//! ## Modules
//!
//! - [`linalg`]: [`decompose`] over a flat row-major slice, [`cholesky`]
//!   over anything implementing [`MatrixRef`],
//!   [`cholesky_into`](linalg::cholesky_into) for caller-provided output, plus
//!   forward / back substitution. Errors are [`LinalgError`].
//!
//! - [`dynmatrix`]: Heap-allocated row-major [`DynMatrix<T>`] with runtime
//!   dimensions, the borrowed [`MatrixView`], [`DynVector<T>`], and the
//!   [`DynCholesky`] wrapper offering `solve()`, `inverse()`, `det()` and
//!   `ln_det()`.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats
//!   - [`LinalgScalar`]: real floats and complex numbers, accepted by the factorization
//!   - [`MatrixRef`] / [`MatrixMut`]: generic read/write access for algorithms
//!
//! ## Complex matrices
//!
//! Enable the `complex` feature to factor Hermitian positive-definite
//! `Complex<f32>` / `Complex<f64>` matrices as `A = L * L^H`.
//!
//! ## Logging
//!
//! Factorizations emit [`tracing`] events (`trace` on entry, `debug` on a
//! non-positive pivot or an allocation failure). Nothing is printed unless the
//! application installs a subscriber.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `all`     | no       | All features: `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod dynmatrix;
pub mod linalg;
pub mod traits;

pub use dynmatrix::{DynCholesky, DynMatrix, DynVector, MatrixView};
pub use linalg::{cholesky, cholesky_into, decompose, LinalgError};
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
