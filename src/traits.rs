use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

/// Trait for types that can be stored in a [`DynMatrix`](crate::DynMatrix).
///
/// Blanket-implemented for all types satisfying the bounds, so `f32`, `f64`
/// and the integer types all qualify.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Real floating-point element.
///
/// A real float is its own real type, so this implies
/// `LinalgScalar<Real = Self>`.
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> {}

impl<T: Scalar + Float + LinalgScalar<Real = T>> FloatScalar for T {}

/// Element type accepted by the factorization routines.
///
/// Covers real floats (`f32`, `f64`) and, with the `complex` feature,
/// `Complex<f32>` / `Complex<f64>`. For complex elements the factorization is
/// the Hermitian one, `A = L * L^H`.
pub trait LinalgScalar: Scalar {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// Absolute value / modulus.
    fn modulus(self) -> Self::Real;

    /// Squared modulus, `|z|^2`, without taking a square root.
    fn modulus_squared(self) -> Self::Real;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Natural logarithm.
    fn lln(self) -> Self;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn modulus_squared(self) -> $t { self * self }
                #[inline] fn conj(self) -> $t { self }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn lln(self) -> $t { Float::ln(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        self.norm()
    }

    #[inline]
    fn modulus_squared(self) -> T {
        self.norm_sqr()
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn lln(self) -> Self {
        self.ln()
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}

/// Read-only `(row, col)` access to a matrix-like type.
///
/// The factorization routines are written against this trait, so they accept
/// an owned [`DynMatrix`](crate::DynMatrix) and a borrowed
/// [`MatrixView`](crate::MatrixView) alike.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Used for caller-provided output buffers
/// ([`cholesky_into`](crate::linalg::cholesky_into)).
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
