use num_traits::{Float, Zero};

use crate::traits::LinalgScalar;

use super::DynMatrix;

impl<T: LinalgScalar> DynMatrix<T> {
    /// Frobenius norm (square root of sum of squared moduli).
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn frobenius_norm(&self) -> T::Real {
        let mut sum = <T::Real as Zero>::zero();
        for &x in &self.data {
            sum = sum + x.modulus_squared();
        }
        sum.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius_norm() {
        let m = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn frobenius_norm_zero() {
        assert_eq!(DynMatrix::zeros(3, 3, 0.0_f64).frobenius_norm(), 0.0);
    }
}
