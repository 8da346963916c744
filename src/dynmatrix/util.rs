use alloc::vec;
use core::fmt::{self, Write as _};

use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Whether every entry strictly above the diagonal is exactly zero.
    ///
    /// ```
    /// use cholesky::DynMatrix;
    /// let l = DynMatrix::from_rows(2, 2, &[1.0, 0.0, 2.0, 3.0]);
    /// assert!(l.is_lower_triangular());
    /// assert!(!l.transpose().is_lower_triangular());
    /// ```
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.nrows).all(|i| {
            self.row_slice(i)
                .iter()
                .skip(i + 1)
                .all(|x| x.is_zero())
        })
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for DynMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.nrows;
        let n = self.ncols;

        // Width of each column, honoring the caller's precision
        let mut widths = vec![0usize; n];
        for i in 0..m {
            for (j, w) in widths.iter_mut().enumerate() {
                let len = WriteCounting::count(|wc| match f.precision() {
                    Some(p) => write!(wc, "{:.*}", p, self[(i, j)]),
                    None => write!(wc, "{}", self[(i, j)]),
                });
                *w = (*w).max(len);
            }
        }

        for i in 0..m {
            write!(f, "│")?;
            for (j, &width) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:>width$.p$}", self[(i, j)])?,
                    None => write!(f, "{:>width$}", self[(i, j)])?,
                }
            }
            write!(f, "│")?;
            if i + 1 < m {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}
