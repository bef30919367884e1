use tracing::{debug, trace};

use crate::dynmatrix::DynMatrix;
use crate::linalg::logdet::{LogDet, Sign};
use crate::traits::{FloatScalar, MatrixMut};

/// LU decomposition with partial pivoting, in place, returning the
/// log-domain determinant.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices. The sign and
/// `ln|U[i][i]|` of every accepted pivot are folded into the result as the
/// elimination proceeds, so the product of pivots is never formed.
///
/// A pivot with modulus `<= tol` marks the matrix singular: elimination stops
/// there and [`LogDet::singular`] is returned. With `tol = 0` only an exact zero
/// pivot counts, as in LAPACK `dgetrf`.
pub fn slogdet_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
    tol: T,
) -> LogDet<T> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut sign = Sign::Positive;
    let mut ln_abs = T::zero();

    for col in 0..n {
        // Partial pivoting: find row with largest modulus in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val <= tol {
            trace!(col, "zero pivot");
            return LogDet::singular();
        }

        if max_row != col {
            perm.swap(col, max_row);
            a.swap_rows(col, max_row);
            sign = sign.flip();
        }

        let pivot = *a.get(col, col);
        sign = sign * Sign::of(pivot);
        ln_abs = ln_abs + pivot.ln_abs();

        // Column-major LAPACK dgetf2 style elimination:
        // 1. Scale sub-column by 1/pivot (contiguous in col-major)
        // 2. AXPY: for each column j > col, a[col+1:n, j] -= a[col, j] * a[col+1:n, col]
        let inv_pivot = T::one() / pivot;
        for x in a.col_as_mut_slice(col, col + 1).iter_mut() {
            *x = *x * inv_pivot;
        }

        for j in (col + 1)..n {
            let a_col_j = *a.get(col, j);
            if a_col_j == T::zero() {
                continue;
            }
            let (left, right) = a.col_pair_mut(col, j, col + 1);
            for (r, &l) in right.iter_mut().zip(left) {
                *r = *r - a_col_j * l;
            }
        }
    }

    LogDet::new(sign, ln_abs)
}

/// LU decomposition of a dynamically-sized square matrix.
///
/// Stores the packed L/U factors, the permutation vector and the
/// log-domain determinant gathered while factoring. Unlike a solver-oriented
/// LU, a singular matrix is not an error: it yields a `Sign::Zero` determinant
/// and the factors are left as they were at the zero pivot.
///
/// # Example
///
/// ```
/// use bigdet::DynMatrix;
/// use bigdet::linalg::Sign;
///
/// let a = DynMatrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]);
/// let lu = a.lu();
/// assert_eq!(lu.logdet().sign(), Sign::Negative);
/// assert!((lu.det() - (-14.0)).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct DynLu<T> {
    lu: DynMatrix<T>,
    perm: Vec<usize>,
    logdet: LogDet<T>,
}

impl<T: FloatScalar> DynLu<T> {
    /// Decompose a matrix, treating only exact zero pivots as singular.
    pub fn new(a: &DynMatrix<T>) -> Self {
        Self::with_threshold(a, T::zero())
    }

    /// Decompose a matrix, treating pivots with modulus
    /// `<= rel_tol * max|A[i][j]|` as zero.
    ///
    /// The threshold scales with the matrix, so `c * A` is classified the
    /// same way as `A` for any `c != 0`.
    pub fn with_tolerance(a: &DynMatrix<T>, rel_tol: T) -> Self {
        let threshold = if rel_tol > T::zero() {
            rel_tol * a.max_abs()
        } else {
            T::zero()
        };
        Self::with_threshold(a, threshold)
    }

    fn with_threshold(a: &DynMatrix<T>, threshold: T) -> Self {
        assert!(a.is_square(), "LU decomposition requires a square matrix");
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm = vec![0usize; n];
        let logdet = slogdet_in_place(&mut lu, &mut perm, threshold);
        debug!(
            n,
            sign = logdet.sign().as_i8(),
            singular = logdet.is_singular(),
            "LU factorization complete"
        );
        Self { lu, perm, logdet }
    }

    /// Packed L/U factors.
    #[inline]
    pub fn factors(&self) -> &DynMatrix<T> {
        &self.lu
    }

    /// Row permutation: row `i` of `PA` is row `perm[i]` of `A`.
    #[inline]
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Sign and natural log of `|det(A)|`.
    #[inline]
    pub fn logdet(&self) -> LogDet<T> {
        self.logdet
    }

    #[inline]
    pub fn is_singular(&self) -> bool {
        self.logdet.is_singular()
    }

    /// Linear-space determinant; see [`LogDet::det`] for range caveats.
    pub fn det(&self) -> T {
        self.logdet.det()
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar> DynMatrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> DynLu<T> {
        DynLu::new(self)
    }

    /// Sign and natural log of the absolute determinant.
    ///
    /// ```
    /// use bigdet::DynMatrix;
    /// use bigdet::linalg::Sign;
    ///
    /// let id = DynMatrix::eye(500, 0.0_f64);
    /// let ld = id.slogdet();
    /// assert_eq!(ld.sign(), Sign::Positive);
    /// assert_eq!(ld.ln_abs(), 0.0);
    /// ```
    pub fn slogdet(&self) -> LogDet<T> {
        DynLu::new(self).logdet()
    }
}
