use crate::traits::Scalar;

use super::DynMatrix;

impl<T: Scalar> DynMatrix<T> {
    /// Create a square diagonal matrix from a slice.
    ///
    /// ```
    /// use bigdet::DynMatrix;
    /// let m = DynMatrix::from_diag(&[2.0, 3.0]);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(1, 1)], 3.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(d: &[T]) -> Self {
        let n = d.len();
        let mut m = Self::zeros(n, n, T::zero());
        for (i, &x) in d.iter().enumerate() {
            m[(i, i)] = x;
        }
        m
    }

    /// Main diagonal, `min(nrows, ncols)` entries.
    pub fn diagonal(&self) -> Vec<T> {
        let n = self.nrows.min(self.ncols);
        (0..n).map(|i| self[(i, i)]).collect()
    }

    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        self.diagonal()
            .into_iter()
            .fold(T::zero(), |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diag_round_trip() {
        let m = DynMatrix::from_diag(&[1.0_f64, -2.0, 3.5]);
        assert_eq!(m.diagonal(), vec![1.0, -2.0, 3.5]);
        assert_eq!(m.trace(), 2.5);
        assert_eq!(m[(2, 0)], 0.0);
    }

    #[test]
    fn diagonal_of_rectangular() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.diagonal(), vec![1.0, 5.0]);
    }
}
