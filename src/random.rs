//! Random test matrices with uniform `[0, 1)` entries.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::dynmatrix::DynMatrix;

/// Rejected dimension for a random matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    #[error("N must be a positive integer, got {0}")]
    NonPositive(i64),
    #[error("N = {0} does not fit in memory")]
    TooLarge(i64),
}

/// [`uniform_matrix`] for a dimension taken from user input.
///
/// ```
/// use bigdet::random::{try_uniform_matrix, RandomError};
///
/// assert_eq!(try_uniform_matrix(3, Some(1)).unwrap().nrows(), 3);
/// assert_eq!(try_uniform_matrix(0, None), Err(RandomError::NonPositive(0)));
/// ```
pub fn try_uniform_matrix(n: i64, seed: Option<u64>) -> Result<DynMatrix<f64>, RandomError> {
    if n <= 0 {
        return Err(RandomError::NonPositive(n));
    }
    let n = usize::try_from(n).map_err(|_| RandomError::TooLarge(n))?;
    if n.checked_mul(n).is_none() {
        return Err(RandomError::TooLarge(n as i64));
    }
    Ok(uniform_matrix(n, seed))
}

/// An `n x n` matrix of independent uniform `[0, 1)` reals.
///
/// With `Some(seed)` the matrix is reproducible; `None` seeds from the OS.
///
/// ```
/// use bigdet::random::uniform_matrix;
///
/// let a = uniform_matrix(4, Some(7));
/// assert_eq!(a, uniform_matrix(4, Some(7)));
/// assert!(a.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn uniform_matrix(n: usize, seed: Option<u64>) -> DynMatrix<f64> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    // Row-major draw order, matching the order rows are written out.
    let values: Vec<f64> = (0..n * n).map(|_| rng.gen::<f64>()).collect();
    DynMatrix::from_rows(n, n, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_reproducible() {
        let a = uniform_matrix(5, Some(42));
        let b = uniform_matrix(5, Some(42));
        let c = uniform_matrix(5, Some(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.nrows(), 5);
        assert!(a.is_square());
    }

    #[test]
    fn checked_dimension() {
        assert_eq!(try_uniform_matrix(0, Some(1)), Err(RandomError::NonPositive(0)));
        assert_eq!(try_uniform_matrix(-5, Some(1)), Err(RandomError::NonPositive(-5)));
        assert_eq!(
            RandomError::NonPositive(-5).to_string(),
            "N must be a positive integer, got -5"
        );
        assert_eq!(try_uniform_matrix(4, Some(9)), Ok(uniform_matrix(4, Some(9))));
        if usize::BITS == 64 {
            assert_eq!(
                try_uniform_matrix(i64::MAX, None),
                Err(RandomError::TooLarge(i64::MAX))
            );
        }
    }

    #[test]
    fn entries_in_unit_interval() {
        let a = uniform_matrix(20, None);
        assert!(a.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }
}
