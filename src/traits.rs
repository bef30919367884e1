use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point matrix elements.
///
/// Required by the decomposition, which needs `abs`, `ln` and sign tests.
/// Implemented for `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {
    /// Natural logarithm of the modulus, `ln|x|`.
    fn ln_abs(self) -> Self;

    /// `true` for strictly negative values (`-0.0` is not negative).
    fn is_negative(self) -> bool;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn ln_abs(self) -> $t { Float::ln(Float::abs(self)) }
                #[inline] fn is_negative(self) -> bool { self < 0.0 }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

/// Read-only access to a matrix-like type.
///
/// Storage is column-major: each column is a contiguous run of `nrows` elements.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (LU) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable column slice from `row_start` to the last row.
    fn col_as_mut_slice(&mut self, col: usize, row_start: usize) -> &mut [T];

    /// Borrow two distinct columns at once, both starting at `row_start`.
    ///
    /// Returns `(src, dst)` where `src = m[row_start.., col_src]` (read-only)
    /// and `dst = m[row_start.., col_dst]`. Requires `col_src < col_dst`.
    fn col_pair_mut(
        &mut self,
        col_src: usize,
        col_dst: usize,
        row_start: usize,
    ) -> (&[T], &mut [T]);

    /// Swap two rows across every column.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}
