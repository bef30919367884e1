use core::fmt;
use core::ops::Mul;

use crate::traits::FloatScalar;

/// Sign of a determinant.
///
/// `Zero` marks a singular matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of a float, treating both zeros as `Zero`.
    pub fn of<T: FloatScalar>(x: T) -> Self {
        if x == T::zero() {
            Sign::Zero
        } else if x.is_negative() {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// `-1`, `0` or `+1`.
    #[inline]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Flip the sign (a row swap).
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// `sign^n`.
    pub fn powi(self, n: usize) -> Self {
        match self {
            Sign::Negative if n % 2 == 1 => Sign::Negative,
            Sign::Zero if n > 0 => Sign::Zero,
            _ => Sign::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

/// Log-domain determinant: `det(A) = sign * exp(ln_abs)`.
///
/// A singular matrix is `sign == Sign::Zero` with `ln_abs == -inf`.
///
/// ```
/// use bigdet::DynMatrix;
/// use bigdet::linalg::Sign;
///
/// let a = DynMatrix::from_rows(2, 2, &[0.0_f64, 2.0, 5.0, 0.0]);
/// let ld = a.slogdet();
/// assert_eq!(ld.sign(), Sign::Negative);
/// assert!((ld.ln_abs() - 10.0_f64.ln()).abs() < 1e-12);
/// assert!((ld.det() + 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogDet<T> {
    sign: Sign,
    ln_abs: T,
}

impl<T: FloatScalar> LogDet<T> {
    /// Build from parts. A `Sign::Zero` forces `ln_abs` to `-inf`.
    pub fn new(sign: Sign, ln_abs: T) -> Self {
        if sign == Sign::Zero {
            return Self::singular();
        }
        Self { sign, ln_abs }
    }

    /// The determinant of a singular matrix.
    pub fn singular() -> Self {
        Self {
            sign: Sign::Zero,
            ln_abs: T::neg_infinity(),
        }
    }

    /// Log-domain form of a plain value.
    pub fn from_value(x: T) -> Self {
        Self::new(Sign::of(x), x.ln_abs())
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Natural log of `|det|`.
    #[inline]
    pub fn ln_abs(&self) -> T {
        self.ln_abs
    }

    #[inline]
    pub fn is_singular(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Base-10 log of `|det|`.
    pub fn log10_abs(&self) -> T {
        self.ln_abs * T::one().exp().log10()
    }

    /// Linear-space determinant. Overflows to `±inf` or underflows to zero
    /// when `|ln_abs|` exceeds the float's exponent range.
    pub fn det(&self) -> T {
        match self.sign {
            Sign::Zero => T::zero(),
            Sign::Positive => self.ln_abs.exp(),
            Sign::Negative => -self.ln_abs.exp(),
        }
    }

    /// Determinant of `c * A` for an `n x n` matrix `A` with this log-determinant.
    pub fn scaled(&self, c: T, n: usize) -> Self {
        if self.is_singular() || c == T::zero() {
            return Self::singular();
        }
        let nf = T::from(n).unwrap_or_else(T::infinity);
        Self::new(
            self.sign * Sign::of(c).powi(n),
            self.ln_abs + nf * c.ln_abs(),
        )
    }
}

impl LogDet<f64> {
    /// `(mantissa, exponent)` with `1 <= |mantissa| < 10`, computed entirely in
    /// `f64` from `log10|det| = e + f`, `mantissa = 10^f`.
    ///
    /// Good to roughly 15 significant digits for moderate exponents; use
    /// [`crate::reconstruct`] for a full decimal expansion.
    ///
    /// ```
    /// use bigdet::linalg::{LogDet, Sign};
    /// let ld = LogDet::new(Sign::Negative, 1000.0_f64);
    /// let (m, e) = ld.to_scientific_f64();
    /// assert_eq!(e, 434);
    /// assert!((m + 1.970071114017).abs() < 1e-9);
    /// ```
    pub fn to_scientific_f64(&self) -> (f64, i64) {
        if self.is_singular() || !self.ln_abs.is_finite() {
            return (0.0, 0);
        }
        let log10 = self.ln_abs * core::f64::consts::LOG10_E;
        let e = log10.floor();
        let mut mant = 10f64.powf(log10 - e);
        let mut exp = e as i64;
        // 10^f can round up to exactly 10 when f is just below 1.
        if mant >= 10.0 {
            mant /= 10.0;
            exp += 1;
        }
        if self.sign == Sign::Negative {
            mant = -mant;
        }
        (mant, exp)
    }
}

impl<T: FloatScalar + fmt::Display> fmt::Display for LogDet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sign={} ln|det|={}", self.sign, self.ln_abs)
    }
}
