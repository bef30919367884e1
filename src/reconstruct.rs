//! Arbitrary-precision decimal reconstruction of `sign * exp(ln_abs)`.
//!
//! The log-magnitude is carried into base-10 arithmetic through its shortest
//! round-trip text form, so the decimal input is exactly the literal the `f64`
//! prints as. Digits past the ~16th are an artifact of exponentiating that
//! literal, not information recovered from the matrix.
//!
//! ```
//! use bigdet::linalg::{LogDet, Sign};
//! use bigdet::reconstruct::{reconstruct, Precision};
//!
//! let ld = LogDet::new(Sign::Positive, 10.0_f64.ln());
//! let approx = reconstruct(&ld, Precision::default()).unwrap();
//! assert_eq!(approx.to_scientific(15), "1.000000000000000e+01");
//! ```

use core::fmt;
use core::str::FromStr;

use dashu_base::Abs;
use dashu_float::DBig;
use thiserror::Error;
use tracing::{debug, trace};

use crate::linalg::{LogDet, Sign};

/// Significant decimal digits used when none are requested.
pub const DEFAULT_PRECISION: usize = 100;

/// Largest `|ln|det||` accepted for reconstruction.
///
/// Corresponds to decimal exponents of roughly `4.3e8`; beyond that the
/// significand arithmetic of the exponential gets impractically large.
pub const MAX_LN_ABS: f64 = 1.0e9;

/// Errors from [`reconstruct`] and [`Precision::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconstructError {
    /// Requested precision was zero or negative.
    #[error("precision must be a positive number of digits, got {0}")]
    InvalidPrecision(i64),
    /// Determinant is exactly zero; callers present a literal zero instead.
    #[error("determinant is zero and has no log-magnitude to exponentiate")]
    Singular,
    /// `ln_abs` was NaN or infinite with a nonzero sign.
    #[error("log-magnitude {0} is not finite")]
    NonFiniteLogAbs(f64),
    /// `|ln_abs|` exceeds [`MAX_LN_ABS`].
    #[error("log-magnitude {0} is outside the supported decimal exponent range")]
    ExponentOutOfRange(f64),
    #[error("cannot read log-magnitude {0:?} as a decimal")]
    Parse(String),
}

/// Number of significant decimal digits to reconstruct. Always positive.
///
/// ```
/// use bigdet::reconstruct::Precision;
/// assert_eq!(Precision::default().digits(), 100);
/// assert!(Precision::new(0).is_err());
/// assert!(Precision::new(-3).is_err());
/// assert_eq!(Precision::new(50).unwrap().digits(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(usize);

impl Precision {
    pub fn new(digits: i64) -> Result<Self, ReconstructError> {
        if digits <= 0 {
            return Err(ReconstructError::InvalidPrecision(digits));
        }
        usize::try_from(digits)
            .map(Precision)
            .map_err(|_| ReconstructError::InvalidPrecision(digits))
    }

    #[inline]
    pub fn digits(self) -> usize {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision(DEFAULT_PRECISION)
    }
}

impl TryFrom<i64> for Precision {
    type Error = ReconstructError;

    fn try_from(digits: i64) -> Result<Self, Self::Error> {
        Precision::new(digits)
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: i64 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid precision {s:?}: {e}"))?;
        Precision::new(digits).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reconstructed determinant: a base-10 arbitrary-precision float.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproxDet {
    value: DBig,
    precision: Precision,
}

impl ApproxDet {
    /// Literal zero, shown for singular matrices.
    pub fn zero(precision: Precision) -> Self {
        Self {
            value: DBig::ZERO,
            precision,
        }
    }

    /// The underlying base-10 float, for further decimal arithmetic.
    ///
    /// ```
    /// use bigdet::linalg::{LogDet, Sign};
    /// use bigdet::reconstruct::{reconstruct, Precision};
    /// use dashu_float::DBig;
    ///
    /// let ld = LogDet::new(Sign::Negative, 3.0_f64.ln());
    /// let approx = reconstruct(&ld, Precision::new(20).unwrap()).unwrap();
    /// let three: DBig = "-3".parse().unwrap();
    /// let err = approx.value().clone() - three;
    /// assert!(err.to_f64().value().abs() < 1e-14);
    /// ```
    #[inline]
    pub fn value(&self) -> &DBig {
        &self.value
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.value == DBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.value < DBig::ZERO
    }

    /// Number of digits in the stored significand.
    ///
    /// Trailing zeros are not stored, so an exact power of ten has one digit.
    pub fn significant_digits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        self.value
            .repr()
            .significand()
            .to_string()
            .trim_start_matches('-')
            .len()
    }

    /// `[-]d.ddd…e±XX` with `frac_digits` digits after the point, rounded
    /// half away from zero, and at least two exponent digits.
    ///
    /// ```
    /// use bigdet::linalg::{LogDet, Sign};
    /// use bigdet::reconstruct::{reconstruct, Precision};
    ///
    /// let ld = LogDet::new(Sign::Negative, 1000.0_f64);
    /// let approx = reconstruct(&ld, Precision::new(40).unwrap()).unwrap();
    /// assert_eq!(approx.to_scientific(6), "-1.970071e+434");
    /// ```
    pub fn to_scientific(&self, frac_digits: usize) -> String {
        if self.is_zero() {
            return format_scientific(false, "0", frac_digits, 0);
        }
        let rounded = self.value.clone().with_precision(frac_digits + 1).value();
        let repr = rounded.repr();
        let raw = repr.significand().to_string();
        let negative = raw.starts_with('-');
        let digits = raw.trim_start_matches('-');
        let exponent = repr.exponent() as i64 + digits.len() as i64 - 1;
        format_scientific(negative, digits, frac_digits, exponent)
    }
}

fn format_scientific(negative: bool, digits: &str, frac_digits: usize, exponent: i64) -> String {
    let mut out = String::with_capacity(frac_digits + 8);
    if negative {
        out.push('-');
    }
    let mut chars = digits.chars();
    out.push(chars.next().unwrap_or('0'));
    if frac_digits > 0 {
        out.push('.');
        let frac: String = chars.chain(core::iter::repeat('0')).take(frac_digits).collect();
        out.push_str(&frac);
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&format!("{:02}", exponent.unsigned_abs()));
    out
}

impl fmt::Display for ApproxDet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = f.precision().unwrap_or(15);
        f.write_str(&self.to_scientific(frac))
    }
}

/// Reconstruct `sign * exp(ln_abs)` to `precision` significant digits.
///
/// Fails for a singular determinant (present a literal zero instead), for a
/// non-finite or out-of-range `ln_abs`. Validation happens before any decimal
/// arithmetic is attempted.
pub fn reconstruct(logdet: &LogDet<f64>, precision: Precision) -> Result<ApproxDet, ReconstructError> {
    let ln_abs = logdet.ln_abs();
    if logdet.sign() == Sign::Zero {
        return Err(ReconstructError::Singular);
    }
    if !ln_abs.is_finite() {
        return Err(ReconstructError::NonFiniteLogAbs(ln_abs));
    }
    if ln_abs.abs() > MAX_LN_ABS {
        return Err(ReconstructError::ExponentOutOfRange(ln_abs));
    }

    // `{:e}` is the shortest text that reads back as the same f64.
    let literal = format!("{ln_abs:e}");
    trace!(%literal, digits = precision.digits(), "reconstructing determinant");
    let x = DBig::from_str(&literal).map_err(|e| ReconstructError::Parse(format!("{literal}: {e:?}")))?;

    let working = precision.digits().max(literal_digits(&literal));
    let x = x.with_precision(working).value();
    let magnitude = x.exp().with_precision(precision.digits()).value();

    let value = match logdet.sign() {
        Sign::Negative => -magnitude,
        _ => magnitude,
    };
    debug!(digits = precision.digits(), "decimal reconstruction complete");
    Ok(ApproxDet { value, precision })
}

/// Significant digits in a `{:e}` rendering such as `-2.302585092994046e0`.
fn literal_digits(literal: &str) -> usize {
    let mantissa = literal.split('e').next().unwrap_or(literal);
    mantissa.chars().filter(char::is_ascii_digit).count().max(1)
}

/// Natural log of `|approx|` evaluated in decimal, then rounded to `f64`.
///
/// Inverse of [`reconstruct`] up to the rounding of the requested precision.
/// Zero maps to `-inf`.
pub fn ln_abs_of(approx: &ApproxDet) -> f64 {
    if approx.is_zero() {
        return f64::NEG_INFINITY;
    }
    approx.value.clone().abs().ln().to_f64().value()
}
