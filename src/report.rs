//! Timed determinant pipeline and its textual report.
//!
//! matrix file → [`crate::csv`] → LU log-determinant → decimal reconstruction.
//! A singular matrix is reported as a literal zero without reconstruction.

use core::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use crate::csv::{read_matrix, ReadError, DEFAULT_DELIMITER};
use crate::dynmatrix::DynMatrix;
use crate::linalg::{DynLu, LogDet};
use crate::reconstruct::{reconstruct, ApproxDet, Precision, ReconstructError};

/// Fractional digits of the printed approximate determinant.
pub const DEFAULT_DISPLAY_DIGITS: usize = 15;

/// Settings for one determinant run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetConfig {
    /// Significant digits of the decimal reconstruction.
    pub precision: Precision,
    /// Digits after the point when printing the approximate determinant.
    pub display_digits: usize,
    pub delimiter: char,
    /// Relative pivot tolerance; zero treats only exact zero pivots as singular.
    pub tolerance: f64,
}

impl Default for DetConfig {
    fn default() -> Self {
        Self {
            precision: Precision::default(),
            display_digits: DEFAULT_DISPLAY_DIGITS,
            delimiter: DEFAULT_DELIMITER,
            tolerance: 0.0,
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),
    #[error("pivot tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("matrix contains a NaN or infinite entry")]
    NonFinite,
}

/// Everything printed for one matrix.
#[derive(Debug, Clone)]
pub struct DetReport {
    pub source: Option<PathBuf>,
    pub n: usize,
    pub logdet: LogDet<f64>,
    pub approx: ApproxDet,
    pub display_digits: usize,
    pub io_time: Duration,
    pub decomposition_time: Duration,
    pub reconstruction_time: Duration,
    pub overall_time: Duration,
}

/// Run the pipeline on a matrix already in memory.
///
/// The matrix must be square, as produced by [`crate::csv::parse_matrix`].
/// A NaN or infinite entry is rejected with [`DriverError::NonFinite`].
///
/// ```
/// use bigdet::DynMatrix;
/// use bigdet::report::{evaluate, DetConfig};
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0, 0.0, 0.0, 5.0]);
/// let report = evaluate(&a, &DetConfig::default()).unwrap();
/// assert_eq!(report.approx.to_scientific(12), "1.000000000000e+01");
/// ```
pub fn evaluate(a: &DynMatrix<f64>, config: &DetConfig) -> Result<DetReport, DriverError> {
    let start = Instant::now();
    let mut report = evaluate_timed(a, config)?;
    report.overall_time = start.elapsed();
    Ok(report)
}

/// Read `path` and run the pipeline, timing each stage.
pub fn run(path: impl AsRef<Path>, config: &DetConfig) -> Result<DetReport, DriverError> {
    let path = path.as_ref();
    let start = Instant::now();

    let a = read_matrix(path, config.delimiter)?;
    let io_time = start.elapsed();
    info!(path = %path.display(), n = a.nrows(), "matrix loaded");

    let mut report = evaluate_timed(&a, config)?;
    report.source = Some(path.to_path_buf());
    report.io_time = io_time;
    report.overall_time = start.elapsed();
    Ok(report)
}

fn evaluate_timed(a: &DynMatrix<f64>, config: &DetConfig) -> Result<DetReport, DriverError> {
    if !(config.tolerance.is_finite() && config.tolerance >= 0.0) {
        return Err(DriverError::InvalidTolerance(config.tolerance));
    }
    if !a.is_finite() {
        return Err(DriverError::NonFinite);
    }

    let t0 = Instant::now();
    let logdet = DynLu::with_tolerance(a, config.tolerance).logdet();
    let decomposition_time = t0.elapsed();

    let t1 = Instant::now();
    let approx = if logdet.is_singular() {
        info!(n = a.nrows(), "matrix is singular; determinant is zero");
        ApproxDet::zero(config.precision)
    } else {
        reconstruct(&logdet, config.precision)?
    };
    let reconstruction_time = t1.elapsed();

    info!(
        n = a.nrows(),
        sign = logdet.sign().as_i8(),
        ln_abs = logdet.ln_abs(),
        decomposition_s = decomposition_time.as_secs_f64(),
        reconstruction_s = reconstruction_time.as_secs_f64(),
        "determinant evaluated"
    );

    Ok(DetReport {
        source: None,
        n: a.nrows(),
        logdet,
        approx,
        display_digits: config.display_digits,
        io_time: Duration::ZERO,
        decomposition_time,
        reconstruction_time,
        overall_time: Duration::ZERO,
    })
}

impl fmt::Display for DetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.source {
            writeln!(f, "Reading matrix from {} ...", path.display())?;
        }
        writeln!(f, "Matrix size: {} x {}", self.n, self.n)?;
        writeln!(f)?;
        writeln!(f, "Sign(det)   = {}", self.logdet.sign())?;
        writeln!(f, "log|det|    = {}", self.logdet.ln_abs())?;
        writeln!(f, "time (s)    = {:.6}", self.decomposition_time.as_secs_f64())?;
        writeln!(f)?;
        writeln!(
            f,
            "approx determinant = {}",
            self.approx.to_scientific(self.display_digits)
        )?;
        writeln!(f, "I/O (s)     = {:.6}", self.io_time.as_secs_f64())?;
        writeln!(f, "Big exp (s) = {:.6}", self.reconstruction_time.as_secs_f64())?;
        write!(f, "overall (s) = {:.6}", self.overall_time.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::Sign;

    #[test]
    fn identity_report() {
        let report = evaluate(&DynMatrix::eye(3, 0.0), &DetConfig::default()).unwrap();
        assert_eq!(report.n, 3);
        assert_eq!(report.logdet.sign(), Sign::Positive);
        let text = report.to_string();
        assert!(text.starts_with("Matrix size: 3 x 3\n"), "{text}");
        assert!(text.contains("Sign(det)   = 1\n"));
        assert!(text.contains("log|det|    = 0\n"));
        assert!(text.contains("approx determinant = 1.000000000000000e+00\n"));
        assert!(text.contains("overall (s) = "));
    }

    #[test]
    fn singular_reports_literal_zero() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 1.0, 2.0]);
        let report = evaluate(&a, &DetConfig::default()).unwrap();
        assert!(report.logdet.is_singular());
        assert!(report.approx.is_zero());
        let text = report.to_string();
        assert!(text.contains("Sign(det)   = 0\n"));
        assert!(text.contains("log|det|    = -inf\n"));
        assert!(text.contains("approx determinant = 0.000000000000000e+00\n"));
    }

    #[test]
    fn display_digits_respected() {
        let config = DetConfig {
            display_digits: 4,
            ..DetConfig::default()
        };
        let a = DynMatrix::from_rows(2, 2, &[0.0, 3.0, 4.0, 0.0]);
        let report = evaluate(&a, &config).unwrap();
        assert!(report
            .to_string()
            .contains("approx determinant = -1.2000e+01\n"));
    }

    #[test]
    fn rejects_bad_tolerance() {
        let config = DetConfig {
            tolerance: -1.0,
            ..DetConfig::default()
        };
        let err = evaluate(&DynMatrix::eye(2, 0.0), &config).unwrap_err();
        assert!(matches!(err, DriverError::InvalidTolerance(_)));
    }

    #[test]
    fn rejects_non_finite_entries() {
        let mut a = DynMatrix::eye(3, 0.0);
        a[(1, 2)] = f64::NAN;
        let err = evaluate(&a, &DetConfig::default()).unwrap_err();
        assert!(matches!(err, DriverError::NonFinite));

        a[(1, 2)] = f64::NEG_INFINITY;
        assert!(matches!(
            evaluate(&a, &DetConfig::default()),
            Err(DriverError::NonFinite)
        ));
    }
}
