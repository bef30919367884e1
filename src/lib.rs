//! # bigdet
//!
//! Determinants of large dense matrices whose value over- or underflows `f64`.
//! The determinant is computed in log form, `det(A) = sign * exp(ln|det|)`,
//! from a partially pivoted LU factorization, then expanded into an
//! arbitrary-precision decimal for display.
//!
//! ## Quick start
//!
//! ```
//! use bigdet::DynMatrix;
//! use bigdet::linalg::Sign;
//! use bigdet::reconstruct::{reconstruct, Precision};
//!
//! // 400 x 400 diagonal matrix of 10s: det = 1e400, far beyond f64.
//! let a = DynMatrix::from_fn(400, 400, |i, j| if i == j { 10.0_f64 } else { 0.0 });
//! let ld = a.slogdet();
//! assert_eq!(ld.sign(), Sign::Positive);
//! assert!(ld.det().is_infinite());
//!
//! let approx = reconstruct(&ld, Precision::default()).unwrap();
//! assert_eq!(approx.to_scientific(6), "1.000000e+400");
//! ```
//!
//! ## Modules
//!
//! - [`dynmatrix`]: Heap-allocated `DynMatrix<T>` with runtime dimensions and
//!   column-major `Vec<T>` storage. Implements [`MatrixRef`] / [`MatrixMut`].
//!
//! - [`linalg`]: LU with partial pivoting that accumulates the sign and
//!   `ln|U[i][i]|` of each pivot as it factors ([`linalg::slogdet_in_place`]),
//!   the [`linalg::DynLu`] wrapper, and the [`linalg::LogDet`] result. A singular
//!   matrix is a normal result with sign zero, not an error.
//!
//! - [`reconstruct`]: `sign * exp(ln|det|)` as a base-10 arbitrary-precision
//!   float with a caller-chosen number of significant digits, plus scientific
//!   formatting.
//!
//! - [`csv`]: Delimited text files to validated square matrices.
//!
//! - [`report`]: The timed read → factor → reconstruct pipeline behind the
//!   `bigdet` binary, and its textual report.
//!
//! - [`random`]: Seedable uniform random matrices for experiments and benches.
//!
//! - [`traits`]: Element traits ([`Scalar`], [`FloatScalar`]) and the
//!   [`MatrixRef`] / [`MatrixMut`] access seams the factorization is written
//!   against.
//!
//! ## Precision
//!
//! The log-magnitude is an `f64` accumulated over `n` pivots, so only its
//! leading 15–17 significant digits carry information from the matrix. The
//! reconstruction honours any requested precision, but digits beyond that are
//! the exact exponential of the rounded log, not extra accuracy.

pub mod csv;
pub mod dynmatrix;
pub mod linalg;
pub mod random;
pub mod reconstruct;
pub mod report;
pub mod traits;

pub use dynmatrix::DynMatrix;
pub use linalg::{DynLu, LogDet, Sign};
pub use reconstruct::{reconstruct, ApproxDet, Precision, ReconstructError};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
