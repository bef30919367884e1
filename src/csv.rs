//! Delimited text → validated square `DynMatrix<f64>`.
//!
//! One row per line, fields split on a single delimiter character with no
//! quoting. Whitespace around fields and lines is ignored and blank lines are
//! skipped. Every field must be a finite `f64`, every row as long as the first,
//! and the row count equal to the column count.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::dynmatrix::DynMatrix;

/// Field separator used when none is given.
pub const DEFAULT_DELIMITER: char = ',';

/// Why a matrix file was rejected.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read matrix from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file does not contain any matrix rows")]
    Empty,
    #[error("non-numeric entry {field:?} on line {line}")]
    InvalidNumber { line: usize, field: String },
    #[error("non-finite entry {field:?} on line {line}")]
    NonFinite { line: usize, field: String },
    #[error("matrix is not rectangular: first row has {expected} entries, line {line} has {got}")]
    NotRectangular {
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("matrix is not square: {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },
}

/// Parse matrix text already in memory.
///
/// ```
/// use bigdet::csv::parse_matrix;
///
/// let m = parse_matrix("1, 2\n3, 4\n", ',').unwrap();
/// assert_eq!(m[(1, 0)], 3.0);
/// assert!(parse_matrix("1,2,3\n4,5,6\n", ',').is_err());
/// ```
pub fn parse_matrix(text: &str, delimiter: char) -> Result<DynMatrix<f64>, ReadError> {
    let mut values: Vec<f64> = Vec::new();
    let mut ncols = 0usize;
    let mut nrows = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let before = values.len();
        for field in trimmed.split(delimiter) {
            values.push(parse_field(field.trim(), line)?);
        }
        let got = values.len() - before;

        if nrows == 0 {
            ncols = got;
        } else if got != ncols {
            return Err(ReadError::NotRectangular {
                line,
                expected: ncols,
                got,
            });
        }
        nrows += 1;
    }

    if nrows == 0 {
        return Err(ReadError::Empty);
    }
    if nrows != ncols {
        return Err(ReadError::NotSquare {
            rows: nrows,
            cols: ncols,
        });
    }

    debug!(n = nrows, "parsed square matrix");
    Ok(DynMatrix::from_rows(nrows, ncols, &values))
}

fn parse_field(field: &str, line: usize) -> Result<f64, ReadError> {
    let x: f64 = field.parse().map_err(|_| ReadError::InvalidNumber {
        line,
        field: field.to_string(),
    })?;
    if !x.is_finite() {
        return Err(ReadError::NonFinite {
            line,
            field: field.to_string(),
        });
    }
    Ok(x)
}

/// Read and parse a matrix file.
pub fn read_matrix(path: impl AsRef<Path>, delimiter: char) -> Result<DynMatrix<f64>, ReadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrix(&text, delimiter)
}

/// Render a matrix as delimited text, one row per line.
///
/// Values use the shortest round-trip form, so `parse_matrix` reads back the
/// same `f64`s.
pub fn write_matrix(m: &DynMatrix<f64>, delimiter: char) -> String {
    let mut out = String::new();
    let sep = delimiter.to_string();
    for i in 0..m.nrows() {
        let row: Vec<String> = (0..m.ncols()).map(|j| m[(i, j)].to_string()).collect();
        out.push_str(&row.join(&sep));
        out.push('\n');
    }
    out
}
