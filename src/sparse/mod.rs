//! Compressed sparse matrix types for binary label data.
//!
//! Provides `CsrMatrix` (row-major) and `CscMatrix` (column-major) lightweight
//! containers with the handful of operations the classifier layer needs:
//! point access, row/column subsetting, format conversion, and densification
//! to `ndarray`. These types are intentionally small to keep the crate
//! portable and easy to test.
pub mod csc;
pub mod csr;

pub use csc::CscMatrix;
pub use csr::CsrMatrix;

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone)]
pub struct ShapeError {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

#[derive(Debug, Clone)]
pub struct IndexError {
    pub(crate) axis: &'static str,
    pub(crate) index: usize,
    pub(crate) bound: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} index {} out of bounds for matrix with {} {}s",
            self.axis, self.index, self.bound, self.axis
        )
    }
}

impl Error for IndexError {}
