use std::error::Error;
use std::fmt;

use crate::sparse::{IndexError, ShapeError};

/// Custom error type for classifier API failures.
#[derive(Debug)]
pub enum ClassifierError {
    /// `predict` was called before a successful `fit`.
    NotFitted { classifier: String },
    /// A label-matrix subset was requested along an axis other than 0 or 1.
    InvalidAxis { axis: usize },
    /// `set_params` received a name that is not a settable field.
    UnknownParameter { name: String },
    /// `set_params` received a value of the wrong kind for a known field.
    InvalidParameterValue {
        name: String,
        expected: &'static str,
    },
    /// A `classifier__` parameter was given but no inner estimator (or no
    /// introspection capability on it) is available to receive it.
    NoInnerEstimator { name: String },
    /// Feature and label matrices disagree on sample count at fit time.
    SampleCountMismatch { x_rows: usize, y_rows: usize },
    /// `fit` was given a label matrix with zero rows.
    EmptyTrainingSet,
    /// A single-column operation was applied to a wider label matrix.
    NotSingleColumn { ncols: usize },
    /// Malformed sparse-matrix construction.
    Shape(ShapeError),
    /// A subset index fell outside the matrix bounds.
    Index(IndexError),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClassifierError::NotFitted { classifier } => {
                write!(f, "{} has not been fitted; call fit before predict", classifier)
            }
            ClassifierError::InvalidAxis { axis } => {
                write!(f, "invalid axis {}; expected 0 (rows) or 1 (labels)", axis)
            }
            ClassifierError::UnknownParameter { name } => {
                write!(f, "unknown parameter '{}'", name)
            }
            ClassifierError::InvalidParameterValue { name, expected } => {
                write!(f, "parameter '{}' expects a {} value", name, expected)
            }
            ClassifierError::NoInnerEstimator { name } => {
                write!(
                    f,
                    "parameter '{}' targets the inner estimator, but none with a params capability is set",
                    name
                )
            }
            ClassifierError::SampleCountMismatch { x_rows, y_rows } => {
                write!(
                    f,
                    "feature matrix has {} rows but label matrix has {}",
                    x_rows, y_rows
                )
            }
            ClassifierError::EmptyTrainingSet => {
                write!(f, "label matrix has no rows to fit on")
            }
            ClassifierError::NotSingleColumn { ncols } => {
                write!(f, "expected a single-column label matrix, got {} columns", ncols)
            }
            ClassifierError::Shape(err) => err.fmt(f),
            ClassifierError::Index(err) => err.fmt(f),
        }
    }
}

impl Error for ClassifierError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClassifierError::Shape(err) => Some(err),
            ClassifierError::Index(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for ClassifierError {
    fn from(err: ShapeError) -> Self {
        ClassifierError::Shape(err)
    }
}

impl From<IndexError> for ClassifierError {
    fn from(err: IndexError) -> Self {
        ClassifierError::Index(err)
    }
}
