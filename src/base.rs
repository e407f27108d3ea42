//! Base contract shared by multi-label classifiers.
//!
//! `MultiLabelClassifier` is the fit/predict contract, `ClassifierBase` the
//! common state (wrapped inner estimator + dense-input flag) concrete models
//! embed, and the free functions slice and flatten sparse label matrices.
use std::borrow::Cow;

use ndarray::Array2;

use crate::error::ClassifierError;
use crate::params::{merge_nested, split_nested, HasParams, ParamMap, ParamValue};
use crate::sparse::CsrMatrix;

/// Binary label matrix: entry (i, j) = 1 means sample i carries label j.
pub type LabelMatrix = CsrMatrix<u8>;

/// Feature input: rows are samples, columns are features.
#[derive(Clone, Debug)]
pub enum FeatureMatrix {
    Dense(Array2<f32>),
    Sparse(CsrMatrix<f32>),
}

impl FeatureMatrix {
    pub fn n_samples(&self) -> usize {
        match self {
            FeatureMatrix::Dense(m) => m.nrows(),
            FeatureMatrix::Sparse(m) => m.nrows(),
        }
    }

    pub fn n_features(&self) -> usize {
        match self {
            FeatureMatrix::Dense(m) => m.ncols(),
            FeatureMatrix::Sparse(m) => m.ncols(),
        }
    }

    /// Dense view of the features, converting only when stored sparse.
    pub fn to_dense(&self) -> Cow<'_, Array2<f32>> {
        match self {
            FeatureMatrix::Dense(m) => Cow::Borrowed(m),
            FeatureMatrix::Sparse(m) => Cow::Owned(m.to_dense()),
        }
    }
}

impl From<Array2<f32>> for FeatureMatrix {
    fn from(m: Array2<f32>) -> Self {
        FeatureMatrix::Dense(m)
    }
}

impl From<CsrMatrix<f32>> for FeatureMatrix {
    fn from(m: CsrMatrix<f32>) -> Self {
        FeatureMatrix::Sparse(m)
    }
}

/// A wrapped, externally defined learning algorithm. The base classifier only
/// needs a name for it and, optionally, access to its parameters.
pub trait Estimator {
    /// Human readable name for the estimator.
    fn name(&self) -> &str;

    /// Parameter introspection capability, when the estimator has one.
    fn params(&self) -> Option<&dyn HasParams> {
        None
    }

    /// Mutable counterpart of [`Estimator::params`].
    fn params_mut(&mut self) -> Option<&mut dyn HasParams> {
        None
    }
}

/// The fit/predict contract every multi-label classifier implements.
pub trait MultiLabelClassifier {
    /// Fit the classifier to training vectors `x` and binary label matrix `y`.
    fn fit(&mut self, x: &FeatureMatrix, y: &LabelMatrix) -> Result<(), ClassifierError>;

    /// Classify each sample of `x`, producing one label row per sample.
    fn predict(&self, x: &FeatureMatrix) -> Result<LabelMatrix, ClassifierError>;
}

/// Common state for classifiers that wrap an inner estimator.
pub struct ClassifierBase {
    classifier: Option<Box<dyn Estimator>>,
    require_dense: bool,
}

impl ClassifierBase {
    pub fn new(classifier: Option<Box<dyn Estimator>>, require_dense: bool) -> Self {
        Self {
            classifier,
            require_dense,
        }
    }

    pub fn classifier(&self) -> Option<&dyn Estimator> {
        self.classifier.as_deref()
    }

    /// Replace the wrapped inner estimator.
    pub fn set_classifier(&mut self, classifier: Option<Box<dyn Estimator>>) {
        self.classifier = classifier;
    }

    /// Whether the inner estimator requires dense input.
    pub fn require_dense(&self) -> bool {
        self.require_dense
    }

    /// Features in the form the inner estimator accepts: densified when
    /// `require_dense` is set, otherwise left as given.
    pub fn prepare_features<'a>(&self, x: &'a FeatureMatrix) -> Cow<'a, FeatureMatrix> {
        match x {
            FeatureMatrix::Sparse(m) if self.require_dense => {
                Cow::Owned(FeatureMatrix::Dense(m.to_dense()))
            }
            _ => Cow::Borrowed(x),
        }
    }
}

impl Default for ClassifierBase {
    fn default() -> Self {
        Self::new(None, false)
    }
}

impl HasParams for ClassifierBase {
    fn get_params(&self, deep: bool) -> ParamMap {
        let mut out = ParamMap::new();
        out.insert(
            "classifier".to_string(),
            match &self.classifier {
                Some(inner) => ParamValue::Str(inner.name().to_string()),
                None => ParamValue::None,
            },
        );
        out.insert(
            "require_dense".to_string(),
            ParamValue::Bool(self.require_dense),
        );

        // Deep introspection goes through the inner estimator's own
        // capability, never through ours.
        if deep {
            if let Some(inner) = self.classifier.as_deref().and_then(|c| c.params()) {
                merge_nested(&mut out, "classifier", inner.get_params(true));
            }
        }

        out
    }

    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ClassifierError> {
        if let Some(("classifier", rest)) = split_nested(name) {
            let inner = self
                .classifier
                .as_deref_mut()
                .and_then(|c| c.params_mut())
                .ok_or_else(|| ClassifierError::NoInnerEstimator {
                    name: name.to_string(),
                })?;
            return inner.set_param(rest, value);
        }
        match name {
            "require_dense" => {
                self.require_dense =
                    value
                        .as_bool()
                        .ok_or_else(|| ClassifierError::InvalidParameterValue {
                            name: name.to_string(),
                            expected: "boolean",
                        })?;
                Ok(())
            }
            "classifier" => Err(ClassifierError::InvalidParameterValue {
                name: name.to_string(),
                expected: "estimator (use set_classifier)",
            }),
            _ => Err(ClassifierError::UnknownParameter {
                name: name.to_string(),
            }),
        }
    }
}

/// Sub-matrix of a binary label matrix: axis 0 selects rows (samples), axis 1
/// selects columns (labels). Any other axis fails with `InvalidAxis`.
pub fn subset_label_matrix(
    y: &LabelMatrix,
    subset: &[usize],
    axis: usize,
) -> Result<LabelMatrix, ClassifierError> {
    match axis {
        0 => Ok(y.select_rows(subset)?),
        1 => Ok(y.select_columns(subset)?),
        _ => Err(ClassifierError::InvalidAxis { axis }),
    }
}

/// Flatten a one-column label matrix to its per-row scalars. Wider matrices
/// are rejected rather than silently truncated to their first column.
pub fn single_column_to_scalars(y: &LabelMatrix) -> Result<Vec<u8>, ClassifierError> {
    if y.ncols() != 1 {
        return Err(ClassifierError::NotSingleColumn { ncols: y.ncols() });
    }
    Ok((0..y.nrows()).map(|r| y.get(r, 0)).collect())
}
