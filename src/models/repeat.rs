use log::{debug, trace};

use crate::base::{ClassifierBase, FeatureMatrix, LabelMatrix, MultiLabelClassifier};
use crate::error::ClassifierError;
use crate::params::{HasParams, ParamMap, ParamValue};

/// Degenerate baseline classifier: stores the first training label row and
/// predicts it for every sample.
pub struct RepeatClassifier {
    base: ClassifierBase,
    value_to_repeat: Option<LabelMatrix>,
}

impl RepeatClassifier {
    pub fn new() -> Self {
        RepeatClassifier {
            base: ClassifierBase::default(),
            value_to_repeat: None,
        }
    }

    pub fn with_base(base: ClassifierBase) -> Self {
        RepeatClassifier {
            base,
            value_to_repeat: None,
        }
    }

    pub fn base(&self) -> &ClassifierBase {
        &self.base
    }
}

impl Default for RepeatClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiLabelClassifier for RepeatClassifier {
    /// Stores a copy of row 0 of `y`; `x` content and all further rows of `y`
    /// are ignored.
    fn fit(&mut self, x: &FeatureMatrix, y: &LabelMatrix) -> Result<(), ClassifierError> {
        if y.nrows() == 0 {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        if x.n_samples() != y.nrows() {
            return Err(ClassifierError::SampleCountMismatch {
                x_rows: x.n_samples(),
                y_rows: y.nrows(),
            });
        }
        debug!(
            "storing first label row of a {}x{} label matrix",
            y.nrows(),
            y.ncols()
        );
        self.value_to_repeat = Some(y.select_rows(&[0])?);
        Ok(())
    }

    /// One copy of the stored row per sample of `x`, each in its own storage.
    fn predict(&self, x: &FeatureMatrix) -> Result<LabelMatrix, ClassifierError> {
        let value = self
            .value_to_repeat
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted {
                classifier: "RepeatClassifier".to_string(),
            })?;
        trace!("repeating stored label row for {} samples", x.n_samples());
        Ok(value.repeat_rows(x.n_samples()))
    }
}

impl HasParams for RepeatClassifier {
    fn get_params(&self, deep: bool) -> ParamMap {
        self.base.get_params(deep)
    }

    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ClassifierError> {
        self.base.set_param(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn features(n_samples: usize) -> FeatureMatrix {
        FeatureMatrix::Dense(Array2::zeros((n_samples, 2)))
    }

    #[test]
    fn test_repeats_first_row() {
        // 3x2 label matrix [[1,0],[0,1],[1,1]]
        let y = LabelMatrix::from_shape_vec((3, 2), vec![1, 0, 0, 1, 1, 1]).unwrap();

        let mut classifier = RepeatClassifier::new();
        classifier.fit(&features(3), &y).unwrap();

        let predictions = classifier.predict(&features(4)).unwrap();
        assert_eq!(predictions.nrows(), 4);
        for r in 0..4 {
            assert_eq!(predictions.row_to_dense(r), vec![1, 0]);
        }
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let classifier = RepeatClassifier::new();
        let err = classifier.predict(&features(2)).unwrap_err();
        assert!(matches!(err, ClassifierError::NotFitted { .. }));
    }

    #[test]
    fn test_fit_rejects_sample_count_mismatch() {
        let y = LabelMatrix::from_shape_vec((2, 2), vec![1, 0, 0, 1]).unwrap();
        let mut classifier = RepeatClassifier::new();
        let err = classifier.fit(&features(3), &y).unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::SampleCountMismatch {
                x_rows: 3,
                y_rows: 2
            }
        ));
    }

    #[test]
    fn test_fit_rejects_empty_labels() {
        let y = LabelMatrix::zeros(0, 2);
        let mut classifier = RepeatClassifier::new();
        let err = classifier.fit(&features(0), &y).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyTrainingSet));
    }

    #[test]
    fn test_refit_replaces_stored_row() {
        let y1 = LabelMatrix::from_shape_vec((1, 2), vec![1, 0]).unwrap();
        let y2 = LabelMatrix::from_shape_vec((1, 2), vec![0, 1]).unwrap();

        let mut classifier = RepeatClassifier::new();
        classifier.fit(&features(1), &y1).unwrap();
        classifier.fit(&features(1), &y2).unwrap();

        let predictions = classifier.predict(&features(2)).unwrap();
        assert_eq!(predictions.row_to_dense(0), vec![0, 1]);
        assert_eq!(predictions.row_to_dense(1), vec![0, 1]);
    }

    #[test]
    fn test_output_rows_are_independent_copies() {
        let y = LabelMatrix::from_shape_vec((2, 3), vec![1, 0, 1, 0, 0, 0]).unwrap();
        let mut classifier = RepeatClassifier::new();
        classifier.fit(&features(2), &y).unwrap();

        let mut predictions = classifier.predict(&features(3)).unwrap();
        predictions.set(0, 1, 1);
        predictions.set(0, 0, 0);

        assert_eq!(predictions.row_to_dense(0), vec![0, 1, 1]);
        assert_eq!(predictions.row_to_dense(1), vec![1, 0, 1]);
        assert_eq!(predictions.row_to_dense(2), vec![1, 0, 1]);
    }
}
