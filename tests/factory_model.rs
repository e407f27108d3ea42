use std::str::FromStr;

use ndarray::Array2;

use multilabel_classifiers::base::{FeatureMatrix, LabelMatrix, MultiLabelClassifier};
use multilabel_classifiers::config::{ClassifierConfig, ModelKind};
use multilabel_classifiers::models::factory;
use multilabel_classifiers::sparse::CsrMatrix;

#[test]
fn test_factory_builds_and_predicts() {
    // tiny dataset: 3 samples, 2 features, 2 labels
    let x = FeatureMatrix::Dense(
        Array2::from_shape_vec((3, 2), vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0])
            .expect("failed to create feature matrix"),
    );
    let y = LabelMatrix::from_shape_vec((3, 2), vec![1, 0, 0, 1, 1, 1])
        .expect("failed to create label matrix");

    let config = ClassifierConfig {
        require_dense: false,
        model_kind: ModelKind::Repeat,
    };

    let mut model = factory::build_model(config);
    model.fit(&x, &y).unwrap();

    let x_test = FeatureMatrix::Dense(Array2::zeros((4, 2)));
    let predictions = model.predict(&x_test).unwrap();
    assert_eq!(predictions.nrows(), 4);
    for r in 0..4 {
        assert_eq!(predictions.row_to_dense(r), vec![1, 0]);
    }
}

#[test]
fn test_factory_accepts_sparse_features() {
    let x = FeatureMatrix::Sparse(
        CsrMatrix::from_shape_vec((2, 2), vec![0.5f32, 0.0, 0.0, 2.0]).unwrap(),
    );
    let y = LabelMatrix::from_shape_vec((2, 1), vec![1, 0]).unwrap();

    let mut model = factory::build_model(ClassifierConfig::default());
    model.fit(&x, &y).unwrap();
    let predictions = model.predict(&x).unwrap();
    assert_eq!(predictions.nrows(), 2);
    assert_eq!(predictions.row_to_dense(0), vec![1]);
}

#[test]
fn test_model_kind_from_str() {
    assert!(matches!(ModelKind::from_str("repeat"), Ok(ModelKind::Repeat)));
    assert!(matches!(ModelKind::from_str("Repeat"), Ok(ModelKind::Repeat)));
    assert!(ModelKind::from_str("chains").is_err());
}
