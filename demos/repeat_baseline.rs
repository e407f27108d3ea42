use anyhow::{Context, Result};
use csv::ReaderBuilder;
use ndarray::Array2;

use multilabel_classifiers::base::{FeatureMatrix, LabelMatrix, MultiLabelClassifier};
use multilabel_classifiers::models::RepeatClassifier;
use multilabel_classifiers::params::HasParams;

/// Read a binary label matrix from a headerless CSV file of 0/1 entries.
fn read_label_csv(path: &str) -> Result<LabelMatrix> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path))?;

    let mut data = Vec::new();
    let mut n_cols = 0;

    for result in reader.records() {
        let record = result?;
        let row: Vec<u8> = record
            .iter()
            .map(|field| field.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .context("label entries must be 0 or 1")?;
        n_cols = row.len();
        data.push(row);
    }

    let n_rows = data.len();
    LabelMatrix::from_shape_vec((n_rows, n_cols), data.into_iter().flatten().collect())
        .context("ragged label rows")
}

fn main() -> Result<()> {
    env_logger::init();

    // With no CSV path given, fall back to a small built-in label matrix.
    let y = match std::env::args().nth(1) {
        Some(path) => read_label_csv(&path)?,
        None => LabelMatrix::from_shape_vec((3, 2), vec![1, 0, 0, 1, 1, 1])?,
    };
    println!("Loaded labels shape: {:?}", y.shape());

    let x_train = FeatureMatrix::Dense(Array2::zeros((y.nrows(), 2)));

    let mut classifier = RepeatClassifier::new();
    println!("Params: {:?}", classifier.get_params(false));

    classifier.fit(&x_train, &y)?;

    let x_test = FeatureMatrix::Dense(Array2::zeros((4, 2)));
    let predictions = classifier.predict(&x_test)?;

    println!("Predictions ({} rows):", predictions.nrows());
    for r in 0..predictions.nrows() {
        println!("  {:?}", predictions.row_to_dense(r));
    }

    Ok(())
}
