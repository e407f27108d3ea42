use crate::base::{ClassifierBase, MultiLabelClassifier};
use crate::config::{ClassifierConfig, ModelKind};
use crate::models::repeat::RepeatClassifier;

/// Build a boxed classifier from a `ClassifierConfig`.
/// Currently this is a thin factory implemented as a single function.
pub fn build_model(config: ClassifierConfig) -> Box<dyn MultiLabelClassifier> {
    match config.model_kind {
        ModelKind::Repeat => Box::new(RepeatClassifier::with_base(ClassifierBase::new(
            None,
            config.require_dense,
        ))),
    }
}
