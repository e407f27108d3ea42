use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for classifiers built through the factory.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ClassifierConfig {
    /// Whether the wrapped inner estimator requires dense input.
    pub require_dense: bool,

    pub model_kind: ModelKind,
}

/// Supported classifier kinds.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ModelKind {
    /// Baseline that repeats the first training label row for every sample.
    Repeat,
}

impl Default for ModelKind {
    fn default() -> Self {
        ModelKind::Repeat
    }
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "repeat" => Ok(ModelKind::Repeat),
            _ => Err(format!("Unknown model kind: {}", s)),
        }
    }
}

impl ClassifierConfig {
    pub fn new(require_dense: bool, model_kind: ModelKind) -> Self {
        Self {
            require_dense,
            model_kind,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            require_dense: false,
            model_kind: ModelKind::Repeat,
        }
    }
}
