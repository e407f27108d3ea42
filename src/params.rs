//! Parameter introspection for model-selection tooling.
//!
//! External search drivers (grid search, cross-validation) see classifiers as
//! flat name -> value maps. Nested estimator parameters are flattened under
//! `<owner>__<name>` keys, the convention those drivers expect.
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Separator between an owning parameter's name and a nested parameter.
pub const NESTED_SEP: &str = "__";

/// A parameter value as seen by model-selection tooling.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum ParamValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::None => write!(f, "None"),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Flat parameter mapping with deterministic iteration order.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// Capability for objects that expose their parameters by name.
pub trait HasParams {
    /// All named parameters. With `deep`, parameters of nested estimators are
    /// flattened in under `<owner>__<name>` keys.
    fn get_params(&self, deep: bool) -> ParamMap;

    /// Assign one parameter by name.
    fn set_param(&mut self, name: &str, value: ParamValue) -> Result<(), ClassifierError>;

    /// Assign every pair in `params`. An empty map is a no-op.
    fn set_params(&mut self, params: ParamMap) -> Result<(), ClassifierError> {
        for (name, value) in params {
            self.set_param(&name, value)?;
        }
        Ok(())
    }
}

/// Merge `nested` into `out`, prefixing each key with `prefix` and the
/// nested-parameter separator.
pub fn merge_nested(out: &mut ParamMap, prefix: &str, nested: ParamMap) {
    for (key, value) in nested {
        out.insert(format!("{}{}{}", prefix, NESTED_SEP, key), value);
    }
}

/// Split a flattened key into the owning parameter's name and the remainder,
/// or `None` when the key is not nested.
pub fn split_nested(name: &str) -> Option<(&str, &str)> {
    name.split_once(NESTED_SEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefixes_keys() {
        let mut out = ParamMap::new();
        out.insert("require_dense".to_string(), ParamValue::Bool(false));
        let mut nested = ParamMap::new();
        nested.insert("alpha".to_string(), ParamValue::Float(0.5));
        merge_nested(&mut out, "classifier", nested);
        assert_eq!(
            out.get("classifier__alpha"),
            Some(&ParamValue::Float(0.5))
        );
    }

    #[test]
    fn split_nested_key() {
        assert_eq!(split_nested("classifier__alpha"), Some(("classifier", "alpha")));
        assert_eq!(
            split_nested("classifier__inner__beta"),
            Some(("classifier", "inner__beta"))
        );
        assert_eq!(split_nested("require_dense"), None);
    }
}
