//! multilabel-classifiers: base abstractions for multi-label classification.
//!
//! This crate provides the shared classifier contract (fit/predict over a
//! sparse binary label matrix), compressed sparse matrix types for label
//! storage, parameter introspection compatible with model-selection tooling
//! (grid search, cross-validation), and a degenerate baseline model used by
//! the examples and tests.
//!
//! The design favors small, testable modules; concrete learning algorithms
//! live behind the `Estimator` trait and are supplied by callers.
pub mod base;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod sparse;
