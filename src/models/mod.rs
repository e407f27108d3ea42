pub mod factory;
pub mod repeat;

pub use repeat::RepeatClassifier;
