//! Deterministic, keyword-based intent classification.

mod classifier;

pub use classifier::IntentClassifier;
