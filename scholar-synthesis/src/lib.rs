//! # scholar-synthesis
//!
//! Answer synthesis for the Scholar QA pipeline. Routes prompt
//! construction by intent, hands retrieved evidence to the external
//! generator, and shapes its structured output into a candidate answer.
//! Retries live in scholar-validation, never here.

pub mod engine;
pub mod prompt;

pub use engine::SynthesisEngine;
