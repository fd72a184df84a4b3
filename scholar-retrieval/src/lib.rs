//! # scholar-retrieval
//!
//! Evidence retrieval for the Scholar QA pipeline:
//! intent classification → filtered multi-signal search → RRF fusion →
//! evidence chunks with coverage stats.

pub mod engine;
pub mod intent;
pub mod search;

pub use engine::{EvidenceRetriever, RetrievedEvidence};
pub use intent::IntentClassifier;
