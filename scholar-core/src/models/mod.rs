//! Data model for the retrieval-and-validation workflow.
//!
//! All types here are plain immutable data. Stages communicate by
//! producing new values, never by mutating shared state.

mod answer;
mod confidence;
mod evidence;
mod gate;
mod outcome;
mod query;

pub use answer::{CandidateAnswer, Citation, ValidatedAnswer};
pub use confidence::Confidence;
pub use evidence::{CoverageStats, EvidenceChunk, FusedHit, ImageEvidence, RankedHit};
pub use gate::{GateDecision, GateRule};
pub use outcome::{ReviewReason, WorkflowOutcome};
pub use query::{IntentResult, Query};
