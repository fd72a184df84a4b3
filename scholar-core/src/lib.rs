//! # scholar-core
//!
//! Foundation crate for the Scholar research-paper QA pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod section;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::{ScholarError, ScholarResult};
pub use intent::IntentKind;
pub use models::{
    CandidateAnswer, Citation, Confidence, CoverageStats, EvidenceChunk, FusedHit, GateDecision,
    GateRule, ImageEvidence, IntentResult, Query, RankedHit, ReviewReason, ValidatedAnswer,
    WorkflowOutcome,
};
pub use section::SectionLabel;
