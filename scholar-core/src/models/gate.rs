use serde::{Deserialize, Serialize};

use crate::models::CoverageStats;

/// The gate rule that blocked a request. Rules are checked in this
/// order and the first trigger is reported, for explainability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateRule {
    /// Fewer chunks than the configured minimum.
    ChunkCount,
    /// Intent-classifier confidence below the configured minimum.
    IntentConfidence,
    /// No distinct source papers among the retrieved chunks.
    DistinctPapers,
}

/// Outcome of the HITL gate. Terminal for the request when
/// `proceed` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateDecision {
    pub proceed: bool,
    /// First triggered rule when blocked; `None` when proceeding.
    pub reason: Option<GateRule>,
    /// Coverage echoed for the caller.
    pub stats: CoverageStats,
}
