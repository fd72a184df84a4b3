//! Human-in-the-loop gate: deterministic evidence-sufficiency rules.
//!
//! Runs once per request, immediately after retrieval and before any
//! language-model call. No ML, no learned scoring. When blocked, the
//! first triggered rule (in checked order) names the reason.

use scholar_core::config::GateConfig;
use scholar_core::models::{CoverageStats, GateDecision, GateRule, IntentResult};
use tracing::debug;

/// Evaluate whether retrieval coverage suffices to proceed to synthesis.
///
/// Blocks if ANY of: too few chunks, intent confidence below threshold,
/// or zero distinct source papers.
pub fn evaluate(stats: &CoverageStats, intent: &IntentResult, config: &GateConfig) -> GateDecision {
    let reason = if stats.chunk_count < config.min_chunks {
        Some(GateRule::ChunkCount)
    } else if intent.confidence.value() < config.min_intent_confidence {
        Some(GateRule::IntentConfidence)
    } else if stats.distinct_papers == 0 {
        Some(GateRule::DistinctPapers)
    } else {
        None
    };

    debug!(
        chunks = stats.chunk_count,
        papers = stats.distinct_papers,
        intent_confidence = intent.confidence.value(),
        blocked = reason.is_some(),
        "gate evaluated"
    );

    GateDecision {
        proceed: reason.is_none(),
        reason,
        stats: stats.clone(),
    }
}
