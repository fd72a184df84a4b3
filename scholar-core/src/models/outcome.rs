use serde::{Deserialize, Serialize};

use crate::models::{CoverageStats, GateRule, ValidatedAnswer};

/// Why a request was routed to human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReviewReason {
    /// The HITL gate blocked before synthesis; carries the rule that fired.
    InsufficientEvidence { rule: GateRule },
    /// Generator output failed the schema check twice.
    SchemaInvalid,
    /// Final confidence fell below threshold under the strict
    /// escalation policy.
    LowConfidence,
}

/// Terminal outcome of one request. Exactly one per request,
/// immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum WorkflowOutcome {
    Answer(ValidatedAnswer),
    HumanReviewRequired {
        reason: ReviewReason,
        stats: CoverageStats,
    },
}

impl WorkflowOutcome {
    /// The validated answer, if this outcome carries one.
    pub fn answer(&self) -> Option<&ValidatedAnswer> {
        match self {
            WorkflowOutcome::Answer(a) => Some(a),
            WorkflowOutcome::HumanReviewRequired { .. } => None,
        }
    }

    pub fn is_human_review(&self) -> bool {
        matches!(self, WorkflowOutcome::HumanReviewRequired { .. })
    }
}
