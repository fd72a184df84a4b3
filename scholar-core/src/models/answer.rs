use serde::{Deserialize, Serialize};

use crate::models::Confidence;

/// A claimed source reference in a generated answer.
///
/// Valid only if `page_start <= page_end` and the source document
/// appears among the retrieved evidence chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub source_document: String,
    pub page_start: u32,
    pub page_end: u32,
}

impl Citation {
    /// Structural well-formedness (does not check grounding).
    pub fn is_well_formed(&self) -> bool {
        !self.source_document.is_empty() && self.page_start >= 1 && self.page_start <= self.page_end
    }
}

/// One synthesis attempt. At most two exist per request (the first
/// draft plus one schema retry); discarded after validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateAnswer {
    pub text: String,
    pub citations: Vec<Citation>,
    /// Taken from the generator when supplied, else defaulted.
    pub self_reported_confidence: Confidence,
}

/// Terminal success artifact. `refused` marks answers whose final
/// confidence fell below the refusal threshold under the
/// refuse-and-return policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedAnswer {
    pub text: String,
    pub citations: Vec<Citation>,
    pub final_confidence: Confidence,
    pub refused: bool,
}
