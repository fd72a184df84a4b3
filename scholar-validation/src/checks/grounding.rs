//! Citation grounding: does each claimed source actually appear among
//! the retrieved evidence, on overlapping pages?
//!
//! Ungrounded citations are a quality signal, not removable defects;
//! they stay in the answer and cost confidence instead.

use scholar_core::models::{Citation, EvidenceChunk};

/// Grounding result for all citations of one candidate.
#[derive(Debug, Clone)]
pub struct GroundingReport {
    /// Citations with no supporting retrieved chunk.
    pub ungrounded: Vec<Citation>,
    /// Total citations checked.
    pub checked: usize,
}

impl GroundingReport {
    pub fn all_grounded(&self) -> bool {
        self.ungrounded.is_empty()
    }
}

/// Check every citation against the retrieved chunks.
///
/// A citation is grounded iff some chunk from the same source document
/// has a page range overlapping the citation's (closed intervals).
pub fn check(citations: &[Citation], chunks: &[EvidenceChunk]) -> GroundingReport {
    let ungrounded = citations
        .iter()
        .filter(|citation| !is_grounded(citation, chunks))
        .cloned()
        .collect();

    GroundingReport {
        ungrounded,
        checked: citations.len(),
    }
}

fn is_grounded(citation: &Citation, chunks: &[EvidenceChunk]) -> bool {
    chunks.iter().any(|chunk| {
        chunk.source_document == citation.source_document
            && chunk.page_range.0 <= citation.page_end
            && chunk.page_range.1 >= citation.page_start
    })
}
