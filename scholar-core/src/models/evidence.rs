use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::section::SectionLabel;

/// One hit from a single retrieval signal, before fusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedHit {
    /// Point id in the backing store.
    pub document_id: String,
    /// 1-based rank within this signal's result list.
    pub rank: u32,
    /// Signal-native score. Not comparable across signals; fusion
    /// uses rank only.
    pub raw_score: f64,
}

impl RankedHit {
    pub fn new(document_id: impl Into<String>, rank: u32, raw_score: f64) -> Self {
        Self {
            document_id: document_id.into(),
            rank,
            raw_score,
        }
    }
}

/// A document after reciprocal-rank fusion across signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusedHit {
    pub document_id: String,
    /// Weighted RRF score. Monotonically non-increasing down the
    /// fused ranking.
    pub fused_score: f64,
}

/// A retrieved unit of paper text with section/page provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceChunk {
    pub text: String,
    pub source_document: String,
    pub section_label: SectionLabel,
    pub fused_score: f64,
    /// Inclusive page span (start, end).
    pub page_range: (u32, u32),
}

/// Retrieved image evidence, structurally parallel to `EvidenceChunk`.
/// Never merged into the text fusion pass; different feature space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEvidence {
    pub image_ref: String,
    pub source_document: String,
    pub page_number: u32,
    pub fused_score: f64,
}

/// Coverage of the retrieved evidence. Recomputed on each retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageStats {
    pub chunk_count: usize,
    pub distinct_papers: usize,
    pub sections_hit: BTreeSet<SectionLabel>,
}

impl CoverageStats {
    /// Derive coverage from a set of evidence chunks.
    pub fn from_chunks(chunks: &[EvidenceChunk]) -> Self {
        let distinct_papers = chunks
            .iter()
            .filter(|c| !c.source_document.is_empty())
            .map(|c| c.source_document.as_str())
            .collect::<BTreeSet<_>>()
            .len();
        let sections_hit = chunks.iter().map(|c| c.section_label).collect();

        Self {
            chunk_count: chunks.len(),
            distinct_papers,
            sections_hit,
        }
    }

    /// Empty coverage: zero chunks, zero papers.
    pub fn empty() -> Self {
        Self {
            chunk_count: 0,
            distinct_papers: 0,
            sections_hit: BTreeSet::new(),
        }
    }
}
