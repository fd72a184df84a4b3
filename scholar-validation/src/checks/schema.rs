//! Schema check: does the candidate parse into the expected shape?
//!
//! A failure here is a generation defect, the one condition worth a
//! single resynthesis attempt.

use scholar_core::models::CandidateAnswer;

/// Why a candidate failed the schema check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaViolation {
    /// Answer text is empty or whitespace.
    EmptyAnswer,
    /// A citation is structurally malformed (empty source, zero page,
    /// or inverted page range).
    MalformedCitation { index: usize },
}

/// Check the candidate's structural shape. Returns the first violation
/// in citation order, or `Ok` when the shape is sound.
pub fn check(candidate: &CandidateAnswer) -> Result<(), SchemaViolation> {
    if candidate.text.trim().is_empty() {
        return Err(SchemaViolation::EmptyAnswer);
    }
    for (index, citation) in candidate.citations.iter().enumerate() {
        if !citation.is_well_formed() {
            return Err(SchemaViolation::MalformedCitation { index });
        }
    }
    Ok(())
}
