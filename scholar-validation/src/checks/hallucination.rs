//! Hallucination screen: heuristic pattern checks over the answer text.
//!
//! Two patterns: absolute claims in an answer carrying no citations,
//! and numeric claims whose numbers appear in no retrieved chunk.
//! Honest refusals ("not found in the provided papers") pass clean.

use std::sync::OnceLock;

use regex::Regex;
use scholar_core::models::{CandidateAnswer, EvidenceChunk};

/// One finding from the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HallucinationFlag {
    /// An absolute claim ("always", "never", "proven", ...) in an
    /// answer with zero citations.
    UncitedAbsoluteClaim { pattern: String },
    /// A number in the answer that appears in no retrieved chunk.
    UnsupportedNumericClaim { value: String },
}

/// Phrasings of honest refusal; their presence suppresses the screen.
const HONEST_PATTERNS: &[&str] = &[
    "not found",
    "not mentioned",
    "not stated",
    "not specified",
    "unclear",
];

/// Absolute-claim markers worth flagging when nothing is cited.
const ABSOLUTE_PATTERNS: &[&str] = &[
    "always",
    "never",
    "all studies",
    "every model",
    "guaranteed",
    "proven",
    "impossible",
];

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?%?").expect("static regex"))
}

/// Screen a candidate against the retrieved evidence.
pub fn screen(candidate: &CandidateAnswer, chunks: &[EvidenceChunk]) -> Vec<HallucinationFlag> {
    let text = candidate.text.to_lowercase();

    if HONEST_PATTERNS.iter().any(|p| text.contains(p)) {
        return Vec::new();
    }

    let mut flags = Vec::new();

    if candidate.citations.is_empty() {
        for pattern in ABSOLUTE_PATTERNS {
            if text.contains(pattern) {
                flags.push(HallucinationFlag::UncitedAbsoluteClaim {
                    pattern: (*pattern).to_string(),
                });
            }
        }
    }

    let evidence_text: String = chunks
        .iter()
        .map(|c| c.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let mut seen = Vec::new();
    for m in number_regex().find_iter(&text) {
        let value = m.as_str();
        if seen.contains(&value) {
            continue;
        }
        seen.push(value);
        if !evidence_text.contains(value) {
            flags.push(HallucinationFlag::UnsupportedNumericClaim {
                value: value.to_string(),
            });
        }
    }

    flags
}
