//! Canonical paper-section taxonomy.
//!
//! A closed set of 13 labels. Corpus ingestion stores free-form section
//! titles; anything outside this set normalizes to `Unknown`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the 13 canonical section labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionLabel {
    Abstract,
    Introduction,
    RelatedWork,
    Methods,
    Experiments,
    Results,
    Discussion,
    Limitations,
    FutureWork,
    Conclusion,
    References,
    Appendix,
    Unknown,
}

impl SectionLabel {
    /// All 13 canonical labels, in taxonomy order.
    pub const ALL: [SectionLabel; 13] = [
        SectionLabel::Abstract,
        SectionLabel::Introduction,
        SectionLabel::RelatedWork,
        SectionLabel::Methods,
        SectionLabel::Experiments,
        SectionLabel::Results,
        SectionLabel::Discussion,
        SectionLabel::Limitations,
        SectionLabel::FutureWork,
        SectionLabel::Conclusion,
        SectionLabel::References,
        SectionLabel::Appendix,
        SectionLabel::Unknown,
    ];

    /// Normalize a raw section title from the backing store.
    ///
    /// Matching is case-insensitive and tolerant of separators
    /// ("Future Work", "future_work", "FUTURE-WORK" all map to `FutureWork`).
    /// Anything unrecognized maps to `Unknown`; the taxonomy is closed.
    pub fn from_raw(raw: &str) -> Self {
        let normalized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "abstract" => SectionLabel::Abstract,
            "introduction" | "intro" => SectionLabel::Introduction,
            "relatedwork" | "background" => SectionLabel::RelatedWork,
            "methods" | "method" | "methodology" | "approach" => SectionLabel::Methods,
            "experiments" | "experiment" | "experimentalsetup" => SectionLabel::Experiments,
            "results" | "result" | "evaluation" | "findings" => SectionLabel::Results,
            "discussion" => SectionLabel::Discussion,
            "limitations" | "limitation" => SectionLabel::Limitations,
            "futurework" | "futuredirections" => SectionLabel::FutureWork,
            "conclusion" | "conclusions" | "summary" => SectionLabel::Conclusion,
            "references" | "bibliography" => SectionLabel::References,
            "appendix" | "appendices" | "supplementary" => SectionLabel::Appendix,
            _ => SectionLabel::Unknown,
        }
    }

    /// Human-readable label as stored in corpus metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Abstract => "Abstract",
            SectionLabel::Introduction => "Introduction",
            SectionLabel::RelatedWork => "Related Work",
            SectionLabel::Methods => "Methods",
            SectionLabel::Experiments => "Experiments",
            SectionLabel::Results => "Results",
            SectionLabel::Discussion => "Discussion",
            SectionLabel::Limitations => "Limitations",
            SectionLabel::FutureWork => "Future Work",
            SectionLabel::Conclusion => "Conclusion",
            SectionLabel::References => "References",
            SectionLabel::Appendix => "Appendix",
            SectionLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionLabel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_raw(s))
    }
}
