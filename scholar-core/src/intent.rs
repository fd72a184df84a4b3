//! Query intent taxonomy.
//!
//! Closed set of intent kinds with a fixed numeric priority and a static
//! allowed-sections table. Keyword matching lives in scholar-retrieval;
//! this module only defines the taxonomy.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::section::SectionLabel;

/// Query intent. Higher priority wins when several intents match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Citation,
    Limitations,
    FutureWork,
    ResearchGaps,
    Methodology,
    Experiments,
    Results,
    Comparison,
    Summary,
    /// Reserved fallback when no keyword matches. Lowest priority,
    /// broadest section set.
    General,
}

impl IntentKind {
    /// Matching priority. More specific intents beat generic ones.
    pub fn priority(&self) -> u32 {
        match self {
            IntentKind::Citation => 100,
            IntentKind::Limitations => 90,
            IntentKind::FutureWork => 85,
            IntentKind::ResearchGaps => 80,
            IntentKind::Methodology => 70,
            IntentKind::Experiments => 60,
            IntentKind::Results => 50,
            IntentKind::Comparison => 40,
            IntentKind::Summary => 20,
            IntentKind::General => 10,
        }
    }

    /// Static lookup: which sections may serve as evidence for this intent.
    pub fn allowed_sections(&self) -> BTreeSet<SectionLabel> {
        let sections: &[SectionLabel] = match self {
            IntentKind::Citation => &[SectionLabel::References],
            IntentKind::Limitations => &[SectionLabel::Discussion, SectionLabel::Limitations],
            IntentKind::FutureWork => &[SectionLabel::FutureWork],
            IntentKind::ResearchGaps => &[
                SectionLabel::Discussion,
                SectionLabel::Limitations,
                SectionLabel::FutureWork,
            ],
            IntentKind::Methodology => &[SectionLabel::Methods],
            IntentKind::Experiments => &[SectionLabel::Experiments, SectionLabel::Results],
            IntentKind::Results => &[SectionLabel::Results],
            IntentKind::Comparison => &[SectionLabel::Results, SectionLabel::Experiments],
            IntentKind::Summary => &[SectionLabel::Abstract, SectionLabel::Introduction],
            // Broadest set: everything except References (citation-only)
            // and Unknown (never filterable).
            IntentKind::General => &[
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
                SectionLabel::Appendix,
            ],
        };
        sections.iter().copied().collect()
    }

    /// Whether this is the reserved unrestricted fallback intent.
    pub fn is_fallback(&self) -> bool {
        matches!(self, IntentKind::General)
    }

    /// Intent name as used in config files and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentKind::Citation => "citation",
            IntentKind::Limitations => "limitations",
            IntentKind::FutureWork => "future_work",
            IntentKind::ResearchGaps => "research_gaps",
            IntentKind::Methodology => "methodology",
            IntentKind::Experiments => "experiments",
            IntentKind::Results => "results",
            IntentKind::Comparison => "comparison",
            IntentKind::Summary => "summary",
            IntentKind::General => "general",
        }
    }
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
