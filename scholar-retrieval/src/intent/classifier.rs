//! Rule-based intent classifier. No ML, no embeddings, no external calls.
//!
//! Every intent has a fixed keyword/phrase set. All intents whose set
//! matches the lowercased query are candidates; the highest-priority
//! candidate wins. Confidence reflects match quality, not probability:
//! a multi-word phrase match scores higher than a single keyword, and
//! conflicting candidates deduct a fixed amount.

use scholar_core::constants::FALLBACK_INTENT_CONFIDENCE;
use scholar_core::models::{Confidence, IntentResult, Query};
use scholar_core::IntentKind;

/// Confidence for an exact multi-word phrase match.
const PHRASE_MATCH_CONFIDENCE: f64 = 1.0;
/// Confidence for a single-keyword match.
const KEYWORD_MATCH_CONFIDENCE: f64 = 0.9;
/// Deduction when other intents also matched the query.
const CONFLICT_DEDUCTION: f64 = 0.15;

/// Keyword/phrase sets per intent. Matching is substring-based over
/// the lowercased query, one hit per intent is enough.
const INTENT_KEYWORDS: &[(IntentKind, &[&str])] = &[
    (
        IntentKind::Limitations,
        &[
            "limitation",
            "drawback",
            "shortcoming",
            "weakness",
            "problem with",
            "issue with",
            "downside",
        ],
    ),
    (
        IntentKind::FutureWork,
        &[
            "future work",
            "future direction",
            "next step",
            "further research",
            "open question",
        ],
    ),
    (
        IntentKind::ResearchGaps,
        &[
            "gap",
            "missing",
            "unexplored",
            "underexplored",
            "overlooked",
            "not addressed",
            "unresolved",
        ],
    ),
    (
        IntentKind::Methodology,
        &[
            "method",
            "approach",
            "technique",
            "algorithm",
            "how does",
            "how do",
            "procedure",
            "architecture",
            "implementation",
        ],
    ),
    (
        IntentKind::Experiments,
        &[
            "experiment",
            "evaluation",
            "benchmark",
            "dataset",
            "baseline",
            "ablation",
            "hyperparameter",
            "fine-tun",
        ],
    ),
    (
        IntentKind::Results,
        &[
            "result",
            "performance",
            "accuracy",
            "score",
            "metric",
            "outcome",
            "finding",
            "outperform",
        ],
    ),
    (
        IntentKind::Comparison,
        &[
            "compare",
            "comparison",
            "versus",
            " vs ",
            "differ",
            "better than",
            "worse than",
            "relative to",
        ],
    ),
    (
        IntentKind::Summary,
        &[
            "summary",
            "summarize",
            "overview",
            "what is",
            "explain",
            "describe",
            "main idea",
            "key point",
            "tldr",
        ],
    ),
    (
        IntentKind::Citation,
        &["reference", "cite", "citation", "bibliography", "paper by"],
    ),
];

/// Deterministic keyword-based intent classifier.
///
/// Pure function of the query text; trivially testable.
#[derive(Debug, Default)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a query into an intent with allowed sections.
    pub fn classify(&self, query: &Query) -> IntentResult {
        let text = query.text.to_lowercase();

        // Collect every intent with at least one matching keyword,
        // remembering whether the match was a multi-word phrase.
        let mut candidates: Vec<(IntentKind, bool)> = Vec::new();
        for (intent, keywords) in INTENT_KEYWORDS {
            let mut phrase = false;
            let mut matched = false;
            for keyword in *keywords {
                if text.contains(keyword) {
                    matched = true;
                    phrase |= keyword.trim().contains(' ');
                }
            }
            if matched {
                candidates.push((*intent, phrase));
            }
        }

        let Some(&(winner, phrase_match)) = candidates
            .iter()
            .max_by_key(|(intent, _)| intent.priority())
        else {
            return Self::fallback();
        };

        let base = if phrase_match {
            PHRASE_MATCH_CONFIDENCE
        } else {
            KEYWORD_MATCH_CONFIDENCE
        };
        let conflicted = candidates.len() > 1;
        let confidence = if conflicted {
            base - CONFLICT_DEDUCTION
        } else {
            base
        };

        IntentResult {
            label: winner,
            confidence: Confidence::new(confidence),
            allowed_sections: winner.allowed_sections(),
        }
    }

    /// Reserved fallback: lowest priority, broadest sections, fixed
    /// low confidence.
    fn fallback() -> IntentResult {
        IntentResult {
            label: IntentKind::General,
            confidence: Confidence::new(FALLBACK_INTENT_CONFIDENCE),
            allowed_sections: IntentKind::General.allowed_sections(),
        }
    }
}
