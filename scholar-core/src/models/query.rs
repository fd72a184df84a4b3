use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::intent::IntentKind;
use crate::models::Confidence;
use crate::section::SectionLabel;

/// One caller question. Created at request entry, owned by the
/// orchestrator for the request's lifetime, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub text: String,
    /// Caller-supplied session id; generated when absent.
    pub session_id: Option<String>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Output of the intent classifier. Produced once per query,
/// immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    pub label: IntentKind,
    /// Rule-derived match quality, not a probability estimate.
    pub confidence: Confidence,
    /// Sections that may serve as evidence for this intent.
    pub allowed_sections: BTreeSet<SectionLabel>,
}
