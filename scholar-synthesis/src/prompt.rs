//! Prompt assembly: intent-routed instruction blocks and evidence context.
//!
//! Only retrieved chunk text ever enters the context block. The
//! verbosity hint is a lexical rule check, not a model call.

use scholar_core::models::EvidenceChunk;
use scholar_core::IntentKind;

/// How the generator should shape its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerForm {
    /// Extract facts from evidence, cite every claim.
    Factual { brief: bool },
    /// Structure the answer around multiple cited sources.
    Comparison,
    /// Enumerate items (gaps, limitations, future directions).
    Enumeration,
}

/// Lexical hints that the caller wants a short answer.
const BREVITY_HINTS: &[&str] = &["brief", "short", "tldr", "concise", "in a sentence", "quick"];

/// Route an intent to its answer form, applying the verbosity hint
/// for summary-style intents.
pub fn answer_form(intent: IntentKind, query_text: &str) -> AnswerForm {
    match intent {
        IntentKind::Comparison => AnswerForm::Comparison,
        IntentKind::Limitations | IntentKind::ResearchGaps | IntentKind::FutureWork => {
            AnswerForm::Enumeration
        }
        _ => AnswerForm::Factual {
            brief: wants_brevity(query_text),
        },
    }
}

/// Whether the query lexically asks for a short-form answer.
pub fn wants_brevity(query_text: &str) -> bool {
    let text = query_text.to_lowercase();
    BREVITY_HINTS.iter().any(|hint| text.contains(hint))
}

/// Build the task instructions for a question and answer form.
pub fn build_instructions(question: &str, form: AnswerForm) -> String {
    let rules = match form {
        AnswerForm::Factual { brief: false } => {
            "RULES:\n\
             1. Extract facts ONLY from the provided context.\n\
             2. Cite the source document for every claim.\n\
             3. If information is not in context, say \"Not found in the provided papers\".\n\
             4. Be specific and factual."
        }
        AnswerForm::Factual { brief: true } => {
            "RULES:\n\
             1. Extract facts ONLY from the provided context.\n\
             2. Cite the source document for every claim.\n\
             3. If information is not in context, say \"Not found in the provided papers\".\n\
             4. Answer in at most three sentences."
        }
        AnswerForm::Comparison => {
            "RULES:\n\
             1. Compare ONLY what is stated in the context.\n\
             2. Structure the comparison around the cited sources.\n\
             3. Cite a source document for each point.\n\
             4. Highlight differences AND similarities.\n\
             5. If the sources do not address a comparison point, state that."
        }
        AnswerForm::Enumeration => {
            "RULES:\n\
             1. Enumerate items ONLY from explicit statements in the context.\n\
             2. Cite which source document mentions each item.\n\
             3. Do NOT invent items; only report what the papers state.\n\
             4. Organize by theme if several items are found."
        }
    };

    format!("You are analyzing research papers.\n\nQUESTION: {question}\n\n{rules}")
}

/// Build the evidence context: numbered entries with provenance.
pub fn build_context(chunks: &[EvidenceChunk]) -> String {
    let mut parts = Vec::with_capacity(chunks.len());
    for (i, chunk) in chunks.iter().enumerate() {
        parts.push(format!(
            "[{}] From '{}' (Section: {}, Pages {}-{}):\n{}\n",
            i + 1,
            chunk.source_document,
            chunk.section_label,
            chunk.page_range.0,
            chunk.page_range.1,
            chunk.text
        ));
    }
    parts.join("\n")
}
