use serde::{Deserialize, Serialize};

use crate::errors::ScholarResult;

/// A generation call: instructions plus assembled evidence context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Task instructions, including the caller's question.
    pub prompt: String,
    /// Evidence context. Only retrieved chunk text ever appears here.
    pub context: String,
}

/// A citation as claimed in the generator's structured output.
/// Not yet checked for well-formedness or grounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftCitation {
    pub source_document: String,
    pub page_start: u32,
    pub page_end: u32,
}

/// Structured generator output: raw answer text plus claimed citations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDraft {
    pub text: String,
    pub citations: Vec<DraftCitation>,
    /// Generator-supplied confidence, when the model reports one.
    pub confidence: Option<f64>,
}

/// External text-generation capability.
///
/// Must return structured citation data, not only free text.
/// Implementations must be safe for concurrent use.
#[allow(async_fn_in_trait)]
pub trait IGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> ScholarResult<GeneratedDraft>;
}
