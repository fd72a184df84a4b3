//! SynthesisEngine: one generation call per attempt.
//!
//! Assembles the prompt for the classified intent, invokes the external
//! generator, and shapes its structured output into a `CandidateAnswer`.
//! The engine never validates and never retries; the validation stage
//! drives both.

use scholar_core::config::SynthesisConfig;
use scholar_core::errors::ScholarResult;
use scholar_core::models::{
    CandidateAnswer, Citation, Confidence, EvidenceChunk, ImageEvidence, IntentResult, Query,
};
use scholar_core::traits::{GenerationRequest, IGenerator};
use tracing::debug;

use crate::prompt;

/// The synthesis stage. Holds a shared handle to the generator;
/// carries no per-request state.
pub struct SynthesisEngine<'a, G: IGenerator> {
    generator: &'a G,
    config: SynthesisConfig,
}

impl<'a, G: IGenerator> SynthesisEngine<'a, G> {
    pub fn new(generator: &'a G, config: SynthesisConfig) -> Self {
        Self { generator, config }
    }

    /// Produce one candidate answer from retrieved evidence.
    ///
    /// Only retrieved chunk text enters the generation context. Image
    /// evidence rides along in the outcome but contributes no text.
    pub async fn synthesize(
        &self,
        query: &Query,
        intent: &IntentResult,
        chunks: &[EvidenceChunk],
        images: &[ImageEvidence],
    ) -> ScholarResult<CandidateAnswer> {
        let form = prompt::answer_form(intent.label, &query.text);
        debug!(
            intent = %intent.label,
            ?form,
            chunks = chunks.len(),
            images = images.len(),
            "synthesizing"
        );

        let request = GenerationRequest {
            prompt: prompt::build_instructions(&query.text, form),
            context: prompt::build_context(chunks),
        };
        let draft = self.generator.generate(&request).await?;

        let citations = draft
            .citations
            .into_iter()
            .map(|c| Citation {
                source_document: c.source_document,
                page_start: c.page_start,
                page_end: c.page_end,
            })
            .collect();

        Ok(CandidateAnswer {
            text: draft.text,
            citations,
            self_reported_confidence: Confidence::new(
                draft.confidence.unwrap_or(self.config.default_self_confidence),
            ),
        })
    }
}
