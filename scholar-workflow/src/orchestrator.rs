//! Orchestrator: the per-request state machine.
//!
//! Stages run strictly in order; a blocked gate short-circuits past
//! synthesis and validation. The orchestrator holds shared handles to
//! the external capabilities and an immutable config; per-request state
//! lives entirely on the stack of `run_query`.

use scholar_core::errors::ScholarResult;
use scholar_core::models::{GateRule, Query, ReviewReason, WorkflowOutcome};
use scholar_core::traits::{IEmbeddingProvider, IGenerator, IVectorStore};
use scholar_core::PipelineConfig;
use scholar_retrieval::{EvidenceRetriever, IntentClassifier};
use scholar_synthesis::SynthesisEngine;
use scholar_validation::{gate, ValidationEngine};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Drives one query through the full pipeline.
pub struct Orchestrator<'a, S, E, G>
where
    S: IVectorStore,
    E: IEmbeddingProvider,
    G: IGenerator,
{
    store: &'a S,
    embedder: &'a E,
    generator: &'a G,
    classifier: IntentClassifier,
    config: PipelineConfig,
}

impl<'a, S, E, G> Orchestrator<'a, S, E, G>
where
    S: IVectorStore,
    E: IEmbeddingProvider,
    G: IGenerator,
{
    pub fn new(store: &'a S, embedder: &'a E, generator: &'a G, config: PipelineConfig) -> Self {
        Self {
            store,
            embedder,
            generator,
            classifier: IntentClassifier::new(),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one query to completion. Every non-error path settles as a
    /// `WorkflowOutcome`; errors are infrastructure failures only.
    pub async fn run_query(
        &self,
        text: &str,
        session_id: Option<&str>,
    ) -> ScholarResult<WorkflowOutcome> {
        let session = session_id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let span = info_span!("scholar_query", session = %session);
        let query = Query::new(text).with_session(session);
        self.run(query).instrument(span).await
    }

    async fn run(&self, query: Query) -> ScholarResult<WorkflowOutcome> {
        let intent = self.classifier.classify(&query);
        info!(
            intent = %intent.label,
            confidence = %intent.confidence,
            "intent classified"
        );

        let retriever =
            EvidenceRetriever::new(self.store, self.embedder, self.config.retrieval.clone());
        let evidence = retriever
            .retrieve(&query, &intent, self.config.retrieval.top_k)
            .await?;

        let decision = gate::evaluate(&evidence.stats, &intent, &self.config.gate);
        if !decision.proceed {
            // proceed == false always carries the triggering rule.
            let rule = decision.reason.unwrap_or(GateRule::ChunkCount);
            info!(?rule, "gate blocked, routing to human review");
            return Ok(WorkflowOutcome::HumanReviewRequired {
                reason: ReviewReason::InsufficientEvidence { rule },
                stats: decision.stats,
            });
        }

        let synthesizer = SynthesisEngine::new(self.generator, self.config.synthesis.clone());
        let candidate = synthesizer
            .synthesize(&query, &intent, &evidence.chunks, &evidence.images)
            .await?;

        let validator = ValidationEngine::new(self.config.validation.clone());
        validator
            .validate_and_enforce(
                candidate,
                &evidence.chunks,
                &evidence.images,
                &evidence.stats,
                || synthesizer.synthesize(&query, &intent, &evidence.chunks, &evidence.images),
            )
            .await
    }
}
