//! ValidationEngine: ordered checks, penalty aggregation, and the one
//! bounded resynthesis on schema failure.
//!
//! Check order: schema → citation grounding → hallucination screen →
//! confidence threshold. Only schema failure retries; grounding and
//! hallucination findings already carry their cost as penalties.

use std::future::Future;

use scholar_core::config::{LowConfidencePolicy, ValidationPolicyConfig};
use scholar_core::errors::ScholarResult;
use scholar_core::models::{
    CandidateAnswer, Confidence, CoverageStats, EvidenceChunk, ImageEvidence, ReviewReason,
    ValidatedAnswer, WorkflowOutcome,
};
use tracing::{debug, info, warn};

use crate::checks::{grounding, hallucination, schema, HallucinationFlag};
use crate::checks::grounding::GroundingReport;

/// Pure assessment of one candidate against one evidence set.
/// Assessing the same candidate twice yields identical results.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub final_confidence: Confidence,
    pub grounding: GroundingReport,
    pub flags: Vec<HallucinationFlag>,
    pub total_penalty: f64,
}

/// The validation stage.
pub struct ValidationEngine {
    config: ValidationPolicyConfig,
}

impl ValidationEngine {
    pub fn new(mut config: ValidationPolicyConfig) -> Self {
        // The schema path never resynthesizes more than once.
        config.max_synthesis_retries = config.max_synthesis_retries.min(1);
        Self { config }
    }

    pub fn config(&self) -> &ValidationPolicyConfig {
        &self.config
    }

    /// Score a candidate without enforcing. Deterministic and
    /// side-effect free.
    pub fn assess(&self, candidate: &CandidateAnswer, chunks: &[EvidenceChunk]) -> Assessment {
        let grounding = grounding::check(&candidate.citations, chunks);
        let flags = hallucination::screen(candidate, chunks);

        let mut penalty =
            grounding.ungrounded.len() as f64 * self.config.ungrounded_citation_penalty;
        if candidate.citations.is_empty() {
            penalty += self.config.missing_citations_penalty;
        }
        let screen_penalty = (flags.len() as f64 * self.config.hallucination_penalty)
            .min(self.config.hallucination_penalty_cap);
        penalty += screen_penalty;

        Assessment {
            final_confidence: candidate.self_reported_confidence.penalize(penalty),
            grounding,
            flags,
            total_penalty: penalty,
        }
    }

    /// Run the full ordered validation against a candidate, driving at
    /// most `max_synthesis_retries` resynthesis attempts on schema
    /// failure, and settle the request's outcome.
    pub async fn validate_and_enforce<F, Fut>(
        &self,
        candidate: CandidateAnswer,
        chunks: &[EvidenceChunk],
        images: &[ImageEvidence],
        stats: &CoverageStats,
        resynthesize: F,
    ) -> ScholarResult<WorkflowOutcome>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ScholarResult<CandidateAnswer>>,
    {
        debug!(images = images.len(), "validating candidate");

        // Check 1: schema, with one bounded retry.
        let candidate = match schema::check(&candidate) {
            Ok(()) => candidate,
            Err(violation) => {
                if self.config.max_synthesis_retries == 0 {
                    info!(?violation, "schema failure with retries disabled, escalating");
                    return Ok(human_review(ReviewReason::SchemaInvalid, stats));
                }
                warn!(?violation, "schema failure, resynthesizing once");
                let retried = resynthesize().await?;
                match schema::check(&retried) {
                    Ok(()) => retried,
                    Err(violation) => {
                        info!(?violation, "schema failure after retry, escalating");
                        return Ok(human_review(ReviewReason::SchemaInvalid, stats));
                    }
                }
            }
        };

        // Checks 2 + 3: grounding and hallucination, as penalties.
        let assessment = self.assess(&candidate, chunks);
        if !assessment.grounding.all_grounded() {
            warn!(
                ungrounded = assessment.grounding.ungrounded.len(),
                checked = assessment.grounding.checked,
                "ungrounded citations kept in answer, confidence penalized"
            );
        }

        // Check 4: threshold.
        let below_threshold =
            assessment.final_confidence.value() < self.config.min_final_confidence;
        if below_threshold && self.config.low_confidence_policy == LowConfidencePolicy::Escalate {
            info!(
                final_confidence = %assessment.final_confidence,
                "final confidence below threshold, escalating"
            );
            return Ok(human_review(ReviewReason::LowConfidence, stats));
        }

        info!(
            final_confidence = %assessment.final_confidence,
            penalty = assessment.total_penalty,
            refused = below_threshold,
            "candidate validated"
        );

        Ok(WorkflowOutcome::Answer(ValidatedAnswer {
            text: candidate.text,
            citations: candidate.citations,
            final_confidence: assessment.final_confidence,
            refused: below_threshold,
        }))
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(ValidationPolicyConfig::default())
    }
}

fn human_review(reason: ReviewReason, stats: &CoverageStats) -> WorkflowOutcome {
    WorkflowOutcome::HumanReviewRequired {
        reason,
        stats: stats.clone(),
    }
}
