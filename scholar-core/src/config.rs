//! Pipeline configuration.
//!
//! An immutable struct handed to the orchestrator at construction.
//! All values are plain scalars/flags read once per request; the core
//! never mutates them. Concurrent requests may carry different configs.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{ScholarError, ScholarResult};

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub retrieval: RetrievalConfig,
    pub gate: GateConfig,
    pub validation: ValidationPolicyConfig,
    pub synthesis: SynthesisConfig,
}

impl PipelineConfig {
    /// Load from a TOML string. Missing fields take defaults.
    pub fn from_toml_str(raw: &str) -> ScholarResult<Self> {
        toml::from_str(raw).map_err(|e| ScholarError::Config(e.to_string()))
    }
}

/// Retrieval and fusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Fused results kept as evidence chunks.
    pub top_k: usize,
    /// RRF smoothing constant.
    pub rrf_k: u32,
    /// Fusion weight of the dense semantic signal.
    pub dense_weight: f64,
    /// Fusion weight of the sparse keyword signal.
    pub sparse_weight: f64,
    /// Whether the sparse keyword signal is enabled (hybrid search).
    pub hybrid: bool,
    /// Whether the image signal is enabled (multimodal search).
    pub multimodal: bool,
    /// Image results kept when multimodal is enabled.
    pub image_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: constants::DEFAULT_TOP_K,
            rrf_k: constants::DEFAULT_RRF_K,
            dense_weight: constants::DEFAULT_SIGNAL_WEIGHT,
            sparse_weight: constants::DEFAULT_SIGNAL_WEIGHT,
            hybrid: true,
            multimodal: false,
            image_top_k: 3,
        }
    }
}

/// HITL gate thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub min_chunks: usize,
    pub min_intent_confidence: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_chunks: constants::DEFAULT_MIN_CHUNKS,
            min_intent_confidence: constants::DEFAULT_MIN_INTENT_CONFIDENCE,
        }
    }
}

/// What to do when final confidence falls below threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowConfidencePolicy {
    /// Return the answer flagged `refused = true`.
    #[default]
    Refuse,
    /// Route to human review instead of answering.
    Escalate,
}

/// Validation-stage policy knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicyConfig {
    pub min_final_confidence: f64,
    /// Penalty per citation not grounded in retrieved evidence.
    pub ungrounded_citation_penalty: f64,
    /// Penalty when the answer carries no citations at all.
    pub missing_citations_penalty: f64,
    /// Penalty per hallucination-screen flag.
    pub hallucination_penalty: f64,
    /// Cap on the total hallucination-screen penalty.
    pub hallucination_penalty_cap: f64,
    /// Resynthesis attempts allowed after a schema failure. The
    /// pipeline performs at most one retry per request, so any
    /// nonzero value is treated as 1.
    pub max_synthesis_retries: u8,
    pub low_confidence_policy: LowConfidencePolicy,
}

impl Default for ValidationPolicyConfig {
    fn default() -> Self {
        Self {
            min_final_confidence: constants::DEFAULT_MIN_FINAL_CONFIDENCE,
            ungrounded_citation_penalty: constants::DEFAULT_UNGROUNDED_CITATION_PENALTY,
            missing_citations_penalty: constants::DEFAULT_MISSING_CITATIONS_PENALTY,
            hallucination_penalty: constants::DEFAULT_HALLUCINATION_PENALTY,
            hallucination_penalty_cap: constants::DEFAULT_HALLUCINATION_PENALTY_CAP,
            max_synthesis_retries: constants::DEFAULT_MAX_SYNTHESIS_RETRIES,
            low_confidence_policy: LowConfidencePolicy::default(),
        }
    }
}

/// Synthesis-stage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Self-reported confidence assumed when the generator omits one.
    pub default_self_confidence: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_self_confidence: constants::DEFAULT_SELF_CONFIDENCE,
        }
    }
}
