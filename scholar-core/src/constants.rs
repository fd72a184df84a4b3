/// Scholar system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// RRF smoothing constant. Higher k reduces the influence of
/// high-ranking items from any single list.
pub const DEFAULT_RRF_K: u32 = 60;

/// Default per-signal fusion weight (equal weighting).
pub const DEFAULT_SIGNAL_WEIGHT: f64 = 1.0;

/// Number of fused results kept as evidence chunks.
pub const DEFAULT_TOP_K: usize = 5;

/// Minimum chunks required for the gate to let a request proceed.
pub const DEFAULT_MIN_CHUNKS: usize = 2;

/// Minimum intent-classifier confidence required by the gate.
pub const DEFAULT_MIN_INTENT_CONFIDENCE: f64 = 0.6;

/// Final confidence below which an answer is refused or escalated.
pub const DEFAULT_MIN_FINAL_CONFIDENCE: f64 = 0.5;

/// Penalty applied per citation that cannot be grounded in evidence.
pub const DEFAULT_UNGROUNDED_CITATION_PENALTY: f64 = 0.15;

/// Penalty applied when the answer carries no citations at all.
pub const DEFAULT_MISSING_CITATIONS_PENALTY: f64 = 0.2;

/// Penalty applied per hallucination-screen flag.
pub const DEFAULT_HALLUCINATION_PENALTY: f64 = 0.1;

/// Cap on the total penalty from the hallucination screen.
pub const DEFAULT_HALLUCINATION_PENALTY_CAP: f64 = 0.3;

/// Maximum resynthesis attempts after a schema failure.
pub const DEFAULT_MAX_SYNTHESIS_RETRIES: u8 = 1;

/// Self-reported confidence assumed when the generator supplies none.
pub const DEFAULT_SELF_CONFIDENCE: f64 = 0.7;

/// Confidence assigned to a fallback (no keyword match) intent.
pub const FALLBACK_INTENT_CONFIDENCE: f64 = 0.5;
