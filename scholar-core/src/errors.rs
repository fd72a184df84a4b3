//! Error taxonomy for the pipeline.
//!
//! Only true backend failures are errors. Evidentiary shortfalls
//! (insufficient evidence, ungrounded citations, low confidence) travel
//! inside `WorkflowOutcome` and never surface as exceptions.

/// Convenience alias used across the workspace.
pub type ScholarResult<T> = Result<T, ScholarError>;

/// Top-level error type aggregating all subsystems.
#[derive(Debug, thiserror::Error)]
pub enum ScholarError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error("config error: {0}")]
    Config(String),
}

/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The external vector store is unreachable or the mandatory text
    /// signal failed. Fatal for the request; never retried internally.
    #[error("vector store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("query text is empty")]
    EmptyQuery,

    #[error("embedding failed: {reason}")]
    EmbeddingFailed { reason: String },
}

/// Synthesis subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The text-generation capability is unreachable.
    #[error("generator unavailable: {reason}")]
    GeneratorUnavailable { reason: String },
}
