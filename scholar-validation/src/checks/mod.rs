//! Individual validation checks. Each is a pure function over the
//! candidate and the retrieved evidence.

pub mod grounding;
pub mod hallucination;
pub mod schema;

pub use grounding::GroundingReport;
pub use hallucination::HallucinationFlag;
pub use schema::SchemaViolation;
