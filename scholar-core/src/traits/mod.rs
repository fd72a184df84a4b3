//! Capability traits consumed by the pipeline.
//!
//! Narrow function contracts over the external vector store, embedding
//! models, and text generator, so the core can be tested with
//! deterministic stand-ins returning canned values.

mod embedding;
mod generator;
mod vector_store;

pub use embedding::IEmbeddingProvider;
pub use generator::{DraftCitation, GeneratedDraft, GenerationRequest, IGenerator};
pub use vector_store::{ChunkRecord, IVectorStore, ImageRecord};
