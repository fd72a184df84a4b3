use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::ScholarResult;
use crate::models::RankedHit;
use crate::section::SectionLabel;

/// Stored chunk metadata, fetched after fusion to build evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: String,
    pub text: String,
    pub source_document: String,
    pub section_label: SectionLabel,
    pub page_start: u32,
    pub page_end: u32,
}

/// Stored image metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub image_ref: String,
    pub source_document: String,
    pub page_number: u32,
}

/// External vector store capability.
///
/// Implementations must be safe for concurrent use; one shared,
/// pooled connection serves all in-flight requests. Each search
/// returns hits already annotated with 1-based rank order, filtered
/// server-side when a section filter is given.
#[allow(async_fn_in_trait)]
pub trait IVectorStore: Send + Sync {
    /// Dense semantic search over the text collection.
    async fn search_dense(
        &self,
        vector: &[f32],
        filter: Option<&BTreeSet<SectionLabel>>,
        top_k: usize,
    ) -> ScholarResult<Vec<RankedHit>>;

    /// Sparse keyword-overlap search over the text collection.
    async fn search_sparse(
        &self,
        text: &str,
        filter: Option<&BTreeSet<SectionLabel>>,
        top_k: usize,
    ) -> ScholarResult<Vec<RankedHit>>;

    /// Similarity search over the image collection.
    async fn search_image(&self, vector: &[f32], top_k: usize) -> ScholarResult<Vec<RankedHit>>;

    /// Fetch chunk metadata by point id. Missing ids are omitted.
    async fn fetch_chunks(&self, ids: &[String]) -> ScholarResult<Vec<ChunkRecord>>;

    /// Fetch image metadata by point id. Missing ids are omitted.
    async fn fetch_images(&self, ids: &[String]) -> ScholarResult<Vec<ImageRecord>>;
}
