//! EvidenceRetriever: filtered multi-signal search reduced to evidence.
//!
//! Fans out one search per enabled signal (dense text, sparse text,
//! image), joins them, fuses the text lists with RRF, and attaches
//! section/page metadata from the backing store. Image evidence is
//! fused independently; different feature space.

use std::collections::{BTreeSet, HashMap};

use scholar_core::config::RetrievalConfig;
use scholar_core::errors::{RetrievalError, ScholarResult};
use scholar_core::models::{
    CoverageStats, EvidenceChunk, FusedHit, ImageEvidence, IntentResult, Query, RankedHit,
};
use scholar_core::traits::{IEmbeddingProvider, IVectorStore};
use scholar_core::{IntentKind, SectionLabel};
use tracing::{debug, info, warn};

/// Everything one retrieval pass produces.
#[derive(Debug, Clone)]
pub struct RetrievedEvidence {
    pub chunks: Vec<EvidenceChunk>,
    pub images: Vec<ImageEvidence>,
    pub stats: CoverageStats,
}

/// The evidence retriever. Holds shared, concurrency-safe handles to
/// the vector store and embedding provider; carries no per-request state.
pub struct EvidenceRetriever<'a, S: IVectorStore, E: IEmbeddingProvider> {
    store: &'a S,
    embedder: &'a E,
    config: RetrievalConfig,
}

impl<'a, S: IVectorStore, E: IEmbeddingProvider> EvidenceRetriever<'a, S, E> {
    pub fn new(store: &'a S, embedder: &'a E, config: RetrievalConfig) -> Self {
        Self {
            store,
            embedder,
            config,
        }
    }

    /// Retrieve evidence for a classified query.
    ///
    /// The mandatory dense signal failing is fatal and surfaces as
    /// `RetrievalError::Unavailable`. Optional signals (sparse, image)
    /// degrade gracefully: fusion proceeds with whatever returned.
    pub async fn retrieve(
        &self,
        query: &Query,
        intent: &IntentResult,
        top_k: usize,
    ) -> ScholarResult<RetrievedEvidence> {
        if query.text.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery.into());
        }

        let filter = section_filter(intent);
        let query_vector = self.embedder.embed_text(&query.text)?;
        // Over-fetch per signal so fusion has candidates beyond top_k.
        let fetch_k = top_k * 2;

        let dense_fut = self.store.search_dense(&query_vector, filter.as_ref(), fetch_k);
        let sparse_fut = async {
            if self.config.hybrid {
                Some(
                    self.store
                        .search_sparse(&query.text, filter.as_ref(), fetch_k)
                        .await,
                )
            } else {
                None
            }
        };
        let image_fut = async {
            if !self.config.multimodal {
                return None;
            }
            match self.embedder.embed_for_images(&query.text) {
                Ok(vector) => Some(self.store.search_image(&vector, fetch_k).await),
                Err(e) => Some(Err(e)),
            }
        };

        // Fan-out/fan-in: fusion only begins once every enabled signal
        // has returned or failed.
        let (dense, sparse, image) = tokio::join!(dense_fut, sparse_fut, image_fut);

        let dense = dense.map_err(|e| RetrievalError::Unavailable {
            reason: e.to_string(),
        })?;
        debug!(hits = dense.len(), "dense signal returned");

        let mut text_lists: Vec<Vec<RankedHit>> = vec![dense];
        let mut weights: Vec<f64> = vec![self.config.dense_weight];
        match sparse {
            Some(Ok(hits)) => {
                debug!(hits = hits.len(), "sparse signal returned");
                text_lists.push(hits);
                weights.push(self.config.sparse_weight);
            }
            Some(Err(e)) => warn!(error = %e, "sparse signal failed, continuing without it"),
            None => {}
        }

        let fused = crate::search::fuse(&text_lists, &weights, self.config.rrf_k);
        let chunks = self.attach_chunk_metadata(&fused, intent, top_k).await?;

        let images = match image {
            Some(Ok(hits)) => self.attach_image_metadata(&hits).await?,
            Some(Err(e)) => {
                warn!(error = %e, "image signal failed, continuing without it");
                Vec::new()
            }
            None => Vec::new(),
        };

        let stats = CoverageStats::from_chunks(&chunks);
        info!(
            chunks = stats.chunk_count,
            papers = stats.distinct_papers,
            sections = stats.sections_hit.len(),
            images = images.len(),
            "retrieval complete"
        );

        Ok(RetrievedEvidence {
            chunks,
            images,
            stats,
        })
    }

    /// Fetch chunk records for the top fused hits and attach fused scores.
    async fn attach_chunk_metadata(
        &self,
        fused: &[FusedHit],
        intent: &IntentResult,
        top_k: usize,
    ) -> ScholarResult<Vec<EvidenceChunk>> {
        let top: Vec<_> = fused.iter().take(top_k).collect();
        let ids: Vec<String> = top.iter().map(|h| h.document_id.clone()).collect();
        let records = self.store.fetch_chunks(&ids).await?;
        let by_id: HashMap<&str, _> = records.iter().map(|r| (r.id.as_str(), r)).collect();

        let mut chunks = Vec::with_capacity(top.len());
        for hit in top {
            let Some(record) = by_id.get(hit.document_id.as_str()) else {
                warn!(id = %hit.document_id, "fused hit has no stored record, dropping");
                continue;
            };
            // Server-side filters are advisory; enforce the section
            // invariant here so downstream stages can rely on it.
            if !intent.label.is_fallback()
                && !intent.allowed_sections.contains(&record.section_label)
            {
                warn!(
                    id = %record.id,
                    section = %record.section_label,
                    "chunk outside allowed sections, dropping"
                );
                continue;
            }
            chunks.push(EvidenceChunk {
                text: record.text.clone(),
                source_document: record.source_document.clone(),
                section_label: record.section_label,
                fused_score: hit.fused_score,
                page_range: (record.page_start, record.page_end),
            });
        }
        Ok(chunks)
    }

    /// Fuse the single image list and attach image metadata.
    async fn attach_image_metadata(&self, hits: &[RankedHit]) -> ScholarResult<Vec<ImageEvidence>> {
        let lists = [hits.to_vec()];
        let fused = crate::search::fuse(&lists, &[1.0], self.config.rrf_k);
        let top: Vec<_> = fused.iter().take(self.config.image_top_k).collect();
        let ids: Vec<String> = top.iter().map(|h| h.document_id.clone()).collect();
        let records = self.store.fetch_images(&ids).await?;
        let by_id: HashMap<&str, _> = records.iter().map(|r| (r.id.as_str(), r)).collect();

        Ok(top
            .iter()
            .filter_map(|hit| {
                by_id.get(hit.document_id.as_str()).map(|record| ImageEvidence {
                    image_ref: record.image_ref.clone(),
                    source_document: record.source_document.clone(),
                    page_number: record.page_number,
                    fused_score: hit.fused_score,
                })
            })
            .collect())
    }
}

/// Build the server-side section filter for an intent.
///
/// The fallback intent searches unrestricted. `Unknown` never appears
/// in a filter, and `References` only for the citation intent.
fn section_filter(intent: &IntentResult) -> Option<BTreeSet<SectionLabel>> {
    if intent.label.is_fallback() {
        return None;
    }
    let mut allowed = intent.allowed_sections.clone();
    allowed.remove(&SectionLabel::Unknown);
    if intent.label != IntentKind::Citation {
        allowed.remove(&SectionLabel::References);
    }
    Some(allowed)
}
