use crate::errors::ScholarResult;

/// Embedding generation provider.
///
/// Treated as a pure, deterministic-enough function returning
/// fixed-dimension vectors.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed query text into the text-chunk vector space.
    fn embed_text(&self, text: &str) -> ScholarResult<Vec<f32>>;

    /// Embed query text into the image vector space (CLIP-style
    /// text encoder). Only called when multimodal search is enabled.
    fn embed_for_images(&self, text: &str) -> ScholarResult<Vec<f32>>;

    /// The dimensionality of text embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
