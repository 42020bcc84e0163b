use crate::error::{EmbeddingError, IndexError};
use crate::types::Slot;

/// Turns text into fixed-length `f32` vectors.
pub trait Embedder: Send + Sync {
    fn dim(&self) -> usize;
    /// Whether the feature space is settled. Fit-free embedders are always fit.
    fn is_fit(&self) -> bool;
    /// Settle the feature space over a corpus before anything is embedded.
    fn fit(&mut self, corpus: &[&str]) -> Result<(), EmbeddingError>;
    /// Embed text for storage. Fits the feature space on first use.
    fn embed(&mut self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
    /// Embed text for lookup. Never mutates the feature space.
    fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Append-only vector store with k-nearest-neighbor lookup.
///
/// Results are `(slot, distance)` pairs, best match first, ties broken by the
/// lower slot.
pub trait SimilarityIndex: Send + Sync {
    fn dim(&self) -> usize;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    /// Appends `vectors` in order and returns the slot of the first one.
    fn append(&mut self, vectors: &[Vec<f32>]) -> Result<Slot, IndexError>;
    fn search(&self, query: &[f32], k: usize) -> Result<Vec<(Slot, f32)>, IndexError>;
}
