//! Domain types shared by the chunker, vectorizer, index and document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier handed out by the service: the decimal form of a
/// monotonically increasing counter, never reused.
pub type DocId = String;

/// Position of one vector in the similarity index. Assigned sequentially,
/// never reclaimed or reordered.
pub type Slot = usize;

/// A retrievable span of a document's text.
///
/// - `chunk_id`: ordinal of the chunk in the chunker's output for its document
/// - `text`: the chunk payload
/// - `length`: `text` length in characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub chunk_id: usize,
    pub text: String,
    pub length: usize,
}

impl Chunk {
    pub fn new(chunk_id: usize, text: String) -> Self {
        let length = text.chars().count();
        Self { chunk_id, text, length }
    }
}

/// A recorded document.
///
/// `chunks` and `vector_slots` are parallel: `vector_slots[i]` holds the
/// vector of `chunks[i]` for the lifetime of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: DocId,
    pub filename: String,
    pub raw_text: String,
    pub chunks: Vec<Chunk>,
    pub vector_slots: Vec<Slot>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn chunk_count(&self) -> usize { self.chunks.len() }

    /// Raw text length in characters.
    pub fn text_length(&self) -> usize { self.raw_text.chars().count() }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            doc_id: self.doc_id.clone(),
            filename: self.filename.clone(),
            created_at: self.created_at,
            chunk_count: self.chunk_count(),
            text_length: self.text_length(),
        }
    }
}

/// Metadata view of a document without its text payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub doc_id: DocId,
    pub filename: String,
    pub created_at: DateTime<Utc>,
    pub chunk_count: usize,
    pub text_length: usize,
}

/// One ranked retrieval result. `score` is the squared Euclidean distance,
/// so lower is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub filename: String,
    pub score: f64,
    pub chunk_id: usize,
    pub doc_id: DocId,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub total_vectors: usize,
    pub total_text_length: usize,
    pub average_chunks_per_document: f64,
}
