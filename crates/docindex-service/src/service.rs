use parking_lot::RwLock;

use docindex_core::config::{ContextSettings, Settings};
use docindex_core::traits::{Embedder, SimilarityIndex};
use docindex_core::types::{Chunk, DocId, DocumentSummary, IndexStats, SearchResult};
use docindex_core::{ContentError, EmbeddingError, Error, IndexError, Result};
use docindex_embed::get_default_embedder;
use docindex_text::Chunker;
use docindex_vector::FlatIndex;

use crate::context::{assemble_context, previews, SourcePreview};
use crate::store::DocumentStore;

/// Everything a write touches. Held behind one lock so a reader never sees an
/// index append without its document record, or the reverse.
struct IndexState<VI> {
    embedder: Box<dyn Embedder>,
    index: VI,
    store: DocumentStore,
}

/// Ingests documents and answers top-k similarity queries over their chunks.
///
/// `add_document` and `fit_vocabulary` take the write lock for their whole
/// critical section; `search`, `get_stats` and the document views share the
/// read lock.
pub struct IndexService<VI = FlatIndex>
where
    VI: SimilarityIndex,
{
    chunker: Chunker,
    default_top_k: usize,
    context: ContextSettings,
    state: RwLock<IndexState<VI>>,
}

impl IndexService<FlatIndex> {
    /// Flat index, configured chunker and embedding strategy.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let index = &settings.index;
        let mut service = Self::new(
            Chunker::from_settings(index),
            get_default_embedder(settings.embedding.strategy, index),
            FlatIndex::new(index.vector_dimension),
        )?;
        service.default_top_k = index.default_top_k;
        service.context = settings.context.clone();
        Ok(service)
    }
}

impl<VI> IndexService<VI>
where
    VI: SimilarityIndex,
{
    pub fn new(chunker: Chunker, embedder: Box<dyn Embedder>, index: VI) -> Result<Self> {
        if embedder.dim() != index.dim() {
            return Err(EmbeddingError::DimensionMismatch { expected: index.dim(), actual: embedder.dim() }.into());
        }
        if !index.is_empty() {
            return Err(IndexError::SlotMismatch { expected: 0, actual: index.len() }.into());
        }
        Ok(Self {
            chunker,
            default_top_k: 5,
            context: ContextSettings::default(),
            state: RwLock::new(IndexState { embedder, index, store: DocumentStore::new() }),
        })
    }

    pub fn default_top_k(&self) -> usize { self.default_top_k }

    /// Settle the embedding feature space over a representative corpus before
    /// any document is added.
    pub fn fit_vocabulary(&self, corpus: &[&str]) -> Result<()> {
        let mut state = self.state.write();
        state.embedder.fit(corpus)?;
        Ok(())
    }

    /// Chunk, embed, append and record `text` as one document.
    ///
    /// Chunks that fail to embed are skipped. Fails with a content error when
    /// the text yields no chunks or none of them embed; nothing is recorded
    /// in that case.
    pub fn add_document(&self, text: &str, filename: &str) -> Result<DocId> {
        let pieces = self.chunker.split(text);
        if pieces.is_empty() {
            tracing::warn!(filename, "document produced no chunks");
            return Err(ContentError::NoChunks.into());
        }
        let attempted = pieces.len();

        let mut guard = self.state.write();
        let state = &mut *guard;

        let mut vectors = Vec::with_capacity(attempted);
        let mut chunks = Vec::with_capacity(attempted);
        for (chunk_id, piece) in pieces.into_iter().enumerate() {
            match state.embedder.embed(&piece) {
                Ok(vector) => {
                    vectors.push(vector);
                    chunks.push(Chunk::new(chunk_id, piece));
                }
                Err(err) => tracing::warn!(filename, chunk_id, %err, "skipping chunk that failed to embed"),
            }
        }
        if vectors.is_empty() {
            return Err(ContentError::NothingEmbeddable { attempted }.into());
        }

        let expected = state.store.slot_count();
        if state.index.len() != expected {
            return Err(IndexError::SlotMismatch { expected, actual: state.index.len() }.into());
        }
        let first_slot = state.index.append(&vectors)?;
        let doc_id = state.store.record(filename, text, chunks, first_slot)?;
        tracing::info!(doc_id = %doc_id, filename, chunks = vectors.len(), skipped = attempted - vectors.len(), first_slot, "indexed document");
        Ok(doc_id)
    }

    /// Top-k chunks nearest to `query`, best first. Retrieval problems are
    /// logged and yield an empty list.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<SearchResult> {
        let state = self.state.read();
        match Self::try_search(&state, query, top_k) {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(%err, "search failed; returning no results");
                Vec::new()
            }
        }
    }

    fn try_search(state: &IndexState<VI>, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        if state.index.is_empty() {
            return Ok(Vec::new());
        }
        let query_vector = state.embedder.embed_query(query)?;
        let hits = state.index.search(&query_vector, top_k)?;
        hits.into_iter()
            .map(|(slot, distance)| -> Result<SearchResult> {
                let (doc, chunk) = state.store.resolve(slot).ok_or(IndexError::UnknownSlot(slot))?;
                Ok(SearchResult {
                    text: chunk.text.clone(),
                    filename: doc.filename.clone(),
                    score: f64::from(distance),
                    chunk_id: chunk.chunk_id,
                    doc_id: doc.doc_id.clone(),
                })
            })
            .collect()
    }

    pub fn get_stats(&self) -> IndexStats {
        self.state.read().store.stats()
    }

    pub fn get_document(&self, doc_id: &str) -> Option<DocumentSummary> {
        self.state.read().store.get(doc_id).map(|d| d.summary())
    }

    /// Chunks of a document in slot order.
    pub fn document_chunks(&self, doc_id: &str) -> Result<Vec<Chunk>> {
        self.state
            .read()
            .store
            .get(doc_id)
            .map(|d| d.chunks.clone())
            .ok_or_else(|| Error::NotFound(format!("document {doc_id}")))
    }

    pub fn list_documents(&self) -> Vec<DocumentSummary> {
        self.state.read().store.summaries()
    }

    /// Prompt context for `query` from the default number of results, kept
    /// within `max_length` characters.
    pub fn build_context(&self, query: &str, max_length: usize) -> String {
        let settings = ContextSettings { max_length, ..self.context.clone() };
        assemble_context(&self.search(query, self.default_top_k), &settings)
    }

    pub fn sources(&self, query: &str, top_k: usize) -> Vec<SourcePreview> {
        previews(&self.search(query, top_k), self.context.preview_length)
    }
}
