//! Per-document metadata plus a slot → (document, chunk) table.

use std::collections::HashMap;

use chrono::Utc;

use docindex_core::types::{Chunk, DocId, Document, DocumentSummary, IndexStats, Slot};
use docindex_core::IndexError;

/// Where a slot's chunk lives: `documents[document].chunks[position]`.
#[derive(Debug, Clone, Copy)]
struct SlotOwner {
    document: usize,
    position: usize,
}

/// Owns every recorded document for the life of the process.
///
/// `slot_owners` has one entry per index slot, in slot order, so resolving a
/// slot is a direct lookup rather than a scan over documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    by_id: HashMap<DocId, usize>,
    slot_owners: Vec<SlotOwner>,
    next_doc_id: u64,
    total_text_length: usize,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Number of slots claimed so far. Equals the index length while the two
    /// are kept in step.
    pub fn slot_count(&self) -> usize { self.slot_owners.len() }

    pub fn len(&self) -> usize { self.documents.len() }
    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    /// Record a document whose chunks occupy the consecutive slots starting at
    /// `first_slot`. `chunks[i]` is stored at slot `first_slot + i`.
    pub fn record(&mut self, filename: &str, raw_text: &str, chunks: Vec<Chunk>, first_slot: Slot) -> Result<DocId, IndexError> {
        let expected = self.slot_owners.len();
        if first_slot != expected {
            return Err(IndexError::SlotMismatch { expected, actual: first_slot });
        }

        let doc_id = self.next_doc_id.to_string();
        self.next_doc_id += 1;

        let document = self.documents.len();
        let vector_slots: Vec<Slot> = (first_slot..first_slot + chunks.len()).collect();
        self.slot_owners.extend((0..chunks.len()).map(|position| SlotOwner { document, position }));

        let doc = Document {
            doc_id: doc_id.clone(),
            filename: filename.to_string(),
            raw_text: raw_text.to_string(),
            chunks,
            vector_slots,
            created_at: Utc::now(),
        };
        self.total_text_length += doc.text_length();
        self.by_id.insert(doc_id.clone(), document);
        self.documents.push(doc);
        Ok(doc_id)
    }

    pub fn resolve(&self, slot: Slot) -> Option<(&Document, &Chunk)> {
        let owner = self.slot_owners.get(slot)?;
        let doc = self.documents.get(owner.document)?;
        Some((doc, doc.chunks.get(owner.position)?))
    }

    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.by_id.get(doc_id).and_then(|&i| self.documents.get(i))
    }

    pub fn summaries(&self) -> Vec<DocumentSummary> {
        self.documents.iter().map(Document::summary).collect()
    }

    pub fn stats(&self) -> IndexStats {
        let total_documents = self.documents.len();
        let total_vectors = self.slot_owners.len();
        let average_chunks_per_document = if total_documents > 0 { total_vectors as f64 / total_documents as f64 } else { 0.0 };
        IndexStats { total_documents, total_vectors, total_text_length: self.total_text_length, average_chunks_per_document }
    }
}
