//! docindex-text
//!
//! Sentence-boundary chunking of extracted document text. See `chunker`.

pub mod chunker;

pub use chunker::{Chunker, SENTENCE_DELIMITERS};
