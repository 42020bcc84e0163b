//! docindex-embed
//!
//! Text → fixed-length `f32` vectors. `TfIdfEmbedder` fits a unigram+bigram
//! vocabulary once and freezes it; `HashedEmbedder` needs no fitting at all.

pub mod hashed;
pub mod shape;
pub mod tfidf;
pub mod tokenize;
pub mod vocabulary;

use docindex_core::config::{EmbeddingStrategy, IndexSettings};
use docindex_core::traits::Embedder;

pub use hashed::HashedEmbedder;
pub use shape::{fit_dimension, l2_normalize};
pub use tfidf::TfIdfEmbedder;
pub use tokenize::{preprocess, Tokenizer, NUMERIC_TAG};
pub use vocabulary::Vocabulary;

pub fn get_default_embedder(strategy: EmbeddingStrategy, index: &IndexSettings) -> Box<dyn Embedder> {
    match strategy {
        EmbeddingStrategy::TfIdf => Box::new(TfIdfEmbedder::new(index.vector_dimension)),
        EmbeddingStrategy::Hashed => {
            tracing::debug!(dim = index.vector_dimension, "using hashed embedder");
            Box::new(HashedEmbedder::new(index.vector_dimension))
        }
    }
}
