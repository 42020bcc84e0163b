use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

use docindex_core::traits::Embedder;
use docindex_core::EmbeddingError;

use crate::shape::l2_normalize;
use crate::tokenize::Tokenizer;

/// Fit-free embedder: each unigram/bigram term is hashed into one of `dim`
/// buckets and counted, then the vector is L2 normalised.
#[derive(Debug)]
pub struct HashedEmbedder {
    tokenizer: Tokenizer,
    dim: usize,
}

impl HashedEmbedder {
    pub fn new(dim: usize) -> Self { Self { tokenizer: Tokenizer::new(), dim } }

    fn bucket(&self, term: &str) -> usize {
        let mut hasher = XxHash64::with_seed(0);
        term.hash(&mut hasher);
        (hasher.finish() % self.dim as u64) as usize
    }
}

impl Embedder for HashedEmbedder {
    fn dim(&self) -> usize { self.dim }

    fn is_fit(&self) -> bool { true }

    fn fit(&mut self, _corpus: &[&str]) -> Result<(), EmbeddingError> { Ok(()) }

    fn embed(&mut self, text: &str) -> Result<Vec<f32>, EmbeddingError> { self.embed_query(text) }

    fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.dim == 0 {
            return Err(EmbeddingError::DimensionMismatch { expected: 1, actual: 0 });
        }
        let mut v = vec![0f32; self.dim];
        for term in self.tokenizer.terms(text) { v[self.bucket(&term)] += 1.0; }
        l2_normalize(&mut v);
        Ok(v)
    }
}
