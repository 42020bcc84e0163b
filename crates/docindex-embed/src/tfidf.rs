use docindex_core::traits::Embedder;
use docindex_core::EmbeddingError;

use crate::shape::fit_dimension;
use crate::tokenize::Tokenizer;
use crate::vocabulary::Vocabulary;

/// TF-IDF embedder with a vocabulary that is fit exactly once.
///
/// The fit happens either explicitly over a corpus (`fit`) or lazily on the
/// first text passed to `embed`. Afterwards the vocabulary is frozen, so
/// every stored vector lives in the same feature space.
#[derive(Debug)]
pub struct TfIdfEmbedder {
    tokenizer: Tokenizer,
    vocabulary: Option<Vocabulary>,
    dim: usize,
}

impl TfIdfEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { tokenizer: Tokenizer::new(), vocabulary: None, dim }
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> { self.vocabulary.as_ref() }

    fn transform(&self, terms: &[String]) -> Result<Vec<f32>, EmbeddingError> {
        let vocabulary = self.vocabulary.as_ref().ok_or(EmbeddingError::Unfit)?;
        Ok(fit_dimension(vocabulary.transform(terms), self.dim))
    }
}

impl Embedder for TfIdfEmbedder {
    fn dim(&self) -> usize { self.dim }

    fn is_fit(&self) -> bool { self.vocabulary.is_some() }

    fn fit(&mut self, corpus: &[&str]) -> Result<(), EmbeddingError> {
        if self.vocabulary.is_some() {
            return Err(EmbeddingError::VocabularyFrozen);
        }
        let documents: Vec<Vec<String>> = corpus.iter().map(|text| self.tokenizer.terms(text)).collect();
        let vocabulary = Vocabulary::fit(&documents, self.dim)?;
        tracing::info!(documents = documents.len(), features = vocabulary.len(), "fit vocabulary over corpus");
        self.vocabulary = Some(vocabulary);
        Ok(())
    }

    fn embed(&mut self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let terms = self.tokenizer.terms(text);
        if self.vocabulary.is_none() {
            let vocabulary = Vocabulary::fit(std::slice::from_ref(&terms), self.dim)?;
            tracing::info!(features = vocabulary.len(), "fit vocabulary on first embedded text");
            self.vocabulary = Some(vocabulary);
        }
        self.transform(&terms)
    }

    fn embed_query(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.transform(&self.tokenizer.terms(text))
    }
}
