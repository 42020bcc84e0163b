//! Corpus-fit TF-IDF feature space over unigram and bigram terms.

use std::collections::{HashMap, HashSet};

use docindex_core::EmbeddingError;

use crate::shape::l2_normalize;

/// Term → column mapping plus per-column inverse document frequency.
///
/// Columns follow lexicographic term order. At most `max_features` terms are
/// kept, chosen by corpus frequency (ties by term order).
#[derive(Debug, Clone)]
pub struct Vocabulary {
    columns: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl Vocabulary {
    /// Fit over `documents`, each already split into terms.
    pub fn fit(documents: &[Vec<String>], max_features: usize) -> Result<Self, EmbeddingError> {
        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in documents {
            let mut seen = HashSet::new();
            for term in doc {
                *term_freq.entry(term.as_str()).or_default() += 1;
                if seen.insert(term.as_str()) {
                    *doc_freq.entry(term.as_str()).or_default() += 1;
                }
            }
        }
        if term_freq.is_empty() || max_features == 0 {
            return Err(EmbeddingError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_features);
        let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort_unstable();

        // Smooth idf: ln((1 + n) / (1 + df)) + 1
        let n = documents.len() as f32;
        let idf = kept
            .iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f32;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        let columns = kept.into_iter().enumerate().map(|(i, term)| (term.to_string(), i)).collect();
        Ok(Self { columns, idf })
    }

    pub fn len(&self) -> usize { self.idf.len() }
    pub fn is_empty(&self) -> bool { self.idf.is_empty() }
    pub fn contains(&self, term: &str) -> bool { self.columns.contains_key(term) }

    /// Raw counts of known terms × idf, L2 normalised. Unknown terms are ignored,
    /// so text with no known terms maps to the zero vector.
    pub fn transform(&self, terms: &[String]) -> Vec<f32> {
        let mut v = vec![0f32; self.len()];
        for term in terms {
            if let Some(&col) = self.columns.get(term) { v[col] += 1.0; }
        }
        for (x, idf) in v.iter_mut().zip(&self.idf) { *x *= idf; }
        l2_normalize(&mut v);
        v
    }
}
