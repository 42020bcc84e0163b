use docindex_core::config::{EmbeddingStrategy, IndexSettings};
use docindex_core::traits::Embedder;
use docindex_core::EmbeddingError;
use docindex_embed::{get_default_embedder, HashedEmbedder, TfIdfEmbedder, Tokenizer, NUMERIC_TAG};

fn norm(v: &[f32]) -> f32 { v.iter().map(|x| x * x).sum::<f32>().sqrt() }

fn sq_dist(a: &[f32], b: &[f32]) -> f32 { a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum() }

#[test]
fn tokenizer_segments_mixed_script_and_tags_numbers() {
    let tokens = Tokenizer::new().tokenize("Revenue 收入 2023");
    assert!(tokens.contains(&"revenue".to_string()), "{tokens:?}");
    assert!(tokens.contains(&format!("{NUMERIC_TAG}2023")), "{tokens:?}");
    assert!(tokens.iter().all(|t| !t.trim().is_empty()));
}

#[test]
fn terms_include_bigrams() {
    let tokenizer = Tokenizer::new();
    let tokens = tokenizer.tokenize("alpha beta gamma");
    assert_eq!(tokens, vec!["alpha", "beta", "gamma"]);
    let terms = tokenizer.terms("alpha beta gamma");
    assert_eq!(terms, vec!["alpha", "beta", "gamma", "alpha beta", "beta gamma"]);
}

#[test]
fn tfidf_lazy_fit_on_first_text_then_frozen() {
    let mut embedder = TfIdfEmbedder::new(768);
    assert!(!embedder.is_fit());
    assert_eq!(embedder.embed_query("anything").unwrap_err(), EmbeddingError::Unfit);

    let v = embedder.embed("alpha beta gamma").expect("embed");
    assert!(embedder.is_fit());
    assert_eq!(v.len(), 768, "padded to the configured dimension");
    assert!((norm(&v) - 1.0).abs() <= 1e-3);
    // 3 unigrams + 2 bigrams
    assert_eq!(embedder.vocabulary().map(|v| v.len()), Some(5));

    // New terms do not grow the frozen vocabulary.
    embedder.embed("delta epsilon").expect("embed");
    assert_eq!(embedder.vocabulary().map(|v| v.len()), Some(5));
    assert_eq!(embedder.fit(&["delta"]).unwrap_err(), EmbeddingError::VocabularyFrozen);
}

#[test]
fn tfidf_unknown_terms_map_to_zero_vector() {
    let mut embedder = TfIdfEmbedder::new(16);
    embedder.embed("alpha beta").expect("embed");
    let v = embedder.embed("omega").expect("embed");
    assert!(v.iter().all(|x| *x == 0.0));
}

#[test]
fn tfidf_first_text_without_terms_fails_and_stays_unfit() {
    let mut embedder = TfIdfEmbedder::new(16);
    assert_eq!(embedder.embed("@@@ ### !!!").unwrap_err(), EmbeddingError::EmptyVocabulary);
    assert!(!embedder.is_fit());
    assert!(embedder.embed("alpha").is_ok());
}

#[test]
fn tfidf_deterministic_and_query_matches_stored() {
    let mut embedder = TfIdfEmbedder::new(64);
    embedder.fit(&["公司收入增长", "净利润上升", "成本下降"]).expect("fit");
    let stored = embedder.embed("公司收入增长").expect("embed");
    let query = embedder.embed_query("公司收入增长").expect("query");
    assert!(sq_dist(&stored, &query) <= 1e-6);

    let other = embedder.embed("成本下降").expect("embed");
    let q = embedder.embed_query("公司收入").expect("query");
    assert!(sq_dist(&q, &stored) < sq_dist(&q, &other));
}

#[test]
fn tfidf_vocabulary_capped_at_dimension() {
    let mut embedder = TfIdfEmbedder::new(4);
    let v = embedder.embed("one two three four five six").expect("embed");
    assert_eq!(v.len(), 4);
    assert_eq!(embedder.vocabulary().map(|v| v.len()), Some(4));
}

#[test]
fn hashed_embedder_shapes_and_determinism() {
    let mut embedder = HashedEmbedder::new(128);
    assert!(embedder.is_fit());
    let v1 = embedder.embed("hello world").expect("embed");
    let v2 = embedder.embed_query("hello world").expect("embed");
    assert_eq!(v1.len(), 128);
    assert!((norm(&v1) - 1.0).abs() <= 1e-3, "vector is L2-normalized");
    for (a, b) in v1.iter().zip(v2.iter()) { assert!((a - b).abs() <= 1e-6); }
}

#[test]
fn default_embedder_follows_strategy() {
    let index = IndexSettings { vector_dimension: 32, ..IndexSettings::default() };
    let tfidf = get_default_embedder(EmbeddingStrategy::TfIdf, &index);
    assert_eq!(tfidf.dim(), 32);
    assert!(!tfidf.is_fit());
    let hashed = get_default_embedder(EmbeddingStrategy::Hashed, &index);
    assert!(hashed.is_fit());
}
