use thiserror::Error;

use crate::types::Slot;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Ingestion produced nothing that can be retrieved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("document produced no chunks above the minimum length")]
    NoChunks,

    #[error("none of the {attempted} chunks could be embedded")]
    NothingEmbeddable { attempted: usize },
}

/// A single text could not be turned into a vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    #[error("text contains no indexable terms; vocabulary would be empty")]
    EmptyVocabulary,

    #[error("vocabulary has not been fit yet")]
    Unfit,

    #[error("vocabulary is already fit and cannot be refit")]
    VocabularyFrozen,

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Vector storage or slot lookup went out of step.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("slot range starts at {actual} but the store expects {expected}")]
    SlotMismatch { expected: Slot, actual: Slot },

    #[error("slot {0} is not owned by any document")]
    UnknownSlot(Slot),
}

pub type Result<T> = std::result::Result<T, Error>;
