//! docindex-service
//!
//! `IndexService` owns the chunker, embedder, similarity index and document
//! store and keeps them consistent under a single read/write lock.

pub mod context;
pub mod service;
pub mod store;

pub use context::{assemble_context, previews, SourcePreview};
pub use service::IndexService;
pub use store::DocumentStore;
