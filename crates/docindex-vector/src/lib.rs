//! docindex-vector
//!
//! Exact nearest-neighbor search over append-only `f32` vectors. `FlatIndex`
//! compares the query against every stored vector; anything implementing
//! `docindex_core::traits::SimilarityIndex` can stand in for it.

pub mod flat;

pub use flat::{squared_euclidean, FlatIndex};
