use docindex_core::traits::SimilarityIndex;
use docindex_core::types::Slot;
use docindex_core::IndexError;

/// Brute-force index under squared Euclidean distance.
///
/// Vectors are stored back to back in one buffer; slot `i` occupies
/// `data[i * dim..(i + 1) * dim]`.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dim: usize,
    data: Vec<f32>,
}

impl FlatIndex {
    pub fn new(dim: usize) -> Self { Self { dim, data: Vec::new() } }

    pub fn vector(&self, slot: Slot) -> Option<&[f32]> {
        let start = slot.checked_mul(self.dim)?;
        self.data.get(start..start + self.dim)
    }

    fn check_dim(&self, v: &[f32]) -> Result<(), IndexError> {
        if v.len() == self.dim { Ok(()) } else { Err(IndexError::DimensionMismatch { expected: self.dim, actual: v.len() }) }
    }
}

pub fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| { let d = x - y; d * d }).sum()
}

impl SimilarityIndex for FlatIndex {
    fn dim(&self) -> usize { self.dim }

    fn len(&self) -> usize {
        if self.dim == 0 { 0 } else { self.data.len() / self.dim }
    }

    fn append(&mut self, vectors: &[Vec<f32>]) -> Result<Slot, IndexError> {
        // A bad batch must leave the index untouched.
        for v in vectors { self.check_dim(v)?; }
        let start = self.len();
        self.data.reserve(vectors.len() * self.dim);
        for v in vectors { self.data.extend_from_slice(v); }
        tracing::debug!(start, count = vectors.len(), total = self.len(), "appended vectors");
        Ok(start)
    }

    fn search(&self, query: &[f32], k: usize) -> Result<Vec<(Slot, f32)>, IndexError> {
        self.check_dim(query)?;
        if k == 0 || self.is_empty() {
            return Ok(Vec::new());
        }
        let mut scored: Vec<(Slot, f32)> = self
            .data
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(slot, v)| (slot, squared_euclidean(query, v)))
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        scored.truncate(k);
        Ok(scored)
    }
}
