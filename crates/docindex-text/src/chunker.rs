use docindex_core::config::IndexSettings;

/// Characters that end a sentence. They are dropped when splitting.
pub const SENTENCE_DELIMITERS: [char; 4] = ['。', '！', '？', '\n'];

/// Separator written back between sentences that share a chunk.
const SENTENCE_JOINER: char = '。';

/// Packs consecutive sentences into chunks of at most `max_chunk_length`
/// characters and drops chunks shorter than `min_chunk_length`.
///
/// A single sentence longer than `max_chunk_length` becomes its own chunk and
/// is never split further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunker {
    max_chunk_length: usize,
    min_chunk_length: usize,
}

impl Chunker {
    pub fn new(max_chunk_length: usize, min_chunk_length: usize) -> Self {
        Self { max_chunk_length, min_chunk_length }
    }

    pub fn from_settings(settings: &IndexSettings) -> Self {
        Self::new(settings.chunk_size, settings.min_chunk_length)
    }

    pub fn max_chunk_length(&self) -> usize { self.max_chunk_length }
    pub fn min_chunk_length(&self) -> usize { self.min_chunk_length }

    /// Split `text` into chunks, in input order. Empty or whitespace-only
    /// input yields no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0usize;

        for sentence in text.split(SENTENCE_DELIMITERS).map(str::trim).filter(|s| !s.is_empty()) {
            let sentence_len = sentence.chars().count();
            let joined_len = if buffer_len == 0 { sentence_len } else { buffer_len + 1 + sentence_len };
            if buffer_len > 0 && joined_len > self.max_chunk_length {
                chunks.push(std::mem::take(&mut buffer));
                buffer_len = 0;
            }
            if buffer_len > 0 {
                buffer.push(SENTENCE_JOINER);
                buffer_len += 1;
            }
            buffer.push_str(sentence);
            buffer_len += sentence_len;
        }
        if buffer_len > 0 {
            chunks.push(buffer);
        }

        let produced = chunks.len();
        chunks.retain(|c| c.chars().count() >= self.min_chunk_length);
        if chunks.len() < produced {
            tracing::debug!(dropped = produced - chunks.len(), min = self.min_chunk_length, "dropped short chunks");
        }
        chunks
    }
}
