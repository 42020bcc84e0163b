//! Turning ranked results into prompt context and source previews for the
//! answer-generation side.

use serde::{Deserialize, Serialize};

use docindex_core::config::ContextSettings;
use docindex_core::types::SearchResult;

const ELLIPSIS: &str = "...";
const SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcePreview {
    pub filename: String,
    pub score: f64,
    pub text_preview: String,
}

fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Concatenate result texts, best first, within `max_length` characters.
///
/// The first text that does not fit is cut to the remaining budget (with a
/// trailing `...`) only when more than `min_tail` characters remain; assembly
/// stops there. Separators do not count toward the budget.
pub fn assemble_context(results: &[SearchResult], settings: &ContextSettings) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut used = 0usize;
    for result in results {
        let len = result.text.chars().count();
        if used + len <= settings.max_length {
            parts.push(result.text.clone());
            used += len;
        } else {
            let remaining = settings.max_length.saturating_sub(used);
            if remaining > settings.min_tail {
                parts.push(format!("{}{ELLIPSIS}", take_chars(&result.text, remaining)));
            }
            break;
        }
    }
    parts.join(SEPARATOR)
}

pub fn previews(results: &[SearchResult], preview_length: usize) -> Vec<SourcePreview> {
    results
        .iter()
        .map(|r| {
            let text_preview = if r.text.chars().count() > preview_length {
                format!("{}{ELLIPSIS}", take_chars(&r.text, preview_length))
            } else {
                r.text.clone()
            };
            SourcePreview { filename: r.filename.clone(), score: r.score, text_preview }
        })
        .collect()
}
