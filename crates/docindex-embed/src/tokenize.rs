use jieba_rs::Jieba;
use regex::Regex;
use std::sync::OnceLock;

/// Prefix for numeric literals. `#` never survives preprocessing, so a tagged
/// token cannot collide with a natural-language term.
pub const NUMERIC_TAG: &str = "#num:";

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

struct Patterns {
    whitespace: Regex,
    disallowed: Regex,
}

impl Patterns {
    fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("whitespace regex must compile"),
            // Word characters, whitespace, CJK ideographs and a fixed punctuation list.
            disallowed: Regex::new(r#"[^\w\s\x{4e00}-\x{9fff}.,\-()（）\[\]【】{}"'“”‘’：:;；!！?？]"#)
                .expect("disallowed-character regex must compile"),
        }
    }
}

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(Patterns::new)
}

/// Collapse whitespace runs, strip characters outside the allowed set, trim.
pub fn preprocess(text: &str) -> String {
    let p = patterns();
    let collapsed = p.whitespace.replace_all(text, " ");
    p.disallowed.replace_all(&collapsed, "").trim().to_string()
}

/// Digits, periods, commas and hyphens only, with at least one digit.
pub fn is_numeric_literal(token: &str) -> bool {
    token.chars().all(|c| c.is_numeric() || matches!(c, '.' | ',' | '-')) && token.chars().any(char::is_numeric)
}

/// CJK-aware segmentation into the term stream the vectorizers consume.
pub struct Tokenizer {
    jieba: Jieba,
}

impl Default for Tokenizer {
    fn default() -> Self { Self::new() }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").field("segmenter", &"<Jieba>").finish()
    }
}

impl Tokenizer {
    pub fn new() -> Self { Self { jieba: Jieba::new() } }

    /// Word-like tokens of the preprocessed text: lowercased, numeric literals
    /// tagged, punctuation and whitespace dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let processed = preprocess(text);
        self.jieba
            .cut(&processed, true)
            .into_iter()
            .filter_map(|word| {
                let word = word.trim();
                if is_numeric_literal(word) {
                    Some(format!("{NUMERIC_TAG}{word}"))
                } else if word.chars().any(char::is_alphanumeric) {
                    Some(word.to_lowercase())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Unigrams followed by space-joined bigrams.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let bigrams: Vec<String> = tokens.windows(2).map(|w| format!("{} {}", w[0], w[1])).collect();
        let mut terms = tokens;
        terms.extend(bigrams);
        terms
    }
}
