use docindex_core::config::IndexSettings;
use docindex_text::Chunker;

#[test]
fn empty_and_whitespace_input_yield_no_chunks() {
    let chunker = Chunker::new(1000, 1);
    assert!(chunker.split("").is_empty());
    assert!(chunker.split("   ").is_empty());
    assert!(chunker.split("\n\n\t \n").is_empty());
}

#[test]
fn exact_max_length_without_delimiters_is_one_chunk() {
    let text = "a".repeat(1000);
    let chunks = Chunker::new(1000, 50).split(&text);
    assert_eq!(chunks, vec![text.clone()]);

    let short = "b".repeat(20);
    assert!(Chunker::new(20, 50).split(&short).is_empty(), "below min length is filtered");
}

#[test]
fn financial_sentences_split_into_three_ordered_chunks() {
    let chunks = Chunker::new(6, 1).split("公司收入增长。净利润上升。成本下降。");
    assert_eq!(chunks, vec!["公司收入增长", "净利润上升", "成本下降"]);
}

#[test]
fn default_sizes_keep_short_sentences_together() {
    let chunks = Chunker::from_settings(&IndexSettings { min_chunk_length: 1, ..IndexSettings::default() })
        .split("公司收入增长。净利润上升。成本下降。");
    assert_eq!(chunks, vec!["公司收入增长。净利润上升。成本下降"]);
}

#[test]
fn oversized_sentence_passes_through_whole() {
    let long = "x".repeat(30);
    let text = format!("short。{long}。tail");
    let chunks = Chunker::new(10, 1).split(&text);
    assert_eq!(chunks, vec!["short".to_string(), long, "tail".to_string()]);
}

#[test]
fn no_multi_sentence_chunk_exceeds_max() {
    let text = "一二三四五。六七八。九十。甲乙丙丁。戊己庚辛壬癸。子丑。寅卯辰巳午未申酉戌亥。";
    let max = 9;
    let chunks = Chunker::new(max, 1).split(text);
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        let len = chunk.chars().count();
        assert!(len <= max || !chunk.contains('。'), "chunk {chunk:?} has {len} chars");
    }
    let rejoined: String = chunks.join("。");
    assert_eq!(rejoined, text.trim_end_matches('。'), "order and content preserved");
}

#[test]
fn short_chunks_are_filtered_but_order_kept() {
    let text = "这是一个足够长的句子用于测试。短。另一个也足够长的句子用于测试";
    let chunks = Chunker::new(15, 10).split(text);
    assert_eq!(chunks, vec!["这是一个足够长的句子用于测试", "另一个也足够长的句子用于测试"]);
}
