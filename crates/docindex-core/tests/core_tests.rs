use std::fs;
use std::io::Write;
use tempfile::TempDir;

use figment::providers::{Format, Toml};
use figment::Figment;

use docindex_core::config::{resolve_with_base, Config, EmbeddingStrategy, Settings};
use std::path::Path;
use docindex_core::source::SourceLoader;
use docindex_core::types::{Chunk, Document};

#[test]
fn load_directory_single_small_file() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    let file_path = dir.join("a.txt");
    let mut f = fs::File::create(&file_path).unwrap();
    writeln!(f, "公司收入增长。").unwrap();

    let sources = SourceLoader::new().load_directory(dir).expect("load");

    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].filename, "a.txt");
    assert_eq!(sources[0].text.trim(), "公司收入增长。");
}

#[test]
fn load_directory_skips_non_txt_and_sorts() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::create_dir_all(dir.join("reports")).unwrap();
    fs::write(dir.join("b.txt"), "bravo").unwrap();
    fs::write(dir.join("reports/a.txt"), "alpha").unwrap();
    fs::write(dir.join("c.pdf"), "not text").unwrap();

    let sources = SourceLoader::new().load_directory(dir).expect("load");
    let names: Vec<&str> = sources.iter().map(|s| s.filename.as_str()).collect();
    assert_eq!(names, vec!["b.txt", "reports/a.txt"]);
}

#[test]
fn load_directory_limited_two_files_limit_one() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("a.txt"), "alpha bravo").unwrap();
    fs::write(dir.join("b.txt"), "charlie delta").unwrap();

    let sources = SourceLoader::new().load_directory_limited(dir, 1).expect("load limited");
    assert_eq!(sources.len(), 1, "limited to one source document");
}

#[test]
fn load_directory_lossy_utf8() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("bad.txt"), [b'o', b'k', 0xff, b'!']).unwrap();
    let sources = SourceLoader::new().load_directory(tmp.path()).expect("load");
    assert!(sources[0].text.starts_with("ok"));
}

#[test]
fn settings_defaults_match_index_constants() {
    let settings = Config::from_figment(Figment::new()).settings().expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.index.vector_dimension, 768);
    assert_eq!(settings.index.chunk_size, 1000);
    assert_eq!(settings.index.min_chunk_length, 50);
    assert_eq!(settings.index.default_top_k, 5);
    assert_eq!(settings.embedding.strategy, EmbeddingStrategy::TfIdf);
    assert_eq!(settings.context.max_length, 2000);
}

#[test]
fn settings_toml_overrides_merge_with_defaults() {
    let toml = r#"
        [index]
        chunk_size = 200
        min_chunk_length = 5

        [embedding]
        strategy = "hashed"
    "#;
    let config = Config::from_figment(Figment::from(Toml::string(toml)));
    let settings = config.settings().expect("settings");
    assert_eq!(settings.index.chunk_size, 200);
    assert_eq!(settings.index.min_chunk_length, 5);
    assert_eq!(settings.index.vector_dimension, 768, "untouched keys keep defaults");
    assert_eq!(settings.embedding.strategy, EmbeddingStrategy::Hashed);

    let chunk_size: usize = config.get("index.chunk_size").expect("get");
    assert_eq!(chunk_size, 200);
}

#[test]
fn settings_reject_min_length_above_chunk_size() {
    let toml = "[index]\nchunk_size = 10\nmin_chunk_length = 20\n";
    let err = Config::from_figment(Figment::from(Toml::string(toml))).settings().unwrap_err();
    assert!(err.to_string().contains("min_chunk_length"), "{err}");
}

#[test]
fn settings_reject_zero_dimension() {
    let toml = "[index]\nvector_dimension = 0\n";
    assert!(Config::from_figment(Figment::from(Toml::string(toml))).settings().is_err());
}

#[test]
fn config_get_missing_key_errors() {
    let config = Config::from_figment(Figment::new());
    assert!(config.get::<String>("nope.missing").is_err());
}

#[test]
fn document_counts_characters_not_bytes() {
    let chunk = Chunk::new(0, "净利润上升".to_string());
    assert_eq!(chunk.length, 5);
    let doc = Document {
        doc_id: "0".to_string(),
        filename: "r.txt".to_string(),
        raw_text: "净利润上升。".to_string(),
        chunks: vec![chunk],
        vector_slots: vec![0],
        created_at: chrono::Utc::now(),
    };
    let summary = doc.summary();
    assert_eq!(summary.text_length, 6);
    assert_eq!(summary.chunk_count, 1);
}

#[test]
fn resolve_with_base_joins_relative_and_keeps_absolute() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path();
    assert_eq!(resolve_with_base(base, "data/txt"), base.join("data/txt"));
    let abs = base.join("corpus");
    assert_eq!(resolve_with_base(Path::new("/elsewhere"), abs.to_str().unwrap()), abs);
}
