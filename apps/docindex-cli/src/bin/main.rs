use std::env;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use docindex_core::config::{resolve_with_base, Config, EmbeddingStrategy, Settings};
use docindex_core::source::SourceLoader;
use docindex_core::{EmbeddingError, Error};
use docindex_service::IndexService;

const USAGE: &str = "Usage: docindex <query|context|stats> <dir> [question] [top_k]";

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() { eprintln!("{USAGE}"); std::process::exit(1); }
    let cmd = args.remove(0);
    (cmd, args)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

/// Index every `.txt` under `data_dir`, reporting files that yield nothing indexable.
///
/// With TF-IDF the vocabulary is fit over the whole corpus first, so every
/// file is embedded in the same feature space.
fn ingest(service: &IndexService, strategy: EmbeddingStrategy, data_dir: &Path) -> anyhow::Result<usize> {
    let sources = SourceLoader::new().load_directory(data_dir)?;
    println!("Ingesting {} files from {}", sources.len(), data_dir.display());
    if strategy == EmbeddingStrategy::TfIdf && !sources.is_empty() {
        let corpus: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
        match service.fit_vocabulary(&corpus) {
            Ok(()) => {}
            Err(Error::Embedding(EmbeddingError::EmptyVocabulary)) => println!("⚠️  Corpus has no indexable terms"),
            Err(e) => return Err(e.into()),
        }
    }
    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")?.progress_chars("#>-"));
    let mut indexed = 0usize;
    for source in &sources {
        pb.set_message(source.filename.clone());
        match service.add_document(&source.text, &source.filename) {
            Ok(_) => indexed += 1,
            Err(Error::Content(e)) => pb.println(format!("⚠️  Skipped {}: {}", source.filename, e)),
            Err(e) => return Err(e.into()),
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");
    println!("📊 Indexed {}/{} files", indexed, sources.len());
    Ok(indexed)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings: Settings = config.settings()?;
    let (cmd, args) = parse_args();
    if !matches!(cmd.as_str(), "query" | "context" | "stats") { eprintln!("Unknown command: {}", cmd); eprintln!("{USAGE}"); std::process::exit(1); }

    // Relative paths resolve against the working directory, where config.toml is read from.
    let base = env::current_dir()?;
    let data_dir = resolve_with_base(&base, args.first().map_or(settings.data.raw_txt_dir.as_str(), String::as_str));
    let service = IndexService::from_settings(&settings)?;
    ingest(&service, settings.embedding.strategy, &data_dir)?;

    match cmd.as_str() {
        "query" => {
            let question = args.get(1).cloned().unwrap_or_else(|| { eprintln!("{USAGE}"); std::process::exit(1) });
            let top_k = match args.get(2) {
                Some(raw) => raw.parse::<usize>().map_err(|e| anyhow::anyhow!("top_k must be a number: {}", e))?,
                None => service.default_top_k(),
            };
            let results = service.search(&question, top_k);
            println!("\n🔍 Found {} results for: \"{}\"", results.len(), question);
            for (i, result) in results.iter().enumerate() {
                println!("\n  {}. distance={:.4}  doc={}  chunk={}  file={}", i + 1, result.score, result.doc_id, result.chunk_id, result.filename);
                println!("     📝 {}", result.text);
            }
        }
        "context" => {
            let question = args.get(1).cloned().unwrap_or_else(|| { eprintln!("{USAGE}"); std::process::exit(1) });
            println!("\n📄 Context:\n{}", service.build_context(&question, settings.context.max_length));
            println!("\n📚 Sources:");
            for source in service.sources(&question, settings.context.source_top_k) {
                println!("  - {} (distance={:.4}): {}", source.filename, source.score, source.text_preview);
            }
        }
        "stats" => {
            println!("{}", serde_json::to_string_pretty(&service.get_stats())?);
        }
        _ => unreachable!("command validated above"),
    }
    Ok(())
}
