//! Plain-text sources for ingestion.
//!
//! Text extraction from PDF/Office formats happens upstream; this loader only
//! picks up `.txt` files that already hold extracted text.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Extracted text plus the filename it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct SourceLoader;

impl SourceLoader {
    pub fn new() -> Self { Self }

    pub fn load_directory(&self, data_dir: &Path) -> Result<Vec<SourceText>> {
        self.load_files(data_dir, self.list_txt_files(data_dir))
    }

    pub fn load_directory_limited(&self, data_dir: &Path, limit: usize) -> Result<Vec<SourceText>> {
        let mut files = self.list_txt_files(data_dir);
        if files.len() > limit {
            files.truncate(limit);
            tracing::info!(limit, "limited to first {} files", limit);
        }
        self.load_files(data_dir, files)
    }

    fn load_files(&self, data_dir: &Path, files: Vec<PathBuf>) -> Result<Vec<SourceText>> {
        if files.is_empty() {
            tracing::warn!(dir = %data_dir.display(), "no .txt files found");
            return Ok(vec![]);
        }
        let mut sources = Vec::with_capacity(files.len());
        for (file_index, file_path) in files.iter().enumerate() {
            tracing::debug!(file = %file_path.display(), "reading file {}/{}", file_index + 1, files.len());
            let text = self.read_file_content(file_path)?;
            sources.push(SourceText { filename: self.display_name(file_path, data_dir), text });
        }
        tracing::info!(files = sources.len(), dir = %data_dir.display(), "loaded text sources");
        Ok(sources)
    }

    fn read_file_content(&self, file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(_) => Ok(String::from_utf8_lossy(&fs::read(file_path)?).to_string()),
        }
    }

    /// Path relative to the data directory, falling back to the full path.
    fn display_name(&self, file_path: &Path, data_dir: &Path) -> String {
        file_path.strip_prefix(data_dir).unwrap_or(file_path).to_string_lossy().to_string()
    }

    fn list_txt_files(&self, root: &Path) -> Vec<PathBuf> {
        let mut txt_files = Vec::new();
        for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
            let path = entry.path(); if path.extension().and_then(|s| s.to_str()) == Some("txt") { txt_files.push(path.to_path_buf()); }
        }
        txt_files.sort(); txt_files
    }
}
