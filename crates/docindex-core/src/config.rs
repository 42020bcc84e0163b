//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge defaults + `config.toml` + `config.<env>.toml` +
//! `APP_*` env vars (`APP_INDEX__CHUNK_SIZE=500` sets `index.chunk_size`).

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate_for_env(&env_name)?;
        Ok(config)
    }

    /// Wrap an already layered figment, e.g. one built from `Toml::string` in tests.
    pub fn from_figment(figment: Figment) -> Self {
        Self { figment: Figment::from(Serialized::defaults(Settings::default())).merge(figment) }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Typed view of every section, validated.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to extract settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate_for_env(&self, env: &str) -> anyhow::Result<()> {
        let settings = self.settings()?;
        match env {
            "prod" | "production" => {
                if settings.embedding.strategy == EmbeddingStrategy::Hashed {
                    tracing::warn!("hashed embeddings selected in production; recall will be lower than tf-idf");
                }
            }
            "dev" | "development" | "test" | "testing" => {}
            other => tracing::debug!(env = other, "unknown RUST_ENV, using base config only"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub index: IndexSettings,
    pub embedding: EmbeddingSettings,
    pub context: ContextSettings,
    pub data: DataSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<(), Error> {
        let index = &self.index;
        if index.vector_dimension == 0 {
            return Err(Error::InvalidConfig("index.vector_dimension must be > 0".into()));
        }
        if index.chunk_size == 0 {
            return Err(Error::InvalidConfig("index.chunk_size must be > 0".into()));
        }
        if index.min_chunk_length > index.chunk_size {
            return Err(Error::InvalidConfig(format!(
                "index.min_chunk_length ({}) exceeds index.chunk_size ({})",
                index.min_chunk_length, index.chunk_size
            )));
        }
        if index.default_top_k == 0 {
            return Err(Error::InvalidConfig("index.default_top_k must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexSettings {
    pub vector_dimension: usize,
    /// Maximum chunk length in characters.
    pub chunk_size: usize,
    pub min_chunk_length: usize,
    pub default_top_k: usize,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self { vector_dimension: 768, chunk_size: 1000, min_chunk_length: 50, default_top_k: 5 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingStrategy {
    /// Corpus-fit unigram+bigram vocabulary, frozen after the first fit.
    #[default]
    TfIdf,
    /// Fit-free hashed unigram+bigram features.
    Hashed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    pub strategy: EmbeddingStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextSettings {
    pub max_length: usize,
    /// A truncated tail is only kept when more than this many characters remain.
    pub min_tail: usize,
    pub source_top_k: usize,
    pub preview_length: usize,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self { max_length: 2000, min_tail: 100, source_top_k: 3, preview_length: 200 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub raw_txt_dir: String,
}

impl Default for DataSettings {
    fn default() -> Self { Self { raw_txt_dir: "data/txt".to_string() } }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
