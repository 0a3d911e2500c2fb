//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `TALENTMATCH_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_EMBEDDING_MODEL, DEFAULT_SIMILARITY_FLOOR, DEFAULT_TOP_K,
};

/// Default Qdrant URL used when `TALENTMATCH_QDRANT_URL` is not set.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Matching service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TALENTMATCH_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Qdrant endpoint URL. Default: `http://localhost:6334`.
    pub qdrant_url: String,

    /// Embedding model name. Default: `text-embedding-ada-002`.
    pub embedding_model: String,

    /// Embedding vector length. Default: `1536`.
    pub embedding_dim: usize,

    /// API key for the embedding endpoint, if required.
    pub embedding_api_key: Option<String>,

    /// Counterparts returned per retrieval query. Default: `10`.
    pub top_k: u64,

    /// Minimum similarity a counterpart must reach. Default: `0.7`.
    pub similarity_floor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            qdrant_url: DEFAULT_QDRANT_URL.to_string(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            embedding_api_key: None,
            top_k: DEFAULT_TOP_K,
            similarity_floor: DEFAULT_SIMILARITY_FLOOR,
        }
    }
}

impl Config {
    const ENV_QDRANT_URL: &'static str = "TALENTMATCH_QDRANT_URL";
    const ENV_EMBEDDING_MODEL: &'static str = "TALENTMATCH_EMBEDDING_MODEL";
    const ENV_EMBEDDING_DIM: &'static str = "TALENTMATCH_EMBEDDING_DIM";
    const ENV_EMBEDDING_API_KEY: &'static str = "TALENTMATCH_EMBEDDING_API_KEY";
    const ENV_TOP_K: &'static str = "TALENTMATCH_TOP_K";
    const ENV_SIMILARITY_FLOOR: &'static str = "TALENTMATCH_SIMILARITY_FLOOR";

    /// Loads configuration from environment variables (falling back to
    /// defaults), then validates it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            qdrant_url: Self::parse_string_from_env(Self::ENV_QDRANT_URL, defaults.qdrant_url),
            embedding_model: Self::parse_string_from_env(
                Self::ENV_EMBEDDING_MODEL,
                defaults.embedding_model,
            ),
            embedding_dim: Self::parse_usize_from_env(
                Self::ENV_EMBEDDING_DIM,
                defaults.embedding_dim,
            )?,
            embedding_api_key: Self::parse_optional_string_from_env(Self::ENV_EMBEDDING_API_KEY),
            top_k: Self::parse_u64_from_env(Self::ENV_TOP_K, defaults.top_k)?,
            similarity_floor: Self::parse_f64_from_env(
                Self::ENV_SIMILARITY_FLOOR,
                defaults.similarity_floor,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding_dim == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.top_k == 0 {
            return Err(ConfigError::ZeroTopK);
        }
        if !(0.0..=1.0).contains(&self.similarity_floor) {
            return Err(ConfigError::FloorOutOfRange {
                value: self.similarity_floor,
            });
        }
        Ok(())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_u64_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f64_from_env(var_name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::FloatParseError {
                var: var_name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }
}
