//! Environment configuration for the two binaries. A `.env` file is honored if present.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::keywords::{
    DEFAULT_QUERY, MatchMode, VectorizerConfig, VectorizerConfigBuilder, VocabularyOrder,
};

pub const QUERY_VAR: &str = "TIL_QUERY";
pub const RECORDS_VAR: &str = "TIL_RECORDS";
pub const CASE_FOLD_VAR: &str = "TIL_CASE_FOLD";
pub const MATCH_MODE_VAR: &str = "TIL_MATCH_MODE";
pub const VOCABULARY_ORDER_VAR: &str = "TIL_VOCABULARY_ORDER";
pub const OUTPUT_VAR: &str = "TIL_OUTPUT";
pub const BIND_ADDR_VAR: &str = "SORTABLE_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid value {value:?}, expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Loads `.env` into the process environment. A missing file is not an error.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring unreadable .env file: {e}"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSearchConfig {
    pub query: String,
    /// `None` means the built-in sample bookmarks.
    pub records_path: Option<PathBuf>,
    pub vectorizer: VectorizerConfig,
    pub mode: MatchMode,
    pub output: OutputFormat,
}
impl Default for KeywordSearchConfig {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            records_path: None,
            vectorizer: VectorizerConfig::default(),
            mode: MatchMode::Overlap,
            output: OutputFormat::Table,
        }
    }
}
impl KeywordSearchConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let case_fold = lookup(CASE_FOLD_VAR)
            .map(|v| parse_bool(CASE_FOLD_VAR, &v))
            .transpose()?
            .unwrap_or(false);
        let order = match lookup(VOCABULARY_ORDER_VAR) {
            None => VocabularyOrder::FirstSeen,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "first-seen" | "first_seen" => VocabularyOrder::FirstSeen,
                "lexicographic" | "sorted" => VocabularyOrder::Lexicographic,
                _ => return Err(invalid(VOCABULARY_ORDER_VAR, v, "first-seen or lexicographic")),
            },
        };
        let mode = match lookup(MATCH_MODE_VAR) {
            None => MatchMode::Overlap,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "overlap" => MatchMode::Overlap,
                "all" => MatchMode::All,
                _ => return Err(invalid(MATCH_MODE_VAR, v, "overlap or all")),
            },
        };
        let output = match lookup(OUTPUT_VAR) {
            None => OutputFormat::Table,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => return Err(invalid(OUTPUT_VAR, v, "table or json")),
            },
        };

        Ok(Self {
            query: lookup(QUERY_VAR).unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            records_path: lookup(RECORDS_VAR).map(PathBuf::from),
            vectorizer: VectorizerConfigBuilder::new()
                .case_fold(case_fold)
                .order(order)
                .build(),
            mode,
            output,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableConfig {
    pub bind_addr: SocketAddr,
}
impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}
impl SortableConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|_| invalid(BIND_ADDR_VAR, raw.clone(), "a socket address like 127.0.0.1:8000"))?;
        Ok(Self { bind_addr })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(var, value.to_string(), "a boolean")),
    }
}

fn invalid(var: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value,
        expected,
    }
}
