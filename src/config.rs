//! Configuration structures for normalization and file reading

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How numbers are turned into their string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Truncated integer text, 3.7 becomes "3". Matches previously stored statistics.
    #[default]
    Truncate,
    /// The number's own JSON text, 3.7 stays "3.7".
    Exact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub number_format: NumberFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Lines starting with this prefix are skipped
    pub comment_prefix: Option<String>,
    /// Skip lines that are empty after trimming
    pub skip_empty_lines: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { comment_prefix: Some("#".to_string()), skip_empty_lines: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KgToolConfig {
    pub normalize: NormalizeConfig,
    pub reader: ReaderConfig,
}

impl KgToolConfig {
    /// Load a JSON config file. Missing sections and fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}
