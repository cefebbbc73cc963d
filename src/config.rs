//! Run configuration: defaults, optional TOML file, command-line overrides.

use crate::map::DEFAULT_OUTPUT;
use crate::store::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_URI};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("No source file given")]
    MissingSource,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub source: Option<PathBuf>,
    pub mongo_uri: String,
    pub database: String,
    pub collection: String,
    pub output: PathBuf,
    /// Run without touching the document store.
    pub skip_store: bool,
    /// Open the rendered map in the default viewer.
    pub open_map: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: None,
            mongo_uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            skip_store: false,
            open_map: true,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn source(&self) -> Result<&Path, ConfigError> {
        self.source.as_deref().ok_or(ConfigError::MissingSource)
    }
}
