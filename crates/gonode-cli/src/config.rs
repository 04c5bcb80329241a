//! Project configuration (`.gonode.yaml`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use gonode_core::utils::is_c_identifier;
use serde::Deserialize;
use thiserror::Error;

/// Configuration file looked up in the project directory.
pub const CONFIG_FILE: &str = ".gonode.yaml";

/// Errors that can occur when loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("`files` must list at least one pattern")]
    NoFiles,

    #[error("`name` must be a C identifier, got `{0}`")]
    InvalidName(String),
}

/// Contents of `.gonode.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns of Go sources, relative to the project directory.
    pub files: Vec<String>,

    /// Directory receiving `gonode/`, relative to the project directory.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Addon name. Also the cgo header name and the C++ namespace.
    pub name: String,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.files.is_empty() {
            return Err(ConfigError::NoFiles);
        }
        if !is_c_identifier(&self.name) {
            return Err(ConfigError::InvalidName(self.name.clone()));
        }
        Ok(())
    }
}
