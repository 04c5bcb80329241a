//! Project loading: configuration, source discovery, and file reading.

use std::path::{Path, PathBuf};

use gonode_compiler::{Reporter, SourceFile};

use crate::config::{CONFIG_FILE, Config, ConfigError};
use crate::discovery::discover;

/// A configured project with its sources loaded.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    pub sources: Vec<SourceFile>,
}

impl Project {
    /// Directory receiving `gonode/`, unless overridden on the command line.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.config.output_directory)
    }
}

/// Load the project rooted at `dir`, using `config_path` instead of
/// `<dir>/.gonode.yaml` when given.
pub fn load_project(
    dir: &Path,
    config_path: Option<&Path>,
    reporter: &mut dyn Reporter,
) -> Result<Project, String> {
    let config_path = match config_path {
        Some(path) => path.to_path_buf(),
        None => dir.join(CONFIG_FILE),
    };
    let config = Config::load(&config_path).map_err(|e| match e {
        ConfigError::Read { .. } => e.to_string(),
        _ => format!("{}: {}", config_path.display(), e),
    })?;

    let files = discover(dir, &config.files, reporter).map_err(|e| e.to_string())?;
    let sources = load_sources(&files)?;

    Ok(Project {
        root: dir.to_path_buf(),
        config,
        sources,
    })
}

/// Read every file, failing on the first unreadable one.
pub fn load_sources(paths: &[PathBuf]) -> Result<Vec<SourceFile>, String> {
    paths
        .iter()
        .map(|path| SourceFile::read(path).map_err(|e| e.to_string()))
        .collect()
}
