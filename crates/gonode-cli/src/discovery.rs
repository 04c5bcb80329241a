//! Go source discovery from configured glob patterns.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::glob;
use gonode_compiler::{Event, Reporter};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("invalid glob pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: glob::PatternError,
}

/// Expand `patterns` relative to `root`.
///
/// Only regular files with a Go extension are kept. Matches of one pattern
/// are sorted, patterns keep their configured order, and a file matched more
/// than once stays at its first position.
pub fn discover(
    root: &Path,
    patterns: &[String],
    reporter: &mut dyn Reporter,
) -> Result<Vec<PathBuf>, PatternError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let full = root.join(pattern);
        let paths = glob(&full.to_string_lossy()).map_err(|source| PatternError {
            pattern: pattern.clone(),
            source,
        })?;

        let mut matched: Vec<PathBuf> = paths
            .flatten()
            .filter(|p| p.is_file() && is_go_source(p))
            .collect();
        matched.sort();

        if matched.is_empty() {
            reporter.report(Event::PatternUnmatched {
                pattern: pattern.clone(),
            });
        }

        for path in matched {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn is_go_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(gonode_langs::from_ext)
        .is_some()
}
