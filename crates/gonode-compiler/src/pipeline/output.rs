//! Artifact writer.

use std::fs;
use std::path::{Path, PathBuf};

use gonode_core::Generation;

use super::{Artifact, Event, Reporter};
use crate::{Error, Result};

/// Directory created under the output directory to hold the artifacts.
pub const OUTPUT_SUBDIR: &str = "gonode";

/// Replace `<dir>/gonode/` with the two artifacts of `generation`.
///
/// Returns the artifact directory.
pub fn write_outputs(
    dir: &Path,
    module: &str,
    generation: &Generation,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let target = dir.join(OUTPUT_SUBDIR);

    if target.exists() {
        fs::remove_dir_all(&target).map_err(|source| io_error(&target, source))?;
    }
    fs::create_dir_all(&target).map_err(|source| io_error(&target, source))?;

    for (artifact, contents) in [
        (Artifact::Native, &generation.native),
        (Artifact::Declaration, &generation.declaration),
    ] {
        let path = target.join(format!("{}.{}", module, artifact.extension()));
        fs::write(&path, contents).map_err(|source| io_error(&path, source))?;
        reporter.report(Event::Written { path });
    }

    Ok(target)
}

fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
