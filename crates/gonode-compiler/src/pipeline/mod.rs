//! Generation pipeline: sources → IR → artifacts → output directory.
//!
//! Every stage reports progress through an explicit [`Reporter`]. The first
//! error aborts the run before anything is written.

mod output;
mod reporter;

#[cfg(test)]
mod pipeline_tests;

use std::path::{Path, PathBuf};

use gonode_core::{ExportedFunction, Generation};

use crate::analyze::extract;
use crate::emit::native;
use crate::typegen::typescript;
use crate::{Error, Result};

pub use output::{OUTPUT_SUBDIR, write_outputs};
pub use reporter::{Artifact, Event, NullReporter, Reporter};

/// A Go source file loaded into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Self { path, text }),
            Err(source) => Err(Error::Io { path, source }),
        }
    }
}

/// Extract and concatenate the IR of every file, in the given order.
pub fn extract_all(
    files: &[SourceFile],
    reporter: &mut dyn Reporter,
) -> Result<Vec<ExportedFunction>> {
    let mut ir = Vec::new();

    for file in files {
        let exported = extract(&file.text).map_err(|source| Error::Extract {
            path: file.path.clone(),
            source,
        })?;
        reporter.report(Event::FileExtracted {
            path: file.path.clone(),
            exported: exported.len(),
        });
        ir.extend(exported);
    }

    Ok(ir)
}

/// Emit both artifacts for an IR sequence.
pub fn generate(
    ir: &[ExportedFunction],
    module: &str,
    reporter: &mut dyn Reporter,
) -> Result<Generation> {
    let native = native::emit(ir, &native::Config::new(module))?;
    reporter.report(Event::Emitted {
        artifact: Artifact::Native,
        bytes: native.len(),
    });

    let declaration = typescript::emit(ir, &typescript::Config::new(module))?;
    reporter.report(Event::Emitted {
        artifact: Artifact::Declaration,
        bytes: declaration.len(),
    });

    Ok(Generation {
        native,
        declaration,
    })
}

/// Run the whole pipeline and write the artifacts under `output_dir`.
///
/// Returns the directory holding the artifacts, or `None` when no function
/// is exported, in which case nothing is written.
pub fn run(
    files: &[SourceFile],
    module: &str,
    output_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<Option<PathBuf>> {
    let ir = extract_all(files, reporter)?;
    if ir.is_empty() {
        reporter.report(Event::NoExports);
        return Ok(None);
    }

    let generation = generate(&ir, module, reporter)?;
    write_outputs(output_dir, module, &generation, reporter).map(Some)
}
