//! gonode compiler: signature extraction and artifact emission.
//!
//! This crate provides the generation pipeline for Go-backed Node.js addons:
//! - `analyze` - Go type mapping and exported signature extraction
//! - `emit` - IR validation and the native (C++) wrapper emitter
//! - `typegen` - TypeScript declaration emitter
//! - `pipeline` - extraction → emission driver, reporter sink, output writer
//! - `diagnostics` - source spans and error rendering

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod analyze;
pub mod diagnostics;
pub mod emit;
pub mod pipeline;
pub mod typegen;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{ExtractError, extract};
pub use diagnostics::{ErrorPrinter, Span};
pub use emit::EmitError;
pub use gonode_core::{BoundaryType, ExportedFunction, Generation, Parameter};
pub use pipeline::{Artifact, Event, NullReporter, Reporter, SourceFile};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source file could not be turned into IR.
    #[error("{}: {source}", path.display())]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    /// The combined IR could not be emitted.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// Reading a source or writing an artifact failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;
