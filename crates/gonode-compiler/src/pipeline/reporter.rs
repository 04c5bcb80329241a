//! Progress events and the sink receiving them.

use std::fmt;
use std::path::PathBuf;

/// Generated artifact kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    /// C++ addon wrapper.
    Native,
    /// TypeScript declaration module.
    Declaration,
}

impl Artifact {
    /// File extension of the artifact.
    pub fn extension(self) -> &'static str {
        match self {
            Artifact::Native => "cc",
            Artifact::Declaration => "ts",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Native => f.write_str("native wrapper"),
            Artifact::Declaration => f.write_str("TypeScript declaration"),
        }
    }
}

/// Something worth telling the user about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A source pattern matched no files.
    PatternUnmatched { pattern: String },
    /// A file was analyzed.
    FileExtracted { path: PathBuf, exported: usize },
    /// No file exports anything.
    NoExports,
    /// An artifact was rendered in memory.
    Emitted { artifact: Artifact, bytes: usize },
    /// An artifact was written to disk.
    Written { path: PathBuf },
}

/// Sink for pipeline events.
pub trait Reporter {
    fn report(&mut self, event: Event);
}

/// Reporter that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _event: Event) {}
}

/// Collects events in order.
impl Reporter for Vec<Event> {
    fn report(&mut self, event: Event) {
        self.push(event);
    }
}
