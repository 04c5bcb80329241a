//! Pipeline events forwarded to `tracing`.

use gonode_compiler::{Event, Reporter};
use tracing::{debug, info};

/// Reporter logging every pipeline event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, event: Event) {
        match event {
            Event::PatternUnmatched { pattern } => {
                debug!(%pattern, "pattern matched no files");
            }
            Event::FileExtracted { path, exported } => {
                debug!(path = %path.display(), exported, "extracted");
            }
            Event::NoExports => info!("no exported functions found"),
            Event::Emitted { artifact, bytes } => {
                debug!(%artifact, bytes, "emitted");
            }
            Event::Written { path } => info!(path = %path.display(), "wrote"),
        }
    }
}
