//! Shared error reporting for all commands.

use std::fmt::Display;

use gonode_compiler::{Error, SourceFile};

/// Print `error: <message>` and exit with status 1.
pub fn fail(message: impl Display) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1)
}

/// Print a pipeline error and exit. Extraction errors are shown against
/// their source when it is at hand.
pub fn report_error(err: &Error, sources: &[SourceFile], color: bool) -> ! {
    if let Error::Extract { path, source } = err
        && let Some(file) = sources.iter().find(|f| &f.path == path)
    {
        let path = path.to_string_lossy();
        let rendered = source
            .printer()
            .source(&file.text)
            .path(&path)
            .colored(color)
            .render();
        eprintln!("{}", rendered);
        std::process::exit(1);
    }

    fail(err)
}
