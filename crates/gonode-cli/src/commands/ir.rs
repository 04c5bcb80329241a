use std::path::{Path, PathBuf};

use gonode_compiler::pipeline::extract_all;

use super::project::{load_project, load_sources};
use super::reporter::TracingReporter;
use super::run_common::{fail, report_error};

pub struct IrArgs {
    pub dir: Option<PathBuf>,
    pub source_files: Vec<PathBuf>,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: IrArgs) {
    let mut reporter = TracingReporter;

    let sources = if args.source_files.is_empty() {
        let dir = args.dir.as_deref().unwrap_or(Path::new("."));
        load_project(dir, None, &mut reporter)
            .unwrap_or_else(|msg| fail(msg))
            .sources
    } else {
        load_sources(&args.source_files).unwrap_or_else(|msg| fail(msg))
    };

    let ir = extract_all(&sources, &mut reporter)
        .unwrap_or_else(|e| report_error(&e, &sources, args.color));

    let json = if args.compact {
        serde_json::to_string(&ir)
    } else {
        serde_json::to_string_pretty(&ir)
    };
    match json {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}
