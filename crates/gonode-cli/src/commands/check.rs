use std::path::PathBuf;

use gonode_compiler::emit::validate;
use gonode_compiler::pipeline::extract_all;

use super::project::load_project;
use super::reporter::TracingReporter;
use super::run_common::{fail, report_error};

pub struct CheckArgs {
    pub dir: PathBuf,
    pub config: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let mut reporter = TracingReporter;
    let project = load_project(&args.dir, args.config.as_deref(), &mut reporter)
        .unwrap_or_else(|msg| fail(msg));

    let ir = extract_all(&project.sources, &mut reporter)
        .unwrap_or_else(|e| report_error(&e, &project.sources, args.color));
    if let Err(e) = validate(&ir) {
        fail(e);
    }

    // Nothing is written, like `cargo check`.
    println!(
        "{}: {} exported function(s) in {} file(s)",
        project.config.name,
        ir.len(),
        project.sources.len()
    );
}
